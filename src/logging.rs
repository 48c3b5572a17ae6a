// src/logging.rs

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::Configuracion;

/// Inicializa el subscriber de `tracing`.
/// `RUST_LOG` tiene prioridad sobre `LOG_LEVEL`. Los logs de actix (crate `log`)
/// también pasan por aquí.
pub fn iniciar_logs(config: &Configuracion) {
    let filtro = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registro = tracing_subscriber::registry().with(filtro);

    if config.log_json {
        registro
            .with(fmt::layer().json().with_target(true))
            .init();
    } else {
        registro.with(fmt::layer().with_target(false)).init();
    }
}
