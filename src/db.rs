// src/db.rs

//! Fábrica de conexiones a PostgreSQL.

use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};

use crate::config::Configuracion;

/// Crea el pool de conexiones a partir de la configuración explícita.
/// Cada petición toma una conexión del pool y la devuelve al soltarla.
pub async fn crear_pool(config: &Configuracion) -> Result<PgPool, sqlx::Error> {
    let opciones = opciones_de_conexion(config)?;

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_conexiones)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(opciones)
        .await?;

    tracing::info!("Pool de PostgreSQL creado (max {} conexiones)", config.db_max_conexiones);
    Ok(pool)
}

/// Opciones de conexión desde `DATABASE_URL`. `DB_SSLMODE`, si está definida,
/// sustituye al `sslmode` de la URL.
fn opciones_de_conexion(config: &Configuracion) -> Result<PgConnectOptions, sqlx::Error> {
    let opciones = PgConnectOptions::from_str(&config.database_url)?;
    Ok(match config.db_sslmode {
        Some(modo) => opciones.ssl_mode(modo),
        None => opciones,
    })
}

/// Aplica las migraciones de `migrations/`.
pub async fn migrar(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Migraciones aplicadas");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::PgSslMode;

    fn config(url: &str) -> Configuracion {
        Configuracion {
            database_url: url.to_string(),
            host: "127.0.0.1".to_string(),
            port: 0,
            db_max_conexiones: 2,
            db_sslmode: None,
            ejecutar_migraciones: false,
            log_level: "info".to_string(),
            log_json: false,
        }
    }

    fn modo_ssl(config: &Configuracion) -> String {
        format!("{:?}", opciones_de_conexion(config).expect("URL válida"))
    }

    #[test]
    fn test_sslmode_de_la_url_sin_variable() {
        let config = config("postgres://datafood@localhost/datafood?sslmode=disable");
        assert!(modo_ssl(&config).contains("ssl_mode: Disable"));
    }

    #[test]
    fn test_variable_sslmode_sustituye_a_la_url() {
        let mut config = config("postgres://datafood@localhost/datafood?sslmode=disable");
        config.db_sslmode = Some(PgSslMode::Require);
        assert!(modo_ssl(&config).contains("ssl_mode: Require"));
    }

    #[actix_web::test]
    async fn test_url_malformada() {
        let resultado = crear_pool(&config("esto no es una url")).await;
        assert!(resultado.is_err());
    }

    #[actix_web::test]
    #[ignore] // Requiere PostgreSQL en DATABASE_URL
    async fn test_conexion_y_migraciones() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL no definida");
        let pool = crear_pool(&config(&url)).await.expect("Fallo al conectar");

        migrar(&pool).await.expect("migraciones");
        // Segunda ejecución: no hay nada pendiente.
        migrar(&pool).await.expect("migraciones idempotentes");
    }
}
