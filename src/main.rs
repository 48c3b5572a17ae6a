// src/main.rs

use actix_web::{get, middleware::Logger, web, App, HttpResponse, HttpServer};
use anyhow::Context;
use sqlx::{Pool, Postgres};

// Módulos de infraestructura
mod config;  // Configuración desde variables de entorno
mod db;      // Fábrica de conexiones y migraciones
mod logging; // Subscriber de tracing
mod shared;  // Envoltorios de respuesta y errores de la API

// Módulos de dominio
mod catalogo; // Menú de platos y bebidas
mod pedidos;  // Creación de pedidos (ventas)
mod usuarios; // Registro y login

#[cfg(test)]
mod test_utils;

use config::Configuracion;
use shared::api_error::error_json;

/// Estado compartido entre las rutas: solo el pool de conexiones.
pub struct AppState {
    pub db_pool: Pool<Postgres>,
}

/// Ruta raíz, para comprobar que el servicio está arriba.
#[get("/")]
async fn inicio() -> HttpResponse {
    HttpResponse::Ok().body("Backend DataFood funcionando")
}

/// Registra todas las rutas de la API. Se usa tanto en `main` como en los tests.
pub fn configurar_rutas(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error_json))
        .service(inicio)
        // Módulo de usuarios
        .service(usuarios::usuario_router::registrar_usuario)
        .service(usuarios::usuario_router::login_usuario)
        // Módulo de catálogo
        .service(catalogo::catalogo_router::obtener_menu)
        // Módulo de pedidos
        .service(pedidos::pedido_router::crear_pedido)
        .service(pedidos::pedido_router::realizar_pedido);
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // El .env es opcional: en producción las variables vienen del entorno.
    dotenvy::dotenv().ok();

    let config = Configuracion::desde_entorno().context("Configuración inválida")?;
    logging::iniciar_logs(&config);

    let db_pool = db::crear_pool(&config)
        .await
        .context("Fallo al conectar a PostgreSQL")?;

    if config.ejecutar_migraciones {
        db::migrar(&db_pool).await.context("Fallo al aplicar migraciones")?;
    }

    let app_state = web::Data::new(AppState { db_pool });

    tracing::info!("Iniciando API DataFood en {}:{}...", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(app_state.clone())
            .configure(configurar_rutas)
    })
    .bind((config.host.as_str(), config.port))
    .with_context(|| format!("No se pudo enlazar {}:{}", config.host, config.port))?
    .run()
    .await?;

    Ok(())
}
