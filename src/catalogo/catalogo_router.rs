// src/catalogo/catalogo_router.rs

use actix_web::{get, web, HttpResponse};

use super::lector;
use crate::shared::api_error::ApiError;
use crate::AppState;

/// Ruta para obtener el menú completo (platos y bebidas).
#[get("/menu")]
pub async fn obtener_menu(data: web::Data<AppState>) -> HttpResponse {
    match lector::listar_menu(&data.db_pool).await {
        Ok(menu) => {
            tracing::debug!(
                platos = menu.platos.len(),
                bebidas = menu.bebidas.len(),
                "Menú cargado"
            );
            HttpResponse::Ok().json(menu)
        }
        Err(e) => ApiError::from(e).respuesta("Error cargando menú"),
    }
}
