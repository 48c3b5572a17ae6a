// src/usuarios/usuario_router.rs

use actix_web::{post, web, HttpResponse};

use super::credenciales;
use super::usuario_structs::{LoginRequest, RegistroRequest, UsuarioResponse};
use crate::AppState;

/// Ruta para registrar un nuevo usuario.
#[post("/register")]
pub async fn registrar_usuario(
    data: web::Data<AppState>,
    req: web::Json<RegistroRequest>,
) -> HttpResponse {
    let req = req.into_inner();
    let resultado = credenciales::registrar(
        &data.db_pool,
        req.username.as_deref().unwrap_or_default(),
        req.password.as_deref().unwrap_or_default(),
        req.email.as_deref(),
    )
    .await;

    match resultado {
        Ok(id_usuario) => HttpResponse::Ok().json(UsuarioResponse {
            success: true,
            id_usuario,
        }),
        Err(e) => e.respuesta("Error registrando usuario"),
    }
}

/// Ruta para login de usuario.
#[post("/login")]
pub async fn login_usuario(
    data: web::Data<AppState>,
    req: web::Json<LoginRequest>,
) -> HttpResponse {
    let resultado = credenciales::autenticar(
        &data.db_pool,
        req.username.as_deref().unwrap_or_default(),
        req.password.as_deref().unwrap_or_default(),
    )
    .await;

    match resultado {
        Ok(id_usuario) => HttpResponse::Ok().json(UsuarioResponse {
            success: true,
            id_usuario,
        }),
        Err(e) => e.respuesta("Error interno en login"),
    }
}
