// src/usuarios/usuario_structs.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Fila de `usuarios` necesaria para autenticar.
#[derive(FromRow)]
pub struct Usuario {
    pub id_usuario: i32,
    pub password_hash: String,
}

/// Cuerpo de `POST /register`. Los campos ausentes se validan en el almacén de credenciales.
#[derive(Deserialize)]
pub struct RegistroRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
}

/// Cuerpo de `POST /login`.
#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Respuesta de éxito de registro y login.
#[derive(Serialize)]
pub struct UsuarioResponse {
    pub success: bool,
    pub id_usuario: i32,
}
