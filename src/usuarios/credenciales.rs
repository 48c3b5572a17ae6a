// src/usuarios/credenciales.rs

//! Almacén de credenciales: registro y autenticación de usuarios.

use actix_web::web;
use bcrypt::{hash, verify, DEFAULT_COST};
use once_cell::sync::Lazy;
use sqlx::{query, query_as, query_scalar, PgPool};

use super::usuario_structs::Usuario;
use crate::shared::api_error::ApiError;

/// Hash contra el que se verifica cuando el usuario no existe,
/// para que el login tarde lo mismo en ambos casos.
static HASH_FICTICIO: Lazy<String> =
    Lazy::new(|| hash("datafood-usuario-inexistente", DEFAULT_COST).unwrap_or_default());

const CAMPOS_REQUERIDOS: &str = "username y password son requeridos";

/// Registra un usuario nuevo y devuelve su `id_usuario`.
pub async fn registrar(
    pool: &PgPool,
    username: &str,
    password: &str,
    email: Option<&str>,
) -> Result<i32, ApiError> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(ApiError::validacion(CAMPOS_REQUERIDOS));
    }
    let email = email.map(str::trim).filter(|e| !e.is_empty());

    // Una sola conexión para la comprobación y el insert.
    let mut conn = pool.acquire().await?;

    // 1. Verificar que el username no esté en uso
    let existente = query("SELECT 1 FROM usuarios WHERE username = $1 LIMIT 1")
        .bind(username)
        .fetch_optional(&mut *conn)
        .await?;
    if existente.is_some() {
        return Err(ApiError::Conflicto("Username ya existe".to_string()));
    }

    // 2. Hash de la contraseña, fuera del hilo del servidor
    let password_hash = hashear(password.to_owned()).await?;

    // 3. Insertar. Dos registros simultáneos pueden pasar el paso 1;
    //    la restricción UNIQUE decide y el perdedor recibe el mismo 409.
    let id = query_scalar::<_, i32>(
        "INSERT INTO usuarios (username, email, password_hash) VALUES ($1, $2, $3) RETURNING id_usuario",
    )
    .bind(username)
    .bind(email)
    .bind(&password_hash)
    .fetch_one(&mut *conn)
    .await
    .map_err(|e| {
        if ApiError::es_violacion_unica(&e) {
            ApiError::Conflicto("Username ya existe".to_string())
        } else {
            ApiError::from(e)
        }
    })?;

    tracing::info!(id_usuario = id, "Usuario registrado");
    Ok(id)
}

/// Autentica por username y contraseña. Cualquier fallo de credenciales es `NoAutorizado`.
pub async fn autenticar(pool: &PgPool, username: &str, password: &str) -> Result<i32, ApiError> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(ApiError::validacion(CAMPOS_REQUERIDOS));
    }

    let usuario = query_as::<_, Usuario>(
        "SELECT id_usuario, password_hash FROM usuarios WHERE username = $1 LIMIT 1",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    let (id_usuario, password_hash) = match usuario {
        Some(u) => (Some(u.id_usuario), u.password_hash),
        None => (None, HASH_FICTICIO.clone()),
    };

    let coincide = verificar(password.to_owned(), password_hash).await?;

    match id_usuario {
        Some(id) if coincide => Ok(id),
        _ => Err(ApiError::NoAutorizado),
    }
}

async fn hashear(password: String) -> Result<String, ApiError> {
    web::block(move || hash(password, DEFAULT_COST))
        .await
        .map_err(|e| ApiError::Interno(e.to_string()))?
        .map_err(|e| ApiError::Interno(format!("Error al hacer hash de la contraseña: {}", e)))
}

async fn verificar(password: String, password_hash: String) -> Result<bool, ApiError> {
    let resultado = web::block(move || verify(password, &password_hash))
        .await
        .map_err(|e| ApiError::Interno(e.to_string()))?;

    // Un hash ilegible se trata como contraseña incorrecta.
    Ok(resultado.unwrap_or_else(|e| {
        tracing::warn!("Hash de contraseña ilegible: {}", e);
        false
    }))
}
