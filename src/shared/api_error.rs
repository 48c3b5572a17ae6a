// src/shared/api_error.rs

use actix_web::{
    error::{InternalError, JsonPayloadError},
    http::StatusCode,
    HttpRequest, HttpResponse, ResponseError,
};
use thiserror::Error;

use super::shared_structs::RespuestaError;

/// Código de PostgreSQL para `unique_violation`.
const VIOLACION_UNICA: &str = "23505";

/// Errores que las operaciones devuelven a la capa HTTP.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Entrada ausente o mal formada (400).
    #[error("{0}")]
    Validacion(String),

    /// Recurso duplicado (409).
    #[error("{0}")]
    Conflicto(String),

    /// Credenciales inválidas (401). El mensaje no distingue usuario inexistente de contraseña errónea.
    #[error("Credenciales inválidas")]
    NoAutorizado,

    /// Base de datos no disponible o restricción violada (500).
    #[error("{0}")]
    Persistencia(#[from] sqlx::Error),

    /// Fallo del hash de contraseñas o del pool de bloqueo (500).
    #[error("{0}")]
    Interno(String),
}

impl ApiError {
    pub fn validacion(mensaje: impl Into<String>) -> Self {
        Self::Validacion(mensaje.into())
    }

    /// Construye la respuesta usando `mensaje_interno` como texto público de los 500,
    /// para no filtrar detalles de la base de datos al cliente.
    pub fn respuesta(&self, mensaje_interno: &str) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("{}: {}", mensaje_interno, self);
            return HttpResponse::build(status).json(RespuestaError::new(mensaje_interno));
        }
        HttpResponse::build(status).json(RespuestaError::new(self.to_string()))
    }

    /// Igual que `respuesta`, pero devuelve el mensaje de error crudo también en los 500.
    /// Solo lo usa `/realizarPedido`, cuyos clientes ya dependen de ese texto.
    pub fn respuesta_con_detalle(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            tracing::error!("Error con detalle expuesto al cliente: {}", self);
        }
        HttpResponse::build(self.status_code()).json(RespuestaError::new(self.to_string()))
    }

    /// `true` si el error es una violación de restricción UNIQUE.
    pub fn es_violacion_unica(err: &sqlx::Error) -> bool {
        match err {
            sqlx::Error::Database(db) => db.code().as_deref() == Some(VIOLACION_UNICA),
            _ => false,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validacion(_) => StatusCode::BAD_REQUEST,
            Self::Conflicto(_) => StatusCode::CONFLICT,
            Self::NoAutorizado => StatusCode::UNAUTHORIZED,
            Self::Persistencia(_) | Self::Interno(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        self.respuesta("Error interno del servidor")
    }
}

/// Manejador de errores del extractor `web::Json`: cuerpo ilegible => 400 con el envoltorio común.
pub fn error_json(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!("Cuerpo JSON rechazado: {}", err);
    let respuesta = HttpResponse::BadRequest().json(RespuestaError::new("Cuerpo JSON inválido"));
    InternalError::from_response(err, respuesta).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn cuerpo(respuesta: HttpResponse) -> serde_json::Value {
        let bytes = to_bytes(respuesta.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_codigos_http() {
        assert_eq!(ApiError::validacion("x").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::Conflicto("x".into()).status_code(), StatusCode::CONFLICT);
        assert_eq!(ApiError::NoAutorizado.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::Persistencia(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Interno("bcrypt".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_web::test]
    async fn test_500_no_filtra_detalle() {
        let err = ApiError::Persistencia(sqlx::Error::PoolTimedOut);
        let json = cuerpo(err.respuesta("Error creando pedido")).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Error creando pedido");
    }

    #[actix_web::test]
    async fn test_400_devuelve_mensaje_de_validacion() {
        let err = ApiError::validacion("mesa e items son requeridos");
        let respuesta = err.respuesta("Error creando pedido");
        assert_eq!(respuesta.status(), StatusCode::BAD_REQUEST);
        let json = cuerpo(respuesta).await;
        assert_eq!(json["message"], "mesa e items son requeridos");
    }

    #[actix_web::test]
    async fn test_respuesta_con_detalle_expone_error() {
        let err = ApiError::Persistencia(sqlx::Error::PoolTimedOut);
        let esperado = err.to_string();
        let json = cuerpo(err.respuesta_con_detalle()).await;
        assert_eq!(json["message"], esperado.as_str());
    }

    #[test]
    fn test_violacion_unica_solo_para_errores_de_base() {
        assert!(!ApiError::es_violacion_unica(&sqlx::Error::RowNotFound));
    }
}
