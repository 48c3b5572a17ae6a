// src/config.rs

use std::env;
use std::str::FromStr;

use sqlx::postgres::PgSslMode;
use thiserror::Error;

/// Errores al leer la configuración desde el entorno.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Falta la variable de entorno {0}")]
    Falta(&'static str),

    #[error("Valor inválido para {variable}: {valor}")]
    Invalida { variable: &'static str, valor: String },
}

/// Configuración explícita de la aplicación.
/// Se construye una vez en `main` y se pasa a la fábrica de conexiones y al servidor.
#[derive(Debug, Clone)]
pub struct Configuracion {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub db_max_conexiones: u32,
    /// Solo se aplica si `DB_SSLMODE` está definida; si no, manda el `sslmode` de la URL.
    pub db_sslmode: Option<PgSslMode>,
    pub ejecutar_migraciones: bool,
    pub log_level: String,
    pub log_json: bool,
}

impl Configuracion {
    /// Lee la configuración de las variables de entorno del proceso.
    pub fn desde_entorno() -> Result<Self, ConfigError> {
        Self::desde_fuente(|clave| env::var(clave).ok())
    }

    /// Igual que `desde_entorno`, pero con una fuente de variables inyectable (útil en tests).
    pub fn desde_fuente<F>(leer: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = leer("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Falta("DATABASE_URL"))?;

        Ok(Self {
            database_url,
            host: leer("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parsear(&leer, "PORT", 5000)?,
            db_max_conexiones: parsear(&leer, "DB_MAX_CONEXIONES", 5)?,
            db_sslmode: parsear_opcional(&leer, "DB_SSLMODE")?,
            ejecutar_migraciones: parsear(&leer, "EJECUTAR_MIGRACIONES", false)?,
            log_level: leer("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            log_json: parsear(&leer, "LOG_JSON", false)?,
        })
    }
}

fn parsear<F, T>(leer: &F, variable: &'static str, por_defecto: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    Ok(parsear_opcional(leer, variable)?.unwrap_or(por_defecto))
}

fn parsear_opcional<F, T>(leer: &F, variable: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    leer(variable)
        .map(|valor| {
            valor
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalida { variable, valor })
        })
        .transpose()
}
