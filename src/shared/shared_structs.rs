// src/shared/shared_structs.rs

use bigdecimal::{BigDecimal, ToPrimitive};
use serde::{ser::Error as _, Serialize, Serializer};

/// Envoltorio de error común a todas las rutas: `{"success": false, "message": ...}`.
#[derive(Debug, Serialize)]
pub struct RespuestaError {
    pub success: bool,
    pub message: String,
}

impl RespuestaError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Serializa un `BigDecimal` como número JSON (el cliente espera `20.0`, no `"20.00"`).
pub fn decimal_como_numero<S>(valor: &BigDecimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match valor.to_f64() {
        Some(n) => serializer.serialize_f64(n),
        None => Err(S::Error::custom(format!("decimal fuera de rango: {}", valor))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[derive(Serialize)]
    struct ConTotal {
        #[serde(serialize_with = "decimal_como_numero")]
        total: BigDecimal,
    }

    #[test]
    fn test_decimal_se_serializa_como_numero() {
        let valor = ConTotal {
            total: BigDecimal::from_str("20.00").unwrap(),
        };
        let json = serde_json::to_value(&valor).unwrap();
        assert_eq!(json, serde_json::json!({ "total": 20.0 }));
    }

    #[test]
    fn test_respuesta_error() {
        let json = serde_json::to_value(RespuestaError::new("algo falló")).unwrap();
        assert_eq!(json, serde_json::json!({ "success": false, "message": "algo falló" }));
    }
}
