// src/catalogo/catalogo_structs.rs

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Tipo de item del catálogo. En JSON: `"plato"` o `"bebida"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipoItem {
    Plato,
    Bebida,
}

/// Fila del menú unida a su categoría.
#[derive(FromRow)]
pub struct FilaMenu {
    pub id: i32,
    pub nombre: String,
    pub precio: Option<BigDecimal>,
    pub imagen_url: Option<String>,
    pub categoria: String,
}

/// Item del menú tal como lo recibe el cliente.
#[derive(Debug, Serialize)]
pub struct ItemMenu {
    pub id: i32,
    pub nombre: String,
    pub precio: f64,
    #[serde(rename = "imagenUrl")]
    pub imagen_url: Option<String>,
    pub categoria: String,
    pub tipo: TipoItem,
}

/// Respuesta de `GET /menu`.
#[derive(Debug, Serialize)]
pub struct Menu {
    pub platos: Vec<ItemMenu>,
    pub bebidas: Vec<ItemMenu>,
}

#[derive(FromRow)]
pub(super) struct FilaPrecio {
    pub nombre: String,
    pub precio: Option<BigDecimal>,
}

/// Nombre y precio vigentes de un item, leídos del catálogo.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemCatalogo {
    pub nombre: String,
    pub precio: BigDecimal,
}
