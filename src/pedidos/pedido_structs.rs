// src/pedidos/pedido_structs.rs

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::catalogo::catalogo_structs::TipoItem;
use crate::shared::shared_structs::decimal_como_numero;

fn cantidad_por_defecto() -> i32 {
    1
}

/// Item de `POST /pedido`. Precio y nombre vienen del cliente y se guardan tal cual.
#[derive(Debug, Deserialize)]
pub struct ItemPedidoCliente {
    pub id: i32,
    pub tipo: TipoItem,
    #[serde(default = "cantidad_por_defecto")]
    pub cantidad: i32,
    #[serde(default)]
    pub precio: BigDecimal,
    #[serde(default)]
    pub nombre: Option<String>,
}

/// Cuerpo de `POST /pedido`.
#[derive(Debug, Deserialize)]
pub struct PedidoRequest {
    pub id_usuario: Option<i32>,
    pub mesa: Option<i32>,
    #[serde(default)]
    pub items: Vec<ItemPedidoCliente>,
}

/// Item de `POST /realizarPedido`: solo referencia al catálogo y cantidad.
/// `id` y `tipo` se aceptan en bruto; un item mal formado se omite al resolver
/// precios en lugar de rechazar todo el pedido.
#[derive(Debug, Deserialize)]
pub struct ItemMesa {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub tipo: Option<String>,
    #[serde(default)]
    pub cantidad: i32,
}

impl ItemMesa {
    /// Tipo e id a buscar en el catálogo. Todo lo que no sea `"plato"` se busca
    /// entre las bebidas. Sin id no hay nada que buscar.
    pub fn referencia(&self) -> Option<(TipoItem, i32)> {
        let tipo = match self.tipo.as_deref() {
            Some("plato") => TipoItem::Plato,
            _ => TipoItem::Bebida,
        };
        self.id.map(|id| (tipo, id))
    }
}

/// Cuerpo de `POST /realizarPedido`.
#[derive(Debug, Deserialize)]
pub struct RealizarPedidoRequest {
    pub mesa: Option<i32>,
    #[serde(default)]
    pub items: Vec<ItemMesa>,
}

/// Respuesta de éxito de `POST /pedido`.
#[derive(Serialize)]
pub struct PedidoResponse {
    pub success: bool,
    pub id_venta: i64,
}

/// Resultado de `realizar_pedido`, también usado como respuesta de `POST /realizarPedido`.
#[derive(Debug, Serialize)]
pub struct PedidoRealizado {
    pub success: bool,
    pub id_ventas: i64,
    pub mesa: i32,
    #[serde(serialize_with = "decimal_como_numero")]
    pub total: BigDecimal,
}

/// Línea de venta lista para insertar: un solo tipo de item, cantidad positiva.
#[derive(Debug, Clone, PartialEq)]
pub struct LineaVenta {
    pub tipo: TipoItem,
    pub id_item: i32,
    pub cantidad: i32,
    pub nombre: Option<String>,
    pub precio: BigDecimal,
}

/// Cabecera y líneas de una venta a persistir.
#[derive(Debug)]
pub struct VentaNueva {
    pub lineas: Vec<LineaVenta>,
    pub id_mesa: Option<i64>,
    pub perdidas: Option<BigDecimal>,
    pub ganancias: Option<BigDecimal>,
}
