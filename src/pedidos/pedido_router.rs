// src/pedidos/pedido_router.rs

use actix_web::{post, web, HttpResponse};

use super::escritor;
use super::pedido_structs::{PedidoRequest, PedidoResponse, RealizarPedidoRequest};
use crate::AppState;

/// Ruta legada para crear un pedido con los precios enviados por el cliente.
#[post("/pedido")]
pub async fn crear_pedido(
    data: web::Data<AppState>,
    pedido: web::Json<PedidoRequest>,
) -> HttpResponse {
    match escritor::crear_pedido(&data.db_pool, pedido.into_inner()).await {
        Ok(id_venta) => HttpResponse::Ok().json(PedidoResponse {
            success: true,
            id_venta,
        }),
        Err(e) => e.respuesta("Error creando pedido"),
    }
}

/// Ruta para realizar un pedido de mesa con precios recalculados desde el catálogo.
///
/// En caso de error 500 devuelve el mensaje original de la base de datos;
/// los clientes actuales lo muestran tal cual.
#[post("/realizarPedido")]
pub async fn realizar_pedido(
    data: web::Data<AppState>,
    pedido: web::Json<RealizarPedidoRequest>,
) -> HttpResponse {
    match escritor::realizar_pedido(&data.db_pool, pedido.into_inner()).await {
        Ok(realizado) => HttpResponse::Ok().json(realizado),
        Err(e) => e.respuesta_con_detalle(),
    }
}
