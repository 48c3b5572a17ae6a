// src/pedidos/mod.rs

// Structs de petición, respuesta y venta
pub mod pedido_structs;
// Escritor de pedidos: mesa, precios, total y venta en una transacción
pub mod escritor;
// Rutas /pedido y /realizarPedido
pub mod pedido_router;
