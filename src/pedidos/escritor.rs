// src/pedidos/escritor.rs

//! Escritura de pedidos: mesa, precios, total, cabecera de venta y detalle,
//! todo dentro de una única transacción.

use bigdecimal::{num_bigint::BigInt, BigDecimal};
use sqlx::{query, query_scalar, PgConnection, PgPool};

use super::pedido_structs::{
    ItemMesa, ItemPedidoCliente, LineaVenta, PedidoRealizado, PedidoRequest,
    RealizarPedidoRequest, VentaNueva,
};
use crate::catalogo::catalogo_structs::TipoItem;
use crate::catalogo::lector;
use crate::shared::api_error::ApiError;

/// Comprueba mesa e items antes de abrir ninguna transacción. Devuelve el número de mesa.
pub fn validar_pedido(mesa: Option<i32>, hay_items: bool, mensaje: &str) -> Result<i32, ApiError> {
    match mesa {
        Some(numero) if numero > 0 && hay_items => Ok(numero),
        _ => Err(ApiError::validacion(mensaje)),
    }
}

/// Σ precio × cantidad.
pub fn calcular_total(lineas: &[LineaVenta]) -> BigDecimal {
    lineas.iter().fold(BigDecimal::from(0), |total, linea| {
        total + &linea.precio * &BigDecimal::from(linea.cantidad)
    })
}

/// Convierte los items de `/pedido` en líneas, confiando en precio y nombre del cliente.
/// Las cantidades no positivas se descartan.
pub fn lineas_de_cliente(items: Vec<ItemPedidoCliente>) -> Vec<LineaVenta> {
    items
        .into_iter()
        .filter(|item| {
            if item.cantidad <= 0 {
                tracing::warn!(id = item.id, cantidad = item.cantidad, "Item descartado: cantidad no positiva");
            }
            item.cantidad > 0
        })
        .map(|item| LineaVenta {
            tipo: item.tipo,
            id_item: item.id,
            cantidad: item.cantidad,
            nombre: item
                .nombre
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
            precio: redondear_centimos(&item.precio),
        })
        .collect()
}

/// Redondea a dos decimales alejándose del cero, igual que `NUMERIC(10,2)` al guardar.
/// Así el total calculado coincide con la suma de las líneas almacenadas.
pub fn redondear_centimos(precio: &BigDecimal) -> BigDecimal {
    let medio_centimo = BigDecimal::new(BigInt::from(5), 3);
    if precio < &BigDecimal::from(0) {
        (precio - &medio_centimo).with_scale(2)
    } else {
        (precio + &medio_centimo).with_scale(2)
    }
}

/// Obtiene el `id_mesa` del número dado, creándola si no existe.
/// `ON CONFLICT DO NOTHING` evita el error de clave duplicada cuando dos pedidos
/// crean la misma mesa a la vez; el perdedor lee la fila del ganador.
pub async fn asegurar_mesa(conn: &mut PgConnection, numero: i32) -> Result<i64, sqlx::Error> {
    let creada = query_scalar::<_, i64>(
        "INSERT INTO mesas (numero) VALUES ($1) ON CONFLICT (numero) DO NOTHING RETURNING id_mesa",
    )
    .bind(numero)
    .fetch_optional(&mut *conn)
    .await?;

    if let Some(id_mesa) = creada {
        tracing::info!(numero, id_mesa, "Mesa creada");
        return Ok(id_mesa);
    }

    query_scalar::<_, i64>("SELECT id_mesa FROM mesas WHERE numero = $1")
        .bind(numero)
        .fetch_one(&mut *conn)
        .await
}

/// Resuelve nombre y precio de cada item contra el catálogo.
/// Items inexistentes o con cantidad no positiva no bloquean el pedido: se omiten.
pub async fn resolver_precios(
    conn: &mut PgConnection,
    items: &[ItemMesa],
) -> Result<Vec<LineaVenta>, sqlx::Error> {
    let mut lineas = Vec::with_capacity(items.len());

    for item in items {
        if item.cantidad <= 0 {
            tracing::warn!(id = ?item.id, cantidad = item.cantidad, "Item descartado: cantidad no positiva");
            continue;
        }

        let Some((tipo, id)) = item.referencia() else {
            tracing::warn!(tipo = ?item.tipo, "Item descartado: sin id");
            continue;
        };

        match lector::buscar_item(&mut *conn, tipo, id).await? {
            Some(catalogo) => lineas.push(LineaVenta {
                tipo,
                id_item: id,
                cantidad: item.cantidad,
                nombre: Some(catalogo.nombre),
                precio: catalogo.precio,
            }),
            None => {
                // TODO: confirmar con negocio si un item desconocido debería rechazar el pedido.
                tracing::warn!(id, tipo = ?item.tipo, "Item descartado: no existe en el catálogo");
            }
        }
    }

    Ok(lineas)
}

/// Inserta la cabecera en `venta` y una fila de detalle por línea. Devuelve `id_ventas`.
/// El total se calcula aquí a partir de las líneas, nunca se recibe de fuera.
pub async fn guardar_venta(conn: &mut PgConnection, venta: &VentaNueva) -> Result<i64, sqlx::Error> {
    let total = calcular_total(&venta.lineas);

    let id_ventas = query_scalar::<_, i64>(
        "INSERT INTO venta (monto_total, perdidas, ganancias) VALUES ($1, $2, $3) RETURNING id_ventas",
    )
    .bind(&total)
    .bind(&venta.perdidas)
    .bind(&venta.ganancias)
    .fetch_one(&mut *conn)
    .await?;

    for linea in &venta.lineas {
        let nombre = linea.nombre.as_deref();
        let (id_plato, id_bebida, nombre_plato, nombre_bebida) = match linea.tipo {
            TipoItem::Plato => (Some(linea.id_item), None, nombre, None),
            TipoItem::Bebida => (None, Some(linea.id_item), None, nombre),
        };

        query(
            r#"
            INSERT INTO ventas_clientes_menu_bebidas_menu_platos
                (id_ventas, id_menu_platos, id_menu_bebidas, id_mesa, cantidad, nombre_plato, nombre_bebida, precio)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(id_ventas)
        .bind(id_plato)
        .bind(id_bebida)
        .bind(venta.id_mesa)
        .bind(linea.cantidad)
        .bind(nombre_plato)
        .bind(nombre_bebida)
        .bind(&linea.precio)
        .execute(&mut *conn)
        .await?;
    }

    Ok(id_ventas)
}

/// Caso de uso de `/pedido`: precios del cliente, sin registro de mesa.
pub async fn crear_pedido(pool: &PgPool, pedido: PedidoRequest) -> Result<i64, ApiError> {
    let mesa = validar_pedido(pedido.mesa, !pedido.items.is_empty(), "Mesa e items son requeridos")?;

    let venta = VentaNueva {
        lineas: lineas_de_cliente(pedido.items),
        id_mesa: None,
        perdidas: None,
        ganancias: None,
    };

    // Si algo falla antes del commit, la transacción se descarta y hace rollback.
    let mut transaction = pool.begin().await?;
    let id_venta = guardar_venta(&mut *transaction, &venta).await?;
    transaction.commit().await?;

    tracing::info!(
        id_venta,
        mesa,
        id_usuario = ?pedido.id_usuario,
        lineas = venta.lineas.len(),
        "Pedido creado"
    );
    Ok(id_venta)
}

/// Caso de uso de `/realizarPedido`: mesa asegurada y precios recalculados desde el catálogo.
pub async fn realizar_pedido(
    pool: &PgPool,
    pedido: RealizarPedidoRequest,
) -> Result<PedidoRealizado, ApiError> {
    let mesa = validar_pedido(pedido.mesa, !pedido.items.is_empty(), "mesa e items son requeridos")?;

    let mut transaction = pool.begin().await?;

    // 1. Asegurar mesa
    let id_mesa = asegurar_mesa(&mut *transaction, mesa).await?;

    // 2. Precios reales del catálogo y total
    let lineas = resolver_precios(&mut *transaction, &pedido.items).await?;
    let total = calcular_total(&lineas);

    // 3. Cabecera y detalle
    let venta = VentaNueva {
        lineas,
        id_mesa: Some(id_mesa),
        perdidas: Some(BigDecimal::from(0)),
        ganancias: Some(total.clone()),
    };
    let id_ventas = guardar_venta(&mut *transaction, &venta).await?;

    transaction.commit().await?;

    tracing::info!(id_ventas, mesa, %total, lineas = venta.lineas.len(), "Pedido realizado");
    Ok(PedidoRealizado {
        success: true,
        id_ventas,
        mesa,
        total,
    })
}
