// src/catalogo/lector.rs

use bigdecimal::{BigDecimal, ToPrimitive};
use sqlx::{query_as, PgConnection, PgPool};

use super::catalogo_structs::{FilaMenu, FilaPrecio, ItemCatalogo, ItemMenu, Menu, TipoItem};

const SQL_PLATOS: &str = r#"
    SELECT
        mp.id_menu_platos   AS id,
        mp.nombre_plato     AS nombre,
        mp.precio           AS precio,
        mp.imagen_url       AS imagen_url,
        cp.nombre_categoria AS categoria
    FROM menu_de_platos mp
    INNER JOIN categoria_platos cp
        ON cp.id_categoria_platos = mp.id_categoria_platos
    ORDER BY cp.nombre_categoria, mp.nombre_plato
"#;

const SQL_BEBIDAS: &str = r#"
    SELECT
        mb.id_menu_bebidas  AS id,
        mb.nombre_bebida    AS nombre,
        mb.precio           AS precio,
        mb.imagen_url       AS imagen_url,
        cb.nombre_categoria AS categoria
    FROM menu_de_bebidas mb
    INNER JOIN categoria_bebidas cb
        ON cb.id_categoria_bebidas = mb.id_categoria_bebidas
    ORDER BY cb.nombre_categoria, mb.nombre_bebida
"#;

/// Lista platos y bebidas, ordenados por categoría y nombre.
pub async fn listar_menu(pool: &PgPool) -> Result<Menu, sqlx::Error> {
    let mut conn = pool.acquire().await?;
    let platos = query_as::<_, FilaMenu>(SQL_PLATOS).fetch_all(&mut *conn).await?;
    let bebidas = query_as::<_, FilaMenu>(SQL_BEBIDAS).fetch_all(&mut *conn).await?;

    Ok(Menu {
        platos: a_items_de_menu(platos, TipoItem::Plato),
        bebidas: a_items_de_menu(bebidas, TipoItem::Bebida),
    })
}

/// Convierte filas a items del menú: precio ausente => 0 y cada item etiquetado con su tipo.
pub fn a_items_de_menu(filas: Vec<FilaMenu>, tipo: TipoItem) -> Vec<ItemMenu> {
    filas
        .into_iter()
        .map(|f| ItemMenu {
            id: f.id,
            nombre: f.nombre,
            precio: f.precio.as_ref().and_then(|p| p.to_f64()).unwrap_or(0.0),
            imagen_url: f.imagen_url,
            categoria: f.categoria,
            tipo,
        })
        .collect()
}

/// Busca el nombre y precio vigentes de un item, en la conexión del llamador
/// (normalmente dentro de la transacción de un pedido).
pub async fn buscar_item(
    conn: &mut PgConnection,
    tipo: TipoItem,
    id: i32,
) -> Result<Option<ItemCatalogo>, sqlx::Error> {
    let sql = match tipo {
        TipoItem::Plato => {
            "SELECT nombre_plato AS nombre, precio FROM menu_de_platos WHERE id_menu_platos = $1"
        }
        TipoItem::Bebida => {
            "SELECT nombre_bebida AS nombre, precio FROM menu_de_bebidas WHERE id_menu_bebidas = $1"
        }
    };

    let fila = query_as::<_, FilaPrecio>(sql)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

    Ok(fila.map(|f| ItemCatalogo {
        nombre: f.nombre,
        precio: f.precio.unwrap_or_else(|| BigDecimal::from(0)),
    }))
}
