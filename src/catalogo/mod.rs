// src/catalogo/mod.rs

// Tipos del menú (platos y bebidas)
pub mod catalogo_structs;
// Lectura del catálogo: menú completo y búsqueda de precio por item
pub mod lector;
// Ruta GET /menu
pub mod catalogo_router;
