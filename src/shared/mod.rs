// src/shared/mod.rs

// Envoltorios de respuesta y serialización común
pub mod shared_structs;
// Errores de la API y su traducción a códigos HTTP
pub mod api_error;
