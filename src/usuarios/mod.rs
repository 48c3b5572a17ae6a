// src/usuarios/mod.rs

// Structs de petición, respuesta y fila de usuario
pub mod usuario_structs;
// Registro y autenticación contra la tabla `usuarios`
pub mod credenciales;
// Rutas /register y /login
pub mod usuario_router;
