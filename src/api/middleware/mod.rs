//! API middleware components

pub mod cors;
pub mod logging;
pub mod security;

pub use cors::cors_layer;
pub use logging::{logging_middleware, REQUEST_ID_HEADER};
pub use security::{security_headers_middleware, MAX_BODY_SIZE};
