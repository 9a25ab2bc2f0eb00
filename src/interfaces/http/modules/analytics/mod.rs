//! Analytics module: read-only inventory and booking reports

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
