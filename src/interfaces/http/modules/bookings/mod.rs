//! Booking module: public booking requests and admin management

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
