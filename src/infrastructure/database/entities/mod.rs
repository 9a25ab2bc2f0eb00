//! Database entities module

pub mod booking;
pub mod brand;
pub mod vehicle;

pub use booking::Entity as Booking;
pub use brand::Entity as Brand;
pub use vehicle::Entity as Vehicle;
