//! Vehicle aggregate
//!
//! Contains the Vehicle entity, its partial-update type and the listing
//! filter used by the public catalog.

pub mod filter;
pub mod model;
pub mod repository;

pub use filter::VehicleFilter;
pub use model::{NewVehicle, Vehicle, VehicleChanges};
pub use repository::VehicleRepository;
