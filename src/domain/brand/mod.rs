//! Brand aggregate

pub mod model;
pub mod repository;

pub use model::{Brand, BrandChanges, NewBrand};
pub use repository::BrandRepository;
