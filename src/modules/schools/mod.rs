pub mod controller;
pub mod model;
pub mod query;
pub mod router;
pub mod service;

pub use model::*;
pub use router::init_schools_router;
