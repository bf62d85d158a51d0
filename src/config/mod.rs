//! Configuration modules for the NGSchools API.
//!
//! Each submodule handles a specific aspect of configuration, loaded
//! from environment variables at startup.
//!
//! # Modules
//!
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`database`]: PostgreSQL connection pool initialization
//! - [`pagination`]: Default page size for list endpoints

pub mod cors;
pub mod database;
pub mod pagination;
