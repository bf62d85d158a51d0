//! Utility modules for the NGSchools API.
//!
//! - [`errors`]: Application error types and handling
//! - [`pagination`]: Pagination arithmetic

pub mod errors;
pub mod pagination;
