//! System utilities
//!
//! Error handling and field validation shared across controllers.

pub mod errors;
pub mod validation;
