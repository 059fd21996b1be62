//! # Utility Functions
//!
//! ## Modules
//!
//! - **[`validation`]**: Login and signup form validation
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Display-name helpers
//! - [`crate::core`]: Core abstractions and error types

pub mod validation;
