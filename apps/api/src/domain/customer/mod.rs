// Customer domain module
// Contains the customer entity and its input fields

#![allow(clippy::module_inception)]

pub mod customer;

// Re-export main types for convenience
pub use customer::{Customer, CustomerFields};
pub(crate) use customer::null_as_empty;
