//! Demand submission model, validation, and external schema mapping.

pub mod model;
pub mod schema;
pub mod validate;
