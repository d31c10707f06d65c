//! Demand intake — validation-and-forwarding pipeline for the quality
//! department's public demand form.

pub mod config;
pub mod demand;
pub mod error;
pub mod forward;
pub mod routes;
