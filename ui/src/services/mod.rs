//! Infrastructure Services
//!
//! - **config**: plan text (prices, location) supplied to the setup page
//! - **errors**: error type for the few edges that parse text

pub mod config;
pub mod errors;
