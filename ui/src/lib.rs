//! This crate contains the subscription setup page and its components.

pub mod app;
pub use app::SubscriptionSetup;

pub mod components;
pub mod services;
pub mod subscription;
pub mod utils;
