//! User Interface Components
//!
//! Reusable Dioxus components for the subscription setup page:
//!
//! - **forms**: the configuration form and its billing cycle selector
//! - **display**: static blocks and indicators
//! - **inputs**: controlled input fields

pub mod display;
pub mod forms;
pub mod inputs;
