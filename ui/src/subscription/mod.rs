//! Subscription Draft State
//!
//! The page keeps a single `SubscriptionDraft` (server name and billing cycle)
//! and mutates it only through `SubscriptionAction`s:
//!
//! - **types**: draft, billing cycle, actions and the in-place reducer
//! - **form_validation**: the proceed gate and its user-facing hint
//!
//! The proceed gate is computed from the draft on every render and never stored.

pub mod form_validation;
pub mod types;

pub use form_validation::*;
pub use types::*;
