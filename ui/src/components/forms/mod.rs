pub mod billing_cycle_selector;
pub mod subscription_config_form;

pub use billing_cycle_selector::*;
pub use subscription_config_form::*;
