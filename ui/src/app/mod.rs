pub mod subscription_setup;

pub use subscription_setup::SubscriptionSetup;
