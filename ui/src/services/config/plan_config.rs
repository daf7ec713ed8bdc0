//! Plan Display Configuration
//!
//! Price strings and the location block shown on the setup page. All values
//! are display text: prices arrive pre-formatted and are never parsed.

use serde::{Deserialize, Serialize};

use crate::services::errors::{SubscriptionError, SubscriptionResult};
use crate::subscription::BillingCycle;

/// Text shown for the (fixed) server location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationInfo {
    pub region: String,
    pub latency_note: String,
    pub status: String,
}

/// Display configuration for the subscription setup page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanConfig {
    /// Pre-formatted monthly price, e.g. "R$ 29,90"
    pub monthly_price_display: String,

    /// Pre-formatted annual price, e.g. "R$ 299,00"
    pub annual_price_display: String,

    pub location: LocationInfo,
}

impl Default for LocationInfo {
    fn default() -> Self {
        Self {
            region: "Brasil".to_string(),
            latency_note: "Latência ultra-baixa".to_string(),
            status: "Incluído".to_string(),
        }
    }
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            monthly_price_display: "R$ 29,90".to_string(),
            annual_price_display: "R$ 299,00".to_string(),
            location: LocationInfo::default(),
        }
    }
}

impl PlanConfig {
    /// Parse a configuration document; missing fields keep their defaults
    pub fn from_json(raw: &str) -> SubscriptionResult<Self> {
        let config: PlanConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Like `from_json`, but falls back to the defaults on any error
    pub fn from_json_or_default(raw: &str) -> Self {
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "Invalid plan configuration, using defaults");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> SubscriptionResult<()> {
        let required = [
            ("monthly_price_display", &self.monthly_price_display),
            ("annual_price_display", &self.annual_price_display),
            ("location.region", &self.location.region),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(SubscriptionError::Configuration {
                    field: field.to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Price text for the given cycle, verbatim
    pub fn price_display(&self, cycle: BillingCycle) -> &str {
        price_for_cycle(cycle, &self.monthly_price_display, &self.annual_price_display)
    }
}

/// Picks the supplied price text for a cycle without touching it
pub fn price_for_cycle<'a>(cycle: BillingCycle, monthly: &'a str, annual: &'a str) -> &'a str {
    match cycle {
        BillingCycle::Monthly => monthly,
        BillingCycle::Annual => annual,
    }
}
