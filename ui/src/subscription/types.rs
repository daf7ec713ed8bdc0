// Core types for the subscription form - no dioxus imports needed here
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::services::errors::SubscriptionError;

/// Billing cycle offered on the configuration form
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BillingCycle {
    #[default]
    #[serde(rename = "mensal")]
    Monthly,
    #[serde(rename = "anual")]
    Annual,
}

impl BillingCycle {
    /// Both cycles, in display order
    pub const ALL: [BillingCycle; 2] = [BillingCycle::Monthly, BillingCycle::Annual];

    pub fn as_str(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "mensal",
            BillingCycle::Annual => "anual",
        }
    }
}

impl fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BillingCycle {
    type Err = SubscriptionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "mensal" => Ok(BillingCycle::Monthly),
            "anual" => Ok(BillingCycle::Annual),
            other => Err(SubscriptionError::InvalidBillingCycle {
                value: other.to_string(),
            }),
        }
    }
}

/// In-progress subscription choices owned by the setup page
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct SubscriptionDraft {
    #[serde(rename = "nomeServidor")]
    pub server_name: String,
    #[serde(rename = "ciclo")]
    pub billing_cycle: BillingCycle,
}

/// Whether the form may move on to the next step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProceedState {
    CanProceed,
    CannotProceed,
}

impl ProceedState {
    pub fn is_allowed(&self) -> bool {
        matches!(self, ProceedState::CanProceed)
    }
}

/// Field updates accepted by the draft reducer
#[derive(Debug, Clone, PartialEq)]
pub enum SubscriptionAction {
    SetServerName(String),
    SetBillingCycle(BillingCycle),
}

impl SubscriptionDraft {
    /// Reduces the draft based on an action
    pub fn reduce(mut self, action: SubscriptionAction) -> Self {
        self.reduce_in_place(action);
        self
    }

    /// Reduces the draft in-place (preserves Dioxus Signal reactivity)
    pub fn reduce_in_place(&mut self, action: SubscriptionAction) {
        match action {
            SubscriptionAction::SetServerName(name) => {
                self.server_name = name;
            }
            SubscriptionAction::SetBillingCycle(cycle) => {
                tracing::debug!(from = %self.billing_cycle, to = %cycle, "billing cycle changed");
                self.billing_cycle = cycle;
            }
        }
    }

    /// Derived from the server name on every call, never cached
    pub fn proceed_state(&self) -> ProceedState {
        if self.server_name.trim().is_empty() {
            ProceedState::CannotProceed
        } else {
            ProceedState::CanProceed
        }
    }

    pub fn can_proceed(&self) -> bool {
        self.proceed_state().is_allowed()
    }

    pub fn is_cycle_selected(&self, cycle: BillingCycle) -> bool {
        self.billing_cycle == cycle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_draft() {
        let draft = SubscriptionDraft::default();
        assert_eq!(draft.server_name, "");
        assert_eq!(draft.billing_cycle, BillingCycle::Monthly);
        assert_eq!(draft.billing_cycle.as_str(), "mensal");
    }

    #[test]
    fn test_server_name_is_stored_verbatim() {
        let mut draft = SubscriptionDraft::default();

        for name in ["", "   ", " web1 ", "MeuServidorMTA", "servidor\tção\n"] {
            draft.reduce_in_place(SubscriptionAction::SetServerName(name.to_string()));
            assert_eq!(draft.server_name, name);
        }
    }

    #[test]
    fn test_update_leaves_other_field_untouched() {
        let draft = SubscriptionDraft::default()
            .reduce(SubscriptionAction::SetBillingCycle(BillingCycle::Annual))
            .reduce(SubscriptionAction::SetServerName("web1".to_string()));
        assert_eq!(draft.billing_cycle, BillingCycle::Annual);

        let draft = draft.reduce(SubscriptionAction::SetBillingCycle(BillingCycle::Monthly));
        assert_eq!(draft.server_name, "web1");
    }

    #[test]
    fn test_proceed_state_follows_trimmed_name() {
        let mut draft = SubscriptionDraft::default();
        assert_eq!(draft.proceed_state(), ProceedState::CannotProceed);

        draft.reduce_in_place(SubscriptionAction::SetServerName("   ".to_string()));
        assert!(!draft.can_proceed());

        draft.reduce_in_place(SubscriptionAction::SetServerName(" web1 ".to_string()));
        assert_eq!(draft.proceed_state(), ProceedState::CanProceed);

        draft.reduce_in_place(SubscriptionAction::SetServerName(String::new()));
        assert!(!draft.can_proceed());
    }

    #[test]
    fn test_exactly_one_cycle_selected() {
        let mut draft = SubscriptionDraft::default();
        let selected_count =
            |d: &SubscriptionDraft| BillingCycle::ALL.iter().filter(|c| d.is_cycle_selected(**c)).count();

        assert_eq!(selected_count(&draft), 1);

        draft.reduce_in_place(SubscriptionAction::SetBillingCycle(BillingCycle::Annual));
        assert_eq!(selected_count(&draft), 1);
        assert!(draft.is_cycle_selected(BillingCycle::Annual));

        draft.reduce_in_place(SubscriptionAction::SetBillingCycle(BillingCycle::Monthly));
        assert_eq!(selected_count(&draft), 1);
        assert!(draft.is_cycle_selected(BillingCycle::Monthly));
    }

    #[test]
    fn test_billing_cycle_from_str() {
        assert_eq!("mensal".parse::<BillingCycle>().ok(), Some(BillingCycle::Monthly));
        assert_eq!("anual".parse::<BillingCycle>().ok(), Some(BillingCycle::Annual));

        match "yearly".parse::<BillingCycle>() {
            Err(SubscriptionError::InvalidBillingCycle { value }) => assert_eq!(value, "yearly"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_draft_serializes_with_form_field_names() {
        let draft = SubscriptionDraft {
            server_name: "web1".to_string(),
            billing_cycle: BillingCycle::Annual,
        };

        let json = serde_json::to_value(&draft).expect("draft should serialize");
        assert_eq!(json, serde_json::json!({ "nomeServidor": "web1", "ciclo": "anual" }));
    }
}
