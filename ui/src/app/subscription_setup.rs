use crate::console_info;
use dioxus::prelude::*;

use crate::components::forms::SubscriptionConfigForm;
use crate::services::config::PlanConfig;
use crate::subscription::{SubscriptionAction, SubscriptionDraft};

const SUBSCRIPTION_SETUP_CSS: Asset = asset!("/assets/styling/subscription_setup.css");

/// Formats the proceed log line for a draft
pub fn describe_next_step(draft: &SubscriptionDraft) -> String {
    let json = serde_json::to_string(draft).unwrap_or_else(|_| format!("{:?}", draft));
    format!("[Subscription] Próximo passo: {}", json)
}

/// Writes the current draft to the browser console
pub fn log_next_step(draft: &SubscriptionDraft) {
    console_info!("{}", describe_next_step(draft));
}

#[derive(Props, PartialEq, Clone)]
pub struct SubscriptionSetupProps {
    #[props(default)]
    pub config: PlanConfig,
    /// Receives the draft after it has been logged; the next step lives here
    pub on_next_step: Option<EventHandler<SubscriptionDraft>>,
}

#[component]
pub fn SubscriptionSetup(props: SubscriptionSetupProps) -> Element {
    let mut state = use_signal(SubscriptionDraft::default);
    let on_next_step = props.on_next_step;

    // Dispatch function for actions - using in-place reduction to preserve Dioxus Signal reactivity
    let dispatch = EventHandler::new(move |action: SubscriptionAction| {
        state.with_mut(|draft| {
            draft.reduce_in_place(action);
        });
    });

    let on_proceed = EventHandler::new(move |_: ()| {
        let draft = state.read().clone();
        log_next_step(&draft);
        if let Some(handler) = on_next_step {
            handler.call(draft);
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: SUBSCRIPTION_SETUP_CSS }

        div {
            class: "subscription-setup-container",
            SubscriptionConfigForm {
                draft: state(),
                dispatch: dispatch,
                on_proceed: on_proceed,
                monthly_price_display: props.config.monthly_price_display.clone(),
                annual_price_display: props.config.annual_price_display.clone(),
                location: props.config.location.clone(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subscription::BillingCycle;

    #[test]
    fn test_next_step_message_contains_draft() {
        let draft = SubscriptionDraft::default()
            .reduce(SubscriptionAction::SetServerName("web1".to_string()))
            .reduce(SubscriptionAction::SetBillingCycle(BillingCycle::Annual));

        assert_eq!(
            describe_next_step(&draft),
            r#"[Subscription] Próximo passo: {"nomeServidor":"web1","ciclo":"anual"}"#
        );
    }
}
