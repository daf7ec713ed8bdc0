//! Server-side renders of the configuration form

use dioxus::prelude::*;
use subscription_ui::components::forms::SubscriptionConfigForm;
use subscription_ui::subscription::{BillingCycle, SubscriptionDraft};

#[derive(Props, PartialEq, Clone)]
struct FormHarnessProps {
    draft: SubscriptionDraft,
    monthly: String,
    annual: String,
}

#[component]
fn FormHarness(props: FormHarnessProps) -> Element {
    rsx! {
        SubscriptionConfigForm {
            draft: props.draft.clone(),
            dispatch: move |_| {},
            on_proceed: move |_| {},
            monthly_price_display: props.monthly.clone(),
            annual_price_display: props.annual.clone(),
        }
    }
}

fn render_form(draft: SubscriptionDraft, monthly: &str, annual: &str) -> String {
    let mut dom = VirtualDom::new_with_props(
        FormHarness,
        FormHarnessProps {
            draft,
            monthly: monthly.to_string(),
            annual: annual.to_string(),
        },
    );
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn draft(server_name: &str, billing_cycle: BillingCycle) -> SubscriptionDraft {
    SubscriptionDraft {
        server_name: server_name.to_string(),
        billing_cycle,
    }
}

#[test]
fn test_default_form_marks_monthly_selected() {
    let html = render_form(SubscriptionDraft::default(), "R$ 29,90", "R$ 299,00");

    assert_eq!(html.matches("cycle-option-selected").count(), 1);
    let selected_at = html.find("cycle-option-selected").expect("one option is selected");
    let annual_at = html.find("Plano Anual").expect("annual option is rendered");
    assert!(selected_at < annual_at);
}

#[test]
fn test_annual_selection_moves_the_marker() {
    let html = render_form(draft("", BillingCycle::Annual), "R$ 29,90", "R$ 299,00");

    assert_eq!(html.matches("cycle-option-selected").count(), 1);
    let selected_at = html.find("cycle-option-selected").expect("one option is selected");
    let monthly_at = html.find("Plano Mensal").expect("monthly option is rendered");
    assert!(selected_at > monthly_at);
}

#[test]
fn test_prices_rendered_verbatim() {
    let html = render_form(SubscriptionDraft::default(), "R$ 29,90", "R$ 299,00");

    assert!(html.contains("R$ 29,90"));
    assert!(html.contains("R$ 299,00"));
}

#[test]
fn test_proceed_button_disabled_for_blank_name() {
    for name in ["", "   "] {
        let html = render_form(draft(name, BillingCycle::Monthly), "R$ 29,90", "R$ 299,00");
        assert!(html.contains("proceed-button-disabled"), "name {:?}", name);
    }
}

#[test]
fn test_proceed_button_enabled_for_padded_name() {
    let html = render_form(draft(" web1 ", BillingCycle::Annual), "R$ 29,90", "R$ 299,00");

    assert!(html.contains("proceed-button"));
    assert!(!html.contains("proceed-button-disabled"));
}

#[test]
fn test_name_highlight_adds_second_indicator() {
    let empty = render_form(SubscriptionDraft::default(), "R$ 29,90", "R$ 299,00");
    assert_eq!(empty.matches("pulse-indicator").count(), 1);
    assert!(!empty.contains("input-highlighted"));

    let named = render_form(draft("web1", BillingCycle::Monthly), "R$ 29,90", "R$ 299,00");
    assert_eq!(named.matches("pulse-indicator").count(), 2);
    assert!(named.contains("input-highlighted"));
}
