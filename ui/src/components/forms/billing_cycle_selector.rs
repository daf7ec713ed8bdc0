use dioxus::prelude::*;

use crate::components::display::PulseIndicator;
use crate::components::inputs::InputType;
use crate::services::config::price_for_cycle;
use crate::subscription::{BillingCycle, SubscriptionDraft};
use crate::utils::validation::cycle_option_class;
use crate::console_warn;

/// Static text for one billing option
struct CycleCopy {
    title: &'static str,
    subtitle: &'static str,
    unit: &'static str,
    badge: Option<&'static str>,
}

fn cycle_copy(cycle: BillingCycle) -> CycleCopy {
    match cycle {
        BillingCycle::Monthly => CycleCopy {
            title: "Plano Mensal",
            subtitle: "Flexibilidade máxima",
            unit: "por mês",
            badge: None,
        },
        BillingCycle::Annual => CycleCopy {
            title: "Plano Anual",
            subtitle: "Melhor custo-benefício",
            unit: "por ano",
            badge: Some("Econômico"),
        },
    }
}

/// What one radio option shows
#[derive(Debug, Clone, PartialEq)]
pub struct CycleOptionView {
    pub cycle: BillingCycle,
    pub selected: bool,
    pub price_display: String,
}

/// Options in display order, selection taken from the draft
pub fn cycle_option_views(
    draft: &SubscriptionDraft,
    monthly_price_display: &str,
    annual_price_display: &str,
) -> Vec<CycleOptionView> {
    BillingCycle::ALL
        .into_iter()
        .map(|cycle| CycleOptionView {
            cycle,
            selected: draft.is_cycle_selected(cycle),
            price_display: price_for_cycle(cycle, monthly_price_display, annual_price_display)
                .to_string(),
        })
        .collect()
}

#[derive(Props, PartialEq, Clone)]
pub struct BillingCycleSelectorProps {
    pub draft: SubscriptionDraft,
    pub monthly_price_display: String,
    pub annual_price_display: String,
    pub on_change: EventHandler<BillingCycle>,
}

/// Two-option radio group; exactly one option is checked, the draft's cycle
#[component]
pub fn BillingCycleSelector(props: BillingCycleSelectorProps) -> Element {
    let options = cycle_option_views(
        &props.draft,
        &props.monthly_price_display,
        &props.annual_price_display,
    );

    rsx! {
        div {
            class: "cycle-group",
            role: "radiogroup",
            for option in options {
                CycleOption {
                    key: "{option.cycle}",
                    cycle: option.cycle,
                    selected: option.selected,
                    price_display: option.price_display,
                    on_change: props.on_change,
                }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct CycleOptionProps {
    pub cycle: BillingCycle,
    pub selected: bool,
    pub price_display: String,
    pub on_change: EventHandler<BillingCycle>,
}

#[component]
pub fn CycleOption(props: CycleOptionProps) -> Element {
    let copy = cycle_copy(props.cycle);
    let input_id = format!("ciclo-{}-config", props.cycle.as_str());
    let on_change = props.on_change;

    rsx! {
        div {
            class: "cycle-option-wrapper",
            label {
                r#for: "{input_id}",
                class: cycle_option_class(props.selected),
                div {
                    class: "cycle-option-main",
                    input {
                        id: "{input_id}",
                        r#type: InputType::Radio.as_str(),
                        name: "ciclo",
                        value: props.cycle.as_str(),
                        checked: props.selected,
                        onchange: move |event| {
                            match event.value().parse::<BillingCycle>() {
                                Ok(cycle) => on_change.call(cycle),
                                Err(e) => console_warn!("[Subscription] Ignoring billing cycle change: {}", e),
                            }
                        }
                    }
                    div {
                        div {
                            class: "cycle-title",
                            span { "{copy.title}" }
                            if let Some(badge) = copy.badge {
                                span { class: "cycle-badge", "{badge}" }
                            }
                        }
                        p { class: "cycle-subtitle", "{copy.subtitle}" }
                    }
                }
                div {
                    class: "cycle-price",
                    div { class: "cycle-price-value", "{props.price_display}" }
                    div { class: "cycle-price-unit", "{copy.unit}" }
                }
            }
            PulseIndicator { visible: props.selected }
        }
    }
}
