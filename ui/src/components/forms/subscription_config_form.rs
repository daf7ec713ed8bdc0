use dioxus::prelude::*;

use crate::components::{
    display::{LocationInfoDisplay, PulseIndicator},
    forms::BillingCycleSelector,
    inputs::ValidatedInput,
};
use crate::services::config::LocationInfo;
use crate::subscription::{
    form_validation::{activate_proceed, get_server_name_validation_message},
    *,
};
use crate::utils::validation::{
    is_server_name_highlighted, proceed_button_class, server_name_input_class,
};

#[derive(Props, PartialEq, Clone)]
pub struct SubscriptionConfigFormProps {
    pub draft: SubscriptionDraft,
    pub dispatch: EventHandler<SubscriptionAction>,
    pub on_proceed: EventHandler<()>,
    pub monthly_price_display: String,
    pub annual_price_display: String,
    #[props(default)]
    pub location: LocationInfo,
}

#[component]
pub fn SubscriptionConfigForm(props: SubscriptionConfigFormProps) -> Element {
    let draft = props.draft;
    let dispatch = props.dispatch;
    let on_proceed = props.on_proceed;

    // View-only state, never sent to the host
    let mut is_focused = use_signal(|| false);

    let highlighted = is_server_name_highlighted(is_focused(), &draft.server_name);
    let can_proceed = draft.can_proceed();
    let proceed_hint = get_server_name_validation_message(&draft);
    let draft_for_click = draft.clone();

    rsx! {
        div {
            class: "subscription-form",

            div {
                class: "form-header",
                h1 {
                    class: "form-title",
                    "Configure Sua Assinatura"
                }
                p {
                    class: "form-subtitle",
                    "Personalize seu servidor de alta performance"
                }
            }

            div {
                class: "form-card",

                div {
                    class: "card-header",
                    h2 { class: "card-title", "Detalhes do Servidor" }
                    p {
                        class: "card-description",
                        "Defina as configurações básicas do seu servidor premium"
                    }
                }

                div {
                    class: "input-section",
                    label {
                        class: "input-label",
                        r#for: "nomeServidor-config",
                        "Nome do Servidor"
                    }
                    div {
                        class: "input-wrapper",
                        ValidatedInput {
                            id: "nomeServidor-config".to_string(),
                            value: draft.server_name.clone(),
                            placeholder: "Ex: MeuServidorMTA".to_string(),
                            input_class: server_name_input_class(highlighted).to_string(),
                            required: true,
                            on_change: move |name: String| {
                                dispatch.call(SubscriptionAction::SetServerName(name));
                            },
                            on_focus: move |_| is_focused.set(true),
                            on_blur: move |_| is_focused.set(false),
                        }
                        PulseIndicator { visible: highlighted }
                    }
                    p {
                        class: "input-help",
                        "Este será seu identificador único no painel TCAdmin"
                    }
                }

                div {
                    class: "input-section",
                    label {
                        class: "input-label",
                        "Ciclo de Pagamento"
                    }
                    BillingCycleSelector {
                        draft: draft.clone(),
                        monthly_price_display: props.monthly_price_display.clone(),
                        annual_price_display: props.annual_price_display.clone(),
                        on_change: move |cycle: BillingCycle| {
                            dispatch.call(SubscriptionAction::SetBillingCycle(cycle));
                        }
                    }
                }

                LocationInfoDisplay { location: props.location.clone() }

                button {
                    class: proceed_button_class(can_proceed),
                    disabled: !can_proceed,
                    title: proceed_hint.unwrap_or_default(),
                    onclick: move |_| {
                        activate_proceed(&draft_for_click, || on_proceed.call(()));
                    },
                    "Continuar Configuração"
                }
            }

            div {
                class: "form-footer",
                "🔒 Configuração segura e criptografada"
            }
        }
    }
}
