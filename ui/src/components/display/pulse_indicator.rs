use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct PulseIndicatorProps {
    pub visible: bool,
}

#[component]
pub fn PulseIndicator(props: PulseIndicatorProps) -> Element {
    if props.visible {
        rsx! {
            div { class: "pulse-indicator" }
        }
    } else {
        rsx! {}
    }
}
