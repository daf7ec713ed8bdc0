use dioxus::prelude::*;

use crate::services::config::LocationInfo;

#[derive(Props, PartialEq, Clone)]
pub struct LocationInfoDisplayProps {
    pub location: LocationInfo,
}

/// Static server location block; holds no state and takes no input
#[component]
pub fn LocationInfoDisplay(props: LocationInfoDisplayProps) -> Element {
    let location = props.location;

    rsx! {
        div {
            class: "input-section",
            label {
                class: "input-label",
                "Localização do Servidor"
            }
            div {
                class: "location-card",
                div {
                    class: "location-details",
                    div { class: "location-region", "{location.region}" }
                    div { class: "location-note", "{location.latency_note}" }
                }
                div {
                    class: "location-status",
                    "{location.status}"
                }
            }
        }
    }
}
