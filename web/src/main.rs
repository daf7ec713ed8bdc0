use dioxus::prelude::*;
use subscription_ui::services::config::PlanConfig;
use subscription_ui::SubscriptionSetup;

const MAIN_CSS: Asset = asset!("/assets/main.css");
const PLANS_JSON: &str = include_str!("../plans.json");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "Configure Sua Assinatura" }

        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
}

#[component]
fn Home() -> Element {
    let config = use_hook(|| PlanConfig::from_json_or_default(PLANS_JSON));

    rsx! {
        div {
            SubscriptionSetup { config: config }
        }
    }
}
