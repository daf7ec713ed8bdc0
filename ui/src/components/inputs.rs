//! Input components for the configuration form

use dioxus::prelude::*;

#[derive(PartialEq, Clone, Debug)]
pub enum InputType {
    Text,
    Radio,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Radio => "radio",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedInputProps {
    pub id: String,
    pub value: String,
    pub placeholder: String,
    pub input_class: String,
    pub required: bool,
    pub on_change: EventHandler<String>,
    pub on_focus: EventHandler<()>,
    pub on_blur: EventHandler<()>,
}

/// Controlled text input: every keystroke is forwarded through `on_change`
#[component]
pub fn ValidatedInput(props: ValidatedInputProps) -> Element {
    let on_change = props.on_change;
    let on_focus = props.on_focus;
    let on_blur = props.on_blur;

    rsx! {
        input {
            id: "{props.id}",
            class: "{props.input_class}",
            r#type: InputType::Text.as_str(),
            value: "{props.value}",
            placeholder: "{props.placeholder}",
            required: props.required,
            oninput: move |event| on_change.call(event.value()),
            onfocus: move |_| on_focus.call(()),
            onblur: move |_| on_blur.call(()),
        }
    }
}
