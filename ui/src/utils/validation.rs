/// Server name input keeps its highlight while focused or non-empty
pub fn is_server_name_highlighted(is_focused: bool, server_name: &str) -> bool {
    is_focused || !server_name.is_empty()
}

pub fn server_name_input_class(highlighted: bool) -> &'static str {
    if highlighted {
        "input-field input-highlighted"
    } else {
        "input-field"
    }
}

pub fn cycle_option_class(selected: bool) -> &'static str {
    if selected {
        "cycle-option cycle-option-selected"
    } else {
        "cycle-option"
    }
}

pub fn proceed_button_class(enabled: bool) -> &'static str {
    if enabled {
        "proceed-button"
    } else {
        "proceed-button proceed-button-disabled"
    }
}
