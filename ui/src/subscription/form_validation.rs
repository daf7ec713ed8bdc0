use crate::subscription::types::*;

/// Runs `on_proceed` once if the draft passes the proceed gate.
///
/// Returns whether the callback was invoked. A blocked activation is a
/// no-op, not an error.
pub fn activate_proceed(draft: &SubscriptionDraft, on_proceed: impl FnOnce()) -> bool {
    if draft.can_proceed() {
        on_proceed();
        true
    } else {
        false
    }
}

/// Gets user-friendly hint for why the continue button is disabled
pub fn get_server_name_validation_message(draft: &SubscriptionDraft) -> Option<String> {
    match draft.proceed_state() {
        ProceedState::CannotProceed => Some("Informe um nome para o servidor".to_string()),
        ProceedState::CanProceed => None,
    }
}
