//! Action gating
//!
//! Pure derived state: whether an action may be invoked given the current step
//! statuses and form contents. Nothing here touches the network or the pipeline state.

use crate::pipeline::step::{Action, StepKey, StepStates, StepStatus};

/// Everything the gate looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GateInput {
    /// An API key has been entered
    pub api_key_present: bool,
    /// The (trimmed) batch id is non-empty
    pub batch_id_present: bool,
    /// Product name, supplement type, manufacturer and production date are non-blank
    pub required_fields_present: bool,
    /// A lab-report file is selected
    pub file_selected: bool,
    pub steps: StepStates,
}

impl GateInput {
    /// Every privileged call needs both the key and the batch id
    pub fn has_access(&self) -> bool {
        self.api_key_present && self.batch_id_present
    }

    fn status(&self, key: StepKey) -> StepStatus {
        self.steps.get(key)
    }
}

/// Whether `action` may be invoked
pub fn can_invoke(action: Action, input: &GateInput) -> bool {
    blocked_reason(action, input).is_none()
}

/// First unmet precondition of `action`, `None` when it may be invoked
pub fn blocked_reason(action: Action, input: &GateInput) -> Option<&'static str> {
    if !input.has_access() {
        return Some(if input.api_key_present {
            "batch id missing"
        } else {
            "API key missing"
        });
    }

    if let Some(key) = action.prerequisite() {
        if input.status(key) != StepStatus::Success {
            return Some("previous step has not succeeded");
        }
    }

    let own = input.status(action.step());
    if own == StepStatus::Pending {
        return Some("already in progress");
    }

    match action {
        Action::Create if !input.required_fields_present => Some("required batch fields missing"),
        Action::Upload if !input.file_selected => Some("no file selected"),
        // TODO: confirm with product whether publish is meant to be irreversible; it is
        // the only step that stays blocked after success.
        Action::Publish if own == StepStatus::Success => Some("already published"),
        _ => None,
    }
}

/// Gate result for every action, in pipeline order
pub fn enabled_actions(input: &GateInput) -> [(Action, bool); 5] {
    Action::ALL.map(|action| (action, can_invoke(action, input)))
}
