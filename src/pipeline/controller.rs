//! Admin pipeline controller
//!
//! Owns the pipeline state (form, selected file, step statuses, action messages,
//! activity log, fetched attestation) and mutates it only through the five action
//! handlers. Every handler follows the same protocol:
//!
//! 1. check the gate; a closed gate is a no-op (no network call, no transition)
//! 2. set the step to `pending`
//! 3. call the backend
//! 4. set the step to `success` or `error`, record the message and an activity entry
//!
//! The state lock is never held across the backend call, so different steps can be in
//! flight at the same time while the `pending` guard keeps an action from overlapping
//! itself.

use log::{debug, info, warn};
use tokio::sync::Mutex;

use crate::api::{ApiError, ApiResult, Attestation, DocumentUpload, ExtractionResponse, ProvenanceApi};
use crate::common::{ConsoleError, Result};
use crate::pipeline::activity::{ActivityEntry, ActivityKind, ActivityLog};
use crate::pipeline::form::BatchForm;
use crate::pipeline::gate::{self, GateInput};
use crate::pipeline::step::{Action, StepKey, StepStates, StepStatus};
use crate::ui::StepRow;

/// Kind of per-action message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// Message shown under an action after it ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl ActionMessage {
    fn success(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Success,
            text: text.into(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }
}

/// What happened when an action was invoked
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Gate closed; nothing was sent
    Skipped,
    Succeeded,
    /// Backend call failed with this message
    Failed(String),
}

/// Read-only copy of the pipeline state for rendering
#[derive(Debug, Clone)]
pub struct PipelineView {
    pub steps: StepStates,
    pub enabled: [(Action, bool); 5],
    pub activity: Vec<ActivityEntry>,
    pub attestation: Option<Attestation>,
    pub extraction: Option<ExtractionResponse>,
    messages: [Option<ActionMessage>; 5],
}

impl PipelineView {
    /// Latest message recorded for `action`
    pub fn message(&self, action: Action) -> Option<&ActionMessage> {
        self.messages[action.step().index()].as_ref()
    }

    /// Whether `action` could be invoked when the view was taken
    pub fn is_enabled(&self, action: Action) -> bool {
        self.enabled[action.step().index()].1
    }

    /// Stepper rows in pipeline order
    ///
    /// The attested row shows the attestation hash; the others show their action's
    /// success message.
    pub fn stepper(&self) -> Vec<StepRow> {
        Action::ALL
            .iter()
            .map(|action| {
                let key = action.step();
                let detail = match key {
                    StepKey::Attested => self
                        .attestation
                        .as_ref()
                        .map(|attestation| format!("Hash: {}", attestation.canonical_json_hash)),
                    _ => self
                        .message(*action)
                        .filter(|message| message.kind == MessageKind::Success)
                        .map(|message| message.text.clone()),
                };

                StepRow {
                    key,
                    label: key.label(),
                    status: self.steps.get(key),
                    detail,
                }
            })
            .collect()
    }
}

#[derive(Debug, Default)]
struct PipelineState {
    api_key: String,
    form: BatchForm,
    file: Option<DocumentUpload>,
    steps: StepStates,
    messages: [Option<ActionMessage>; 5],
    activity: ActivityLog,
    attestation: Option<Attestation>,
    extraction: Option<ExtractionResponse>,
}

/// Credentials captured when an action starts
struct Access {
    api_key: String,
    batch_id: String,
}

impl PipelineState {
    fn gate_input(&self) -> GateInput {
        GateInput {
            api_key_present: !self.api_key.is_empty(),
            batch_id_present: self.form.has_batch_id(),
            required_fields_present: self.form.has_required_fields(),
            file_selected: self.file.is_some(),
            steps: self.steps,
        }
    }

    fn access(&self) -> Access {
        Access {
            api_key: self.api_key.clone(),
            batch_id: self.form.trimmed_batch_id().to_string(),
        }
    }
}

/// Guarded five-step admin workflow over a [`ProvenanceApi`]
pub struct AdminPipeline<A> {
    api: A,
    state: Mutex<PipelineState>,
}

impl<A: ProvenanceApi> AdminPipeline<A> {
    /// Create a pipeline with every step idle
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: Mutex::new(PipelineState::default()),
        }
    }

    /// Set the API key (kept in memory only)
    pub async fn set_api_key(&self, api_key: impl Into<String>) {
        self.state.lock().await.api_key = api_key.into();
    }

    /// Replace the batch form contents
    pub async fn set_form(&self, form: BatchForm) {
        self.state.lock().await.form = form;
    }

    /// Select or clear the lab-report file
    pub async fn select_file(&self, file: Option<DocumentUpload>) {
        self.state.lock().await.file = file;
    }

    /// Current status of a step
    pub async fn status(&self, key: StepKey) -> StepStatus {
        self.state.lock().await.steps.get(key)
    }

    /// Whether `action` may be invoked right now
    pub async fn can_invoke(&self, action: Action) -> bool {
        gate::can_invoke(action, &self.state.lock().await.gate_input())
    }

    /// Why `action` may not be invoked right now, if it may not
    pub async fn blocked_reason(&self, action: Action) -> Option<&'static str> {
        gate::blocked_reason(action, &self.state.lock().await.gate_input())
    }

    /// Snapshot for rendering
    pub async fn view(&self) -> PipelineView {
        let state = self.state.lock().await;
        PipelineView {
            steps: state.steps,
            enabled: gate::enabled_actions(&state.gate_input()),
            activity: state.activity.to_vec(),
            attestation: state.attestation.clone(),
            extraction: state.extraction.clone(),
            messages: state.messages.clone(),
        }
    }

    /// Run the handler for `action`
    pub async fn invoke(&self, action: Action) -> ActionOutcome {
        match action {
            Action::Create => self.create_batch().await,
            Action::Upload => self.upload_document().await,
            Action::Extract => self.extract().await,
            Action::Attestation => self.fetch_attestation().await,
            Action::Publish => self.publish().await,
        }
    }

    /// `POST /batches` with the form contents
    pub async fn create_batch(&self) -> ActionOutcome {
        let request = self
            .begin(Action::Create, |state| Some((state.api_key.clone(), state.form.to_payload())))
            .await;
        let Some((api_key, payload)) = request else {
            return ActionOutcome::Skipped;
        };

        let result = self.api.create_batch(&payload, &api_key).await;
        self.finish(Action::Create, result, |_, batch| {
            debug!("Batch {} created with status {}", batch.batch_id, batch.status);
        })
        .await
    }

    /// Upload the selected file
    pub async fn upload_document(&self) -> ActionOutcome {
        let request = self
            .begin(Action::Upload, |state| Some((state.access(), state.file.clone()?)))
            .await;
        let Some((access, document)) = request else {
            return ActionOutcome::Skipped;
        };

        let result = self
            .api
            .upload_document(&access.batch_id, &document, &access.api_key)
            .await;
        self.finish(Action::Upload, result, |_, _| {}).await
    }

    /// Trigger extraction
    pub async fn extract(&self) -> ActionOutcome {
        let Some(access) = self.begin(Action::Extract, |state| Some(state.access())).await else {
            return ActionOutcome::Skipped;
        };

        let result = self.api.extract_batch(&access.batch_id, &access.api_key).await;
        self.finish(Action::Extract, result, |state, extraction| {
            state.extraction = Some(extraction);
        })
        .await
    }

    /// Fetch the attestation, replacing any previously fetched one
    pub async fn fetch_attestation(&self) -> ActionOutcome {
        let Some(access) = self.begin(Action::Attestation, |state| Some(state.access())).await else {
            return ActionOutcome::Skipped;
        };

        let result = self.api.get_attestation(&access.batch_id, &access.api_key).await;
        self.finish(Action::Attestation, result, |state, attestation| {
            state.attestation = Some(attestation);
        })
        .await
    }

    /// Publish to the ledger
    pub async fn publish(&self) -> ActionOutcome {
        let Some(access) = self.begin(Action::Publish, |state| Some(state.access())).await else {
            return ActionOutcome::Skipped;
        };

        let result = self.api.publish_batch(&access.batch_id, &access.api_key).await;
        self.finish(Action::Publish, result, |_, receipt| {
            debug!("Publish receipt: {}", receipt);
        })
        .await
    }

    /// Run every action in pipeline order, stopping at the first one that does not
    /// succeed
    pub async fn run_all(&self) -> Result<()> {
        for action in Action::ALL {
            match self.invoke(action).await {
                ActionOutcome::Succeeded => {}
                ActionOutcome::Failed(message) => {
                    return Err(ConsoleError::StepFailed {
                        step: action.step().label().to_string(),
                        message,
                    });
                }
                ActionOutcome::Skipped => {
                    let reason = self.blocked_reason(action).await.unwrap_or("not available");
                    return Err(ConsoleError::InvalidInput(format!(
                        "{} skipped: {}",
                        action.label(),
                        reason
                    )));
                }
            }
        }

        Ok(())
    }

    /// Check the gate, capture the request inputs and mark the step pending
    ///
    /// `prepare` runs under the same lock as the gate check; returning `None` aborts
    /// without any transition.
    async fn begin<R>(
        &self,
        action: Action,
        prepare: impl FnOnce(&PipelineState) -> Option<R>,
    ) -> Option<R> {
        let mut state = self.state.lock().await;

        if let Some(reason) = gate::blocked_reason(action, &state.gate_input()) {
            debug!("Action {} not invoked: {}", action, reason);
            return None;
        }

        let request = prepare(&state)?;
        state.steps.set(action.step(), StepStatus::Pending);
        debug!("Step {} -> pending", action.step());

        Some(request)
    }

    /// Record the outcome of a backend call
    async fn finish<T>(
        &self,
        action: Action,
        result: ApiResult<T>,
        on_success: impl FnOnce(&mut PipelineState, T),
    ) -> ActionOutcome {
        let mut state = self.state.lock().await;
        let step = action.step();

        match result {
            Ok(value) => {
                on_success(&mut state, value);
                state.steps.set(step, StepStatus::Success);
                state.messages[step.index()] = Some(ActionMessage::success(action.success_message()));
                state.activity.push(action.success_activity(), ActivityKind::Success);

                info!("Step {} -> success", step);
                ActionOutcome::Succeeded
            }
            Err(err) => {
                let message = failure_message(action, &err);
                state.steps.set(step, StepStatus::Error);
                state.messages[step.index()] = Some(ActionMessage::error(message.clone()));
                state.activity.push(
                    format!("{}: {}", action.failure_activity_prefix(), message),
                    ActivityKind::Error,
                );

                warn!("Step {} -> error: {}", step, message);
                ActionOutcome::Failed(message)
            }
        }
    }
}

/// Message recorded for a failed action: the error's own message, or the action's
/// default when that is empty
fn failure_message(action: Action, err: &ApiError) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        action.default_failure_message().to_string()
    } else {
        message
    }
}
