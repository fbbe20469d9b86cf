//! Admin pipeline module
//!
//! This module implements the guarded five-step admin workflow
//! (create, upload, extract, attestation, publish): per-step status tracking, action
//! gating, per-action messages and the bounded activity log.

pub mod activity;
pub mod controller;
pub mod form;
pub mod gate;
pub mod step;

pub use activity::{ActivityEntry, ActivityKind, ActivityLog, ACTIVITY_LOG_CAPACITY};
pub use controller::{ActionMessage, ActionOutcome, AdminPipeline, MessageKind, PipelineView};
pub use form::BatchForm;
pub use gate::{blocked_reason, can_invoke, enabled_actions, GateInput};
pub use step::{Action, StepKey, StepStates, StepStatus};
