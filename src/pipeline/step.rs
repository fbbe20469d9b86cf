//! Pipeline steps and actions
//!
//! Five steps, each driven by exactly one user action. Step status moves
//! `idle -> pending -> success | error`; an errored step goes back to `pending` when its
//! action is retried.

use std::fmt;

/// Status of one pipeline step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StepStatus {
    #[default]
    Idle,
    Pending,
    Success,
    Error,
}

impl StepStatus {
    /// All statuses
    pub const ALL: [StepStatus; 4] = [
        StepStatus::Idle,
        StepStatus::Pending,
        StepStatus::Success,
        StepStatus::Error,
    ];
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepStatus::Idle => write!(f, "idle"),
            StepStatus::Pending => write!(f, "pending"),
            StepStatus::Success => write!(f, "success"),
            StepStatus::Error => write!(f, "error"),
        }
    }
}

/// Pipeline step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKey {
    Created,
    Uploaded,
    Extracted,
    Attested,
    Published,
}

impl StepKey {
    /// Steps in pipeline order
    pub const ALL: [StepKey; 5] = [
        StepKey::Created,
        StepKey::Uploaded,
        StepKey::Extracted,
        StepKey::Attested,
        StepKey::Published,
    ];

    /// Position in pipeline order
    pub fn index(self) -> usize {
        match self {
            StepKey::Created => 0,
            StepKey::Uploaded => 1,
            StepKey::Extracted => 2,
            StepKey::Attested => 3,
            StepKey::Published => 4,
        }
    }

    /// Stepper label
    pub fn label(self) -> &'static str {
        match self {
            StepKey::Created => "Batch created",
            StepKey::Uploaded => "PDF uploaded",
            StepKey::Extracted => "Extraction complete",
            StepKey::Attested => "Attestation ready",
            StepKey::Published => "Published on-chain",
        }
    }
}

impl fmt::Display for StepKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepKey::Created => write!(f, "created"),
            StepKey::Uploaded => write!(f, "uploaded"),
            StepKey::Extracted => write!(f, "extracted"),
            StepKey::Attested => write!(f, "attested"),
            StepKey::Published => write!(f, "published"),
        }
    }
}

/// User action driving one step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Create,
    Upload,
    Extract,
    Attestation,
    Publish,
}

impl Action {
    /// Actions in pipeline order
    pub const ALL: [Action; 5] = [
        Action::Create,
        Action::Upload,
        Action::Extract,
        Action::Attestation,
        Action::Publish,
    ];

    /// Step this action moves
    pub fn step(self) -> StepKey {
        match self {
            Action::Create => StepKey::Created,
            Action::Upload => StepKey::Uploaded,
            Action::Extract => StepKey::Extracted,
            Action::Attestation => StepKey::Attested,
            Action::Publish => StepKey::Published,
        }
    }

    /// Step that must be `success` before this action can run
    pub fn prerequisite(self) -> Option<StepKey> {
        match self {
            Action::Create => None,
            Action::Upload => Some(StepKey::Created),
            Action::Extract => Some(StepKey::Uploaded),
            Action::Attestation => Some(StepKey::Extracted),
            Action::Publish => Some(StepKey::Attested),
        }
    }

    /// Button label
    pub fn label(self) -> &'static str {
        match self {
            Action::Create => "Create Batch",
            Action::Upload => "Upload Document",
            Action::Extract => "Trigger Extraction",
            Action::Attestation => "View Attestation",
            Action::Publish => "Publish to Chain",
        }
    }

    /// Message shown next to the action after it succeeds
    pub fn success_message(self) -> &'static str {
        match self {
            Action::Create => "Batch created.",
            Action::Upload => "Document uploaded.",
            Action::Extract => "Extraction complete.",
            Action::Attestation => "Attestation ready.",
            Action::Publish => "Published on-chain.",
        }
    }

    /// Activity-log text for a success
    pub fn success_activity(self) -> &'static str {
        match self {
            Action::Create => "Batch created",
            Action::Upload => "Uploaded PDF",
            Action::Extract => "Extraction succeeded",
            Action::Attestation => "Attestation ready",
            Action::Publish => "Published on-chain",
        }
    }

    /// Activity-log prefix for a failure; the failure message follows
    pub fn failure_activity_prefix(self) -> &'static str {
        match self {
            Action::Create => "Create failed",
            Action::Upload => "Upload failed",
            Action::Extract => "Extraction failed",
            Action::Attestation => "Attestation failed",
            Action::Publish => "Publish failed",
        }
    }

    /// Failure message used when the error carries none
    pub fn default_failure_message(self) -> &'static str {
        match self {
            Action::Create => "Failed to create batch",
            Action::Upload => "Upload failed",
            Action::Extract => "Extraction failed",
            Action::Attestation => "Failed to load attestation",
            Action::Publish => "Publish failed",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Create => write!(f, "create"),
            Action::Upload => write!(f, "upload"),
            Action::Extract => write!(f, "extract"),
            Action::Attestation => write!(f, "attestation"),
            Action::Publish => write!(f, "publish"),
        }
    }
}

/// Status of every step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepStates {
    statuses: [StepStatus; 5],
}

impl StepStates {
    /// Build from statuses in pipeline order
    pub fn from_array(statuses: [StepStatus; 5]) -> Self {
        Self { statuses }
    }

    /// Status of a step
    pub fn get(&self, key: StepKey) -> StepStatus {
        self.statuses[key.index()]
    }

    pub(crate) fn set(&mut self, key: StepKey, status: StepStatus) {
        self.statuses[key.index()] = status;
    }

    /// `(step, status)` pairs in pipeline order
    pub fn iter(&self) -> impl Iterator<Item = (StepKey, StepStatus)> + '_ {
        StepKey::ALL.iter().map(move |key| (*key, self.get(*key)))
    }

    /// Whether any step is waiting on the backend
    pub fn any_pending(&self) -> bool {
        self.statuses.contains(&StepStatus::Pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prerequisites_follow_pipeline_order() {
        for (position, action) in Action::ALL.iter().enumerate() {
            assert_eq!(action.step().index(), position);
            match action.prerequisite() {
                None => assert_eq!(position, 0),
                Some(prev) => assert_eq!(prev.index() + 1, position),
            }
        }
    }

    #[test]
    fn test_default_states_are_idle() {
        let states = StepStates::default();
        assert!(states.iter().all(|(_, status)| status == StepStatus::Idle));
        assert!(!states.any_pending());
    }

    #[test]
    fn test_set_only_touches_one_step() {
        let mut states = StepStates::default();
        states.set(StepKey::Extracted, StepStatus::Pending);

        assert_eq!(states.get(StepKey::Extracted), StepStatus::Pending);
        assert_eq!(states.get(StepKey::Uploaded), StepStatus::Idle);
        assert_eq!(states.get(StepKey::Attested), StepStatus::Idle);
        assert!(states.any_pending());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(StepKey::Attested.to_string(), "attested");
        assert_eq!(StepStatus::Pending.to_string(), "pending");
        assert_eq!(Action::Attestation.step(), StepKey::Attested);
    }
}
