//! Verification view
//!
//! Single-shot request/response state for the public verify page: one batch id in, one
//! result or error message out.

use log::{debug, info};

use crate::api::{ProvenanceApi, VerificationResult};
use crate::config::normalize_base_url;
use crate::ui::{Button, Card, Field};
use crate::verify::badge::BadgeStatus;

/// Message shown when a failed verification carries none
pub const DEFAULT_VERIFY_ERROR: &str = "Verification failed";

const HASH_PREVIEW_LIMIT: usize = 12;

/// Shorten a long hash to `first6…last4`
///
/// Values of 12 characters or fewer are returned unchanged.
pub fn truncate_hash(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= HASH_PREVIEW_LIMIT {
        return value.to_string();
    }

    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}…{}", head, tail)
}

/// Explorer link for a transaction, `None` without an explorer base URL
pub fn tx_link(explorer_base_url: Option<&str>, tx_hash: &str) -> Option<String> {
    explorer_base_url
        .and_then(normalize_base_url)
        .map(|base| format!("{}/{}", base, tx_hash))
}

/// Verify page state
pub struct VerifyView<A> {
    api: A,
    explorer_base_url: Option<String>,
    pub batch_id: String,
    loading: bool,
    error: Option<String>,
    result: Option<VerificationResult>,
}

impl<A: ProvenanceApi> VerifyView<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            explorer_base_url: None,
            batch_id: String::new(),
            loading: false,
            error: None,
            result: None,
        }
    }

    /// Link transaction hashes to this explorer
    pub fn with_explorer(mut self, explorer_base_url: Option<String>) -> Self {
        self.explorer_base_url = explorer_base_url.as_deref().and_then(normalize_base_url);
        self
    }

    pub fn set_batch_id(&mut self, batch_id: impl Into<String>) {
        self.batch_id = batch_id.into();
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn result(&self) -> Option<&VerificationResult> {
        self.result.as_ref()
    }

    /// Badge for the current result
    pub fn badge(&self) -> Option<BadgeStatus> {
        self.result.as_ref().map(BadgeStatus::from_result)
    }

    /// Submission needs a batch id and no request in flight
    pub fn can_submit(&self) -> bool {
        !self.batch_id.is_empty() && !self.loading
    }

    /// Run the verification for the current batch id
    ///
    /// Clears any previous result and error first. Does nothing when submission is
    /// disabled.
    pub async fn submit(&mut self) {
        if !self.can_submit() {
            debug!("Verify submit ignored");
            return;
        }

        self.loading = true;
        self.error = None;
        self.result = None;

        let batch_id = self.batch_id.trim().to_string();
        match self.api.verify_batch(&batch_id).await {
            Ok(result) => {
                info!("Batch {} verified: {}", batch_id, result.verified);
                self.result = Some(result);
            }
            Err(err) => {
                let message = err.to_string();
                self.error = Some(if message.trim().is_empty() {
                    DEFAULT_VERIFY_ERROR.to_string()
                } else {
                    message
                });
            }
        }

        self.loading = false;
    }

    /// Input card: batch id field, verify button and any error
    pub fn form_card(&self) -> Card {
        let button = Button {
            label: if self.loading { "Verifying..." } else { "Verify" },
            enabled: self.can_submit(),
        };

        let mut card = Card::new("Verify a batch")
            .field(Field::new("Batch ID", self.batch_id.as_str()).hint("Example: VA-2025-0001"))
            .line(button.to_string());
        if let Some(error) = &self.error {
            card.push(format!("Error: {}", error));
        }
        card
    }

    /// Result card
    pub fn result_card(&self) -> Card {
        let mut card = Card::new("Verification Result");

        if self.loading {
            card.push("Checking the registry and hashes...");
            return card;
        }

        let Some(result) = &self.result else {
            card.push("Submit a batch ID to see verification details.");
            return card;
        };

        card.push(BadgeStatus::from_result(result).label());
        card.push(Field::new("Off-chain Hash", truncate_hash(&result.offchain_hash)).to_string());
        card.push(
            Field::new(
                "On-chain Hash",
                result
                    .onchain_hash
                    .as_deref()
                    .map(truncate_hash)
                    .unwrap_or_else(|| "Not published".to_string()),
            )
            .to_string(),
        );
        card.push(
            Field::new(
                "Reason",
                result.mismatch_reason.as_deref().unwrap_or("Hashes match"),
            )
            .to_string(),
        );

        if let Some(tx_hash) = &result.tx_hash {
            let field = Field::new("Transaction", truncate_hash(tx_hash));
            let field = match tx_link(self.explorer_base_url.as_deref(), tx_hash) {
                Some(link) => field.hint(link),
                None => field,
            };
            card.push(field.to_string());
        }

        card
    }
}
