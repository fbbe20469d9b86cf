//! Verification module
//!
//! Public hash comparison for a batch: submits a batch id to the backend's verify
//! endpoint and renders the result with a badge.

pub mod badge;
pub mod view;

pub use badge::BadgeStatus;
pub use view::{truncate_hash, tx_link, VerifyView, DEFAULT_VERIFY_ERROR};
