//! Text rendering module
//!
//! This module renders views as plain-text cards for the terminal.

pub mod card;
pub mod panels;
pub mod stepper;

pub use card::{Button, Card, Field};
pub use panels::pipeline_cards;
pub use stepper::{render_stepper, StepRow};
