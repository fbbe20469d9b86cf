//! Admin pipeline panels

use crate::api::{Attestation, ExtractionResponse};
use crate::pipeline::{Action, MessageKind, PipelineView};
use crate::ui::card::{Button, Card, Field};
use crate::ui::stepper::render_stepper;

/// Stepper, actions, activity log and the fetched payloads, in display order
pub fn pipeline_cards(view: &PipelineView) -> Vec<Card> {
    let mut cards = vec![stepper_card(view), actions_card(view), activity_card(view)];
    if let Some(extraction) = &view.extraction {
        cards.push(extraction_card(extraction));
    }
    if let Some(attestation) = &view.attestation {
        cards.push(attestation_card(attestation));
    }
    cards
}

fn stepper_card(view: &PipelineView) -> Card {
    let mut card = Card::new("Pipeline Status");
    for line in render_stepper(&view.stepper()) {
        card.push(line);
    }
    card
}

fn actions_card(view: &PipelineView) -> Card {
    let mut card = Card::new("Actions");
    for action in Action::ALL {
        let button = Button {
            label: action.label(),
            enabled: view.is_enabled(action),
        };
        let line = match view.message(action) {
            Some(message) if message.kind == MessageKind::Error => {
                format!("{} error: {}", button, message.text)
            }
            Some(message) => format!("{} {}", button, message.text),
            None => button.to_string(),
        };
        card.push(line);
    }
    card
}

fn activity_card(view: &PipelineView) -> Card {
    let mut card = Card::new("Activity Log");
    if view.activity.is_empty() {
        card.push("No activity yet.");
    }
    for entry in &view.activity {
        card.push(format!("{} [{}] {}", entry.time_label(), entry.kind, entry.message));
    }
    card
}

fn extraction_card(extraction: &ExtractionResponse) -> Card {
    let fields = &extraction.extracted_fields;
    let mut card = Card::new("Extraction")
        .field(Field::new("Lab", fields.lab_name.as_deref().unwrap_or("-")))
        .field(Field::new("Report date", fields.report_date.as_deref().unwrap_or("-")))
        .field(Field::new("Confidence", format!("{:.2}", fields.confidence)))
        .field(
            Field::new("Model", extraction.model_info.model_name.as_str())
                .hint(extraction.model_info.version.as_str()),
        );

    for check in extraction.failed_checks() {
        card.push(format!(
            "FAIL {} {} {} (limit {})",
            check.name.as_deref().unwrap_or("?"),
            check.result.as_deref().unwrap_or("-"),
            check.unit.as_deref().unwrap_or(""),
            check.limit.as_deref().unwrap_or("-"),
        ));
    }
    card
}

fn attestation_card(attestation: &Attestation) -> Card {
    let payload = serde_json::to_string_pretty(attestation).unwrap_or_default();

    Card::new("Attestation Payload")
        .field(Field::new("Hash", attestation.canonical_json_hash.as_str()))
        .line(payload)
}
