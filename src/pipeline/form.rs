//! Batch form fields
//!
//! Holds what the operator typed; [`BatchForm::to_payload`] turns it into the create
//! request.

use crate::api::BatchCreate;

/// Create-batch form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchForm {
    pub batch_id: String,
    pub product_name: String,
    pub supplement_type: String,
    pub manufacturer: String,
    pub production_date: String,
    /// Optional; blank means no expiry date
    pub expires_date: String,
}

impl BatchForm {
    /// Batch id without surrounding whitespace
    pub fn trimmed_batch_id(&self) -> &str {
        self.batch_id.trim()
    }

    /// Whether a batch id is present
    pub fn has_batch_id(&self) -> bool {
        !self.trimmed_batch_id().is_empty()
    }

    /// Whether every required batch field is non-blank
    pub fn has_required_fields(&self) -> bool {
        [
            &self.product_name,
            &self.supplement_type,
            &self.manufacturer,
            &self.production_date,
        ]
        .iter()
        .all(|field| !field.trim().is_empty())
    }

    /// Create-batch payload
    ///
    /// The batch id is trimmed; a blank expiry date is sent as `null`.
    pub fn to_payload(&self) -> BatchCreate {
        let expires_date = if self.expires_date.trim().is_empty() {
            None
        } else {
            Some(self.expires_date.clone())
        };

        BatchCreate {
            batch_id: self.trimmed_batch_id().to_string(),
            product_name: self.product_name.clone(),
            supplement_type: self.supplement_type.clone(),
            manufacturer: self.manufacturer.clone(),
            production_date: self.production_date.clone(),
            expires_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> BatchForm {
        BatchForm {
            batch_id: "  VA-2025-0001 ".to_string(),
            product_name: "Vitamin A".to_string(),
            supplement_type: "capsule".to_string(),
            manufacturer: "Acme Labs".to_string(),
            production_date: "2025-01-15".to_string(),
            expires_date: String::new(),
        }
    }

    #[test]
    fn test_payload_trims_batch_id_and_nulls_expiry() {
        let payload = filled().to_payload();
        assert_eq!(payload.batch_id, "VA-2025-0001");
        assert_eq!(payload.expires_date, None);
    }

    #[test]
    fn test_payload_keeps_expiry() {
        let mut form = filled();
        form.expires_date = "2027-01-15".to_string();
        assert_eq!(form.to_payload().expires_date.as_deref(), Some("2027-01-15"));
    }

    #[test]
    fn test_blank_field_is_missing() {
        let mut form = filled();
        assert!(form.has_required_fields());

        form.manufacturer = "   ".to_string();
        assert!(!form.has_required_fields());
    }

    #[test]
    fn test_expiry_is_not_required() {
        let form = filled();
        assert!(form.expires_date.is_empty());
        assert!(form.has_required_fields());
        assert!(form.has_batch_id());
    }
}
