//! Patient record model.

use serde::{Deserialize, Serialize};

use super::TreatmentDetails;

/// Where a patient sits in the treatment workflow.
///
/// Transitions are one-directional: `Waiting → Curing → Cured` or
/// `Curing → Canceled`. The workflow does not guard against re-entering
/// or skipping states; see [`crate::workflow::TreatmentWorkflow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Registered, treatment not started
    Waiting,
    /// Treatment in progress
    Curing,
    /// Treatment finished successfully
    Cured,
    /// Treatment abandoned
    Canceled,
}

/// A patient record tracked through the treatment workflow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    /// Sequential id, assigned by the store, never reused
    pub id: u64,
    /// Patient name, unique across all records
    pub name: String,
    /// Contact phone number
    pub phone: String,
    /// Government ID; the lookup key for all mutations, unique across all records
    pub national_code: String,
    /// Current workflow status
    pub status: Status,
    /// Outcome payload; present only once the record is cured or canceled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treatment_details: Option<TreatmentDetails>,
    /// Creation timestamp
    pub created_at: String,
    /// Last update timestamp
    pub updated_at: String,
}

impl PatientRecord {
    /// Create a new record in the `Waiting` state.
    pub fn new(id: u64, name: String, phone: String, national_code: String) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id,
            name,
            phone,
            national_code,
            status: Status::Waiting,
            treatment_details: None,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Check whether the record has left active treatment.
    pub fn is_closed(&self) -> bool {
        matches!(self.status, Status::Cured | Status::Canceled)
    }

    /// Touch the updated_at timestamp.
    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now().to_rfc3339();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record() {
        let record = PatientRecord::new(1, "Alice".into(), "555-0100".into(), "A1".into());
        assert_eq!(record.id, 1);
        assert_eq!(record.status, Status::Waiting);
        assert!(record.treatment_details.is_none());
        assert!(!record.is_closed());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Status::Waiting).unwrap(), "\"waiting\"");
        assert_eq!(serde_json::to_string(&Status::Canceled).unwrap(), "\"canceled\"");
    }

    #[test]
    fn test_record_json_shape() {
        let record = PatientRecord::new(1, "Alice".into(), "555-0100".into(), "A1".into());
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["nationalCode"], "A1");
        assert_eq!(json["status"], "waiting");
        // Details are omitted entirely while the record is open
        assert!(json.get("treatmentDetails").is_none());
    }
}
