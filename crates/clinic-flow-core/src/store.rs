//! In-memory patient record store.

use crate::models::PatientRecord;
use crate::{ClinicError, ClinicResult};

/// Authoritative collection of patient records.
///
/// The store owns the records and the id counter exclusively; callers get
/// clones or read views. Ids start at 1, increase strictly in creation
/// order and are never reused. A failed create consumes no id.
#[derive(Debug)]
pub struct RecordStore {
    records: Vec<PatientRecord>,
    next_id: u64,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Register a new patient.
    ///
    /// All three fields are required. Both `name` and `national_code` must
    /// be unique across the store; the name check runs first, so a record
    /// conflicting on both reports the name.
    pub fn create(
        &mut self,
        name: &str,
        phone: &str,
        national_code: &str,
    ) -> ClinicResult<PatientRecord> {
        if name.is_empty() || phone.is_empty() || national_code.is_empty() {
            return Err(ClinicError::Validation("all fields required".into()));
        }
        if self.records.iter().any(|r| r.name == name) {
            return Err(ClinicError::Conflict("name exists".into()));
        }
        if self.records.iter().any(|r| r.national_code == national_code) {
            return Err(ClinicError::Conflict("national code exists".into()));
        }

        let record = PatientRecord::new(
            self.next_id,
            name.to_string(),
            phone.to_string(),
            national_code.to_string(),
        );
        self.next_id += 1;
        self.records.push(record.clone());
        Ok(record)
    }

    /// All records in creation order.
    pub fn list_all(&self) -> &[PatientRecord] {
        &self.records
    }

    /// Look up a record by national code.
    pub fn find_by_national_code(&self, national_code: &str) -> Option<PatientRecord> {
        self.records
            .iter()
            .find(|r| r.national_code == national_code)
            .cloned()
    }

    /// Mutable lookup for the workflow. Not exposed outside the crate.
    pub(crate) fn get_mut(&mut self, national_code: &str) -> Option<&mut PatientRecord> {
        self.records
            .iter_mut()
            .find(|r| r.national_code == national_code)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
