//! Treatment workflow: status transitions over the record store.

use crate::models::{PatientRecord, Status, TreatmentDetails, TreatmentForm};
use crate::store::RecordStore;
use crate::{ClinicError, ClinicResult};

/// Applies status transitions to records looked up by national code.
///
/// The documented flow is `waiting --begin--> curing --complete--> cured`
/// with `cancel` as the alternative exit from `curing`. Transitions are
/// deliberately unguarded: calling an operation from any state simply
/// applies the assignment, matching the permissive reference behavior.
pub struct TreatmentWorkflow<'a> {
    store: &'a mut RecordStore,
}

impl<'a> TreatmentWorkflow<'a> {
    pub fn new(store: &'a mut RecordStore) -> Self {
        Self { store }
    }

    /// Move a patient into active treatment. Details stay untouched.
    pub fn begin(&mut self, national_code: &str) -> ClinicResult<PatientRecord> {
        let record = self.lookup(national_code)?;
        record.status = Status::Curing;
        record.touch();
        Ok(record.clone())
    }

    /// Close a treatment as successful, attaching the submitted outcome.
    ///
    /// The details replace any prior payload wholesale; this is not a merge.
    pub fn complete(
        &mut self,
        national_code: &str,
        form: &TreatmentForm,
    ) -> ClinicResult<PatientRecord> {
        let details = TreatmentDetails::from_form(form);
        let record = self.lookup(national_code)?;
        record.status = Status::Cured;
        record.treatment_details = Some(details);
        record.touch();
        Ok(record.clone())
    }

    /// Abandon a treatment. Counters are zeroed; only the note is kept.
    pub fn cancel(
        &mut self,
        national_code: &str,
        tozihat: Option<String>,
    ) -> ClinicResult<PatientRecord> {
        let record = self.lookup(national_code)?;
        record.status = Status::Canceled;
        record.treatment_details = Some(TreatmentDetails::canceled(tozihat));
        record.touch();
        Ok(record.clone())
    }

    fn lookup(&mut self, national_code: &str) -> ClinicResult<&mut PatientRecord> {
        if national_code.is_empty() {
            return Err(ClinicError::Validation("national code is required".into()));
        }
        self.store
            .get_mut(national_code)
            .ok_or_else(|| ClinicError::NotFound("patient not found".into()))
    }
}
