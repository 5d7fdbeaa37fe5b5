//! Clinic-Flow Core Library
//!
//! Patient record management with a linear treatment workflow.
//!
//! # Architecture
//!
//! ```text
//!            create / listAll / findByNationalCode
//!                           │
//!                     ┌─────▼─────┐
//!                     │RecordStore│  owns records + id counter
//!                     └─────┬─────┘
//!                           │
//!                 ┌─────────▼─────────┐
//!                 │ TreatmentWorkflow │  begin / complete / cancel
//!                 └───────────────────┘
//!
//!    waiting --(begin)--> curing --(complete)--> cured
//!                              \----(cancel)---> canceled
//! ```
//!
//! # Modules
//!
//! - [`models`]: Domain types (PatientRecord, Status, TreatmentDetails)
//! - [`store`]: In-memory record store with uniqueness enforcement
//! - [`workflow`]: Status transitions layered over store lookups

pub mod models;
pub mod store;
pub mod workflow;

// Re-export commonly used types
pub use models::{PatientRecord, Status, TreatmentDetails, TreatmentForm};
pub use store::RecordStore;
pub use workflow::TreatmentWorkflow;

use thiserror::Error;

/// Expected, recoverable failures of store and workflow operations.
///
/// All three kinds are client errors handled at the transport boundary;
/// none is ever fatal to the process.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClinicError {
    /// Required input missing or empty
    #[error("{0}")]
    Validation(String),

    /// A uniqueness invariant would be violated
    #[error("{0}")]
    Conflict(String),

    /// No record matches the given national code
    #[error("{0}")]
    NotFound(String),
}

pub type ClinicResult<T> = Result<T, ClinicError>;
