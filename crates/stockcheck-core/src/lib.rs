//! stockcheck-core — checklist scoring and the diagnosis log.
//!
//! This crate defines the twelve-question checklist, scores answer sets into
//! a 0–100 score and grade, and stores every diagnosis in a local CSV log.

pub mod answers;
pub mod config;
pub mod diagnose;
pub mod error;
pub mod model;
pub mod record;
pub mod scoring;
pub mod store;

pub use answers::AnswerSet;
pub use diagnose::{Diagnoser, Diagnosis};
pub use error::{DiagnosisError, StoreError};
pub use model::{Category, Grade, Question, CHECKLIST};
pub use record::{DiagnosisRecord, Submission};
pub use scoring::{score, Assessment, Subtotals};
pub use store::{LogState, LogStore};
