//! Submission workflow: validate, score, record, persist.

use chrono::NaiveDate;
use tracing::info;

use crate::answers::AnswerSet;
use crate::error::DiagnosisError;
use crate::record::{DiagnosisRecord, Submission};
use crate::scoring::{self, Assessment};
use crate::store::LogStore;

/// Outcome of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnosis {
    pub assessment: Assessment,
    /// The row that was appended to the log.
    pub record: DiagnosisRecord,
}

/// Runs diagnoses against one log.
#[derive(Debug, Clone)]
pub struct Diagnoser {
    store: LogStore,
}

impl Diagnoser {
    pub fn new(store: LogStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &LogStore {
        &self.store
    }

    /// Score `answers` for one stock and append the result to the log.
    ///
    /// An empty stock name fails before anything is scored or written.
    pub fn submit(
        &self,
        stock_name: &str,
        current_price: u64,
        answers: &AnswerSet,
        today: NaiveDate,
    ) -> Result<Diagnosis, DiagnosisError> {
        let submission = Submission::new(stock_name, current_price)?;
        let assessment = scoring::score(answers);
        let record = DiagnosisRecord::from_assessment(today, submission, &assessment);

        self.store.append(&record)?;
        info!(
            stock = %record.stock_name,
            score = assessment.score,
            grade = assessment.grade.english(),
            "diagnosis saved"
        );

        Ok(Diagnosis { assessment, record })
    }
}

/// Today's date in the local time zone.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
