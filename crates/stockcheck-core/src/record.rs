//! Diagnosis records: one row of the diagnosis log.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::answers::AnswerSet;
use crate::error::DiagnosisError;
use crate::model::Grade;
use crate::scoring::{self, Assessment, Subtotals};

/// Validated user input for one diagnosis, apart from the answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    stock_name: String,
    current_price: u64,
}

impl Submission {
    /// Validate the stock name. Surrounding whitespace is trimmed and an
    /// empty result is rejected.
    pub fn new(stock_name: &str, current_price: u64) -> Result<Self, DiagnosisError> {
        let stock_name = stock_name.trim();
        if stock_name.is_empty() {
            return Err(DiagnosisError::EmptyStockName);
        }
        Ok(Self {
            stock_name: stock_name.to_string(),
            current_price,
        })
    }

    pub fn stock_name(&self) -> &str {
        &self.stock_name
    }

    pub fn current_price(&self) -> u64 {
        self.current_price
    }
}

/// One stored diagnosis.
///
/// Field order is the column order of the log file. Score, grade and the
/// subtotals always come from [`scoring::score`]; use [`DiagnosisRecord::new`]
/// rather than filling them in by hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisRecord {
    #[serde(rename = "진단일")]
    pub diagnosis_date: NaiveDate,
    #[serde(rename = "종목명")]
    pub stock_name: String,
    #[serde(rename = "현재가", default)]
    pub current_price: u64,
    #[serde(rename = "점수")]
    pub score: u8,
    #[serde(rename = "등급")]
    pub grade: Grade,
    #[serde(rename = "상세_성장성")]
    pub subtotal_growth: u8,
    #[serde(rename = "상세_실적")]
    pub subtotal_fundamental: u8,
    #[serde(rename = "상세_수급")]
    pub subtotal_money: u8,
    #[serde(rename = "상세_차트")]
    pub subtotal_chart: u8,
}

impl DiagnosisRecord {
    /// Score the answers and build the record for `date`.
    pub fn new(date: NaiveDate, submission: Submission, answers: &AnswerSet) -> Self {
        let assessment = scoring::score(answers);
        Self::from_assessment(date, submission, &assessment)
    }

    /// Build the record from an assessment that was already computed.
    pub fn from_assessment(
        date: NaiveDate,
        submission: Submission,
        assessment: &Assessment,
    ) -> Self {
        Self {
            diagnosis_date: date,
            stock_name: submission.stock_name,
            current_price: submission.current_price,
            score: assessment.score,
            grade: assessment.grade,
            subtotal_growth: assessment.subtotals.growth,
            subtotal_fundamental: assessment.subtotals.fundamental,
            subtotal_money: assessment.subtotals.money,
            subtotal_chart: assessment.subtotals.chart,
        }
    }

    /// The per-category counts as one value.
    pub fn subtotals(&self) -> Subtotals {
        Subtotals {
            growth: self.subtotal_growth,
            fundamental: self.subtotal_fundamental,
            money: self.subtotal_money,
            chart: self.subtotal_chart,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 17).unwrap()
    }

    #[test]
    fn empty_name_is_rejected() {
        assert!(matches!(
            Submission::new("", 0),
            Err(DiagnosisError::EmptyStockName)
        ));
        assert!(matches!(
            Submission::new("   \t", 1000),
            Err(DiagnosisError::EmptyStockName)
        ));
    }

    #[test]
    fn name_is_trimmed() {
        let s = Submission::new("  삼성전자 ", 71_000).unwrap();
        assert_eq!(s.stock_name(), "삼성전자");
        assert_eq!(s.current_price(), 71_000);
    }

    #[test]
    fn record_derives_from_answers() {
        let answers = AnswerSet::from_yes_ids(["g1", "f1", "f2", "m1"]).unwrap();
        let submission = Submission::new("TestCo", 1000).unwrap();
        let record = DiagnosisRecord::new(date(), submission, &answers);
        assert_eq!(record.diagnosis_date, date());
        assert_eq!(record.stock_name, "TestCo");
        assert_eq!(record.current_price, 1000);
        assert_eq!(record.score, 33);
        assert_eq!(record.grade, Grade::Risk);
        assert_eq!(record.subtotal_growth, 1);
        assert_eq!(record.subtotal_fundamental, 2);
        assert_eq!(record.subtotal_money, 1);
        assert_eq!(record.subtotal_chart, 0);
        assert_eq!(record.subtotals().total(), 4);
    }

    #[test]
    fn record_json_uses_log_column_names() {
        let record = DiagnosisRecord::new(
            date(),
            Submission::new("TestCo", 0).unwrap(),
            &AnswerSet::all(),
        );
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.starts_with("{\"진단일\":\"2024-05-17\",\"종목명\":\"TestCo\""));
        assert!(json.contains("\"등급\":\"강력 매수\""));
    }
}
