//! Checklist scoring.
//!
//! Every question carries the same weight. The score is the share of "yes"
//! answers scaled to 0..=100 and truncated, so one "yes" is worth 8 points
//! and twelve are worth exactly 100.

use serde::{Deserialize, Serialize};

use crate::answers::AnswerSet;
use crate::model::{Category, Grade, QUESTION_COUNT};

/// Per-category "yes" counts, each 0..=3.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtotals {
    pub growth: u8,
    pub fundamental: u8,
    pub money: u8,
    pub chart: u8,
}

impl Subtotals {
    /// Count for one category.
    pub fn get(&self, category: Category) -> u8 {
        match category {
            Category::Growth => self.growth,
            Category::Fundamental => self.fundamental,
            Category::Money => self.money,
            Category::Chart => self.chart,
        }
    }

    /// Sum over all categories.
    pub fn total(&self) -> u8 {
        self.growth + self.fundamental + self.money + self.chart
    }
}

/// Result of scoring one answer set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    /// 0..=100.
    pub score: u8,
    pub grade: Grade,
    pub yes_count: u8,
    pub subtotals: Subtotals,
}

/// Convert a "yes" count into the 0..=100 score.
pub fn score_for(yes_count: u8) -> u8 {
    let count = u32::from(yes_count).min(QUESTION_COUNT as u32);
    (count * 100 / QUESTION_COUNT as u32) as u8
}

/// Score an answer set. Total over every combination of answers.
pub fn score(answers: &AnswerSet) -> Assessment {
    let yes_count = answers.yes_count();
    let score = score_for(yes_count);

    Assessment {
        score,
        grade: Grade::from_score(score),
        yes_count,
        subtotals: Subtotals {
            growth: answers.category_count(Category::Growth),
            fundamental: answers.category_count(Category::Fundamental),
            money: answers.category_count(Category::Money),
            chart: answers.category_count(Category::Chart),
        },
    }
}
