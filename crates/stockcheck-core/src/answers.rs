//! The answer set: one yes/no per checklist question.

use crate::error::DiagnosisError;
use crate::model::{self, Category, Question, CHECKLIST, QUESTION_COUNT};

/// Immutable answers to the full checklist.
///
/// Always complete: a question that was never answered counts as "no".
/// Indexing follows [`CHECKLIST`] order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AnswerSet {
    answers: [bool; QUESTION_COUNT],
}

impl AnswerSet {
    /// Every answer "no".
    pub fn none() -> Self {
        Self::default()
    }

    /// Every answer "yes".
    pub fn all() -> Self {
        Self {
            answers: [true; QUESTION_COUNT],
        }
    }

    /// Build from the ids (or aliases) of the questions answered "yes".
    ///
    /// Repeated ids are harmless. An id outside the checklist is rejected.
    pub fn from_yes_ids<I, S>(ids: I) -> Result<Self, DiagnosisError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut answers = [false; QUESTION_COUNT];
        for id in ids {
            let id = id.as_ref();
            let idx = model::position(id)
                .ok_or_else(|| DiagnosisError::UnknownQuestion(id.to_string()))?;
            answers[idx] = true;
        }
        Ok(Self { answers })
    }

    /// Build from a bitmask where bit `i` answers `CHECKLIST[i]`.
    /// Bits above the twelfth are ignored.
    pub fn from_bits(bits: u16) -> Self {
        let mut answers = [false; QUESTION_COUNT];
        for (i, answer) in answers.iter_mut().enumerate() {
            *answer = bits & (1 << i) != 0;
        }
        Self { answers }
    }

    /// Return a copy with one answer replaced.
    pub fn with(mut self, id: &str, yes: bool) -> Result<Self, DiagnosisError> {
        let idx =
            model::position(id).ok_or_else(|| DiagnosisError::UnknownQuestion(id.to_string()))?;
        self.answers[idx] = yes;
        Ok(self)
    }

    /// Answer to a question, or `None` if the id is unknown.
    pub fn is_yes(&self, id: &str) -> Option<bool> {
        model::position(id).map(|i| self.answers[i])
    }

    /// Number of "yes" answers across the whole checklist.
    pub fn yes_count(&self) -> u8 {
        self.answers.iter().filter(|&&a| a).count() as u8
    }

    /// Number of "yes" answers inside one category.
    pub fn category_count(&self, category: Category) -> u8 {
        self.iter()
            .filter(|(q, yes)| *yes && q.category == category)
            .count() as u8
    }

    /// Questions paired with their answers, in checklist order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static Question, bool)> + '_ {
        CHECKLIST.iter().zip(self.answers.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_and_all() {
        assert_eq!(AnswerSet::none().yes_count(), 0);
        assert_eq!(AnswerSet::all().yes_count(), 12);
        assert_eq!(AnswerSet::all().category_count(Category::Money), 3);
    }

    #[test]
    fn from_yes_ids_accepts_ids_and_aliases() {
        let set = AnswerSet::from_yes_ids(["growth.policy", "G2", "c3", "c3"]).unwrap();
        assert_eq!(set.yes_count(), 3);
        assert_eq!(set.category_count(Category::Growth), 2);
        assert_eq!(set.category_count(Category::Chart), 1);
        assert_eq!(set.is_yes("growth.conglomerate"), Some(true));
        assert_eq!(set.is_yes("money.streak"), Some(false));
        assert_eq!(set.is_yes("nope"), None);
    }

    #[test]
    fn from_yes_ids_rejects_unknown() {
        let err = AnswerSet::from_yes_ids(["g1", "x9"]).unwrap_err();
        assert!(matches!(err, DiagnosisError::UnknownQuestion(id) if id == "x9"));
    }

    #[test]
    fn from_bits_follows_checklist_order() {
        let set = AnswerSet::from_bits(0b1000_0000_0001);
        assert_eq!(set.is_yes("g1"), Some(true));
        assert_eq!(set.is_yes("c3"), Some(true));
        assert_eq!(set.yes_count(), 2);
        assert_eq!(AnswerSet::from_bits(u16::MAX), AnswerSet::all());
    }

    #[test]
    fn with_returns_new_set() {
        let base = AnswerSet::none();
        let updated = base.with("f2", true).unwrap();
        assert_eq!(base.yes_count(), 0);
        assert_eq!(updated.is_yes("fundamental.profit"), Some(true));
        assert!(base.with("zz", true).is_err());
    }
}
