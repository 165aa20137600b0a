//! Core data model: the fixed twelve-question checklist and the grade bands.
//!
//! The checklist is static. Question membership in a category never changes,
//! so everything downstream (answer sets, subtotals, CSV columns) can rely on
//! the order of [`CHECKLIST`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four question groups, three questions each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Growth,
    Fundamental,
    Money,
    Chart,
}

impl Category {
    /// All categories in checklist order.
    pub const ALL: [Category; 4] = [
        Category::Growth,
        Category::Fundamental,
        Category::Money,
        Category::Chart,
    ];

    /// Zero-based position in [`Category::ALL`].
    pub fn index(self) -> usize {
        match self {
            Category::Growth => 0,
            Category::Fundamental => 1,
            Category::Money => 2,
            Category::Chart => 3,
        }
    }

    /// Korean label used in the log headers and on screen.
    pub fn label(self) -> &'static str {
        match self {
            Category::Growth => "성장성",
            Category::Fundamental => "실적",
            Category::Money => "수급",
            Category::Chart => "차트",
        }
    }

    /// English name shown next to the Korean label.
    pub fn english(self) -> &'static str {
        match self {
            Category::Growth => "Growth",
            Category::Fundamental => "Fundamental",
            Category::Money => "Money",
            Category::Chart => "Trend",
        }
    }

    /// Questions belonging to this category, in checklist order.
    pub fn questions(self) -> impl Iterator<Item = &'static Question> {
        CHECKLIST.iter().filter(move |q| q.category == self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {} ({})",
            self.index() + 1,
            self.label(),
            self.english()
        )
    }
}

/// A single yes/no checklist question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    /// Stable identifier, e.g. `growth.policy`.
    pub id: &'static str,
    /// Short alias, e.g. `g1`.
    pub alias: &'static str,
    pub category: Category,
    /// Question text as shown to the user.
    pub text: &'static str,
}

/// Number of questions in the checklist.
pub const QUESTION_COUNT: usize = 12;

/// The fixed checklist, grouped by category.
pub static CHECKLIST: [Question; QUESTION_COUNT] = [
    Question {
        id: "growth.policy",
        alias: "g1",
        category: Category::Growth,
        text: "정부 정책의 수혜를 받는가? (P)",
    },
    Question {
        id: "growth.conglomerate",
        alias: "g2",
        category: Category::Growth,
        text: "대기업 투자가 진행 중인가? (C)",
    },
    Question {
        id: "growth.global",
        alias: "g3",
        category: Category::Growth,
        text: "글로벌 확장성이 있는가? (G)",
    },
    Question {
        id: "fundamental.revenue",
        alias: "f1",
        category: Category::Fundamental,
        text: "매출액이 전년 대비 늘었는가?",
    },
    Question {
        id: "fundamental.profit",
        alias: "f2",
        category: Category::Fundamental,
        text: "영업이익이 흑자(턴어라운드)인가?",
    },
    Question {
        id: "fundamental.margin",
        alias: "f3",
        category: Category::Fundamental,
        text: "영업이익률이 10% 이상(개선)인가?",
    },
    Question {
        id: "money.dual_buying",
        alias: "m1",
        category: Category::Money,
        text: "외인/기관 양매수(쌍끌이)인가?",
    },
    Question {
        id: "money.streak",
        alias: "m2",
        category: Category::Money,
        text: "3일 이상 연속 매수 중인가?",
    },
    Question {
        id: "money.retail_selling",
        alias: "m3",
        category: Category::Money,
        text: "개인 투자자는 매도 중인가?",
    },
    Question {
        id: "chart.aligned",
        alias: "c1",
        category: Category::Chart,
        text: "정배열 (주가>20>60) 상태인가?",
    },
    Question {
        id: "chart.breakout",
        alias: "c2",
        category: Category::Chart,
        text: "신고가 혹은 눌림목 구간인가?",
    },
    Question {
        id: "chart.clear_overhead",
        alias: "c3",
        category: Category::Chart,
        text: "위쪽에 악성 매물대가 없는가?",
    },
];

/// Look up a question by id or alias, case-insensitively.
pub fn find(id: &str) -> Option<&'static Question> {
    position(id).map(|i| &CHECKLIST[i])
}

/// Index of a question in [`CHECKLIST`] by id or alias.
pub fn position(id: &str) -> Option<usize> {
    let id = id.trim();
    CHECKLIST
        .iter()
        .position(|q| q.id.eq_ignore_ascii_case(id) || q.alias.eq_ignore_ascii_case(id))
}

/// Qualitative verdict band derived from the numeric score.
///
/// Serialized with the Korean labels the diagnosis log has always used.
/// Labels without the inner space are accepted when reading older rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "강력 매수", alias = "강력매수")]
    StrongBuy,
    #[serde(rename = "매수 고려", alias = "매수고려")]
    ConsiderBuy,
    #[serde(rename = "관망")]
    Watch,
    #[serde(rename = "위험")]
    Risk,
}

impl Grade {
    /// Map a 0..=100 score to its band. Lower bounds are inclusive and the
    /// bands are checked from the top down.
    pub fn from_score(score: u8) -> Self {
        if score >= 90 {
            Grade::StrongBuy
        } else if score >= 70 {
            Grade::ConsiderBuy
        } else if score >= 50 {
            Grade::Watch
        } else {
            Grade::Risk
        }
    }

    /// Korean label, as stored in the log.
    pub fn label(self) -> &'static str {
        match self {
            Grade::StrongBuy => "강력 매수",
            Grade::ConsiderBuy => "매수 고려",
            Grade::Watch => "관망",
            Grade::Risk => "위험",
        }
    }

    /// English name.
    pub fn english(self) -> &'static str {
        match self {
            Grade::StrongBuy => "StrongBuy",
            Grade::ConsiderBuy => "ConsiderBuy",
            Grade::Watch => "Watch",
            Grade::Risk => "Risk",
        }
    }

    /// One-line verdict shown after a diagnosis.
    pub fn verdict(self) -> &'static str {
        match self {
            Grade::StrongBuy => "주도주 탄생 예감! 강력 추천합니다.",
            Grade::ConsiderBuy => "흐름이 양호합니다. 매수를 고려해보세요.",
            Grade::Watch => "조금 더 지켜볼 필요가 있습니다.",
            Grade::Risk => "지금은 매수할 때가 아닙니다.",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s.split_whitespace().collect();
        match compact.to_lowercase().as_str() {
            "강력매수" | "strongbuy" | "strong-buy" => Ok(Grade::StrongBuy),
            "매수고려" | "considerbuy" | "consider-buy" => Ok(Grade::ConsiderBuy),
            "관망" | "watch" => Ok(Grade::Watch),
            "위험" | "risk" => Ok(Grade::Risk),
            _ => Err(format!("unknown grade: {s}")),
        }
    }
}
