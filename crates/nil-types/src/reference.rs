//! Collaborator record shapes: jurisdiction rules and the prohibited-term
//! catalog. The engine consumes these; fetching and persistence belong to
//! the data-access boundary.

use serde::{Deserialize, Serialize};

/// NIL legality and procedural rules for one state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateRules {
    pub state_code: String,
    pub state_name: String,
    pub hs_nil_allowed: bool,
    pub college_nil_allowed: bool,
    pub requires_contract: bool,
    pub requires_disclosure: bool,
    /// Days the athlete has to disclose the deal, where disclosure is
    /// required.
    pub disclosure_deadline_days: Option<u32>,
    /// Deal types (canonical snake_case) banned outright in this state.
    pub prohibited_deal_types: Vec<String>,
    /// Brand/product categories banned for NIL activity in this state.
    pub prohibited_categories: Vec<String>,
}

impl StateRules {
    /// Hard-coded conservative fallback used whenever a jurisdiction lookup
    /// fails or the state code is unknown: HS NIL disallowed, written
    /// contract and disclosure both required. Favors extra scrutiny over
    /// silently passing a deal.
    pub fn conservative_default() -> Self {
        StateRules {
            state_code: "??".into(),
            state_name: "Unknown jurisdiction".into(),
            hs_nil_allowed: false,
            college_nil_allowed: true,
            requires_contract: true,
            requires_disclosure: true,
            disclosure_deadline_days: Some(5),
            prohibited_deal_types: vec![],
            prohibited_categories: vec![
                "alcohol".into(),
                "tobacco".into(),
                "gambling".into(),
                "cannabis".into(),
                "adult_content".into(),
            ],
        }
    }
}

/// Severity grade for a contract red-flag term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermSeverity {
    Red,
    Orange,
    Yellow,
}

/// One entry in the prohibited-term catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProhibitedTerm {
    pub term: String,
    /// Alternate spellings and phrasings matched alongside the canonical
    /// term.
    pub term_variations: Vec<String>,
    pub category: String,
    pub severity: TermSeverity,
    pub auto_reject: bool,
    pub description: String,
}

impl ProhibitedTerm {
    /// Case-insensitive substring match against the canonical term and
    /// every listed variation. `text_lower` must already be lowercased.
    pub fn matches(&self, text_lower: &str) -> bool {
        if text_lower.contains(&self.term.to_lowercase()) {
            return true;
        }
        self.term_variations
            .iter()
            .any(|v| text_lower.contains(&v.to_lowercase()))
    }
}
