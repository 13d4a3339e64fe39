//! State NIL jurisdiction rules.
//!
//! `StateRulesProvider` is the data-access boundary: production deployments
//! back it with the rules store, while `StaticStateRules` carries a built-in
//! snapshot of state NIL legislation used standalone and as the fallback
//! data set when a lookup fails.

use async_trait::async_trait;
use nil_types::StateRules;
use tracing::warn;

/// Jurisdiction rules lookup. Implementations may do I/O; the engine
/// substitutes `StateRules::conservative_default()` on any failure and
/// keeps scoring.
#[async_trait]
pub trait StateRulesProvider: Send + Sync {
    async fn state_rules(&self, state_code: &str) -> anyhow::Result<StateRules>;
}

/// Built-in snapshot of per-state NIL rules (reviewed February 2026).
///
/// High-school NIL remains prohibited in Massachusetts, Minnesota, and
/// Washington; everywhere else it is permitted with parental-consent and
/// disclosure conditions that vary by state.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticStateRules;

#[async_trait]
impl StateRulesProvider for StaticStateRules {
    async fn state_rules(&self, state_code: &str) -> anyhow::Result<StateRules> {
        Ok(lookup(state_code).unwrap_or_else(|| {
            warn!(state = state_code, "unknown state code, using conservative default rules");
            StateRules::conservative_default()
        }))
    }
}

fn entry(
    code: &str,
    name: &str,
    hs_nil_allowed: bool,
    disclosure_deadline_days: Option<u32>,
    prohibited_categories: &[&str],
) -> StateRules {
    StateRules {
        state_code: code.into(),
        state_name: name.into(),
        hs_nil_allowed,
        college_nil_allowed: true,
        requires_contract: disclosure_deadline_days.is_some(),
        requires_disclosure: disclosure_deadline_days.is_some(),
        disclosure_deadline_days,
        prohibited_deal_types: vec![],
        prohibited_categories: prohibited_categories.iter().map(|c| c.to_string()).collect(),
    }
}

/// Resolve a two-letter code (case-insensitive) against the built-in table.
pub fn lookup(state_code: &str) -> Option<StateRules> {
    let code = state_code.trim().to_uppercase();
    let rules = match code.as_str() {
        "AL" => entry("AL", "Alabama", true, Some(7), &["alcohol", "tobacco", "gambling", "adult_content"]),
        "AK" => entry("AK", "Alaska", true, None, &["alcohol", "tobacco", "cannabis"]),
        "AZ" => entry("AZ", "Arizona", true, Some(7), &["alcohol", "tobacco", "gambling"]),
        "AR" => entry("AR", "Arkansas", true, Some(3), &["alcohol", "tobacco", "gambling"]),
        "CA" => entry("CA", "California", true, Some(30), &["alcohol", "tobacco", "gambling", "firearms"]),
        "CO" => entry("CO", "Colorado", true, Some(7), &["alcohol", "tobacco", "gambling"]),
        "CT" => entry("CT", "Connecticut", true, Some(7), &["alcohol", "tobacco", "gambling"]),
        "FL" => entry("FL", "Florida", true, Some(7), &["alcohol", "tobacco", "gambling", "adult_content"]),
        "GA" => entry("GA", "Georgia", true, Some(7), &["alcohol", "tobacco", "gambling"]),
        "IL" => entry("IL", "Illinois", true, Some(7), &["alcohol", "tobacco", "gambling", "cannabis"]),
        "IN" => entry("IN", "Indiana", true, Some(7), &["alcohol", "tobacco", "gambling"]),
        "LA" => entry("LA", "Louisiana", true, Some(7), &["alcohol", "tobacco", "gambling"]),
        "MA" => entry("MA", "Massachusetts", false, Some(7), &["alcohol", "tobacco", "gambling", "cannabis"]),
        "MI" => entry("MI", "Michigan", true, Some(7), &["alcohol", "tobacco", "gambling"]),
        "MN" => entry("MN", "Minnesota", false, Some(7), &["alcohol", "tobacco", "gambling", "cannabis"]),
        "MO" => entry("MO", "Missouri", true, Some(7), &["alcohol", "tobacco", "gambling"]),
        "NC" => entry("NC", "North Carolina", true, Some(7), &["alcohol", "tobacco", "gambling"]),
        "NJ" => entry("NJ", "New Jersey", true, Some(7), &["alcohol", "tobacco", "gambling", "cannabis"]),
        "NY" => entry("NY", "New York", true, Some(7), &["alcohol", "tobacco", "gambling", "cannabis"]),
        "OH" => entry("OH", "Ohio", true, Some(7), &["alcohol", "tobacco", "gambling", "adult_content"]),
        "OR" => entry("OR", "Oregon", true, None, &["alcohol", "tobacco", "gambling"]),
        "PA" => entry("PA", "Pennsylvania", true, Some(7), &["alcohol", "tobacco", "gambling"]),
        "TN" => entry("TN", "Tennessee", true, Some(7), &["alcohol", "tobacco", "gambling"]),
        "TX" => entry("TX", "Texas", true, Some(7), &["alcohol", "tobacco", "gambling", "firearms", "adult_content"]),
        "VA" => entry("VA", "Virginia", true, Some(7), &["alcohol", "tobacco", "gambling"]),
        "WA" => entry("WA", "Washington", false, Some(7), &["alcohol", "tobacco", "gambling", "cannabis"]),
        "WI" => entry("WI", "Wisconsin", true, Some(7), &["alcohol", "tobacco", "gambling"]),
        _ => return None,
    };
    Some(rules)
}

/// Fetch rules through the provider, degrading to the conservative default
/// instead of surfacing the failure. Never leaves a dimension unscored.
pub async fn rules_or_default(provider: &dyn StateRulesProvider, state_code: &str) -> StateRules {
    match provider.state_rules(state_code).await {
        Ok(rules) => rules,
        Err(err) => {
            warn!(state = state_code, error = %err, "state rules lookup failed, using conservative default");
            StateRules::conservative_default()
        }
    }
}
