//! Prohibited contract-term catalog.

use async_trait::async_trait;
use nil_types::{ProhibitedTerm, TermSeverity};
use tracing::warn;

/// Contract red-flag term source. Backed by the managed term list in
/// production; `builtin_terms()` takes over when the catalog is
/// unreachable.
#[async_trait]
pub trait ProhibitedTermCatalog: Send + Sync {
    async fn prohibited_terms(&self) -> anyhow::Result<Vec<ProhibitedTerm>>;
}

/// Catalog implementation serving the built-in default set.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinTermCatalog;

#[async_trait]
impl ProhibitedTermCatalog for BuiltinTermCatalog {
    async fn prohibited_terms(&self) -> anyhow::Result<Vec<ProhibitedTerm>> {
        Ok(builtin_terms())
    }
}

fn term(
    term: &str,
    variations: &[&str],
    category: &str,
    severity: TermSeverity,
    auto_reject: bool,
    description: &str,
) -> ProhibitedTerm {
    ProhibitedTerm {
        term: term.into(),
        term_variations: variations.iter().map(|v| v.to_string()).collect(),
        category: category.into(),
        severity,
        auto_reject,
        description: description.into(),
    }
}

/// Minimal fallback term set. Covers the structures that make an NIL deal
/// unsalvageable: enrollment inducements, perpetual rights grabs, and
/// performance-contingent pay.
pub fn builtin_terms() -> Vec<ProhibitedTerm> {
    vec![
        term(
            "signing bonus",
            &["enrollment bonus", "commitment bonus", "bonus upon enrollment", "bonus for signing"],
            "enrollment_inducement",
            TermSeverity::Red,
            true,
            "Compensation tied to enrolling or committing to a school is an impermissible recruiting inducement.",
        ),
        term(
            "in perpetuity",
            &["perpetual rights", "perpetual license", "forever", "indefinitely", "irrevocable rights"],
            "perpetual_rights",
            TermSeverity::Red,
            true,
            "Perpetual or indefinite rights grants mean the athlete can never regain control of their NIL.",
        ),
        term(
            "performance bonus",
            &["per touchdown", "per goal", "per win", "win bonus", "bonus per victory", "playing time"],
            "performance_pay",
            TermSeverity::Red,
            true,
            "Compensation contingent on athletic performance is pay-for-play, not third-party NIL.",
        ),
    ]
}

/// Fetch the catalog, substituting the built-in set on failure.
pub async fn terms_or_builtin(catalog: &dyn ProhibitedTermCatalog) -> Vec<ProhibitedTerm> {
    match catalog.prohibited_terms().await {
        Ok(terms) => terms,
        Err(err) => {
            warn!(error = %err, "prohibited-term catalog unavailable, using built-in defaults");
            builtin_terms()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingCatalog;

    #[async_trait]
    impl ProhibitedTermCatalog for FailingCatalog {
        async fn prohibited_terms(&self) -> anyhow::Result<Vec<ProhibitedTerm>> {
            anyhow::bail!("catalog query timed out")
        }
    }

    #[test]
    fn test_builtin_terms_are_all_red_auto_reject() {
        for t in builtin_terms() {
            assert_eq!(t.severity, TermSeverity::Red, "{}", t.term);
            assert!(t.auto_reject, "{}", t.term);
        }
    }

    #[test]
    fn test_builtin_terms_catch_win_bonus_language() {
        let terms = builtin_terms();
        let text = "athlete receives a $500 win bonus per victory";
        assert!(terms.iter().any(|t| t.matches(text)));
    }

    #[tokio::test]
    async fn test_catalog_failure_falls_back_to_builtin() {
        let terms = terms_or_builtin(&FailingCatalog).await;
        assert_eq!(terms, builtin_terms());
    }
}
