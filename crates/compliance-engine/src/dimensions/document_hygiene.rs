//! Document hygiene: is there a clean, well-specified written agreement
//! free of predatory or prohibited clauses?

use crate::terms::{terms_or_builtin, ProhibitedTermCatalog};
use nil_types::{
    DealInput, DimensionScore, ProhibitedTerm, ReasonCode, TermSeverity,
    DIMENSION_WEIGHT_DOCUMENT_HYGIENE,
};

/// Deliverables shorter than this are treated as having no concrete,
/// auditable obligations.
const MIN_DELIVERABLES_LEN: usize = 20;

pub async fn score(deal: &DealInput, catalog: &dyn ProhibitedTermCatalog) -> DimensionScore {
    let terms = terms_or_builtin(catalog).await;
    evaluate(deal, &terms)
}

pub fn evaluate(deal: &DealInput, terms: &[ProhibitedTerm]) -> DimensionScore {
    let mut score: i32 = 100;
    let mut reasons = Vec::new();
    let mut recommendations = Vec::new();
    let mut matched_terms = 0usize;

    if !deal.has_contract() {
        score -= 30;
        reasons.push(ReasonCode::NoContractProvided);
        recommendations
            .push("Get the agreement in writing before any work or payment occurs.".into());
    }

    if let Some(text) = deal.contract_text.as_deref() {
        let text_lower = text.to_lowercase();
        for term in terms {
            if !term.matches(&text_lower) {
                continue;
            }
            matched_terms += 1;
            match term.severity {
                TermSeverity::Red => {
                    score -= 30;
                    reasons.push(ReasonCode::ProhibitedTerm(term.category.clone()));
                    recommendations.push(format!(
                        "Remove the '{}' clause: {}",
                        term.term, term.description
                    ));
                }
                TermSeverity::Orange => {
                    score -= 15;
                    reasons.push(ReasonCode::ConcerningTerm(term.category.clone()));
                    recommendations.push(format!(
                        "Review the '{}' clause with an advisor before signing.",
                        term.term
                    ));
                }
                TermSeverity::Yellow => {
                    score -= 5;
                    reasons.push(ReasonCode::CautionTerm(term.category.clone()));
                    recommendations
                        .push(format!("Make sure you understand the '{}' clause.", term.term));
                }
            }
        }
    }

    if deal.deliverables.trim().len() < MIN_DELIVERABLES_LEN {
        score -= 20;
        reasons.push(ReasonCode::VagueDeliverables);
        recommendations.push(
            "Specify concrete deliverables (number of posts, appearance dates, content requirements).".into(),
        );
    }

    if deal.start_date.is_none() || deal.end_date.is_none() {
        score -= 10;
        reasons.push(ReasonCode::NoDurationSpecified);
        recommendations.push("Add explicit start and end dates to the agreement.".into());
    }

    let notes = if matched_terms > 0 {
        format!("{matched_terms} flagged contract term(s) found")
    } else if reasons.is_empty() {
        "Agreement documentation is complete".to_string()
    } else {
        "Documentation gaps detected".to_string()
    };

    DimensionScore::new(score, DIMENSION_WEIGHT_DOCUMENT_HYGIENE, reasons, notes, recommendations)
}
