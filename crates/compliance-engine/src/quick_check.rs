//! Cheap synchronous risk pre-check.
//!
//! A fast gate for early UX feedback before the full engine runs. Never a
//! substitute for the full score in a final compliance decision.

use nil_types::{ComplianceStatus, ConsentStatus, PaymentSource, QuickCheckInput, QuickRiskResult};

pub fn quick_risk_check(input: &QuickCheckInput) -> QuickRiskResult {
    let mut score: i32 = 100;
    let mut quick_issues = Vec::new();

    if input.payment_source == PaymentSource::Booster {
        score -= 40;
        quick_issues.push("Payment comes from a booster, a primary pay-for-play indicator.".into());
    }

    if input.performance_tied {
        score -= 30;
        quick_issues.push("Compensation is tied to athletic performance.".into());
    }

    if input.enrollment_tied {
        score -= 50;
        quick_issues.push("Compensation is tied to enrollment or commitment to a school.".into());
    }

    if !input.has_contract {
        score -= 15;
        quick_issues.push("No written contract is on file for this deal.".into());
    }

    if input.is_minor && input.consent_status != Some(ConsentStatus::Approved) {
        score -= 25;
        quick_issues.push("Athlete is a minor without approved guardian consent.".into());
    }

    // Same tier thresholds as the full engine, for consistency.
    let risk_tier = ComplianceStatus::from_score(score.clamp(0, 100) as u8);

    QuickRiskResult { risk_tier, quick_issues }
}
