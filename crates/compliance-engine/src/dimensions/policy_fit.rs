//! Policy fit: NCAA-style rules, state law, and pay-for-play structuring.

use crate::jurisdiction::{rules_or_default, StateRulesProvider};
use nil_types::{
    AthleteContext, AthleteRole, DealInput, DimensionScore, ReasonCode, StateRules,
    DIMENSION_WEIGHT_POLICY_FIT,
};

/// Performance-based compensation caps the dimension at this score. The cap
/// dominates every other deduction but never raises a lower score.
const PERFORMANCE_BASED_CAP: i32 = 20;

pub async fn score(
    deal: &DealInput,
    athlete: &AthleteContext,
    provider: &dyn StateRulesProvider,
) -> DimensionScore {
    let rules = rules_or_default(provider, &athlete.state).await;
    evaluate(deal, athlete, &rules)
}

/// Pure deduction sequence over already-fetched jurisdiction rules.
pub fn evaluate(deal: &DealInput, athlete: &AthleteContext, rules: &StateRules) -> DimensionScore {
    let mut score: i32 = 100;
    let mut reasons = Vec::new();
    let mut recommendations = Vec::new();

    // A state-level HS ban ends this dimension outright; the other
    // dimensions still evaluate.
    if athlete.role == AthleteRole::HsStudent && !rules.hs_nil_allowed {
        return DimensionScore::new(
            0,
            DIMENSION_WEIGHT_POLICY_FIT,
            vec![ReasonCode::StateHsNilProhibited],
            format!(
                "{} does not permit NIL activity for high school athletes",
                rules.state_name
            ),
            vec![format!(
                "Do not proceed: high school NIL deals are prohibited in {}.",
                rules.state_name
            )],
        );
    }

    if rules
        .prohibited_deal_types
        .iter()
        .any(|t| t == deal.deal_type.as_str())
    {
        score -= 50;
        reasons.push(ReasonCode::DealTypeProhibitedInState);
        recommendations.push(format!(
            "Deals of type '{}' are prohibited in {}. Restructure the deal or consult your compliance office.",
            deal.deal_type.as_str(),
            rules.state_name
        ));
    }

    if deal.is_school_affiliated {
        score -= 40;
        reasons.push(ReasonCode::SchoolAffiliatedDeal);
        recommendations.push(
            "School-affiliated deals receive heightened scrutiny. Confirm the school is not directing compensation.".into(),
        );
    }

    if deal.is_booster_connected {
        score -= 50;
        reasons.push(ReasonCode::BoosterConnected);
        recommendations.push(
            "Booster-connected compensation is a primary pay-for-play indicator. Obtain compliance office sign-off before proceeding.".into(),
        );
    }

    if deal.performance_based {
        score = score.min(PERFORMANCE_BASED_CAP);
        reasons.push(ReasonCode::PerformanceBasedCompensation);
        recommendations.push(
            "Remove compensation terms tied to athletic performance; pay must reflect NIL value, not results on the field.".into(),
        );
    }

    if athlete.role == AthleteRole::CollegeAthlete {
        let days = rules.disclosure_deadline_days.unwrap_or(5);
        reasons.push(ReasonCode::NcaaReportingRequired);
        recommendations.push(format!(
            "Report this deal to your athletic department within {days} business days."
        ));
    }

    let notes = if score >= 100 {
        "No policy conflicts detected".to_string()
    } else {
        format!("Policy deductions applied; raw score {score}")
    };

    DimensionScore::new(score, DIMENSION_WEIGHT_POLICY_FIT, reasons, notes, recommendations)
}
