//! Tax readiness: is the athlete prepared for the tax consequences of the
//! deal?

use nil_types::{
    AthleteContext, DealInput, DimensionScore, ReasonCode, DIMENSION_WEIGHT_TAX_READINESS,
};

/// US 1099 reporting threshold in dollars.
const FORM_1099_THRESHOLD: f64 = 600.0;

/// Deals at or above this size get the quarterly-estimated-tax reminder.
const QUARTERLY_REMINDER_THRESHOLD: f64 = 1000.0;

/// Flat self-employment tax proxy applied to every deal.
const ESTIMATED_TAX_RATE: f64 = 0.25;

pub fn score(deal: &DealInput, athlete: &AthleteContext) -> DimensionScore {
    let mut score: i32 = 100;
    let mut reasons = Vec::new();
    let mut recommendations = Vec::new();

    if !athlete.has_acknowledged_tax_obligations {
        score -= 40;
        reasons.push(ReasonCode::TaxObligationsNotAcknowledged);
        recommendations.push(
            "Review and acknowledge your NIL tax obligations; this income is self-employment income.".into(),
        );
    }

    if deal.compensation >= FORM_1099_THRESHOLD {
        reasons.push(ReasonCode::W9Required);
        recommendations.push(
            "Expect a 1099 for this deal; provide a W-9 to the payer and retain payment records.".into(),
        );
    }

    let estimated_tax = deal.compensation * ESTIMATED_TAX_RATE;
    recommendations.push(format!(
        "Set aside approximately ${estimated_tax:.2} (25%) of this deal for taxes."
    ));

    if deal.compensation >= QUARTERLY_REMINDER_THRESHOLD {
        reasons.push(ReasonCode::QuarterlyTaxReminder);
        recommendations.push(
            "At this income level, quarterly estimated tax payments may be required.".into(),
        );
    }

    let notes = format!(
        "Estimated tax on ${:.2} compensation: ${estimated_tax:.2}",
        deal.compensation
    );

    DimensionScore::new(score, DIMENSION_WEIGHT_TAX_READINESS, reasons, notes, recommendations)
}
