//! FMV verification: flag compensation suspiciously far from market rate.

use crate::fmv::{expected_fmv, variance_percent};
use nil_types::{
    AthleteContext, DealInput, DimensionScore, ReasonCode, DIMENSION_WEIGHT_FMV_VERIFICATION,
};

pub fn score(deal: &DealInput, athlete: &AthleteContext) -> DimensionScore {
    let expected = expected_fmv(deal, athlete);
    let variance = variance_percent(deal.compensation, expected);

    let (raw, reasons, recommendations): (i32, Vec<ReasonCode>, Vec<String>) = if variance > 200.0 {
        (
            20,
            vec![ReasonCode::FmvExtremeOverpayment],
            vec![
                "Compensation is more than 3x the expected market rate, a strong pay-for-play indicator. Obtain an independent valuation.".into(),
            ],
        )
    } else if variance > 100.0 {
        (
            50,
            vec![ReasonCode::FmvSignificantOverpayment],
            vec!["Document the business rationale for above-market compensation.".into()],
        )
    } else if variance > 50.0 {
        (
            75,
            vec![ReasonCode::FmvAboveMarket],
            vec!["Keep records supporting the above-market rate.".into()],
        )
    } else if variance < -50.0 {
        (
            80,
            vec![ReasonCode::FmvBelowMarket],
            vec!["This deal may be undervalued; compare against similar athletes before accepting.".into()],
        )
    } else {
        (100, vec![], vec![])
    };

    // Both figures surface in the notes for auditability.
    let notes = format!(
        "Expected FMV ${expected:.2}; compensation ${:.2} is {variance:+.1}% relative to market",
        deal.compensation
    );

    DimensionScore::new(raw, DIMENSION_WEIGHT_FMV_VERIFICATION, reasons, notes, recommendations)
}
