//! Fair-market-value estimation heuristics.
//!
//! Two distinct consumers: the automatic FMV-verification scorer compares
//! compensation against `expected_fmv`, and reviewers get the separate
//! non-blocking `advisory_check` for human context.

use nil_types::{AthleteContext, DealInput, DealType, FmvAdvisory, FmvAdvisorySeverity};

/// Per-sport market multipliers, keyed by lower-cased sport name.
/// Unlisted sports use `DEFAULT_SPORT_MULTIPLIER`.
pub const SPORT_MULTIPLIERS: &[(&str, f64)] = &[
    ("football", 1.3),
    ("basketball", 1.3),
    ("baseball", 1.1),
    ("softball", 1.0),
    ("soccer", 1.0),
    ("volleyball", 0.9),
    ("track", 0.9),
];

pub const DEFAULT_SPORT_MULTIPLIER: f64 = 0.8;

/// Floor on any FMV estimate, in dollars. A small audience still commands
/// a nominal market rate.
pub const FMV_FLOOR: f64 = 100.0;

fn sport_multiplier(sport: &str) -> f64 {
    let sport = sport.trim().to_lowercase();
    SPORT_MULTIPLIERS
        .iter()
        .find(|(name, _)| *name == sport)
        .map(|(_, m)| *m)
        .unwrap_or(DEFAULT_SPORT_MULTIPLIER)
}

fn deal_type_multiplier(deal_type: DealType) -> f64 {
    match deal_type {
        DealType::SocialPost => 1.0,
        DealType::Appearance => 2.5,
        DealType::Endorsement => 3.0,
        DealType::BrandAmbassador => 5.0,
        DealType::Merchandise => 2.0,
        DealType::Other => 1.5,
    }
}

fn engagement_multiplier(engagement_rate: f64) -> f64 {
    if engagement_rate > 5.0 {
        1.5
    } else if engagement_rate > 3.0 {
        1.2
    } else {
        1.0
    }
}

/// Expected fair-market deal value from social reach, engagement, deal
/// type, and sport.
pub fn expected_fmv(deal: &DealInput, athlete: &AthleteContext) -> f64 {
    let base = athlete.followers as f64 * 0.01;
    let estimate = base
        * engagement_multiplier(athlete.engagement_rate)
        * deal_type_multiplier(deal.deal_type)
        * sport_multiplier(&athlete.sport);
    estimate.max(FMV_FLOOR)
}

/// Compensation variance relative to the expected FMV, in percent.
pub fn variance_percent(compensation: f64, expected: f64) -> f64 {
    (compensation - expected) / expected * 100.0
}

/// Independent reviewer-facing FMV comparison. Ratio bands grade how far
/// the deal amount sits from the independent estimate; the result is
/// advisory context and never blocks a deal.
pub fn advisory_check(deal_amount: f64, estimated_fmv: f64) -> FmvAdvisory {
    let ratio = if estimated_fmv > 0.0 {
        deal_amount / estimated_fmv
    } else {
        0.0
    };

    let (severity, score_impact, flag) = if ratio > 5.0 {
        (
            FmvAdvisorySeverity::High,
            20,
            Some("Deal value is more than 5x the estimated fair market value".to_string()),
        )
    } else if ratio > 2.5 {
        (
            FmvAdvisorySeverity::Medium,
            10,
            Some("Deal value is more than 2.5x the estimated fair market value".to_string()),
        )
    } else if ratio > 1.5 {
        (
            FmvAdvisorySeverity::Low,
            5,
            Some("Deal value is above the estimated fair market value".to_string()),
        )
    } else if ratio < 0.3 && ratio > 0.0 {
        (
            FmvAdvisorySeverity::Low,
            5,
            Some("Deal value is well below the estimated fair market value; the athlete may be undervaluing themselves".to_string()),
        )
    } else {
        (FmvAdvisorySeverity::None, 0, None)
    };

    FmvAdvisory {
        estimated_fmv,
        actual_amount: deal_amount,
        ratio,
        severity,
        score_impact,
        flag,
        is_blocking: false,
    }
}
