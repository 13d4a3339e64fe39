//! NIL deal compliance scoring engine.
//!
//! Takes a proposed deal plus athlete context and produces a weighted,
//! explainable compliance score: six independently-evaluated dimensions,
//! a 0-100 total, a traffic-light verdict, stable reason codes, and
//! prioritized remediation guidance. Collaborator lookups (jurisdiction
//! rules, prohibited-term catalog) degrade to conservative built-in
//! defaults so a scoring call always completes.

pub mod ai_adapter;
pub mod analysis;
pub mod dimensions;
pub mod fmv;
pub mod jurisdiction;
pub mod quick_check;
pub mod terms;

use std::sync::Arc;

use chrono::Utc;
use nil_types::{
    AiAnalysisResult, AthleteContext, ComplianceResult, ComplianceStatus, DealInput,
    DimensionScores, PayForPlayRisk, ReasonCode, ValidationError,
};
use thiserror::Error;
use tracing::{debug, info};

use crate::analysis::{ContractAnalyzer, PatternContractAnalyzer};
use crate::jurisdiction::{StateRulesProvider, StaticStateRules};
use crate::terms::{BuiltinTermCatalog, ProhibitedTermCatalog};

/// Recommendation lists are truncated after deduplication.
const MAX_RECOMMENDATIONS: usize = 5;

/// Caller-contract violations are the only errors a scoring call can
/// return. Collaborator failures and incomplete deal data are scoring
/// signals, not errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("invalid scoring input: {0}")]
    InvalidInput(#[from] ValidationError),
}

/// Engine entry point. Holds the data collaborators; scoring calls are
/// stateless and share nothing beyond these immutable handles.
pub struct ComplianceEngine {
    state_rules: Arc<dyn StateRulesProvider>,
    term_catalog: Arc<dyn ProhibitedTermCatalog>,
    contract_analyzer: Arc<dyn ContractAnalyzer>,
}

impl ComplianceEngine {
    /// Engine backed by the built-in 2026 state rule table, term catalog,
    /// and pattern-based contract analyzer.
    pub fn new() -> Self {
        Self {
            state_rules: Arc::new(StaticStateRules),
            term_catalog: Arc::new(BuiltinTermCatalog),
            contract_analyzer: Arc::new(PatternContractAnalyzer),
        }
    }

    /// Engine with caller-supplied collaborators, e.g. database-backed
    /// rule providers.
    pub fn with_collaborators(
        state_rules: Arc<dyn StateRulesProvider>,
        term_catalog: Arc<dyn ProhibitedTermCatalog>,
        contract_analyzer: Arc<dyn ContractAnalyzer>,
    ) -> Self {
        Self { state_rules, term_catalog, contract_analyzer }
    }

    /// Score a deal across all six dimensions and aggregate.
    ///
    /// Returns `Err` only for caller-contract violations (negative
    /// compensation, empty athlete id). Everything else, including
    /// collaborator failures, yields a complete result.
    pub async fn calculate_compliance_score(
        &self,
        deal: &DealInput,
        athlete: &AthleteContext,
    ) -> Result<ComplianceResult, EngineError> {
        deal.validate()?;
        athlete.validate()?;

        debug!(
            athlete = %athlete.id,
            state = %deal.state,
            deal_type = deal.deal_type.as_str(),
            "scoring NIL deal"
        );

        // The two collaborator-backed scorers fan out together; the rest
        // are pure and run inline.
        let (policy_fit, document_hygiene) = tokio::join!(
            dimensions::policy_fit::score(deal, athlete, self.state_rules.as_ref()),
            dimensions::document_hygiene::score(deal, self.term_catalog.as_ref()),
        );

        let scores = DimensionScores {
            policy_fit,
            document_hygiene,
            fmv_verification: dimensions::fmv_verification::score(deal, athlete),
            tax_readiness: dimensions::tax_readiness::score(deal, athlete),
            brand_safety: dimensions::brand_safety::score(deal),
            guardian_consent: dimensions::guardian_consent::score(athlete),
        };

        let result = aggregate(deal, athlete, scores);
        info!(
            athlete = %athlete.id,
            total = result.total_score,
            status = ?result.status,
            risk = ?result.pay_for_play_risk,
            "NIL deal scored"
        );
        Ok(result)
    }

    /// Run contract-text analysis with the engine's analyzer. Advisory;
    /// never fails.
    pub fn analyze_contract(&self, contract_text: Option<&str>) -> AiAnalysisResult {
        ai_adapter::run_contract_analysis(self.contract_analyzer.as_ref(), contract_text)
    }
}

impl Default for ComplianceEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Fold six dimension scores into the final result. Pure given its
/// inputs, apart from the timestamp.
fn aggregate(
    deal: &DealInput,
    athlete: &AthleteContext,
    dimensions: DimensionScores,
) -> ComplianceResult {
    let weighted_sum: f64 = dimensions.in_order().iter().map(|d| d.weighted_score).sum();
    let total_score = weighted_sum.round().clamp(0.0, 100.0) as u8;
    let status = ComplianceStatus::from_score(total_score);

    let overall_reason_codes: Vec<ReasonCode> = dimensions
        .in_order()
        .iter()
        .flat_map(|d| d.reason_codes.iter().cloned())
        .collect();

    // Priority ladder, first matching branch wins.
    let pay_for_play_risk = if deal.is_booster_connected
        || deal.performance_based
        || deal.is_school_affiliated
        || overall_reason_codes.contains(&ReasonCode::FmvExtremeOverpayment)
    {
        PayForPlayRisk::High
    } else if overall_reason_codes.contains(&ReasonCode::FmvSignificantOverpayment)
        || dimensions.policy_fit.score < 70
    {
        PayForPlayRisk::Medium
    } else {
        PayForPlayRisk::Low
    };

    let is_third_party_verified = !deal.is_school_affiliated
        && !deal.is_booster_connected
        && !deal.performance_based
        && dimensions.brand_safety.score >= 50;

    let mut overall_recommendations: Vec<String> = Vec::new();
    for dimension in dimensions.in_order() {
        for rec in &dimension.recommendations {
            if !overall_recommendations.contains(rec) {
                overall_recommendations.push(rec.clone());
            }
        }
    }
    overall_recommendations.truncate(MAX_RECOMMENDATIONS);

    let can_be_approved = !overall_reason_codes.iter().any(ReasonCode::is_hard_blocker);
    let requires_review = status != ComplianceStatus::Green
        || overall_reason_codes.iter().any(ReasonCode::is_deduction);

    ComplianceResult {
        deal_id: deal.id.clone(),
        athlete_id: athlete.id.clone(),
        total_score,
        status,
        dimensions,
        overall_reason_codes,
        overall_recommendations,
        can_be_approved,
        requires_review,
        is_third_party_verified,
        pay_for_play_risk,
        scored_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use nil_types::{
        AthleteRole, ConsentStatus, DealType, DimensionScore, ThirdPartyType,
        DIMENSION_WEIGHT_BRAND_SAFETY, DIMENSION_WEIGHT_DOCUMENT_HYGIENE,
        DIMENSION_WEIGHT_FMV_VERIFICATION, DIMENSION_WEIGHT_GUARDIAN_CONSENT,
        DIMENSION_WEIGHT_POLICY_FIT, DIMENSION_WEIGHT_TAX_READINESS,
    };
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn clean_deal() -> DealInput {
        DealInput {
            id: Some("deal-1".into()),
            athlete_id: "ath-1".into(),
            deal_type: DealType::SocialPost,
            third_party_name: "Acme Shoes".into(),
            third_party_type: ThirdPartyType::Brand,
            compensation: 50.0,
            deliverables: "We agree to a 4-week campaign of 3 posts per week on Instagram".into(),
            contract_text: Some(
                "We agree to a 4-week campaign of 3 posts per week. Compensation of $50 paid \
                 on completion. Either party may terminate with 7 days written notice."
                    .into(),
            ),
            contract_url: None,
            state: "FL".into(),
            start_date: NaiveDate::from_ymd_opt(2026, 9, 1),
            end_date: NaiveDate::from_ymd_opt(2026, 9, 29),
            is_school_affiliated: false,
            is_booster_connected: false,
            performance_based: false,
        }
    }

    fn college_athlete() -> AthleteContext {
        AthleteContext {
            id: "ath-1".into(),
            role: AthleteRole::CollegeAthlete,
            is_minor: false,
            state: "FL".into(),
            sport: "basketball".into(),
            followers: 10_000,
            engagement_rate: 4.0,
            consent_status: None,
            has_acknowledged_tax_obligations: true,
        }
    }

    fn dim(score: i32, weight: f64) -> DimensionScore {
        DimensionScore::new(score, weight, vec![], "", vec![])
    }

    fn scores_from(raw: [i32; 6]) -> DimensionScores {
        DimensionScores {
            policy_fit: dim(raw[0], DIMENSION_WEIGHT_POLICY_FIT),
            document_hygiene: dim(raw[1], DIMENSION_WEIGHT_DOCUMENT_HYGIENE),
            fmv_verification: dim(raw[2], DIMENSION_WEIGHT_FMV_VERIFICATION),
            tax_readiness: dim(raw[3], DIMENSION_WEIGHT_TAX_READINESS),
            brand_safety: dim(raw[4], DIMENSION_WEIGHT_BRAND_SAFETY),
            guardian_consent: dim(raw[5], DIMENSION_WEIGHT_GUARDIAN_CONSENT),
        }
    }

    #[tokio::test]
    async fn test_clean_college_deal_scores_well() {
        let engine = ComplianceEngine::new();
        let result = engine
            .calculate_compliance_score(&clean_deal(), &college_athlete())
            .await
            .unwrap();

        assert!(
            matches!(result.status, ComplianceStatus::Green | ComplianceStatus::Yellow),
            "expected green or yellow, got {:?} at {}",
            result.status,
            result.total_score
        );
        assert!(!result
            .overall_reason_codes
            .iter()
            .any(|c| c.code().starts_with("PROHIBITED_")));
        assert_eq!(result.dimensions.guardian_consent.score, 100);
        assert!(result
            .dimensions
            .guardian_consent
            .reason_codes
            .contains(&ReasonCode::NotApplicableAdult));
        assert!(result.can_be_approved);
    }

    #[tokio::test]
    async fn test_booster_performance_deal_is_high_risk() {
        let mut deal = clean_deal();
        deal.is_booster_connected = true;
        deal.performance_based = true;

        let engine = ComplianceEngine::new();
        let result = engine
            .calculate_compliance_score(&deal, &college_athlete())
            .await
            .unwrap();

        assert!(result.dimensions.policy_fit.score <= 20);
        assert_eq!(result.pay_for_play_risk, PayForPlayRisk::High);
        assert!(!result.is_third_party_verified);
    }

    #[tokio::test]
    async fn test_prohibited_brand_blocks_approval() {
        let mut deal = clean_deal();
        deal.third_party_name = "XYZ Casino Rewards".into();

        let engine = ComplianceEngine::new();
        let result = engine
            .calculate_compliance_score(&deal, &college_athlete())
            .await
            .unwrap();

        assert_eq!(result.dimensions.brand_safety.score, 0);
        assert!(result
            .overall_reason_codes
            .iter()
            .any(|c| c.code() == "PROHIBITED_BRAND_CATEGORY_GAMBLING"));
        assert!(!result.can_be_approved);
        assert!(result.requires_review);
    }

    #[tokio::test]
    async fn test_pending_consent_scores_40_with_wait_recommendation() {
        let mut athlete = college_athlete();
        athlete.role = AthleteRole::HsStudent;
        athlete.is_minor = true;
        athlete.consent_status = Some(ConsentStatus::Pending);

        let engine = ComplianceEngine::new();
        let result = engine
            .calculate_compliance_score(&clean_deal(), &athlete)
            .await
            .unwrap();

        assert_eq!(result.dimensions.guardian_consent.score, 40);
        assert!(result
            .overall_reason_codes
            .contains(&ReasonCode::GuardianConsentPending));
        assert!(result
            .dimensions
            .guardian_consent
            .recommendations
            .iter()
            .any(|r| r.to_lowercase().contains("wait")));
    }

    #[tokio::test]
    async fn test_scoring_is_deterministic_apart_from_timestamp() {
        let engine = ComplianceEngine::new();
        let deal = clean_deal();
        let athlete = college_athlete();

        let a = engine.calculate_compliance_score(&deal, &athlete).await.unwrap();
        let b = engine.calculate_compliance_score(&deal, &athlete).await.unwrap();

        assert_eq!(a.total_score, b.total_score);
        assert_eq!(a.status, b.status);
        assert_eq!(a.dimensions, b.dimensions);
        assert_eq!(a.overall_reason_codes, b.overall_reason_codes);
        assert_eq!(a.overall_recommendations, b.overall_recommendations);
    }

    #[tokio::test]
    async fn test_validation_errors_fail_fast() {
        let engine = ComplianceEngine::new();
        let mut deal = clean_deal();
        deal.compensation = -10.0;

        let err = engine
            .calculate_compliance_score(&deal, &college_athlete())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidInput(ValidationError::InvalidCompensation(_))
        ));
    }

    #[test]
    fn test_reason_codes_concatenate_in_dimension_order_without_dedup() {
        let mut scores = scores_from([100, 100, 100, 100, 100, 100]);
        scores.policy_fit.reason_codes = vec![ReasonCode::NcaaReportingRequired];
        scores.tax_readiness.reason_codes =
            vec![ReasonCode::W9Required, ReasonCode::NcaaReportingRequired];

        let result = aggregate(&clean_deal(), &college_athlete(), scores);
        assert_eq!(
            result.overall_reason_codes,
            vec![
                ReasonCode::NcaaReportingRequired,
                ReasonCode::W9Required,
                ReasonCode::NcaaReportingRequired,
            ]
        );
    }

    #[test]
    fn test_recommendations_dedupe_and_truncate_to_five() {
        let mut scores = scores_from([100, 100, 100, 100, 100, 100]);
        scores.policy_fit.recommendations =
            vec!["a".into(), "b".into(), "c".into(), "a".into()];
        scores.fmv_verification.recommendations =
            vec!["b".into(), "d".into(), "e".into(), "f".into(), "g".into()];

        let result = aggregate(&clean_deal(), &college_athlete(), scores);
        assert_eq!(result.overall_recommendations, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_low_policy_fit_alone_means_medium_risk() {
        let scores = scores_from([60, 100, 100, 100, 100, 100]);
        let result = aggregate(&clean_deal(), &college_athlete(), scores);
        assert_eq!(result.pay_for_play_risk, PayForPlayRisk::Medium);

        let scores = scores_from([70, 100, 100, 100, 100, 100]);
        let result = aggregate(&clean_deal(), &college_athlete(), scores);
        assert_eq!(result.pay_for_play_risk, PayForPlayRisk::Low);
    }

    #[test]
    fn test_low_brand_safety_breaks_third_party_verification() {
        let scores = scores_from([100, 100, 100, 100, 49, 100]);
        let result = aggregate(&clean_deal(), &college_athlete(), scores);
        assert!(!result.is_third_party_verified);

        let scores = scores_from([100, 100, 100, 100, 50, 100]);
        let result = aggregate(&clean_deal(), &college_athlete(), scores);
        assert!(result.is_third_party_verified);
    }

    #[test]
    fn test_green_without_deductions_needs_no_review() {
        let result = aggregate(
            &clean_deal(),
            &college_athlete(),
            scores_from([100, 100, 100, 100, 100, 100]),
        );
        assert_eq!(result.total_score, 100);
        assert!(!result.requires_review);

        let mut scores = scores_from([100, 100, 100, 100, 100, 100]);
        scores.policy_fit.reason_codes = vec![ReasonCode::SchoolAffiliatedDeal];
        let result = aggregate(&clean_deal(), &college_athlete(), scores);
        assert!(result.requires_review);
    }

    #[tokio::test]
    async fn test_result_serializes_with_camel_case_keys_and_code_strings() {
        let engine = ComplianceEngine::new();
        let mut deal = clean_deal();
        deal.is_booster_connected = true;
        let result = engine
            .calculate_compliance_score(&deal, &college_athlete())
            .await
            .unwrap();

        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("totalScore").is_some());
        assert!(json.get("payForPlayRisk").is_some());
        assert!(json["overallReasonCodes"]
            .as_array()
            .unwrap()
            .iter()
            .any(|c| c == "BOOSTER_CONNECTED"));
    }

    proptest! {
        #[test]
        fn prop_total_is_rounded_weighted_sum_in_range(
            raw in proptest::array::uniform6(0i32..=100)
        ) {
            let scores = scores_from(raw);
            let expected: f64 = scores.in_order().iter().map(|d| d.weighted_score).sum();
            let result = aggregate(&clean_deal(), &college_athlete(), scores);

            prop_assert!(result.total_score <= 100);
            prop_assert_eq!(result.total_score, expected.round() as u8);
            prop_assert_eq!(result.status, ComplianceStatus::from_score(result.total_score));
        }

        #[test]
        fn prop_raising_one_dimension_never_lowers_total(
            raw in proptest::array::uniform6(0i32..=100),
            which in 0usize..6,
            bump in 1i32..=40,
        ) {
            let base = aggregate(&clean_deal(), &college_athlete(), scores_from(raw));
            let mut raised = raw;
            raised[which] = (raised[which] + bump).min(100);
            let higher = aggregate(&clean_deal(), &college_athlete(), scores_from(raised));
            prop_assert!(higher.total_score >= base.total_score);
        }
    }
}
