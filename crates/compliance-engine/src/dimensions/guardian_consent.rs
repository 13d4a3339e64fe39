//! Guardian consent: minors need an approved guardian consent on file.

use nil_types::{
    AthleteContext, ConsentStatus, DimensionScore, ReasonCode, DIMENSION_WEIGHT_GUARDIAN_CONSENT,
};

pub fn score(athlete: &AthleteContext) -> DimensionScore {
    // Adults short-circuit; whatever consent_status was supplied is never
    // read.
    if !athlete.is_minor {
        return DimensionScore::new(
            100,
            DIMENSION_WEIGHT_GUARDIAN_CONSENT,
            vec![ReasonCode::NotApplicableAdult],
            "Athlete is an adult; guardian consent not required",
            vec![],
        );
    }

    match athlete.consent_status {
        Some(ConsentStatus::Approved) => DimensionScore::new(
            100,
            DIMENSION_WEIGHT_GUARDIAN_CONSENT,
            vec![ReasonCode::GuardianConsentApproved],
            "Guardian consent approved",
            vec![],
        ),
        Some(ConsentStatus::Pending) => DimensionScore::new(
            40,
            DIMENSION_WEIGHT_GUARDIAN_CONSENT,
            vec![ReasonCode::GuardianConsentPending],
            "Guardian consent requested but not yet approved",
            vec!["Wait for guardian approval before signing or performing any deliverables.".into()],
        ),
        Some(ConsentStatus::Denied) => DimensionScore::new(
            0,
            DIMENSION_WEIGHT_GUARDIAN_CONSENT,
            vec![ReasonCode::GuardianConsentDenied],
            "Guardian denied consent for this deal",
            vec!["Discuss the deal with your guardian before taking any further action.".into()],
        ),
        Some(ConsentStatus::Missing) | None => DimensionScore::new(
            0,
            DIMENSION_WEIGHT_GUARDIAN_CONSENT,
            vec![ReasonCode::GuardianConsentMissing],
            "No guardian consent on file",
            vec!["Have a guardian complete the consent form before proceeding.".into()],
        ),
    }
}
