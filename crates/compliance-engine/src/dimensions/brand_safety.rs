//! Brand safety: is the third party in a category athletes cannot or
//! should not endorse?

use nil_types::{
    DealInput, DimensionScore, ReasonCode, ThirdPartyType, DIMENSION_WEIGHT_BRAND_SAFETY,
};

/// Categories that zero the dimension outright, with keyword expansions
/// matched as substrings of the lower-cased third-party name. First match
/// wins; scanning stops there.
pub const PROHIBITED_BRAND_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "alcohol",
        &["beer", "wine", "liquor", "spirits", "vodka", "whiskey", "bourbon", "brewery", "distillery"],
    ),
    ("tobacco", &["cigarette", "cigar", "nicotine", "smokeless"]),
    ("cannabis", &["marijuana", "dispensary", "thc", "cbd"]),
    ("gambling", &["casino", "poker", "betting", "wager", "lottery", "slots"]),
    ("sports_betting", &["sportsbook", "parlay", "point spread"]),
    ("firearms", &["firearm", "gun", "ammo", "ammunition", "rifle", "pistol"]),
    ("adult_content", &["adult entertainment", "strip club", "xxx"]),
    ("vaping", &["vape", "e-cigarette", "e-cig", "juul", "e-liquid"]),
];

/// Categories that deduct 20 points each; all matches apply.
pub const CAUTION_BRAND_CATEGORIES: &[(&str, &[&str])] = &[
    ("energy_drinks", &["energy drink", "energy shot"]),
    ("supplements", &["supplement", "protein powder", "creatine", "pre-workout"]),
    ("cryptocurrency", &["crypto", "bitcoin", "nft", "token exchange", "blockchain"]),
    ("financial_services", &["forex", "day trading", "payday loan", "lending"]),
    ("weight_loss", &["weight loss", "diet pill", "fat burner", "slimming"]),
    ("pharmaceuticals", &["pharmaceutical", "pharma", "prescription"]),
];

fn category_matches(name_lower: &str, category: &str, keywords: &[&str]) -> bool {
    let category_phrase = category.replace('_', " ");
    name_lower.contains(&category_phrase) || keywords.iter().any(|kw| name_lower.contains(kw))
}

pub fn score(deal: &DealInput) -> DimensionScore {
    let name_lower = deal.third_party_name.to_lowercase();
    let mut reasons = Vec::new();
    let mut recommendations = Vec::new();

    // A prohibited-category match is a hard floor, not a deduction.
    for (category, keywords) in PROHIBITED_BRAND_CATEGORIES {
        if category_matches(&name_lower, category, keywords) {
            reasons.push(ReasonCode::ProhibitedBrandCategory((*category).into()));
            recommendations.push(format!(
                "Deals with {} brands are prohibited for student-athletes. This deal cannot proceed.",
                category.replace('_', " ")
            ));
            if matches!(deal.third_party_type, ThirdPartyType::Unknown | ThirdPartyType::Individual)
            {
                reasons.push(ReasonCode::UnverifiedThirdParty);
            }
            return DimensionScore::new(
                0,
                DIMENSION_WEIGHT_BRAND_SAFETY,
                reasons,
                format!("Third party matches prohibited category '{category}'"),
                recommendations,
            );
        }
    }

    let mut score: i32 = 100;
    for (category, keywords) in CAUTION_BRAND_CATEGORIES {
        if category_matches(&name_lower, category, keywords) {
            score -= 20;
            reasons.push(ReasonCode::CautionBrandCategory((*category).into()));
            recommendations.push(format!(
                "The {} category often carries school-specific restrictions; confirm with your compliance office.",
                category.replace('_', " ")
            ));
        }
    }

    if matches!(deal.third_party_type, ThirdPartyType::Unknown | ThirdPartyType::Individual) {
        score -= 15;
        reasons.push(ReasonCode::UnverifiedThirdParty);
        recommendations
            .push("Verify the third party is a legitimate business before signing.".into());
    }

    let notes = if reasons.is_empty() {
        "No brand category concerns".to_string()
    } else {
        "Brand category cautions apply".to_string()
    };

    DimensionScore::new(score, DIMENSION_WEIGHT_BRAND_SAFETY, reasons, notes, recommendations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nil_types::DealType;
    use pretty_assertions::assert_eq;

    fn deal(name: &str, third_party_type: ThirdPartyType) -> DealInput {
        DealInput {
            id: None,
            athlete_id: "ath-1".into(),
            deal_type: DealType::SocialPost,
            third_party_name: name.into(),
            third_party_type,
            compensation: 250.0,
            deliverables: String::new(),
            contract_text: None,
            contract_url: None,
            state: "FL".into(),
            start_date: None,
            end_date: None,
            is_school_affiliated: false,
            is_booster_connected: false,
            performance_based: false,
        }
    }

    #[test]
    fn test_clean_brand_scores_100() {
        let dim = score(&deal("Acme Shoes", ThirdPartyType::Brand));
        assert_eq!(dim.score, 100);
        assert!(dim.reason_codes.is_empty());
    }

    #[test]
    fn test_casino_forces_score_to_zero() {
        let dim = score(&deal("XYZ Casino Rewards", ThirdPartyType::Brand));
        assert_eq!(dim.score, 0);
        assert!(dim
            .reason_codes
            .contains(&ReasonCode::ProhibitedBrandCategory("gambling".into())));
    }

    #[test]
    fn test_prohibited_match_is_a_floor_not_cumulative() {
        // Matches both alcohol (brewery) and gambling (casino); only the
        // first prohibited category is reported, and the score is exactly 0.
        let dim = score(&deal("Casino Brewery Co", ThirdPartyType::Brand));
        assert_eq!(dim.score, 0);
        let prohibited: Vec<_> = dim
            .reason_codes
            .iter()
            .filter(|r| matches!(r, ReasonCode::ProhibitedBrandCategory(_)))
            .collect();
        assert_eq!(prohibited.len(), 1);
    }

    #[test]
    fn test_keyword_expansion_catches_vodka_brand() {
        let dim = score(&deal("Frostline Vodka", ThirdPartyType::Brand));
        assert_eq!(dim.score, 0);
        assert!(dim
            .reason_codes
            .contains(&ReasonCode::ProhibitedBrandCategory("alcohol".into())));
    }

    #[test]
    fn test_caution_categories_stack() {
        let dim = score(&deal("CryptoFuel Energy Drink", ThirdPartyType::Brand));
        assert_eq!(dim.score, 60);
        assert_eq!(
            dim.reason_codes,
            vec![
                ReasonCode::CautionBrandCategory("energy_drinks".into()),
                ReasonCode::CautionBrandCategory("cryptocurrency".into()),
            ]
        );
    }

    #[test]
    fn test_unverified_third_party_deducts_15() {
        let dim = score(&deal("John Smith", ThirdPartyType::Individual));
        assert_eq!(dim.score, 85);
        assert_eq!(dim.reason_codes, vec![ReasonCode::UnverifiedThirdParty]);
    }

    #[test]
    fn test_prohibited_floor_holds_even_with_other_signals() {
        // Property 6: prohibited match forces exactly 0 regardless of
        // third-party type or caution matches.
        let dim = score(&deal("Anonymous Sportsbook Crypto", ThirdPartyType::Unknown));
        assert_eq!(dim.score, 0);
    }
}
