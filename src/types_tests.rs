//! Tests for domain types

#[cfg(test)]
mod tests {
    use crate::types::*;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    #[test]
    fn challenge_code_round_trip() {
        for &code in ChallengeCode::ALL {
            assert_eq!(ChallengeCode::from_str(code.as_str()).unwrap(), code);
        }
    }

    #[test]
    fn challenge_code_from_str_is_case_insensitive() {
        assert_eq!(
            ChallengeCode::from_str("classic_2step").unwrap(),
            ChallengeCode::Classic2Step
        );
        assert_eq!(
            ChallengeCode::from_str("Elite_Royal").unwrap(),
            ChallengeCode::EliteRoyal
        );
    }

    #[test]
    fn challenge_code_rejects_unknown() {
        assert!(ChallengeCode::from_str("MEGA_FUNDED").is_err());
    }

    #[test]
    fn challenge_code_serde_uses_wire_form() {
        let json = serde_json::to_string(&ChallengeCode::Payg2Step).unwrap();
        assert_eq!(json, "\"PAYG_2STEP\"");
        let code: ChallengeCode = serde_json::from_str("\"COMPETITION\"").unwrap();
        assert_eq!(code, ChallengeCode::Competition);
    }

    #[test]
    fn termination_reason_labels() {
        assert_eq!(TerminationReason::MaxDailyLoss.label(), "Max Daily Loss");
        assert_eq!(TerminationReason::Other.label(), "Other");
        assert_eq!(TerminationReason::ALL.len(), 5);
    }

    #[test]
    fn termination_reason_from_breach_type() {
        assert_eq!(
            TerminationReason::from_breach_type("Max Daily Loss"),
            Some(TerminationReason::MaxDailyLoss)
        );
        assert_eq!(
            TerminationReason::from_breach_type("max total loss"),
            Some(TerminationReason::MaxTotalLoss)
        );
        assert_eq!(TerminationReason::from_breach_type("Weekend Holding"), None);
    }

    #[test]
    fn termination_request_serializes_camel_case() {
        let breach = Breach {
            trader_name: "Jane".to_string(),
            account_id: "ACC1".to_string(),
            challenge_id: "ch-9".to_string(),
            breach_type: "Max Daily Loss".to_string(),
            breach_value: dec!(-612),
            threshold_value: dec!(-500),
            description: "Daily loss limit exceeded".to_string(),
        };
        let request = TerminationRequest::new(&breach, TerminationReason::MaxDailyLoss);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["challengeId"], "ch-9");
        assert_eq!(json["reason"], "Max Daily Loss");
    }

    #[test]
    fn breach_deserializes_from_wire_shape() {
        let json = r#"{
            "traderName": "Jane",
            "accountId": "ACC1",
            "challengeId": "ch-1",
            "breachType": "Max Daily Loss",
            "breachValue": -612.40,
            "thresholdValue": -500,
            "description": "Daily loss limit exceeded"
        }"#;
        let breach: Breach = serde_json::from_str(json).unwrap();
        assert_eq!(breach.trader_name, "Jane");
        assert_eq!(breach.challenge_id, "ch-1");
        assert_eq!(breach.breach_value, dec!(-612.40));
    }

    #[test]
    fn pricing_tier_deserializes_persisted_shape() {
        let json = r#"{
            "account_size": 25000,
            "regular_price": 160,
            "discount_price": 80,
            "phase_1_price": null,
            "platform_cost": 12,
            "daily_dd_pct": 5,
            "max_dd_pct": 10,
            "min_trading_days": 4,
            "time_limit_days": 60
        }"#;
        let tier: PricingTier = serde_json::from_str(json).unwrap();
        assert_eq!(tier.account_size, 25_000);
        assert_eq!(tier.discount_price, dec!(80));
        assert!(tier.phase1_price.is_none());
        assert!(tier.phase2_price.is_none());
        assert_eq!(tier.time_limit_days, Some(60));
    }

    #[test]
    fn challenge_type_deserializes_persisted_shape() {
        let json = r#"{
            "challenge_code": "CLASSIC_2STEP",
            "challenge_name": "Classic 2-Step",
            "description": "Two evaluation phases",
            "is_active": true
        }"#;
        let ct: ChallengeType = serde_json::from_str(json).unwrap();
        assert_eq!(ct.code, ChallengeCode::Classic2Step);
        assert!(ct.is_active);
        assert!(!ct.recommended);
    }
}
