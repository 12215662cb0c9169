//! Core domain types shared across the desk

use crate::error::DeskError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed identifier for a challenge product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChallengeCode {
    #[serde(rename = "CLASSIC_1STEP")]
    Classic1Step,
    #[serde(rename = "CLASSIC_2STEP")]
    Classic2Step,
    #[serde(rename = "PAYG_2STEP")]
    Payg2Step,
    #[serde(rename = "ELITE_ROYAL")]
    EliteRoyal,
    #[serde(rename = "COMPETITION")]
    Competition,
}

impl ChallengeCode {
    /// Wire/persisted form of the code
    pub fn as_str(&self) -> &'static str {
        match self {
            ChallengeCode::Classic1Step => "CLASSIC_1STEP",
            ChallengeCode::Classic2Step => "CLASSIC_2STEP",
            ChallengeCode::Payg2Step => "PAYG_2STEP",
            ChallengeCode::EliteRoyal => "ELITE_ROYAL",
            ChallengeCode::Competition => "COMPETITION",
        }
    }

    /// All known challenge codes, in catalog order
    pub const ALL: &'static [ChallengeCode] = &[
        ChallengeCode::Classic1Step,
        ChallengeCode::Classic2Step,
        ChallengeCode::Payg2Step,
        ChallengeCode::EliteRoyal,
        ChallengeCode::Competition,
    ];
}

impl fmt::Display for ChallengeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChallengeCode {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "CLASSIC_1STEP" => Ok(ChallengeCode::Classic1Step),
            "CLASSIC_2STEP" => Ok(ChallengeCode::Classic2Step),
            "PAYG_2STEP" => Ok(ChallengeCode::Payg2Step),
            "ELITE_ROYAL" => Ok(ChallengeCode::EliteRoyal),
            "COMPETITION" => Ok(ChallengeCode::Competition),
            other => Err(DeskError::Validation(format!(
                "Unknown challenge code: {}",
                other
            ))),
        }
    }
}

/// Purchasable challenge product, maintained by an external admin process
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengeType {
    #[serde(rename = "challenge_code")]
    pub code: ChallengeCode,
    #[serde(rename = "challenge_name")]
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    #[serde(default)]
    pub recommended: bool,
}

/// Raw pricing record as persisted; may contain duplicate account sizes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingTier {
    pub account_size: u64,
    pub regular_price: Decimal,
    pub discount_price: Decimal,
    #[serde(rename = "phase_1_price", default)]
    pub phase1_price: Option<Decimal>,
    #[serde(rename = "phase_2_price", default)]
    pub phase2_price: Option<Decimal>,
    pub daily_dd_pct: Decimal,
    pub max_dd_pct: Decimal,
    pub min_trading_days: u32,
    #[serde(default)]
    pub time_limit_days: Option<u32>,
}

/// Pricing tier after code-specific overrides have been applied
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedPricingTier {
    pub account_size: u64,
    pub regular_price: Decimal,
    pub discount_price: Decimal,
    pub phase1_price: Option<Decimal>,
    pub phase2_price: Option<Decimal>,
    pub daily_dd_pct: Decimal,
    pub max_dd_pct: Decimal,
    pub min_trading_days: u32,
    pub time_limit_days: Option<u32>,
}

impl From<PricingTier> for ResolvedPricingTier {
    fn from(raw: PricingTier) -> Self {
        Self {
            account_size: raw.account_size,
            regular_price: raw.regular_price,
            discount_price: raw.discount_price,
            phase1_price: raw.phase1_price,
            phase2_price: raw.phase2_price,
            daily_dd_pct: raw.daily_dd_pct,
            max_dd_pct: raw.max_dd_pct,
            min_trading_days: raw.min_trading_days,
            time_limit_days: raw.time_limit_days,
        }
    }
}

/// Outbound notification template with `{placeholder}` tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationTemplate {
    pub id: String,
    pub name: String,
    pub subject: String,
    pub body: String,
}

/// Recipient context for merge-field substitution
#[derive(Debug, Clone)]
pub struct Trader {
    pub user_id: String,
    pub name: String,
    pub account_id: String,
    pub initial_balance: Decimal,
    pub current_equity: Decimal,
    pub breach_reason: Option<String>,
}

/// Risk-rule violation, computed entirely by the external risk-check service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breach {
    pub trader_name: String,
    pub account_id: String,
    pub challenge_id: String,
    pub breach_type: String,
    pub breach_value: Decimal,
    pub threshold_value: Decimal,
    pub description: String,
}

/// Result of one breach-check run
#[derive(Debug, Clone)]
pub struct BreachReport {
    pub breaches_found: u32,
    pub breaches: Vec<Breach>,
    pub checked_at: DateTime<Utc>,
}

/// Fixed set of reasons an operator may terminate a challenge with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    MaxDailyLoss,
    MaxTotalLoss,
    ConsistencyViolation,
    TermsViolation,
    Other,
}

impl TerminationReason {
    /// Operator-facing label, also the wire form sent to the terminate endpoint
    pub fn label(&self) -> &'static str {
        match self {
            TerminationReason::MaxDailyLoss => "Max Daily Loss",
            TerminationReason::MaxTotalLoss => "Max Total Loss",
            TerminationReason::ConsistencyViolation => "Consistency Violation",
            TerminationReason::TermsViolation => "Terms Violation",
            TerminationReason::Other => "Other",
        }
    }

    /// All selectable reasons, in modal display order
    pub const ALL: &'static [TerminationReason] = &[
        TerminationReason::MaxDailyLoss,
        TerminationReason::MaxTotalLoss,
        TerminationReason::ConsistencyViolation,
        TerminationReason::TermsViolation,
        TerminationReason::Other,
    ];

    /// Map a breach type reported by the risk-check service to a reason.
    /// Returns `None` for unrecognized types so the operator has to choose.
    pub fn from_breach_type(breach_type: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|r| r.label().eq_ignore_ascii_case(breach_type))
    }
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TerminationReason {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_breach_type(s).ok_or_else(|| {
            DeskError::Validation(format!("Unknown termination reason: {}", s))
        })
    }
}

impl Serialize for TerminationReason {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Request to terminate one challenge, built from a selected breach
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminationRequest {
    pub challenge_id: String,
    pub reason: TerminationReason,
}

impl TerminationRequest {
    pub fn new(breach: &Breach, reason: TerminationReason) -> Self {
        Self {
            challenge_id: breach.challenge_id.clone(),
            reason,
        }
    }
}
