//! Challenge pricing resolution
//!
//! Turns raw persisted pricing records into the canonical tier set shown to
//! customers: fallback synthesis for an empty source, deduplication,
//! per-code range filtering, then fixed price overrides.

mod overrides;

pub use overrides::{price_override, PriceOverride};

use crate::error::Result;
use crate::types::{ChallengeCode, ChallengeType, PricingTier, ResolvedPricingTier};
use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashSet;

/// Account sizes synthesized when the source yields nothing
const ELITE_FALLBACK_SIZES: &[u64] = &[300_000, 500_000, 1_000_000, 2_000_000];
const STANDARD_FALLBACK_SIZES: &[u64] = &[5_000, 10_000, 25_000, 50_000, 100_000, 200_000];

/// Elite tiers are only sold in this account-size range
const ELITE_MIN_SIZE: u64 = 300_000;
const ELITE_MAX_SIZE: u64 = 2_000_000;

/// Competitions run on a single fixed account size
const COMPETITION_SIZE: u64 = 100_000;

/// Read-only supplier of challenge catalog and pricing records
#[async_trait]
pub trait ConfigSource: Send + Sync {
    async fn challenge_types(&self) -> Result<Vec<ChallengeType>>;
    async fn pricing_tiers(&self, code: ChallengeCode) -> Result<Vec<PricingTier>>;
}

/// Resolve the purchasable tier set for one challenge code.
///
/// Pure function of its inputs. Never fails: an empty `raw_tiers` degrades
/// to a synthesized zero-priced tier set so there is always something to
/// render, and overrides below fill in real prices where they exist.
pub fn resolve(code: ChallengeCode, raw_tiers: Vec<PricingTier>) -> Vec<ResolvedPricingTier> {
    let tiers = if raw_tiers.is_empty() {
        fallback_tiers(code)
    } else {
        raw_tiers
    };

    let mut seen = HashSet::new();
    tiers
        .into_iter()
        // Duplicates happen in the raw records; first occurrence wins
        .filter(|t| seen.insert(t.account_size))
        .filter(|t| in_range(code, t.account_size))
        .map(|t| apply_override(code, t))
        .collect()
}

/// Fetch raw tiers from the source and resolve them.
///
/// A failing source is treated the same as an empty one: logged, then
/// recovered by fallback synthesis. Never surfaced to the caller.
pub async fn resolve_from_source(
    source: &dyn ConfigSource,
    code: ChallengeCode,
) -> Vec<ResolvedPricingTier> {
    let raw = match source.pricing_tiers(code).await {
        Ok(tiers) => tiers,
        Err(e) => {
            tracing::warn!("Pricing source unavailable for {}: {}", code, e);
            Vec::new()
        }
    };
    resolve(code, raw)
}

fn in_range(code: ChallengeCode, account_size: u64) -> bool {
    match code {
        ChallengeCode::EliteRoyal => (ELITE_MIN_SIZE..=ELITE_MAX_SIZE).contains(&account_size),
        ChallengeCode::Competition => account_size == COMPETITION_SIZE,
        _ => true,
    }
}

fn apply_override(code: ChallengeCode, raw: PricingTier) -> ResolvedPricingTier {
    let mut tier = ResolvedPricingTier::from(raw);
    match price_override(code, tier.account_size) {
        Some(PriceOverride::TwoPhase { phase_1, phase_2 }) => {
            tier.phase1_price = Some(phase_1);
            tier.phase2_price = Some(phase_2);
            // Phase 1 is the buy-now price
            tier.discount_price = phase_1;
            tier.regular_price = phase_1 * dec!(2);
        }
        Some(PriceOverride::Single(price)) => {
            tier.discount_price = price;
            tier.regular_price = price * dec!(2);
        }
        None => {}
    }
    tier
}

fn fallback_tiers(code: ChallengeCode) -> Vec<PricingTier> {
    let sizes = match code {
        ChallengeCode::EliteRoyal => ELITE_FALLBACK_SIZES,
        _ => STANDARD_FALLBACK_SIZES,
    };

    sizes
        .iter()
        .map(|&account_size| PricingTier {
            account_size,
            regular_price: Decimal::ZERO,
            discount_price: Decimal::ZERO,
            phase1_price: None,
            phase2_price: None,
            daily_dd_pct: dec!(5),
            max_dd_pct: dec!(10),
            min_trading_days: 4,
            time_limit_days: Some(60),
        })
        .collect()
}
