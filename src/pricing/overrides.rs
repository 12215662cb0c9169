//! Fixed price override table
//!
//! Campaign pricing keyed by `(code, account_size)`. A missing entry means
//! the raw record's prices are used unchanged.

use crate::types::ChallengeCode;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Price override for one `(code, account_size)` pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriceOverride {
    /// Single discount price; regular price is double
    Single(Decimal),
    /// Separately priced phases (PAYG billing); phase 1 is the buy-now price
    TwoPhase { phase_1: Decimal, phase_2: Decimal },
}

/// Look up the override for a challenge code and account size
pub fn price_override(code: ChallengeCode, account_size: u64) -> Option<PriceOverride> {
    use PriceOverride::{Single, TwoPhase};

    match (code, account_size) {
        (ChallengeCode::Classic1Step, 5_000) => Some(Single(dec!(32))),
        (ChallengeCode::Classic1Step, 10_000) => Some(Single(dec!(59))),
        (ChallengeCode::Classic1Step, 25_000) => Some(Single(dec!(109))),
        (ChallengeCode::Classic1Step, 50_000) => Some(Single(dec!(199))),
        (ChallengeCode::Classic1Step, 100_000) => Some(Single(dec!(349))),
        (ChallengeCode::Classic1Step, 200_000) => Some(Single(dec!(649))),

        (ChallengeCode::Classic2Step, 5_000) => Some(Single(dec!(20))),
        (ChallengeCode::Classic2Step, 10_000) => Some(Single(dec!(45))),
        (ChallengeCode::Classic2Step, 25_000) => Some(Single(dec!(80))),
        (ChallengeCode::Classic2Step, 50_000) => Some(Single(dec!(150))),
        (ChallengeCode::Classic2Step, 100_000) => Some(Single(dec!(270))),
        (ChallengeCode::Classic2Step, 200_000) => Some(Single(dec!(500))),

        (ChallengeCode::Payg2Step, 5_000) => Some(TwoPhase {
            phase_1: dec!(129),
            phase_2: dec!(65),
        }),
        (ChallengeCode::Payg2Step, 10_000) => Some(TwoPhase {
            phase_1: dec!(219),
            phase_2: dec!(110),
        }),
        (ChallengeCode::Payg2Step, 25_000) => Some(TwoPhase {
            phase_1: dec!(499),
            phase_2: dec!(250),
        }),
        (ChallengeCode::Payg2Step, 50_000) => Some(TwoPhase {
            phase_1: dec!(849),
            phase_2: dec!(425),
        }),
        (ChallengeCode::Payg2Step, 100_000) => Some(TwoPhase {
            phase_1: dec!(1399),
            phase_2: dec!(700),
        }),
        (ChallengeCode::Payg2Step, 200_000) => Some(TwoPhase {
            phase_1: dec!(2499),
            phase_2: dec!(1250),
        }),

        // Elite tiers are priced upstream; no campaign overrides
        (ChallengeCode::Competition, 100_000) => Some(Single(dec!(99))),

        _ => None,
    }
}
