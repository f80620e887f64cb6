use serde::{Deserialize, Serialize};

use stagebill_core::{BillingError, BillingResult};
use stagebill_repertory::Play;

/// Audience size a performance must exceed to earn volume credits.
pub const BASE_VOLUME_CREDIT_THRESHOLD: u32 = 30;

// Per-variant rate cards, in minor currency units. Policy data: billing
// agreements change these numbers, the dispatch algorithm does not.
const TRAGEDY_BASE: u64 = 40_000;
const TRAGEDY_LARGE_AUDIENCE: u32 = 30;
const TRAGEDY_PER_EXTRA_SEAT: u64 = 1_000;

const COMEDY_BASE: u64 = 30_000;
const COMEDY_PER_SEAT: u64 = 300;
const COMEDY_LARGE_AUDIENCE: u32 = 20;
const COMEDY_LARGE_FLAT: u64 = 10_000;
const COMEDY_PER_EXTRA_SEAT: u64 = 500;
const COMEDY_CREDIT_GROUP: u32 = 5;

const HISTORY_BASE: u64 = 50_000;
const HISTORY_LARGE_AUDIENCE: u32 = 25;
const HISTORY_PER_EXTRA_SEAT: u64 = 1_200;

const PASTORAL_BASE: u64 = 25_000;
const PASTORAL_PER_SEAT: u64 = 250;
const PASTORAL_LARGE_AUDIENCE: u32 = 15;
const PASTORAL_LARGE_FLAT: u64 = 5_000;
const PASTORAL_PER_EXTRA_SEAT: u64 = 350;

/// Monetary amount and loyalty credits earned by one performance.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingResult {
    /// Amount in smallest currency unit (e.g., cents).
    pub amount: u64,
    pub volume_credits: u64,
}

/// Pricing variant keyed by play type.
///
/// A closed set: every known billing formula is one variant here, selected
/// by [`PricingVariant::for_play`] with an explicit error for anything else.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricingVariant {
    Tragedy,
    Comedy,
    History,
    Pastoral,
}

impl PricingVariant {
    /// Select the pricing variant for a play's type tag.
    pub fn for_play(play: &Play) -> BillingResult<Self> {
        match play.kind.as_str() {
            "tragedy" => Ok(Self::Tragedy),
            "comedy" => Ok(Self::Comedy),
            "history" => Ok(Self::History),
            "pastoral" => Ok(Self::Pastoral),
            other => Err(BillingError::unknown_play_type(other)),
        }
    }

    /// Charge for one performance, in minor units.
    ///
    /// Total over any audience size and monotonically non-decreasing in it.
    pub fn amount_for(self, audience: u32) -> u64 {
        let seats = u64::from(audience);
        match self {
            Self::Tragedy => {
                let extra = u64::from(audience.saturating_sub(TRAGEDY_LARGE_AUDIENCE));
                TRAGEDY_BASE + extra * TRAGEDY_PER_EXTRA_SEAT
            }
            Self::Comedy => {
                let mut amount = COMEDY_BASE + seats * COMEDY_PER_SEAT;
                let extra = u64::from(audience.saturating_sub(COMEDY_LARGE_AUDIENCE));
                if extra > 0 {
                    amount += COMEDY_LARGE_FLAT + extra * COMEDY_PER_EXTRA_SEAT;
                }
                amount
            }
            Self::History => {
                let extra = u64::from(audience.saturating_sub(HISTORY_LARGE_AUDIENCE));
                HISTORY_BASE + extra * HISTORY_PER_EXTRA_SEAT
            }
            Self::Pastoral => {
                let mut amount = PASTORAL_BASE + seats * PASTORAL_PER_SEAT;
                let extra = u64::from(audience.saturating_sub(PASTORAL_LARGE_AUDIENCE));
                if extra > 0 {
                    amount += PASTORAL_LARGE_FLAT + extra * PASTORAL_PER_EXTRA_SEAT;
                }
                amount
            }
        }
    }

    /// Loyalty credits: the shared over-threshold rule plus the variant's
    /// bonus.
    pub fn volume_credits(self, audience: u32) -> u64 {
        u64::from(audience.saturating_sub(BASE_VOLUME_CREDIT_THRESHOLD)) + self.credit_bonus(audience)
    }

    fn credit_bonus(self, audience: u32) -> u64 {
        match self {
            // One extra credit per five attendees.
            Self::Comedy => u64::from(audience / COMEDY_CREDIT_GROUP),
            Self::Tragedy | Self::History | Self::Pastoral => 0,
        }
    }

    /// Amount and credits in one pass.
    pub fn price(self, audience: u32) -> PricingResult {
        PricingResult {
            amount: self.amount_for(audience),
            volume_credits: self.volume_credits(audience),
        }
    }
}
