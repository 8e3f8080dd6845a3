use crate::errors::Error;
use crate::types::{Auction, GlobalConfig, BPS_DENOMINATOR};
use soroban_sdk::{log, Env};

/// Smallest amount the next bid must reach.
///
/// The first bid needs `start_price`; later bids need the current highest bid
/// raised by `ceil(highest_bid * min_step_numerator / 10000)`.
pub fn min_next_bid(auction: &Auction, min_step_numerator: u32) -> Result<i128, Error> {
    if !auction.has_bids() {
        return Ok(auction.start_price);
    }
    let step = auction
        .highest_bid
        .checked_mul(min_step_numerator as i128)
        .and_then(|scaled| scaled.checked_add(BPS_DENOMINATOR - 1))
        .ok_or(Error::Overflow)?
        / BPS_DENOMINATOR;
    auction.highest_bid.checked_add(step).ok_or(Error::Overflow)
}

/// Starts a deferred clock and applies the anti-snipe rule.
///
/// Returns true when the deadline moved. The deadline is never shortened.
pub fn extend_deadline(
    env: &Env,
    auction: &mut Auction,
    config: &GlobalConfig,
    now: u64,
) -> Result<bool, Error> {
    let previous = auction.end_timestamp;

    if auction.end_timestamp == 0 {
        auction.end_timestamp = now
            .checked_add(config.min_duration)
            .ok_or(Error::Overflow)?;
    }

    if auction.end_timestamp - now < config.overtime_window {
        auction.end_timestamp = now
            .checked_add(config.overtime_window)
            .ok_or(Error::Overflow)?;
        log!(
            env,
            "overtime: asset {} deadline moved to {}",
            auction.asset_id,
            auction.end_timestamp
        );
    }

    Ok(auction.end_timestamp != previous)
}
