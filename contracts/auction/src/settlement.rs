use crate::asset::AssetClient;
use crate::errors::Error;
use crate::types::{Auction, GlobalConfig, BPS_DENOMINATOR};
use soroban_sdk::{log, token, Address, Env};

/// Winning bid split between the asset's creator and the seller.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Payout {
    pub royalty: i128,
    pub proceeds: i128,
}

/// `royalty = floor(price * royalty_numerator / 10000)`, the rest goes to the seller.
pub fn split_payout(price: i128, royalty_numerator: u32) -> Result<Payout, Error> {
    let royalty = price
        .checked_mul(royalty_numerator as i128)
        .ok_or(Error::Overflow)?
        / BPS_DENOMINATOR;
    Ok(Payout {
        royalty,
        proceeds: price - royalty,
    })
}

/// Pulls `amount` from `from` into escrow through the allowance granted to this contract.
pub fn escrow_funds(env: &Env, config: &GlobalConfig, from: &Address, amount: i128) {
    if amount == 0 {
        return;
    }
    let contract = env.current_contract_address();
    token::TokenClient::new(env, &config.token_service).transfer_from(
        &contract,
        from,
        &contract,
        &amount,
    );
}

/// Pays `amount` out of escrow.
pub fn release_funds(env: &Env, config: &GlobalConfig, to: &Address, amount: i128) {
    if amount == 0 {
        return;
    }
    token::TokenClient::new(env, &config.token_service).transfer(
        &env.current_contract_address(),
        to,
        &amount,
    );
}

/// Moves the asset from its owner into the contract's custody.
pub fn take_custody(env: &Env, auction: &Auction) {
    let contract = env.current_contract_address();
    AssetClient::new(env, &auction.asset_contract).transfer_from(
        &contract,
        &auction.author,
        &contract,
        &auction.asset_id,
    );
}

/// Hands the asset held in custody to `to`.
pub fn release_asset(env: &Env, auction: &Auction, to: &Address) {
    let contract = env.current_contract_address();
    AssetClient::new(env, &auction.asset_contract).transfer_from(
        &contract,
        &contract,
        to,
        &auction.asset_id,
    );
}

/// Pays out the escrowed winning bid and delivers the asset to the winner.
pub fn settle(
    env: &Env,
    config: &GlobalConfig,
    auction: &Auction,
    winner: &Address,
) -> Result<Payout, Error> {
    let payout = split_payout(auction.highest_bid, config.royalty_numerator)?;

    release_funds(env, config, &auction.royalty_recipient, payout.royalty);
    release_funds(env, config, &auction.author, payout.proceeds);
    release_asset(env, auction, winner);

    log!(
        env,
        "settled asset {}: royalty {} proceeds {}",
        auction.asset_id,
        payout.royalty,
        payout.proceeds
    );

    Ok(payout)
}
