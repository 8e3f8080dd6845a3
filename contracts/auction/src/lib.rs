#![no_std]

mod admin;
mod asset;
mod bidding;
mod errors;
mod events;
mod settlement;
mod storage;
mod types;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, Address, Env};

pub use crate::asset::{AssetClient, AssetInterface};
pub use crate::errors::Error;
pub use crate::types::{Auction, AuctionState, GlobalConfig, BPS_DENOMINATOR};

use crate::events::*;

/// English auction for single non-fungible assets, settled in one fungible token.
///
/// Custody model:
/// - the asset is held by this contract from creation until cancellation or claim
/// - the current highest bid is held in escrow and refunded when outbid
/// - on claim the bid is split into the creator royalty and the seller proceeds
#[contract]
pub struct AuctionContract;

#[contractimpl]
impl AuctionContract {
    // ========================================================================
    // INITIALIZATION
    // ========================================================================

    /// Initialize the auction parameters. Runs once; the system starts paused.
    ///
    /// # Arguments
    /// * `overtime_window` - Seconds before the deadline in which a bid re-arms the timer
    /// * `min_duration` - Lifetime of a new auction in seconds
    /// * `min_step_numerator` - Minimum raise in basis points (500 = 5%)
    /// * `royalty_numerator` - Creator royalty in basis points (100 = 1%)
    ///
    /// # Errors
    /// * `Error::AlreadyInitialized` - If the contract has already been initialized
    /// * `Error::InvalidParams` - If a duration is zero or a numerator is out of range
    pub fn initialize(
        env: Env,
        admin: Address,
        overtime_window: u64,
        min_duration: u64,
        min_step_numerator: u32,
        royalty_numerator: u32,
        token_service: Address,
        asset_service: Address,
    ) -> Result<(), Error> {
        if storage::has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        if overtime_window == 0
            || min_duration == 0
            || min_step_numerator == 0
            || min_step_numerator as i128 > BPS_DENOMINATOR
            || royalty_numerator as i128 > BPS_DENOMINATOR
        {
            return Err(Error::InvalidParams);
        }

        let config = GlobalConfig {
            admin: admin.clone(),
            overtime_window,
            min_duration,
            min_step_numerator,
            royalty_numerator,
            token_service: token_service.clone(),
            asset_service: asset_service.clone(),
            fee_recipient: admin.clone(),
        };
        storage::set_config(&env, &config);
        storage::set_paused(&env, true);

        InitializedEventData {
            admin,
            token_service,
            asset_service,
        }
        .publish(&env);

        Ok(())
    }

    pub fn get_config(env: Env) -> Result<GlobalConfig, Error> {
        admin::require_initialized(&env)
    }

    pub fn version(_env: Env) -> u32 {
        types::REVISION
    }

    // ========================================================================
    // ACCESS GATE
    // ========================================================================

    /// Stop all auction activity (admin only). Queries stay available.
    pub fn pause(env: Env, admin: Address) -> Result<(), Error> {
        Self::update_pause(&env, admin, true)
    }

    /// Resume auction activity (admin only).
    pub fn unpause(env: Env, admin: Address) -> Result<(), Error> {
        Self::update_pause(&env, admin, false)
    }

    pub fn is_paused(env: Env) -> bool {
        storage::is_paused(&env)
    }

    // ========================================================================
    // AUCTION LIFECYCLE
    // ========================================================================

    /// Put `asset_id` up for auction, moving it into the contract's custody.
    ///
    /// The author must own the asset and have approved this contract for it.
    /// With `defer_start` the clock starts at the first bid instead of now.
    ///
    /// # Errors
    /// * `Error::AssetNotAllowed` - If `asset_contract` is not the configured asset service
    /// * `Error::InvalidParams` - If `start_price` is not positive
    /// * `Error::DuplicateAuction` - If an active auction exists for the asset
    /// * `Error::NotOwnerOrUnapproved` - If the author does not own or has not approved the asset
    pub fn create_auction(
        env: Env,
        author: Address,
        asset_contract: Address,
        asset_id: u64,
        start_price: i128,
        defer_start: bool,
    ) -> Result<(), Error> {
        author.require_auth();

        let config = admin::require_unpaused(&env)?;
        admin::require_allowed_asset(&config, &asset_contract)?;

        if start_price <= 0 {
            return Err(Error::InvalidParams);
        }

        if let Some(existing) = storage::get_auction(&env, &asset_contract, asset_id) {
            if existing.is_active() {
                return Err(Error::DuplicateAuction);
            }
        }

        let contract = env.current_contract_address();
        let asset = AssetClient::new(&env, &asset_contract);
        if asset.owner_of(&asset_id) != author || asset.get_approved(&asset_id) != Some(contract) {
            return Err(Error::NotOwnerOrUnapproved);
        }

        let now = env.ledger().timestamp();
        let end_timestamp = if defer_start {
            0
        } else {
            now.checked_add(config.min_duration).ok_or(Error::Overflow)?
        };

        let auction = Auction {
            asset_contract: asset_contract.clone(),
            asset_id,
            author: author.clone(),
            royalty_recipient: asset.author_of(&asset_id),
            start_price,
            highest_bid: 0,
            highest_bidder: None,
            bid_count: 0,
            created_at: now,
            end_timestamp,
            state: AuctionState::Active,
        };

        settlement::take_custody(&env, &auction);
        storage::save_auction(&env, &auction);

        AuctionCreatedEventData {
            asset_contract,
            asset_id,
            author,
            start_price,
            end_timestamp,
        }
        .publish(&env);

        Ok(())
    }

    /// Change the start price of an auction nobody has bid on (author or admin).
    pub fn change_start_price(
        env: Env,
        caller: Address,
        asset_contract: Address,
        asset_id: u64,
        start_price: i128,
    ) -> Result<(), Error> {
        caller.require_auth();

        let config = admin::require_unpaused(&env)?;
        admin::require_allowed_asset(&config, &asset_contract)?;

        let mut auction = storage::get_auction(&env, &asset_contract, asset_id)
            .ok_or(Error::AuctionNotFound)?;

        if !auction.is_active() {
            return Err(Error::NotActive);
        }
        if caller != auction.author && caller != config.admin {
            return Err(Error::NotAuthor);
        }
        if auction.has_bids() {
            return Err(Error::BidsAlreadyPlaced);
        }
        if start_price <= 0 {
            return Err(Error::InvalidParams);
        }

        auction.start_price = start_price;
        storage::save_auction(&env, &auction);

        StartPriceChangedEventData {
            asset_contract,
            asset_id,
            start_price,
        }
        .publish(&env);

        Ok(())
    }

    /// Place a bid of `amount` tokens.
    ///
    /// The bidder must have approved this contract for the amount (or, when
    /// raising their own leading bid, for the increment). The previous leader
    /// is refunded in the same call. A bid inside the overtime window pushes
    /// the deadline to `now + overtime_window`.
    ///
    /// # Errors
    /// * `Error::NotActive` - If there is no active auction or its deadline has passed
    /// * `Error::BidTooLow` - If `amount` is below `min_next_bid`
    pub fn bid(
        env: Env,
        bidder: Address,
        asset_contract: Address,
        asset_id: u64,
        amount: i128,
    ) -> Result<(), Error> {
        bidder.require_auth();

        let config = admin::require_unpaused(&env)?;
        admin::require_allowed_asset(&config, &asset_contract)?;

        let mut auction =
            storage::get_auction(&env, &asset_contract, asset_id).ok_or(Error::NotActive)?;

        let now = env.ledger().timestamp();
        if !auction.is_active() || auction.is_expired(now) {
            return Err(Error::NotActive);
        }

        if amount < bidding::min_next_bid(&auction, config.min_step_numerator)? {
            return Err(Error::BidTooLow);
        }

        match &auction.highest_bidder {
            Some(leader) if *leader == bidder => {
                settlement::escrow_funds(&env, &config, &bidder, amount - auction.highest_bid);
            }
            Some(leader) => {
                settlement::escrow_funds(&env, &config, &bidder, amount);
                settlement::release_funds(&env, &config, leader, auction.highest_bid);
            }
            None => {
                settlement::escrow_funds(&env, &config, &bidder, amount);
            }
        }

        auction.highest_bid = amount;
        auction.highest_bidder = Some(bidder.clone());
        auction.bid_count += 1;
        let extended = bidding::extend_deadline(&env, &mut auction, &config, now)?;

        storage::save_auction(&env, &auction);

        BidPlacedEventData {
            asset_contract,
            asset_id,
            bidder,
            amount,
            end_timestamp: auction.end_timestamp,
            extended,
        }
        .publish(&env);

        Ok(())
    }

    /// Withdraw an auction that has no bids; the asset goes back to the author.
    ///
    /// Also the way to recover an asset whose auction expired without bids.
    pub fn cancel_auction(
        env: Env,
        author: Address,
        asset_contract: Address,
        asset_id: u64,
    ) -> Result<(), Error> {
        author.require_auth();

        let config = admin::require_unpaused(&env)?;
        admin::require_allowed_asset(&config, &asset_contract)?;

        let mut auction = storage::get_auction(&env, &asset_contract, asset_id)
            .ok_or(Error::AuctionNotFound)?;

        if !auction.is_active() {
            return Err(Error::NotActive);
        }
        if auction.author != author {
            return Err(Error::NotAuthor);
        }
        if auction.has_bids() {
            return Err(Error::BidsAlreadyPlaced);
        }

        settlement::release_asset(&env, &auction, &author);

        auction.state = AuctionState::Cancelled;
        storage::save_auction(&env, &auction);

        AuctionCancelledEventData {
            asset_contract,
            asset_id,
            author,
        }
        .publish(&env);

        Ok(())
    }

    /// Claim the asset after the deadline (highest bidder only).
    ///
    /// Splits the escrowed bid into the creator royalty and the seller proceeds.
    ///
    /// # Errors
    /// * `Error::AuctionStillActive` - If the deadline has not been reached
    /// * `Error::NoBids` - If the auction expired without bids
    /// * `Error::NotWinner` - If `claimer` is not the highest bidder
    pub fn claim_won_nft(
        env: Env,
        claimer: Address,
        asset_contract: Address,
        asset_id: u64,
    ) -> Result<(), Error> {
        claimer.require_auth();

        let config = admin::require_unpaused(&env)?;
        admin::require_allowed_asset(&config, &asset_contract)?;

        let mut auction = storage::get_auction(&env, &asset_contract, asset_id)
            .ok_or(Error::AuctionNotFound)?;

        if !auction.is_active() {
            return Err(Error::NotActive);
        }
        if env.ledger().timestamp() < auction.end_timestamp {
            return Err(Error::AuctionStillActive);
        }
        let winner = auction.highest_bidder.clone().ok_or(Error::NoBids)?;
        if winner != claimer {
            return Err(Error::NotWinner);
        }

        let payout = settlement::settle(&env, &config, &auction, &winner)?;

        auction.state = AuctionState::Settled;
        storage::save_auction(&env, &auction);

        AuctionSettledEventData {
            asset_contract,
            asset_id,
            winner,
            price: auction.highest_bid,
            royalty: payout.royalty,
            royalty_recipient: auction.royalty_recipient.clone(),
            proceeds: payout.proceeds,
        }
        .publish(&env);

        Ok(())
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    pub fn get_auction_data(
        env: Env,
        asset_contract: Address,
        asset_id: u64,
    ) -> Result<Auction, Error> {
        storage::get_auction(&env, &asset_contract, asset_id).ok_or(Error::AuctionNotFound)
    }

    /// Smallest bid the active auction accepts right now.
    pub fn min_next_bid(env: Env, asset_contract: Address, asset_id: u64) -> Result<i128, Error> {
        let config = admin::require_initialized(&env)?;
        let auction = storage::get_auction(&env, &asset_contract, asset_id)
            .ok_or(Error::AuctionNotFound)?;
        if !auction.is_active() {
            return Err(Error::NotActive);
        }
        bidding::min_next_bid(&auction, config.min_step_numerator)
    }
}

impl AuctionContract {
    fn update_pause(env: &Env, admin: Address, paused: bool) -> Result<(), Error> {
        admin::require_admin(env, &admin)?;
        storage::set_paused(env, paused);

        PauseChangedEventData {
            admin,
            is_paused: paused,
        }
        .publish(env);

        Ok(())
    }
}
