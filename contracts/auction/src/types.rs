use soroban_sdk::{contracttype, Address};

/// Denominator shared by the minimum bid step and the royalty numerators.
pub const BPS_DENOMINATOR: i128 = 10_000;

/// Revision of the deployed auction logic.
pub const REVISION: u32 = 7;

pub const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for instance storage (30 days)
pub const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// TTL threshold before extending instance storage
pub const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

/// TTL extension amount for persistent storage (90 days)
pub const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;

/// TTL threshold for persistent storage
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Global auction parameters, written once by `initialize`
    Config,
    /// Pause switch checked by every mutating entry point
    Paused,
    /// Auction record keyed by (asset contract, asset id)
    Auction(Address, u64),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GlobalConfig {
    pub admin: Address,
    /// Seconds before the deadline during which a bid pushes the deadline out
    pub overtime_window: u64,
    /// Lifetime granted to a fresh auction
    pub min_duration: u64,
    /// Minimum raise over the current highest bid, over `BPS_DENOMINATOR`
    pub min_step_numerator: u32,
    /// Author's cut of the winning bid, over `BPS_DENOMINATOR`
    pub royalty_numerator: u32,
    pub token_service: Address,
    pub asset_service: Address,
    pub fee_recipient: Address,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum AuctionState {
    Active = 0,
    Cancelled = 1,
    Settled = 2,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    pub asset_contract: Address,
    pub asset_id: u64,
    /// Creator of the auction; owned the asset at creation and receives the proceeds
    pub author: Address,
    /// Original creator of the asset as reported by the asset service
    pub royalty_recipient: Address,
    pub start_price: i128,
    /// Escrowed amount of the current leader, zero until the first bid
    pub highest_bid: i128,
    pub highest_bidder: Option<Address>,
    pub bid_count: u32,
    pub created_at: u64,
    /// Zero while a deferred-start auction waits for its first bid
    pub end_timestamp: u64,
    pub state: AuctionState,
}

impl Auction {
    pub fn is_active(&self) -> bool {
        self.state == AuctionState::Active
    }

    pub fn has_bids(&self) -> bool {
        self.highest_bidder.is_some()
    }

    /// True once the clock has started and the deadline is reached.
    pub fn is_expired(&self, now: u64) -> bool {
        self.end_timestamp != 0 && now >= self.end_timestamp
    }
}
