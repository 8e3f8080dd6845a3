use soroban_sdk::{contractevent, Address};

/// Event emitted when the auction contract is initialized
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEventData {
    #[topic]
    pub admin: Address,
    pub token_service: Address,
    pub asset_service: Address,
}

/// Event emitted when auctions are paused or unpaused
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PauseChangedEventData {
    #[topic]
    pub admin: Address,
    pub is_paused: bool,
}

/// Event emitted when an asset is put up for auction
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCreatedEventData {
    #[topic]
    pub asset_contract: Address,
    #[topic]
    pub asset_id: u64,
    pub author: Address,
    pub start_price: i128,
    pub end_timestamp: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StartPriceChangedEventData {
    #[topic]
    pub asset_contract: Address,
    #[topic]
    pub asset_id: u64,
    pub start_price: i128,
}

/// Event emitted when a bid takes the lead
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlacedEventData {
    #[topic]
    pub asset_contract: Address,
    #[topic]
    pub asset_id: u64,
    pub bidder: Address,
    pub amount: i128,
    pub end_timestamp: u64,
    pub extended: bool,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCancelledEventData {
    #[topic]
    pub asset_contract: Address,
    #[topic]
    pub asset_id: u64,
    pub author: Address,
}

/// Event emitted when the winner claims the asset and funds are split
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionSettledEventData {
    #[topic]
    pub asset_contract: Address,
    #[topic]
    pub asset_id: u64,
    pub winner: Address,
    pub price: i128,
    pub royalty: i128,
    pub royalty_recipient: Address,
    pub proceeds: i128,
}
