use soroban_sdk::contracterror;

/// Error codes for the auction contract.
/// Codes start at 600 so they never collide with token or asset service errors.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Contract has already been initialized
    AlreadyInitialized = 600,
    /// Contract has not been initialized
    NotInitialized = 601,
    /// Caller is not the configured admin
    Unauthorized = 602,
    /// Auctions are paused
    SystemPaused = 603,
    /// Configuration or price parameter out of range
    InvalidParams = 604,
    /// Asset contract is not the configured asset service
    AssetNotAllowed = 605,
    /// Caller does not own the asset or has not approved the auction contract
    NotOwnerOrUnapproved = 606,
    /// A live auction already exists for this asset
    DuplicateAuction = 607,
    /// No auction record exists for this asset
    AuctionNotFound = 608,
    /// Auction is not accepting this operation (terminal or past its end time)
    NotActive = 609,
    BidTooLow = 610,
    /// Caller is not the auction author
    NotAuthor = 611,
    BidsAlreadyPlaced = 612,
    /// End timestamp has not been reached yet
    AuctionStillActive = 613,
    /// Caller is not the highest bidder
    NotWinner = 614,
    /// Auction expired without any bid
    NoBids = 615,
    /// Arithmetic overflow in price computation
    Overflow = 616,
}
