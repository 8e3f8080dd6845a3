
use crate::{AuctionContract, AuctionContractClient};
use soroban_sdk::{
    contract, contractevent, contractimpl, contracttype,
    testutils::{Address as _, Events, Ledger},
    token, vec, Address, Env, Event,
};

pub const OVERTIME: u64 = 120;
pub const MIN_DURATION: u64 = 300;
pub const MIN_STEP: u32 = 500;
pub const ROYALTY: u32 = 100;
pub const START_TIME: u64 = 1_000;
pub const INITIAL_BALANCE: i128 = 1_000_000_000_000;

// ============================================================================
// MOCK ASSET SERVICE
// ============================================================================

#[contracttype]
#[derive(Clone)]
enum AssetKey {
    Counter,
    Owner(u64),
    Author(u64),
    Approved(u64),
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Minted {
    #[topic]
    pub to: Address,
    pub id: u64,
}

/// Minimal non-fungible asset service: sequential ids, single approval per id.
#[contract]
pub struct MockAsset;

#[contractimpl]
impl MockAsset {
    pub fn mint(env: Env, to: Address) -> u64 {
        to.require_auth();
        let id = env
            .storage()
            .instance()
            .get::<_, u64>(&AssetKey::Counter)
            .unwrap_or(0)
            + 1;
        env.storage().instance().set(&AssetKey::Counter, &id);
        env.storage().persistent().set(&AssetKey::Owner(id), &to);
        env.storage().persistent().set(&AssetKey::Author(id), &to);
        Minted { to, id }.publish(&env);
        id
    }

    pub fn approve(env: Env, owner: Address, spender: Address, id: u64) {
        owner.require_auth();
        if Self::owner_of(env.clone(), id) != owner {
            panic!("not owner");
        }
        env.storage().persistent().set(&AssetKey::Approved(id), &spender);
    }

    pub fn owner_of(env: Env, id: u64) -> Address {
        env.storage()
            .persistent()
            .get(&AssetKey::Owner(id))
            .expect("nonexistent token")
    }

    pub fn author_of(env: Env, id: u64) -> Address {
        env.storage()
            .persistent()
            .get(&AssetKey::Author(id))
            .expect("nonexistent token")
    }

    pub fn get_approved(env: Env, id: u64) -> Option<Address> {
        env.storage().persistent().get(&AssetKey::Approved(id))
    }

    pub fn transfer_from(env: Env, spender: Address, from: Address, to: Address, id: u64) {
        spender.require_auth();
        let owner = Self::owner_of(env.clone(), id);
        if owner != from {
            panic!("not owner");
        }
        if spender != owner && Self::get_approved(env.clone(), id) != Some(spender) {
            panic!("not approved");
        }
        env.storage().persistent().remove(&AssetKey::Approved(id));
        env.storage().persistent().set(&AssetKey::Owner(id), &to);
    }
}

// ============================================================================
// FIXTURE
// ============================================================================

pub struct TestContext {
    pub env: Env,
    pub client: AuctionContractClient<'static>,
    pub contract_id: Address,
    pub admin: Address,
    pub token: token::TokenClient<'static>,
    pub token_admin: token::StellarAssetClient<'static>,
    pub asset: MockAssetClient<'static>,
}

impl TestContext {
    /// New account holding `INITIAL_BALANCE` tokens.
    pub fn funded_user(&self) -> Address {
        let user = Address::generate(&self.env);
        self.token_admin.mint(&user, &INITIAL_BALANCE);
        user
    }

    /// Mints a fresh asset to `owner` and approves the auction contract for it.
    pub fn mint_approved(&self, owner: &Address) -> u64 {
        let id = self.asset.mint(owner);
        self.asset.approve(owner, &self.contract_id, &id);
        id
    }

    /// Mints, approves and auctions a fresh asset; returns its id.
    pub fn create(&self, author: &Address, start_price: i128) -> u64 {
        let id = self.mint_approved(author);
        self.client
            .create_auction(author, &self.asset.address, &id, &start_price, &false);
        id
    }

    pub fn approve_tokens(&self, owner: &Address, amount: i128) {
        let expiration = self.env.ledger().sequence() + 1_000;
        self.token
            .approve(owner, &self.contract_id, &amount, &expiration);
    }

    /// Approves exactly `amount` and bids it.
    pub fn bid(&self, bidder: &Address, id: u64, amount: i128) {
        self.approve_tokens(bidder, amount);
        self.client.bid(bidder, &self.asset.address, &id, &amount);
    }

    pub fn auction(&self, id: u64) -> crate::Auction {
        self.client.get_auction_data(&self.asset.address, &id)
    }

    pub fn now(&self) -> u64 {
        self.env.ledger().timestamp()
    }

    /// Checks the last event of the latest invocation came from the auction contract and equals `expected`.
    pub fn assert_last_event(&self, expected: &impl Event) {
        let events = self.env.events().all();
        assert!(!events.is_empty(), "no events published");
        assert_eq!(
            events.slice(events.len() - 1..),
            vec![
                &self.env,
                (
                    self.contract_id.clone(),
                    expected.topics(&self.env),
                    expected.data(&self.env)
                )
            ]
        );
    }
}

/// Environment with the token, the asset service and an uninitialized auction contract.
pub fn setup_uninitialized() -> TestContext {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(START_TIME);

    let contract_id = env.register(AuctionContract, ());
    let client = AuctionContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);

    let token_issuer = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_issuer);
    let token = token::TokenClient::new(&env, &token_contract.address());
    let token_admin = token::StellarAssetClient::new(&env, &token_contract.address());

    let asset_id = env.register(MockAsset, ());
    let asset = MockAssetClient::new(&env, &asset_id);

    TestContext {
        env,
        client,
        contract_id,
        admin,
        token,
        token_admin,
        asset,
    }
}

/// Initialized and unpaused auction contract.
pub fn setup_test() -> TestContext {
    let ctx = setup_uninitialized();
    ctx.client.initialize(
        &ctx.admin,
        &OVERTIME,
        &MIN_DURATION,
        &MIN_STEP,
        &ROYALTY,
        &ctx.token.address,
        &ctx.asset.address,
    );
    ctx.client.unpause(&ctx.admin);
    ctx
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    env.ledger().set_timestamp(env.ledger().timestamp() + seconds);
}
