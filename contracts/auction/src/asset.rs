use soroban_sdk::{contractclient, Address, Env};

/// Subset of the non-fungible asset service the auction relies on.
///
/// Asset services without `author_of` cannot be listed: the royalty recipient is read from it at creation.
#[allow(dead_code)]
#[contractclient(name = "AssetClient")]
pub trait AssetInterface {
    fn owner_of(env: Env, id: u64) -> Address;

    /// Original creator of the asset, entitled to royalties on every sale.
    fn author_of(env: Env, id: u64) -> Address;

    fn get_approved(env: Env, id: u64) -> Option<Address>;

    /// Moves `id` from `from` to `to`; `spender` must be the owner or the approved address.
    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, id: u64);
}
