use crate::errors::Error;
use crate::storage;
use crate::types::GlobalConfig;
use soroban_sdk::{Address, Env};

/// Loads the configuration or fails if `initialize` has not run.
pub fn require_initialized(env: &Env) -> Result<GlobalConfig, Error> {
    storage::get_config(env).ok_or(Error::NotInitialized)
}

/// Authenticates `admin` and checks it against the configured admin.
pub fn require_admin(env: &Env, admin: &Address) -> Result<GlobalConfig, Error> {
    let config = require_initialized(env)?;
    admin.require_auth();
    if config.admin != *admin {
        return Err(Error::Unauthorized);
    }
    Ok(config)
}

/// Gate for every mutating auction entry point.
pub fn require_unpaused(env: &Env) -> Result<GlobalConfig, Error> {
    let config = require_initialized(env)?;
    if storage::is_paused(env) {
        return Err(Error::SystemPaused);
    }
    storage::extend_instance_ttl(env);
    Ok(config)
}

pub fn require_allowed_asset(config: &GlobalConfig, asset_contract: &Address) -> Result<(), Error> {
    if config.asset_service != *asset_contract {
        return Err(Error::AssetNotAllowed);
    }
    Ok(())
}
