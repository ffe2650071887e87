use std::sync::Arc;

use anyhow::Context;

use db::MemoryStore;

use crate::graphql_schemas::{StaticIdentity, UserStore};
use crate::server;
use crate::settings::Settings;

/// Loads the user store and checks the current user exists in it.
pub fn identity(settings: &Settings) -> anyhow::Result<Arc<StaticIdentity>> {
    let users: Arc<UserStore> =
        Arc::new(MemoryStore::try_from_entities(settings.users.iter().cloned()).context("invalid user seed")?);
    let identity = StaticIdentity::try_new(users.clone(), &settings.me)?;
    info!("loaded {} users, current user is {}", users.len(), identity.current_user_id());
    Ok(Arc::new(identity))
}

pub async fn start(settings: Settings) -> anyhow::Result<()> {
    let identity = identity(&settings)?;
    server::httpserver(settings.api, settings.cors, identity).await?;
    info!("Http Server terminated.");
    Ok(())
}
