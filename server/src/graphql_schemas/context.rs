use std::sync::Arc;

use actix_web::HttpRequest;
use thiserror::Error;

use db::EntityStore;

use crate::model::User;

pub type UserStore = dyn EntityStore<User>;

/// Values available to every resolver of a single request.
#[derive(Clone, Debug)]
pub struct Context {
    pub users: Arc<UserStore>,
    /// The caller, `None` when the request is anonymous.
    pub me: Option<User>,
}

impl juniper::Context for Context {}

impl Context {
    pub fn new(users: Arc<UserStore>, me: Option<User>) -> Self { Self { users, me } }
}

/// Builds a fresh [`Context`] for each incoming GraphQL request.
pub trait ContextProvider: Send + Sync {
    fn context(&self, req: &HttpRequest) -> Context;
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ContextError {
    #[error("current user {0} is not in the user store")]
    UnknownCurrentUser(String),
}

/// Resolves every request to the same configured user.
#[derive(Debug)]
pub struct StaticIdentity {
    users: Arc<UserStore>,
    me: String,
}

impl StaticIdentity {
    pub fn try_new(users: Arc<UserStore>, me: &str) -> Result<Self, ContextError> {
        if !users.contains(me) {
            return Err(ContextError::UnknownCurrentUser(me.to_string()));
        }
        Ok(Self {
            users,
            me: me.to_string(),
        })
    }

    pub fn current_user_id(&self) -> &str { &self.me }
}

impl ContextProvider for StaticIdentity {
    fn context(&self, _req: &HttpRequest) -> Context { Context::new(self.users.clone(), self.users.get(&self.me)) }
}
