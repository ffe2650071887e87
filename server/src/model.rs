use serde::{Deserialize, Serialize};

use db::Entity;

/// A user record, keyed by `id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
}

impl User {
    pub fn new(id: &str, username: &str) -> Self {
        Self {
            id: id.to_string(),
            username: username.to_string(),
        }
    }
}

impl Entity for User {
    fn key(&self) -> &str { &self.id }
}

/// Id of the user that acts as the current user when none is configured.
pub const DEFAULT_CURRENT_USER: &str = "1";

/// Users loaded when the configuration does not provide any.
pub fn seed_users() -> Vec<User> { vec![User::new("1", "Robin Wieruch"), User::new("2", "Dave Davids")] }
