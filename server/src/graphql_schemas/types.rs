use juniper::{graphql_object, ID};

use crate::graphql_schemas::Context;
use crate::model::User;

/// A registered user.
#[graphql_object(context = Context)]
impl User {
    /// Unique identifier of the user.
    fn id(&self) -> ID { ID::from(self.id.clone()) }

    fn username(&self) -> &str { &self.username }
}
