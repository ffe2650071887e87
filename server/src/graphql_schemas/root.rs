use juniper::{graphql_object, EmptyMutation, EmptySubscription, RootNode, ID};

use crate::graphql_schemas::Context;
use crate::model::User;

pub struct QueryRoot;

#[graphql_object(name = "Query", context = Context)]
impl QueryRoot {
    /// All users, in store order.
    fn users(context: &Context) -> Option<Vec<User>> { Some(context.users.list()) }

    /// The user making the request.
    fn me(context: &Context) -> Option<User> { context.me.clone() }

    /// Get a user by id, `null` if there is no such user.
    fn user(context: &Context, id: ID) -> Option<User> { context.users.get(&id) }
}

pub type Schema = RootNode<'static, QueryRoot, EmptyMutation<Context>, EmptySubscription<Context>>;

pub fn create_schema() -> Schema { Schema::new(QueryRoot, EmptyMutation::new(), EmptySubscription::new()) }
