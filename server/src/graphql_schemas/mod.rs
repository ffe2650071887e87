pub use context::{Context, ContextError, ContextProvider, StaticIdentity, UserStore};
pub use root::{create_schema, QueryRoot, Schema};

mod context;
pub mod root;
mod types;
