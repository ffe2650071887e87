/*!
Read-only entity storage

# Overview

While this is called `db` it only gathers the common behavior of keyed entity lookups.
Entities are loaded once, when the store is built, and never change afterwards.
Currently only the `memory` backend exists.

 */

#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

#[macro_use]
extern crate tracing;

pub use error::{Error, Result};
pub use storage::mem::MemoryStore;
pub use storage::{Entity, EntityStore};

mod error;
mod storage;
