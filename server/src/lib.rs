#![deny(unused_must_use, unused_mut, unused_import_braces)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

#[macro_use]
extern crate tracing;

pub mod api;
pub mod graphql_schemas;
pub mod model;
pub mod runner;
pub mod server;
pub mod settings;
pub mod system;
