//! User schema module - typed view of the default user schema document

mod api;
mod models;

pub use models::{parse_user_schema, FieldOrigin, SchemaField};
