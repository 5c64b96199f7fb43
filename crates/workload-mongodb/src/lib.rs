//! MongoDB backend for blurr workloads.
//!
//! Each record is one document in `database.collection` with the record key
//! as `_id`. Field lookups and catalog queries are translated into `find`,
//! `distinct` or `aggregate` calls on the same collection.

pub mod convert;
pub mod database;
pub mod error;
pub mod translate;

pub use database::MongoDatabase;
pub use error::MongoError;
pub use translate::{translate, MongoQuery};
