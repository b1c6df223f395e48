//! Domain types and pure voting logic shared by the API server and the
//! client crate.
//!
//! Everything here is wire-shape (camelCase JSON) or side-effect free;
//! persistence lives in `encore-db` and HTTP in `encore-api`.

pub mod activity;
pub mod error;
pub mod ranking;
pub mod track;
pub mod types;
