//! Command handlers. Each takes the already-opened store.

pub mod comment;
pub mod create;
pub mod delete;
pub mod list;
pub mod search;
pub mod show;
pub mod stats;
pub mod status;
pub mod version;
