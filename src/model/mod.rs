//! Domain models shared by the data, service and bot layers.
//!
//! Discord objects are converted into these models at the directory-service boundary
//! so the clone engine never depends on Serenity's wire types directly.

pub mod asset;
pub mod clone;
pub mod discord;
