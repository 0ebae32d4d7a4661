//! Service layer for the cloner.
//!
//! Services sit between the bot surface and the directory-service client. They
//! implement the clone algorithm and its collaborators and work purely with domain
//! models:
//!
//! - **Asset** (`asset`) - Downloads images and encodes them for upload
//! - **Cloner** (`cloner/`) - Phase-based replication of one guild onto another

pub mod asset;
pub mod cloner;
