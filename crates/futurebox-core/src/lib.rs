//! # futurebox-core
//!
//! Domain types, network identifiers, and contract configuration for
//! FutureBox. This crate performs no I/O; everything here is plain data
//! shared by the chain client and the terminal application.

pub mod config;
pub mod content;
pub mod network;
pub mod rank;
pub mod selection;
pub mod types;

pub use config::Config;
pub use content::{CapsuleContent, ContentError, Submission};
pub use network::Network;
pub use rank::rank_by_votes;
pub use selection::{SelectionError, SelectionSet, ToggleOutcome, MAX_SELECTED};
pub use types::{Capsule, IdError, ObjectId, SuiAddress};
