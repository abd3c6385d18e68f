//! Typed clients for the state accounts of the example program.
//!
//! Account layouts are declared as [`light_account_codec::SchemaDescriptor`]s;
//! fetching goes through the [`rpc::AccountRpc`] seam so any transport can be
//! plugged in.
pub mod accounts;
pub mod base58;
pub mod client;
pub mod config;
pub mod errors;
pub mod gpa;
pub mod rent;
pub mod rpc;
pub mod types;

pub use accounts::{MyState, MyStateV2};
pub use client::{decode_account, AccountClient};
pub use config::ClientConfig;
pub use errors::AccountClientError;
/// Reexport of the codec the accounts are built on.
pub use light_account_codec;
pub use types::State;
