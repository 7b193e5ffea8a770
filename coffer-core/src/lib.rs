//! # Coffer Core
//!
//! Slotted item containers, the bank transfer protocol between a player's bank
//! and inventory, and the listeners that keep derived player state in sync.
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    missing_docs,
    clippy::unwrap_used
)]
#![allow(
    clippy::single_call_fn,
    clippy::multiple_inherent_impl,
    clippy::shadow_unrelated,
    clippy::missing_errors_doc,
    clippy::struct_excessive_bools,
    clippy::needless_pass_by_value,
    clippy::cargo_common_metadata
)]

pub mod config;
pub mod inventory;
pub mod player;

#[cfg(test)]
pub(crate) mod test_support;
