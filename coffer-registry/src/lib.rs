//! # Coffer Registry
//!
//! Item identities, item values and the static item definitions they resolve to.
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

pub mod definition;
pub mod item;
pub mod registry;

pub use definition::{ItemDefinition, UNKNOWN_ITEM};
pub use item::{Item, ItemId};
pub use registry::{ItemLookup, ItemRegistry, RegistryError};

/// Common behaviour of registries that stop accepting entries once loading is done.
pub trait RegistryExt {
    /// Stops the registry from accepting new entries.
    fn freeze(&mut self);
}
