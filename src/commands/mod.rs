//! CLI command implementations.

pub mod contact;
pub mod list;
pub mod property;

#[cfg(test)]
pub(crate) mod mock;

pub use contact::ContactCommand;
pub use list::ListCommand;
pub use property::PropertyCommand;
