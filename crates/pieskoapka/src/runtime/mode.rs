//! `AppMode`-specific key handling modules.

pub(crate) mod input;
pub(crate) mod list;
