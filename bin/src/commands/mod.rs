//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod history;
pub(crate) mod inspect;
pub(crate) mod list;
