//! Subcommand handlers.

pub mod category;
pub mod profile;
pub mod view;
