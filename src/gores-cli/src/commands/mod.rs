//! Command handlers for the gores CLI

pub mod configure;
pub mod patch;
pub mod sql;
pub mod votes;
