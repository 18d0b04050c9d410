//! Transit arrival sign server.
//!
//! Polls a transit arrivals backend for one or more stop groups and
//! serves a continuously refreshing sign-style board, grouped by route
//! and direction with countdown values ("NOW" / "N min").

pub mod board;
pub mod groups;
pub mod poller;
pub mod source;
pub mod stops;
pub mod web;
