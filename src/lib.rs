//! huby - a coworking space directory server
//!
//! A static dataset of coworking spaces served through a
//! query/filter/sort/paginate HTTP API.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod http;
pub mod query;
