//! Linkstash: a personal bookmark store.
//!
//! Submitted URLs are fetched, given a human-readable title and stored; titles
//! carry `#tags` that are rendered as filter links. This library crate exposes
//! all modules for use by the binaries and integration tests.

pub mod app;
pub mod database;
pub mod dispatcher;
pub mod logging;
pub mod managers;
pub mod platform;
pub mod services;
pub mod types;
