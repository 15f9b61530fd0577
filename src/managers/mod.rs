// Linkstash state managers
// Managers own persistent state; the bookmark table is the only one.

pub mod bookmark_manager;
