pub mod config;
pub mod content;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod paths;
pub mod routes;
pub mod session;
pub mod state;
pub mod study;

#[cfg(test)]
pub mod testing;
