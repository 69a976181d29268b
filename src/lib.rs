pub mod api;
pub mod catalog;
pub mod config;
pub mod discovery;
pub mod distance;
pub mod engine;
pub mod entities;
pub mod error;
pub mod external;
pub mod filter;
pub mod server;
