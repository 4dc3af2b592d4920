pub mod activity;
pub mod auth;
pub mod chat;
pub mod client;
pub mod config;
pub mod error;
