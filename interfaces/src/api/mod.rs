pub mod activity;
pub mod agents;
pub mod error;
pub mod siwe;
