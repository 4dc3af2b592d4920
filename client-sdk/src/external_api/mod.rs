pub mod activity;
pub mod agents;
pub mod siwe;
pub mod utils;
