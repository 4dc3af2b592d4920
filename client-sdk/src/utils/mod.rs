pub mod logger;
pub mod signature;
