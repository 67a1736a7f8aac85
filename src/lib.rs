pub mod abis;
pub mod chain_config;
pub mod guide;
pub mod minikit;
pub mod report;
pub mod transaction;
