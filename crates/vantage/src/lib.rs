pub mod compat;
pub mod config;
pub mod error;
pub mod payment;
pub mod profiles;
pub mod session;
pub mod telemetry;
