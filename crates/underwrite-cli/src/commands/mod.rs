pub mod baseline;
pub mod common;
pub mod expenses;
pub mod metrics;
pub mod projection;
pub mod scenario;
pub mod sensitivity;
