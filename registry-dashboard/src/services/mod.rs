pub mod directory;
pub mod metrics;
