pub mod add_business;
pub mod app;
pub mod metrics;
pub mod modals;
