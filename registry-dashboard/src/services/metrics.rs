use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};
use std::sync::OnceLock;

// Global registry
pub static REGISTRY: OnceLock<Registry> = OnceLock::new();

pub static ADD_BUSINESS_SUBMISSIONS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();
pub static MODALS_OPENED_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();

pub fn init_metrics() -> Result<(), prometheus::Error> {
    let registry = Registry::new();

    let submissions = IntCounterVec::new(
        Opts::new(
            "add_business_submissions_total",
            "Add business form submissions by outcome",
        ),
        &["outcome"],
    )?;

    let modals_opened = IntCounterVec::new(
        Opts::new("modals_opened_total", "Modals opened by component"),
        &["component"],
    )?;

    registry.register(Box::new(submissions.clone()))?;
    registry.register(Box::new(modals_opened.clone()))?;

    let _ = REGISTRY.set(registry);
    let _ = ADD_BUSINESS_SUBMISSIONS_TOTAL.set(submissions);
    let _ = MODALS_OPENED_TOTAL.set(modals_opened);
    Ok(())
}

pub fn record_submission(outcome: &str) {
    if let Some(counter) = ADD_BUSINESS_SUBMISSIONS_TOTAL.get() {
        counter.with_label_values(&[outcome]).inc();
    }
}

pub fn record_modal_opened(component: &str) {
    if let Some(counter) = MODALS_OPENED_TOTAL.get() {
        counter.with_label_values(&[component]).inc();
    }
}

pub fn get_metrics() -> String {
    let Some(registry) = REGISTRY.get() else {
        return String::new();
    };

    let mut buffer = Vec::new();
    let encoder = TextEncoder::new();
    if let Err(e) = encoder.encode(&registry.gather(), &mut buffer) {
        tracing::error!(error = %e, "Failed to encode metrics");
        return String::new();
    }
    String::from_utf8(buffer).unwrap_or_default()
}
