#![doc(test(attr(deny(warnings))))]

//! Finance Core provides the ledger, monthly summary, and JSON persistence
//! primitives behind a local-file personal finance tracker.

pub mod config;
pub mod errors;
pub mod ledger;
pub mod session;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finance Core tracing initialized.");
    });
}
