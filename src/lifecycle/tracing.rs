//! # Log Setup
//!
//! One compact `tracing-subscriber` formatter for the whole process. Module paths
//! are hidden (`with_target(false)`); actor log lines carry an `entity_type` field
//! instead, and client and service calls open spans named after the operation:
//!
//! ```text
//! INFO create_order{customer_id=user_1}: Actor started entity_type="Order"
//! INFO create_order{customer_id=user_1}: Order placed order_id=order_1 restaurant_id=restaurant_1 total=23.5
//! ```
//!
//! `RUST_LOG` wins when set; otherwise the configured `log_filter` applies.
//!
//! ```bash
//! RUST_LOG=debug cargo run     # full payloads
//! NUBER_LOG=warn cargo run     # configured default
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Call once, before the system starts.
pub fn setup_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
