//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events with structured fields (address, tx_hash, ...)
//!
//! Consumers:
//!     → logging.rs subscriber (stderr, filtered by RUST_LOG)
//! ```

pub mod logging;
