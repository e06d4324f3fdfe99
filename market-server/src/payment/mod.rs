//! Payment Integration
//!
//! The processor itself is an external collaborator; this module holds the
//! set-once configuration and the client that talks to it.

pub mod processor;
pub mod settings;

pub use processor::{HttpPaymentProcessor, PaymentProcessor};
pub use settings::PaymentConfigStore;
