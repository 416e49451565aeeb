//! Infrastructure error handling

mod conversions;

pub use conversions::{classify_status, classify_transport_error};
