//! Deterministic PII classification and masking for flat JSON records.
//!
//! The engine decides, per record, which fields are sensitive on their own
//! (phone, aadhar, passport, UPI handle) or in combination (name, email,
//! address, device id, IP address, two or more together), and rewrites the
//! selected values into masked form. Records are processed independently
//! with no shared state, so callers are free to fan records out however
//! they like; the CSV adapter in [`csv_io`] is one thin front end.

pub mod csv_io;
pub mod engine;
pub mod errors;
pub mod trace;

pub use engine::field::FieldKind;
pub use engine::{process_record, ProcessedRecord};
pub use errors::RedactError;
