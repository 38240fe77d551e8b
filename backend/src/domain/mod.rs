//! Domain records and rules for the people service.
//!
//! Purpose: define the strongly typed entities shared by the HTTP adapter
//! and the persistence layer, the field-validation rules for person input,
//! and the transport-agnostic error taxonomy. Inbound adapters translate
//! [`Error`] into protocol-specific envelopes; the domain stays free of
//! HTTP concerns.

pub mod error;
pub mod person;
pub mod ports;

pub use self::error::{Error, ErrorCode};
pub use self::person::{NewPerson, Person, Violation};
