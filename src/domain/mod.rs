//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for domain concepts, currently
//! the Uganda mobile phone number. Value objects validate at construction
//! time and prevent invalid data from being represented in the system.

pub mod errors;
pub mod phone;

pub use errors::ValidationError;
pub use phone::PhoneNumber;
