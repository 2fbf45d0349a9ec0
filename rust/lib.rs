//! Business day holiday calendars and date adjustment conventions.
//!
//! The [`scheduling`] module holds the calendars, rolling and adjustment rules. Errors are
//! reported through [`error::CalendarError`] and most types convert to and from JSON with the
//! [`json::JSON`] trait.

#[cfg(test)]
mod tests;

pub mod error;
pub mod json;
pub mod scheduling;
