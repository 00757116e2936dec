//! Msgforge generates synthetic test payloads from text templates.
//! A template contains `${...}` placeholders (identifiers, amounts, names,
//! timestamps and so on) which are replaced with freshly generated values
//! on every substitution, making it suitable for batch-producing realistic
//! test messages.

/// Command-line interface module for the msgforge application
pub mod cli;

/// Error types and handling for the msgforge application
pub mod error;

/// Value generators for the individual placeholder kinds
/// (identifiers, numbers, amounts, names, contact data, date/time)
pub mod generator;

/// Template scanning and placeholder substitution
/// Handles the actual payload generation logic
pub mod template;
