//! Cell-formatting core for fixed-column cluster tables.
//!
//! Converts raw resource values — byte counts, millicore quantities,
//! used/limit ratios, timestamps, label maps — into short, width-bounded
//! strings for table cells. Every function is pure, total, and synchronous:
//! nothing here blocks, retries, or returns an error to the render path.
//! Failures degrade to the sentinel markers in [`sentinel`].

pub mod bytes;
pub mod decimal;
pub mod keyvalue;
pub mod layout;
pub mod scalar;
pub mod score;
pub mod sentinel;
pub mod temporal;
