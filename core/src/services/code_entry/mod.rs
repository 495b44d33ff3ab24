//! Segmented code entry
//!
//! Owns the per-digit buffer and the focus cursor. The cursor is computed
//! here; applying it to a rendered input is left to the host through the
//! returned [`FocusChange`].

mod entry;

#[cfg(test)]
mod tests;

pub use entry::{FocusChange, SegmentedCodeEntry};
