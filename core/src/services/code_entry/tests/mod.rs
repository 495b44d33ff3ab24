//! Tests for segmented code entry
