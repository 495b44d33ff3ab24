//! Tests for the verification flow
