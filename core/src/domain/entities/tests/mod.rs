//! Tests for domain entities

#[cfg(test)]
mod code_buffer_tests;
