//! Tests for resend gating
