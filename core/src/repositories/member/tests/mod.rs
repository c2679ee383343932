//! Tests for the member repository mock
