//! Integration tests for the Company API
//!
//! These tests drive the full router, middleware included, against a fresh
//! in-memory store per test.

mod employee_tests;
