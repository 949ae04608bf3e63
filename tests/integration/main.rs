//! Integration tests for jobscout
//!
//! These tests use wiremock to stand in for the search endpoint and exercise
//! the full query cycle end-to-end.

mod common;
mod fetch_tests;
mod search_tests;
