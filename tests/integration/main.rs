//! Integration tests for subplay

mod cli_test;
mod helpers;
mod session_test;
