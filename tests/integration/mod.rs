//! Integration tests for the grouped stroke store

mod cli_binary;
mod session_replay;
mod store_scenarios;
