//! Integration tests for the gish virtual filesystem

mod config_integration;
mod github_client;
mod shell_session;
mod test_utils;
