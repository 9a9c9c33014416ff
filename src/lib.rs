//! Retort library exports for testing

pub mod core;
pub mod headless;
pub mod request;
pub mod tui;
pub mod webhook;

#[cfg(test)]
pub mod test_support;
