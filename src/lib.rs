//! Portfolio library exports for the binary and integration tests

pub mod audio;
pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;
