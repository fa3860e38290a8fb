//! vneditor library exports for testing

pub mod api;
pub mod core;
pub mod routing;

#[cfg(test)]
pub mod test_support;
