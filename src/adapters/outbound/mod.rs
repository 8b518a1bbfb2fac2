/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod caching;
pub mod console;
pub mod filesystem;
pub mod formatters;
