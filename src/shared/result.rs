/// Crate-wide Result alias carrying an `anyhow::Error`.
/// Typed `GraphError`s convert into it at the point they are raised.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
