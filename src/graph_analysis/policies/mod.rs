mod latest_version;

pub use latest_version::LatestVersionPolicy;
