pub mod addon;
pub mod app;
pub mod container;
pub mod core;
pub mod notifications;

// Used by the `addon_class!` macro
#[doc(hidden)]
pub use inventory;

include!(concat!(env!("OUT_DIR"), "/version.rs"));

/// Version string with build metadata, for `--version`
pub fn long_version() -> String {
    format!(
        "{} (git {}, built {})",
        env!("CARGO_PKG_VERSION"),
        GIT_HASH,
        BUILD_TIME
    )
}
