//! Ambient error types.
//!
//! The scheduling core itself is infallible by contract (spec.md §7:
//! invariant violations are assertion failures, not recoverable runtime
//! conditions) — no `Result` appears in [`crate::rowtable`],
//! [`crate::scheduler`], or [`crate::rowpolicy`]. This type exists only
//! for the fallible ambient operation of loading a config file, following
//! the `thiserror`-derived error pattern used throughout the broader
//! example pack (e.g. `kokizzu-readyset`, `paritytech-polkadot-sdk`) at
//! library boundaries.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}
