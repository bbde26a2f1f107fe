use serde::{Deserialize, Serialize};

/// Default location of the TOML configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "config/chameleon.toml";

/// What collision finding does when the supplied tag does not verify.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MismatchPolicy {
    /// Fail with [`Error::HashMismatch`](crate::Error::HashMismatch).
    #[default]
    Reject,
    /// Log a warning and rebind the recomputed hash anyway.
    ///
    /// Only for callers that depend on the lenient behaviour; the resulting tag carries the
    /// recomputed hash, not the one supplied.
    Warn,
}

/// Trapdoor configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrapdoorConfig {
    /// Handling of tags that fail the pre-rebinding check.
    pub mismatch_policy: MismatchPolicy,
}

impl TrapdoorConfig {
    /// Loads configuration from a TOML file and environment variables.
    ///
    /// Priority (highest first):
    /// 1. Environment variables with the `CHAMELEON_` prefix (e.g. `CHAMELEON_MISMATCH_POLICY=warn`)
    /// 2. The TOML file at `CHAMELEON_CONFIG_PATH`, or [`DEFAULT_CONFIG_PATH`]; a missing file is skipped
    /// 3. Built-in defaults
    ///
    /// # Errors
    /// Returns an error if a source is malformed or names an unknown policy.
    #[allow(clippy::result_large_err)]
    pub fn from_env() -> figment::error::Result<Self> {
        use figment::providers::{Env, Format, Serialized, Toml};
        use figment::Figment;

        let config_path = std::env::var("CHAMELEON_CONFIG_PATH")
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(&config_path))
            .merge(Env::prefixed("CHAMELEON_").ignore(&["config_path"]))
            .extract()
    }
}
