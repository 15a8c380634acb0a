//! Runtime configuration.

use crate::error::{ObjectError, ObjectResult};
use once_cell::sync::OnceCell;
use std::str::FromStr;

/// Environment variable read by [`RuntimeConfig::from_env`].
pub const UNDERFLOW_POLICY_ENV: &str = "OB_UNDERFLOW_POLICY";

/// What a release does when it would take an immortal object below its floor.
///
/// Every policy clamps the count; they only differ in how loudly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnderflowPolicy {
    /// Silent no-op.
    #[default]
    Ignore,
    /// Log a warning.
    Warn,
    /// Log a warning, then fail a debug assertion. Same as `Warn` in release
    /// builds.
    Assert,
}

impl FromStr for UnderflowPolicy {
    type Err = ObjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ignore" => Ok(UnderflowPolicy::Ignore),
            "warn" => Ok(UnderflowPolicy::Warn),
            "assert" => Ok(UnderflowPolicy::Assert),
            _ => Err(ObjectError::InvalidPolicy(s.to_string())),
        }
    }
}

/// Runtime configuration options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub underflow: UnderflowPolicy,
}

impl RuntimeConfig {
    /// Reads options from the environment; unset variables keep defaults.
    pub fn from_env() -> ObjectResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ObjectResult<Self> {
        let mut config = Self::default();
        if let Some(raw) = lookup(UNDERFLOW_POLICY_ENV) {
            config.underflow = raw.parse()?;
        }
        Ok(config)
    }
}

static ACTIVE: OnceCell<RuntimeConfig> = OnceCell::new();

/// Installs the process configuration. The first call wins; returns whether
/// `config` is now the active one.
pub fn install(config: RuntimeConfig) -> bool {
    let mut installed = false;
    ACTIVE.get_or_init(|| {
        installed = true;
        config
    });
    installed
}

/// The active configuration, or the defaults if none was installed yet.
#[inline]
pub fn current() -> RuntimeConfig {
    ACTIVE.get().copied().unwrap_or_default()
}
