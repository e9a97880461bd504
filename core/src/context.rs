use crate::time::{Clock, DateTime, SystemClock};
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

/// Context provides the environment and the clock for request signing.
///
/// ## Important
///
/// `Context::new()` uses a no-op env that sees no variables at all, and the
/// system clock. Binaries should opt into the process environment with
/// [`OsEnv`]; tests usually inject [`StaticEnv`] and a fixed clock.
///
/// ## Example
///
/// ```
/// use blobsig_core::{Context, OsEnv};
///
/// let ctx = Context::new().with_env(OsEnv);
/// ```
#[derive(Clone)]
pub struct Context {
    env: Arc<dyn Env>,
    clock: Arc<dyn Clock>,
}

impl Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("env", &self.env)
            .field("clock", &self.clock)
            .finish()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Create a new Context with a no-op env and the system clock.
    pub fn new() -> Self {
        Self {
            env: Arc::new(NoopEnv),
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the environment implementation.
    pub fn with_env(mut self, env: impl Env) -> Self {
        self.env = Arc::new(env);
        self
    }

    /// Replace the clock implementation.
    pub fn with_clock(mut self, clock: impl Clock) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Get the environment variable.
    ///
    /// - Returns `Some(v)` if the environment variable is found and is valid utf-8.
    /// - Returns `None` if the environment variable is not found or value is invalid.
    #[inline]
    pub fn env_var(&self, key: &str) -> Option<String> {
        self.env.var(key)
    }

    /// Read the current time from the configured clock.
    #[inline]
    pub fn now(&self) -> DateTime {
        self.clock.now()
    }
}

/// Env abstracts environment variable access.
pub trait Env: Debug + Send + Sync + 'static {
    /// Get an environment variable.
    ///
    /// - Returns `Some(v)` if the environment variable is found and is valid utf-8.
    /// - Returns `None` if the environment variable is not found or value is invalid.
    fn var(&self, key: &str) -> Option<String>;
}

/// Implements Env for the OS context.
#[derive(Debug, Copy, Clone)]
pub struct OsEnv;

impl Env for OsEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var_os(key)?.into_string().ok()
    }
}

/// StaticEnv provides a static env environment.
///
/// This is useful for testing or for providing a fixed environment.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    /// The environment variables to use.
    pub envs: HashMap<String, String>,
}

impl StaticEnv {
    /// Build a StaticEnv from key-value pairs.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            envs: pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl Env for StaticEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.envs.get(key).cloned()
    }
}

/// NoopEnv is a no-op implementation that always returns None.
///
/// This is used when no environment is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEnv;

impl Env for NoopEnv {
    fn var(&self, _key: &str) -> Option<String> {
        None
    }
}
