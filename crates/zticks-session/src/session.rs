//! Logged-in cache session.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use zticks_decode::TickStore;
use zticks_resample::Resampler;
use zticks_types::{Bar, DaySource, HistoryRequest, TickSeries};

use crate::{SessionConfig, SessionError};

/// Path segments between a broker directory and an account directory.
const CACHE_SEGMENTS: [&str; 2] = ["BacktestingCache", "V1"];

/// Broker and account identifying one cache tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Broker directory name.
    pub broker: String,
    /// Account directory name.
    pub account: String,
}

impl Credentials {
    /// Creates new credentials.
    #[must_use]
    pub fn new(broker: impl Into<String>, account: impl Into<String>) -> Self {
        Self {
            broker: broker.into(),
            account: account.into(),
        }
    }

    /// Returns `<cache_root>/<broker>/BacktestingCache/V1/<account>`.
    #[must_use]
    pub fn cache_dir(&self, cache_root: &Path) -> PathBuf {
        let mut path = cache_root.join(&self.broker);
        path.extend(CACHE_SEGMENTS);
        path.join(&self.account)
    }
}

/// One login-to-logout lifetime over an account cache.
///
/// Owns the resolved cache directory, the configuration and the resampling
/// cursor. Each session starts with a fresh cursor.
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    credentials: Credentials,
    store: TickStore,
    resampler: Resampler,
}

impl Session {
    /// Logs in to the cache of `credentials` under the configured root.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, no cache root can
    /// be determined, or the account cache directory does not exist.
    pub fn login(config: SessionConfig, credentials: &Credentials) -> Result<Self, SessionError> {
        config.validate()?;
        let cache_root = config
            .resolved_cache_root()
            .ok_or(SessionError::NoCacheRoot)?;
        let cache_dir = credentials.cache_dir(&cache_root);

        if !cache_dir.is_dir() {
            return Err(SessionError::CacheNotFound { path: cache_dir });
        }

        info!(
            broker = %credentials.broker,
            account = %credentials.account,
            cache_dir = %cache_dir.display(),
            "logged in"
        );

        Ok(Self {
            resampler: Resampler::new(config.slack_days),
            store: TickStore::new(cache_dir),
            credentials: credentials.clone(),
            config,
        })
    }

    /// Returns the session configuration.
    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Returns the credentials used to log in.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the account cache directory.
    #[must_use]
    pub fn cache_dir(&self) -> &Path {
        self.store.cache_dir()
    }

    /// Returns the underlying day store.
    #[must_use]
    pub const fn store(&self) -> &TickStore {
        &self.store
    }

    /// Returns the resampler and its cursor.
    #[must_use]
    pub const fn resampler(&self) -> &Resampler {
        &self.resampler
    }

    /// Produces the next records for `request`, newest first.
    ///
    /// Continues from where the previous call stopped. An empty result
    /// means no more data is available for the window; a later request
    /// with a newer end day starts a fresh walk.
    pub fn history(&mut self, request: &HistoryRequest) -> Vec<Bar> {
        let tick_scale = self.config.tick_scale(&request.symbol);
        debug!(%request, tick_scale, "history request");
        self.resampler.resample(&self.store, request, tick_scale)
    }

    /// Restarts the backward walk.
    pub fn reset(&mut self) {
        self.resampler.reset();
    }

    /// Lists symbols with cached ticks.
    ///
    /// # Errors
    ///
    /// Returns an error if the cache directory cannot be read.
    pub fn symbols(&self) -> Result<Vec<String>, SessionError> {
        self.store.symbols().map_err(|e| SessionError::ReadDir {
            path: self.store.cache_dir().to_path_buf(),
            source: e,
        })
    }

    /// Lists days with cached ticks for `symbol`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the symbol directory cannot be read.
    pub fn available_days(&self, symbol: &str) -> Result<Vec<NaiveDate>, SessionError> {
        self.store
            .available_days(symbol)
            .map_err(|e| SessionError::ReadDir {
                path: self.store.symbol_dir(symbol),
                source: e,
            })
    }

    /// Decodes one day of `symbol` without touching the cursor.
    ///
    /// # Errors
    ///
    /// Returns an error if the day is missing or cannot be decoded.
    pub fn load_day(
        &self,
        symbol: &str,
        day: NaiveDate,
    ) -> Result<TickSeries, zticks_types::DayLoadError> {
        self.store.load_day(symbol, day)
    }
}
