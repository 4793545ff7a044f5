//! Host-facing broker facade.

use tracing::{debug, info, warn};
use zticks_types::{Bar, HistoryRequest, ZticksError};

use crate::{Credentials, Session, SessionConfig, SessionError};

/// Name reported to hosts.
pub const BROKER_NAME: &str = "zticks";

/// Version of the host contract implemented by [`CacheBroker`].
pub const BROKER_VERSION: u32 = 2;

/// Login/history/logout facade a trading host drives.
///
/// Wraps at most one [`Session`]. History calls write into a caller-owned
/// buffer and return the number of records written; zero means the walk
/// has no more data.
#[derive(Debug)]
pub struct CacheBroker {
    config: SessionConfig,
    session: Option<Session>,
}

impl CacheBroker {
    /// Opens the broker with a configuration; no session is active yet.
    #[must_use]
    pub const fn open(config: SessionConfig) -> Self {
        Self {
            config,
            session: None,
        }
    }

    /// Returns the broker name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        BROKER_NAME
    }

    /// Returns the host contract version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        BROKER_VERSION
    }

    /// Returns the number of records a host should request per call.
    #[must_use]
    pub const fn max_ticks(&self) -> usize {
        self.config.max_ticks
    }

    /// Returns the active session, if logged in.
    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Returns true while a session is active.
    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    /// Logs in with `credentials`, or logs out when `None`.
    ///
    /// Any previous session is dropped first, so a failed login leaves the
    /// broker logged out.
    ///
    /// # Errors
    ///
    /// Returns an error if the account cache cannot be opened.
    pub fn login(&mut self, credentials: Option<&Credentials>) -> Result<(), SessionError> {
        if let Some(previous) = self.session.take() {
            debug!(account = %previous.credentials().account, "closing session");
        }

        let Some(credentials) = credentials else {
            info!("logged out");
            return Ok(());
        };

        match Session::login(self.config.clone(), credentials) {
            Ok(session) => {
                self.session = Some(session);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "login failed");
                Err(e)
            }
        }
    }

    /// Fills `out` with the next records for `request`.
    ///
    /// At most `out.len()` records are written, further capped by the
    /// request's own limit.
    ///
    /// # Errors
    ///
    /// Returns [`ZticksError::SessionNotInitialized`] when not logged in.
    pub fn history(&mut self, request: &HistoryRequest, out: &mut [Bar]) -> Result<usize, ZticksError> {
        let session = self
            .session
            .as_mut()
            .ok_or(ZticksError::SessionNotInitialized)?;

        let limit = request.max_count.min(out.len());
        let request = request.clone().with_max_count(limit);
        let bars = session.history(&request);

        out[..bars.len()].copy_from_slice(&bars);
        Ok(bars.len())
    }
}
