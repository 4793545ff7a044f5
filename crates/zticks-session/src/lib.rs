//! Session and broker facade for the zticks tick cache reader.
//!
//! - [`SessionConfig`] - Cache root, slack window and per-symbol tick scales
//! - [`Credentials`] - Broker and account naming one cache tree
//! - [`Session`] - A logged-in cache with its resampling cursor
//! - [`CacheBroker`] - Login/history/logout facade for trading hosts

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/zticks/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod broker;
mod config;
mod error;
mod session;

pub use broker::{BROKER_NAME, BROKER_VERSION, CacheBroker};
pub use config::{DEFAULT_MAX_TICKS, DEFAULT_TICK_SCALE, SessionConfig, default_cache_root};
pub use error::{ConfigError, Result, SessionError};
pub use session::{Credentials, Session};
