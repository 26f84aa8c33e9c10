//! Fast User-Agent classification.
//!
//! A User-Agent string is split into `key/value` tokens, then two ordered
//! signature tables run over them: the first decides the operating system,
//! the second the client (browser, app, crawler or tool).  The result is a
//! [`Classification`] with name and version of both, the device class flags
//! and a bot verdict.
//!
//! ```
//! let c = ua_classifier::classify(
//!     "Mozilla/5.0 (iPhone; CPU iPhone OS 10_3_2 like Mac OS X) AppleWebKit/603.2.4 \
//!      (KHTML, like Gecko) FxiOS/8.1.1b4948 Mobile/14F89 Safari/603.2.4",
//! );
//! assert_eq!(c.name, "Firefox");
//! assert_eq!(c.version, "8.1.1b4948");
//! assert_eq!(c.os, "iOS");
//! assert_eq!(c.os_version, "10.3.2");
//! assert!(c.mobile);
//! ```
//!
//! For many strings, keep one [`Classifier`] per thread, or hand the whole
//! slice to [`classify_batch`].

mod classifier;
mod client;
mod error;
mod helpers;
mod heuristics;
pub mod names;
mod os;
mod rules;
mod tokenizer;
mod tokens;
mod types;

pub use classifier::{classify_batch, tokenize, Classifier};
pub use error::{Error, Result};
pub use tokens::{Token, Tokens};
pub use types::*;

/// Classify one User-Agent string with throwaway scratch state.
///
/// Safe to call from any number of threads at once.
pub fn classify(ua: &str) -> Classification {
    Classifier::new().classify(ua)
}
