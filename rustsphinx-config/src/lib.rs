//! Typed decoder configuration for Rustsphinx
//!
//! A Sphinx-style decoder is driven by a flat set of named options
//! (`-samprate`, `-nfft`, `-backtrace`, ...), each with a scalar kind fixed
//! at definition time. This crate holds that option set: a typed key/value
//! store with per-kind accessors, a line-oriented file loader, and the
//! built-in definitions table the decoder's defaults come from.
//!
//! Kinds never coerce. Setting or getting an option under a kind other than
//! the one it was defined with is an error, not a conversion.
//!
//! ## Quick Start
//!
//! ```
//! use rustsphinx_config::ConfigStore;
//!
//! let mut config = ConfigStore::with_defaults();
//! config.set_float("-samprate", 8000.0)?;
//! config.set_string("-hmm", "model/en-us")?;
//!
//! assert_eq!(config.get_float("-samprate")?, 8000.0);
//! assert_eq!(config.get_int("-nfft")?, 512);
//! assert!(config.get_float("-nfft").is_err()); // wrong kind, no coercion
//! # Ok::<(), rustsphinx_config::ConfigError>(())
//! ```

pub mod defaults;
pub mod error;
pub mod store;
pub mod value;

pub use defaults::{arg_defn, ArgDefault, ArgDefn, DEFAULT_ARGS};
pub use error::{ConfigError, Result};
pub use store::{ConfigEntry, ConfigSource, ConfigStore};
pub use value::{ArgKind, ArgValue};
