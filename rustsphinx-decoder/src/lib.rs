//! Decoder session surface for Rustsphinx
//!
//! A decoding session is parameterized once, at construction, by a
//! [`ConfigStore`]. The session keeps its own copy of the option set;
//! callers read it back as a detached snapshot, and mutations to a snapshot
//! reach the session only through an explicit [`Decoder::reconfigure`].
//!
//! ```
//! use rustsphinx_config::ConfigStore;
//! use rustsphinx_decoder::Decoder;
//!
//! let mut config = Decoder::default_config();
//! config.set_boolean("-backtrace", true)?;
//!
//! let decoder = Decoder::new(config)?;
//! let snapshot = ConfigStore::snapshot_from(&decoder)?;
//! assert!(snapshot.get_boolean("-backtrace")?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;

pub use error::{DecoderError, Result};

use rustsphinx_config::{ConfigEntry, ConfigSource, ConfigStore};

/// A decoding session holding an active option set.
///
/// Construction validates the handful of parameters the acoustic front end
/// would refuse outright; everything else is carried opaquely for the
/// engine to interpret.
pub struct Decoder {
    config: ConfigStore,
}

impl Decoder {
    /// The configuration a freshly constructed decoder starts from.
    pub fn default_config() -> ConfigStore {
        ConfigStore::with_defaults()
    }

    /// Initialize a session from `config`.
    ///
    /// The store is moved into the session as its active option set.
    pub fn new(config: ConfigStore) -> Result<Self> {
        validate(&config)?;
        tracing::info!(options = config.len(), "decoder session initialized");
        Ok(Self { config })
    }

    /// Borrow the active option set.
    pub fn config(&self) -> &ConfigStore {
        &self.config
    }

    /// Re-apply a (possibly mutated) snapshot as the active option set.
    ///
    /// This is the only way snapshot mutations reach the session; it runs
    /// the same validation as [`Decoder::new`] and on failure the previous
    /// option set stays active.
    pub fn reconfigure(&mut self, config: &ConfigStore) -> Result<()> {
        validate(config)?;
        self.config = config.clone();
        tracing::info!(options = self.config.len(), "decoder session reconfigured");
        Ok(())
    }
}

impl ConfigSource for Decoder {
    fn config_entries(&self) -> Vec<ConfigEntry> {
        self.config.config_entries()
    }
}

/// Reject option values the front end cannot run with.
fn validate(config: &ConfigStore) -> Result<()> {
    if config.contains("-samprate") {
        let samprate = config.get_float("-samprate")?;
        if samprate <= 0.0 {
            return Err(DecoderError::invalid_parameter(
                "-samprate",
                format!("sampling rate must be positive, got {}", samprate),
            ));
        }
    }

    if config.contains("-nfft") {
        let nfft = config.get_int("-nfft")?;
        if nfft <= 0 {
            return Err(DecoderError::invalid_parameter(
                "-nfft",
                format!("FFT size must be positive, got {}", nfft),
            ));
        }
        if nfft & (nfft - 1) != 0 {
            tracing::warn!(nfft, "FFT size is not a power of 2");
        }

        // The analysis window must fit inside the FFT
        if config.contains("-samprate") && config.contains("-wlen") {
            let samprate = config.get_float("-samprate")?;
            let wlen = config.get_float("-wlen")?;
            let frame_size = (samprate * wlen).round() as i64;
            if frame_size > nfft {
                return Err(DecoderError::invalid_parameter(
                    "-nfft",
                    format!(
                        "FFT size {} is smaller than the frame size {}",
                        nfft, frame_size
                    ),
                ));
            }
        }
    }

    Ok(())
}
