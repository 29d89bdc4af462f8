//! Built-in argument definitions
//!
//! The standard front-end and decoder options, with their declared kinds,
//! defaults, and help text. This is what `ConfigStore::with_defaults` (and
//! `Decoder::default_config`) starts from; options declared without a
//! default stay undefined until explicitly set.

use crate::store::ConfigStore;
use crate::value::{ArgKind, ArgValue};

/// Compile-time-typed default for an argument definition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArgDefault {
    Float(f64),
    Int(i64),
    Str(&'static str),
    Boolean(bool),
}

impl ArgDefault {
    pub fn kind(&self) -> ArgKind {
        match self {
            ArgDefault::Float(_) => ArgKind::Float,
            ArgDefault::Int(_) => ArgKind::Int,
            ArgDefault::Str(_) => ArgKind::String,
            ArgDefault::Boolean(_) => ArgKind::Boolean,
        }
    }

    pub fn value(&self) -> ArgValue {
        match *self {
            ArgDefault::Float(v) => ArgValue::Float(v),
            ArgDefault::Int(v) => ArgValue::Int(v),
            ArgDefault::Str(v) => ArgValue::String(v.to_string()),
            ArgDefault::Boolean(v) => ArgValue::Boolean(v),
        }
    }
}

/// One argument definition: name, declared kind, optional default, help text.
#[derive(Debug, Clone, Copy)]
pub struct ArgDefn {
    pub name: &'static str,
    pub kind: ArgKind,
    pub default: Option<ArgDefault>,
    pub doc: &'static str,
}

/// The standard option set of a Sphinx-style decoder front end.
pub const DEFAULT_ARGS: &[ArgDefn] = &[
    // Waveform-to-cepstral front end
    ArgDefn {
        name: "-samprate",
        kind: ArgKind::Float,
        default: Some(ArgDefault::Float(16000.0)),
        doc: "Sampling rate",
    },
    ArgDefn {
        name: "-nfft",
        kind: ArgKind::Int,
        default: Some(ArgDefault::Int(512)),
        doc: "Size of FFT",
    },
    ArgDefn {
        name: "-frate",
        kind: ArgKind::Int,
        default: Some(ArgDefault::Int(100)),
        doc: "Frame rate",
    },
    ArgDefn {
        name: "-wlen",
        kind: ArgKind::Float,
        default: Some(ArgDefault::Float(0.025625)),
        doc: "Hamming window length",
    },
    ArgDefn {
        name: "-alpha",
        kind: ArgKind::Float,
        default: Some(ArgDefault::Float(0.97)),
        doc: "Preemphasis parameter",
    },
    ArgDefn {
        name: "-ncep",
        kind: ArgKind::Int,
        default: Some(ArgDefault::Int(13)),
        doc: "Number of cep coefficients",
    },
    ArgDefn {
        name: "-nfilt",
        kind: ArgKind::Int,
        default: Some(ArgDefault::Int(40)),
        doc: "Number of filter banks",
    },
    ArgDefn {
        name: "-lowerf",
        kind: ArgKind::Float,
        default: Some(ArgDefault::Float(133.33334)),
        doc: "Lower edge of filters",
    },
    ArgDefn {
        name: "-upperf",
        kind: ArgKind::Float,
        default: Some(ArgDefault::Float(6855.4976)),
        doc: "Upper edge of filters",
    },
    ArgDefn {
        name: "-dither",
        kind: ArgKind::Boolean,
        default: Some(ArgDefault::Boolean(false)),
        doc: "Add 1/2-bit noise",
    },
    ArgDefn {
        name: "-seed",
        kind: ArgKind::Int,
        default: Some(ArgDefault::Int(-1)),
        doc: "Seed for random number generator; if less than zero, pick our own",
    },
    // Speech data input
    ArgDefn {
        name: "-live",
        kind: ArgKind::Boolean,
        default: Some(ArgDefault::Boolean(false)),
        doc: "Get input from audio hardware",
    },
    ArgDefn {
        name: "-ctl",
        kind: ArgKind::String,
        default: None,
        doc: "Control file listing utterances to be processed",
    },
    ArgDefn {
        name: "-adcin",
        kind: ArgKind::Boolean,
        default: Some(ArgDefault::Boolean(false)),
        doc: "Input is raw audio data",
    },
    ArgDefn {
        name: "-cepdir",
        kind: ArgKind::String,
        default: None,
        doc: "Input files directory (prefixed to filespecs in control file)",
    },
    ArgDefn {
        name: "-cepext",
        kind: ArgKind::String,
        default: Some(ArgDefault::Str(".mfc")),
        doc: "Input files extension (prefixed to filespecs in control file)",
    },
    ArgDefn {
        name: "-rawlogdir",
        kind: ArgKind::String,
        default: None,
        doc: "Directory for dumping raw audio input files",
    },
    ArgDefn {
        name: "-mfclogdir",
        kind: ArgKind::String,
        default: None,
        doc: "Directory for dumping feature input files",
    },
    ArgDefn {
        name: "-cmn",
        kind: ArgKind::String,
        default: Some(ArgDefault::Str("current")),
        doc: "Cepstral mean normalization scheme ('current', 'prior', or 'none')",
    },
    ArgDefn {
        name: "-varnorm",
        kind: ArgKind::Boolean,
        default: Some(ArgDefault::Boolean(false)),
        doc: "Variance normalize each utterance (only if CMN == current)",
    },
    ArgDefn {
        name: "-agc",
        kind: ArgKind::String,
        default: Some(ArgDefault::Str("none")),
        doc: "Automatic gain control for c0 ('max', 'emax', 'noise', or 'none')",
    },
    ArgDefn {
        name: "-agcthresh",
        kind: ArgKind::Float,
        default: Some(ArgDefault::Float(2.0)),
        doc: "Initial threshold for automatic gain control",
    },
    // Acoustic and language models
    ArgDefn {
        name: "-hmm",
        kind: ArgKind::String,
        default: None,
        doc: "Directory containing acoustic model files",
    },
    ArgDefn {
        name: "-lm",
        kind: ArgKind::String,
        default: None,
        doc: "Word trigram language model input file",
    },
    ArgDefn {
        name: "-lmname",
        kind: ArgKind::String,
        default: Some(ArgDefault::Str("default")),
        doc: "Which language model in -lmctlfn to use by default",
    },
    ArgDefn {
        name: "-dict",
        kind: ArgKind::String,
        default: None,
        doc: "Main pronunciation dictionary (lexicon) input file",
    },
    ArgDefn {
        name: "-fsg",
        kind: ArgKind::String,
        default: None,
        doc: "Finite state grammar",
    },
    // Search
    ArgDefn {
        name: "-beam",
        kind: ArgKind::Float,
        default: Some(ArgDefault::Float(1e-48)),
        doc: "Beam width applied to every frame in Viterbi search",
    },
    ArgDefn {
        name: "-wbeam",
        kind: ArgKind::Float,
        default: Some(ArgDefault::Float(7e-29)),
        doc: "Beam width applied to word exits",
    },
    ArgDefn {
        name: "-lw",
        kind: ArgKind::Float,
        default: Some(ArgDefault::Float(6.5)),
        doc: "Language model probability weight",
    },
    ArgDefn {
        name: "-wip",
        kind: ArgKind::Float,
        default: Some(ArgDefault::Float(0.65)),
        doc: "Word insertion penalty",
    },
    ArgDefn {
        name: "-fwdtree",
        kind: ArgKind::Boolean,
        default: Some(ArgDefault::Boolean(true)),
        doc: "Run forward lexicon-tree search (1st pass)",
    },
    ArgDefn {
        name: "-fwdflat",
        kind: ArgKind::Boolean,
        default: Some(ArgDefault::Boolean(true)),
        doc: "Run forward flat-lexicon search over word lattice (2nd pass)",
    },
    ArgDefn {
        name: "-bestpath",
        kind: ArgKind::Boolean,
        default: Some(ArgDefault::Boolean(true)),
        doc: "Run bestpath (Dijkstra) search over word lattice (3rd pass)",
    },
    ArgDefn {
        name: "-latsize",
        kind: ArgKind::Int,
        default: Some(ArgDefault::Int(50000)),
        doc: "Lattice size",
    },
    ArgDefn {
        name: "-maxwpf",
        kind: ArgKind::Int,
        default: Some(ArgDefault::Int(-1)),
        doc: "Maximum number of distinct word exits at each frame (or -1 for no pruning)",
    },
    ArgDefn {
        name: "-maxhmmpf",
        kind: ArgKind::Int,
        default: Some(ArgDefault::Int(-1)),
        doc: "Maximum number of active HMMs to maintain at each frame (or -1 for no pruning)",
    },
    ArgDefn {
        name: "-nbest",
        kind: ArgKind::Int,
        default: Some(ArgDefault::Int(0)),
        doc: "Number of N-best hypotheses to write to -nbestdir",
    },
    // Debugging and logging
    ArgDefn {
        name: "-backtrace",
        kind: ArgKind::Boolean,
        default: Some(ArgDefault::Boolean(false)),
        doc: "Print results and backtraces to log file",
    },
    ArgDefn {
        name: "-logfn",
        kind: ArgKind::String,
        default: None,
        doc: "File to write log messages in",
    },
];

/// Look up the built-in definition for an option name.
pub fn arg_defn(name: &str) -> Option<&'static ArgDefn> {
    DEFAULT_ARGS.iter().find(|defn| defn.name == name)
}

impl ConfigStore {
    /// A store pre-populated with the standard decoder defaults.
    ///
    /// Options declared without a default (`-hmm`, `-rawlogdir`, ...) are
    /// not present; getting one fails with `UnknownOption` until it is set.
    pub fn with_defaults() -> Self {
        let mut store = ConfigStore::new();
        for defn in DEFAULT_ARGS {
            if let Some(default) = &defn.default {
                match *default {
                    ArgDefault::Float(v) => store.set_float(defn.name, v),
                    ArgDefault::Int(v) => store.set_int(defn.name, v),
                    ArgDefault::Str(v) => store.set_string(defn.name, v),
                    ArgDefault::Boolean(v) => store.set_boolean(defn.name, v),
                }
                .expect("definitions table holds unique names");
            }
        }
        store
    }
}
