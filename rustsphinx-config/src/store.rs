//! The typed option store
//!
//! `ConfigStore` is an insertion-ordered map from option name to typed value.
//! Names are opaque strings, conventionally `-`-prefixed (`-samprate`); the
//! store never normalizes names or expands values (a `~` in a path stays a
//! `~`). An option's kind is fixed the first time the name is defined, and
//! every later access under a different kind is an error.
//!
//! A store is always an explicit instance. There is no process-wide
//! configuration; callers construct one (empty, from the defaults table, or
//! from a file) and pass it to the decoder.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::value::{ArgKind, ArgValue};

/// One registered option: a name and its typed value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigEntry {
    pub name: String,
    pub value: ArgValue,
}

/// Anything that can yield its current option set.
///
/// The decoder session implements this; `ConfigStore::snapshot_from` turns
/// any source into a standalone store. Values are current as of the call,
/// nothing more — mutating the snapshot does not touch the source.
pub trait ConfigSource {
    fn config_entries(&self) -> Vec<ConfigEntry>;
}

/// Insertion-ordered, typed key/value registry of decoder options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ConfigEntry>", into = "Vec<ConfigEntry>")]
pub struct ConfigStore {
    entries: Vec<ConfigEntry>,
    index: HashMap<String, usize>,
}

impl ConfigStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of defined options.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Is `name` defined?
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// The declared kind of `name`, if defined.
    pub fn kind_of(&self, name: &str) -> Option<ArgKind> {
        self.get(name).map(ArgValue::kind)
    }

    /// The raw value of `name`, if defined.
    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.index.get(name).map(|&i| &self.entries[i].value)
    }

    /// Iterate entries in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &ConfigEntry> {
        self.entries.iter()
    }

    pub fn set_float(&mut self, name: &str, value: f64) -> Result<()> {
        self.set_value(name, ArgValue::Float(value))
    }

    pub fn set_int(&mut self, name: &str, value: i64) -> Result<()> {
        self.set_value(name, ArgValue::Int(value))
    }

    pub fn set_string(&mut self, name: &str, value: &str) -> Result<()> {
        self.set_value(name, ArgValue::String(value.to_string()))
    }

    pub fn set_boolean(&mut self, name: &str, value: bool) -> Result<()> {
        self.set_value(name, ArgValue::Boolean(value))
    }

    pub fn get_float(&self, name: &str) -> Result<f64> {
        match self.lookup(name)? {
            ArgValue::Float(v) => Ok(*v),
            other => Err(ConfigError::type_mismatch(name, other.kind(), ArgKind::Float)),
        }
    }

    pub fn get_int(&self, name: &str) -> Result<i64> {
        match self.lookup(name)? {
            ArgValue::Int(v) => Ok(*v),
            other => Err(ConfigError::type_mismatch(name, other.kind(), ArgKind::Int)),
        }
    }

    pub fn get_string(&self, name: &str) -> Result<String> {
        match self.lookup(name)? {
            ArgValue::String(v) => Ok(v.clone()),
            other => Err(ConfigError::type_mismatch(
                name,
                other.kind(),
                ArgKind::String,
            )),
        }
    }

    pub fn get_boolean(&self, name: &str) -> Result<bool> {
        match self.lookup(name)? {
            ArgValue::Boolean(v) => Ok(*v),
            other => Err(ConfigError::type_mismatch(
                name,
                other.kind(),
                ArgKind::Boolean,
            )),
        }
    }

    /// Load options from a text configuration file.
    ///
    /// One option per line, name then value, whitespace-separated. Blank
    /// lines and lines starting with `#` are ignored. Each value's kind is
    /// inferred from its lexical form (see [`ArgValue::from_literal`]).
    ///
    /// The whole file is parsed and kind-checked before the store is
    /// touched: on any error the store is left unmodified. A kind conflict,
    /// either against an already-defined option or between two lines of the
    /// same file, fails with `TypeMismatch`; a malformed line fails with
    /// `Parse`.
    ///
    /// Returns the number of options read.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let parsed = self.parse_entries(&contents)?;

        let count = parsed.len();
        for (name, value) in parsed {
            // Pre-checked against both the store and the file itself
            self.set_value(&name, value)?;
        }
        tracing::info!(path = %path.display(), options = count, "loaded configuration file");
        Ok(count)
    }

    /// Snapshot the current option set of a session or other source.
    ///
    /// Fails with `TypeMismatch` only if the source yields the same name
    /// under two different kinds, which a well-behaved session never does.
    pub fn snapshot_from<S: ConfigSource>(source: &S) -> Result<Self> {
        let mut store = ConfigStore::new();
        for entry in source.config_entries() {
            store.set_value(&entry.name, entry.value)?;
        }
        Ok(store)
    }

    fn lookup(&self, name: &str) -> Result<&ArgValue> {
        self.get(name)
            .ok_or_else(|| ConfigError::unknown_option(name))
    }

    /// Insert or update, preserving the declared kind.
    ///
    /// Redefinition under another kind fails; it never overwrites-and-retypes.
    fn set_value(&mut self, name: &str, value: ArgValue) -> Result<()> {
        if let Some(&i) = self.index.get(name) {
            let declared = self.entries[i].value.kind();
            if declared != value.kind() {
                return Err(ConfigError::type_mismatch(name, declared, value.kind()));
            }
            self.entries[i].value = value;
        } else {
            self.index.insert(name.to_string(), self.entries.len());
            self.entries.push(ConfigEntry {
                name: name.to_string(),
                value,
            });
        }
        Ok(())
    }

    /// Parse file contents without mutating the store.
    fn parse_entries(&self, contents: &str) -> Result<Vec<(String, ArgValue)>> {
        let mut parsed: Vec<(String, ArgValue)> = Vec::new();
        let mut file_kinds: HashMap<String, ArgKind> = HashMap::new();

        for (idx, raw) in contents.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut tokens = line.split_whitespace();
            let name = match tokens.next() {
                Some(name) => name,
                None => continue,
            };
            let literal = tokens.next().ok_or_else(|| {
                ConfigError::parse(line_no, format!("missing value for option {}", name))
            })?;
            if let Some(extra) = tokens.next() {
                return Err(ConfigError::parse(
                    line_no,
                    format!("unexpected trailing token {:?} after {}", extra, name),
                ));
            }

            let value = ArgValue::from_literal(literal);
            let declared = file_kinds.get(name).copied().or_else(|| self.kind_of(name));
            if let Some(declared) = declared {
                if declared != value.kind() {
                    return Err(ConfigError::type_mismatch(name, declared, value.kind()));
                }
            }
            file_kinds.insert(name.to_string(), value.kind());

            tracing::debug!(option = name, value = %value, line = line_no, "parsed option");
            parsed.push((name.to_string(), value));
        }

        Ok(parsed)
    }
}

impl ConfigSource for ConfigStore {
    fn config_entries(&self) -> Vec<ConfigEntry> {
        self.entries.clone()
    }
}

impl From<ConfigStore> for Vec<ConfigEntry> {
    fn from(store: ConfigStore) -> Self {
        store.entries
    }
}

impl TryFrom<Vec<ConfigEntry>> for ConfigStore {
    type Error = String;

    fn try_from(entries: Vec<ConfigEntry>) -> std::result::Result<Self, String> {
        let mut store = ConfigStore::new();
        for entry in entries {
            if store.contains(&entry.name) {
                return Err(format!(
                    "duplicate option {} in serialized configuration",
                    entry.name
                ));
            }
            store.index.insert(entry.name.clone(), store.entries.len());
            store.entries.push(entry);
        }
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_set_get_roundtrip_all_kinds() {
        let mut config = ConfigStore::new();
        config.set_float("-samprate", 8000.0).expect("set float");
        config.set_int("-nfft", 256).expect("set int");
        config
            .set_string("-rawlogdir", "~/pocketsphinx")
            .expect("set string");
        config.set_boolean("-backtrace", true).expect("set boolean");

        assert_eq!(config.get_float("-samprate").expect("get float"), 8000.0);
        assert_eq!(config.get_int("-nfft").expect("get int"), 256);
        assert_eq!(
            config.get_string("-rawlogdir").expect("get string"),
            "~/pocketsphinx",
            "string values must come back unexpanded"
        );
        assert!(config.get_boolean("-backtrace").expect("get boolean"));
    }

    #[test]
    fn test_get_undefined_is_unknown_option() {
        let config = ConfigStore::new();
        match config.get_float("-samprate") {
            Err(ConfigError::UnknownOption(name)) => assert_eq!(name, "-samprate"),
            other => panic!("expected UnknownOption, got {:?}", other),
        }
    }

    #[test]
    fn test_cross_kind_get_is_type_mismatch() {
        let mut config = ConfigStore::new();
        config.set_int("-nfft", 512).expect("set int");

        assert_eq!(config.get_int("-nfft").expect("get int"), 512);
        match config.get_float("-nfft") {
            Err(ConfigError::TypeMismatch {
                name,
                declared,
                requested,
            }) => {
                assert_eq!(name, "-nfft");
                assert_eq!(declared, ArgKind::Int);
                assert_eq!(requested, ArgKind::Float);
            }
            other => panic!("expected TypeMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_same_kind_redefinition_overwrites() {
        let mut config = ConfigStore::new();
        config.set_float("-samprate", 16000.0).expect("set");
        config.set_float("-samprate", 8000.0).expect("overwrite");
        assert_eq!(config.get_float("-samprate").expect("get"), 8000.0);
        assert_eq!(config.len(), 1, "overwrite must not add a second entry");
    }

    #[test]
    fn test_cross_kind_redefinition_fails_and_keeps_value() {
        let mut config = ConfigStore::new();
        config.set_int("-samprate", 16000).expect("set");

        assert!(matches!(
            config.set_float("-samprate", 8000.0),
            Err(ConfigError::TypeMismatch { .. })
        ));
        // The failed set must not have retyped or clobbered the entry
        assert_eq!(config.get_int("-samprate").expect("get"), 16000);
    }

    #[test]
    fn test_setters_define_undefined_names() {
        let mut config = ConfigStore::new();
        config
            .set_string("-something12321", "abc")
            .expect("define new string option");
        assert_eq!(config.get_string("-something12321").expect("get"), "abc");
        assert_eq!(config.kind_of("-something12321"), Some(ArgKind::String));
    }

    #[test]
    fn test_iteration_preserves_definition_order() {
        let mut config = ConfigStore::new();
        config.set_float("-samprate", 16000.0).expect("set");
        config.set_int("-nfft", 512).expect("set");
        config.set_boolean("-backtrace", false).expect("set");

        let names: Vec<&str> = config.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["-samprate", "-nfft", "-backtrace"]);
    }

    fn write_config_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn test_load_from_file() {
        let file = write_config_file(
            "# decoder settings\n\
             -samprate 16000.5\n\
             -nfft 512\n\
             \n\
             -backtrace yes\n\
             -cepext .mfc\n",
        );

        let mut config = ConfigStore::new();
        let count = config.load_from_file(file.path()).expect("load file");
        assert_eq!(count, 4);
        assert_eq!(config.get_float("-samprate").expect("get"), 16000.5);
        assert_eq!(config.get_int("-nfft").expect("get"), 512);
        assert!(config.get_boolean("-backtrace").expect("get"));
        assert_eq!(config.get_string("-cepext").expect("get"), ".mfc");
    }

    #[test]
    fn test_load_conflicting_redefinition_fails_atomically() {
        // -samprate appears as an int literal, then as a float literal
        let file = write_config_file("-samprate 16000\n-samprate 8000.0\n");

        let mut config = ConfigStore::new();
        let err = config.load_from_file(file.path()).expect_err("must fail");
        match err {
            ConfigError::TypeMismatch {
                name,
                declared,
                requested,
            } => {
                assert_eq!(name, "-samprate");
                assert_eq!(declared, ArgKind::Int);
                assert_eq!(requested, ArgKind::Float);
            }
            other => panic!("expected TypeMismatch, got {:?}", other),
        }
        assert!(
            config.is_empty(),
            "a failed load must leave the store untouched"
        );
    }

    #[test]
    fn test_load_conflict_with_existing_entry_fails_atomically() {
        let file = write_config_file("-nfft 1024\n-samprate no\n");

        let mut config = ConfigStore::new();
        config.set_float("-samprate", 16000.0).expect("set");
        assert!(matches!(
            config.load_from_file(file.path()),
            Err(ConfigError::TypeMismatch { .. })
        ));
        assert!(!config.contains("-nfft"), "no partial population on error");
        assert_eq!(config.get_float("-samprate").expect("get"), 16000.0);
    }

    #[test]
    fn test_load_malformed_lines() {
        let missing = write_config_file("-samprate 16000\n-nfft\n");
        let mut config = ConfigStore::new();
        match config.load_from_file(missing.path()) {
            Err(ConfigError::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected Parse at line 2, got {:?}", other),
        }
        assert!(config.is_empty());

        let trailing = write_config_file("-cmn current prior\n");
        match config.load_from_file(trailing.path()) {
            Err(ConfigError::Parse { line, .. }) => assert_eq!(line, 1),
            other => panic!("expected Parse at line 1, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let mut config = ConfigStore::new();
        let missing = std::path::Path::new("/nonexistent/rustsphinx.cfg");
        assert!(matches!(
            config.load_from_file(missing),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_snapshot_from_store_source() {
        let mut config = ConfigStore::new();
        config.set_boolean("-backtrace", true).expect("set");
        config.set_float("-samprate", 16000.0).expect("set");

        let snapshot = ConfigStore::snapshot_from(&config).expect("snapshot");
        assert_eq!(snapshot, config);

        // The snapshot is detached: mutating it leaves the source alone
        let mut snapshot = snapshot;
        snapshot.set_boolean("-backtrace", false).expect("set");
        assert!(config.get_boolean("-backtrace").expect("get"));
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut config = ConfigStore::new();
        config.set_float("-samprate", 16000.0).expect("set");
        config.set_int("-nfft", 512).expect("set");
        config.set_string("-cepext", ".mfc").expect("set");
        config.set_boolean("-backtrace", true).expect("set");

        let json = serde_json::to_string(&config).expect("serialize");
        let restored: ConfigStore = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored, config);
    }

    #[test]
    fn test_serde_rejects_duplicate_names() {
        let json = r#"[
            {"name": "-nfft", "value": {"kind": "Int", "value": 512}},
            {"name": "-nfft", "value": {"kind": "Int", "value": 256}}
        ]"#;
        assert!(serde_json::from_str::<ConfigStore>(json).is_err());
    }
}
