//! Load — limit loading from file and environment variables.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use thiserror::Error;

use super::model::FieldLimits;

/// Environment variable naming the limits file.
const LIMITS_FILE_VAR: &str = "PROTOCOL_LIMITS_FILE";

/// Per-field override variables, paired with a setter into the model.
const ENV_OVERRIDES: [(&str, fn(&mut FieldLimits, usize)); 6] = [
    ("PROTOCOL_MAX_APP_NAME", |l, v| l.max_app_name = v),
    ("PROTOCOL_MAX_HOSTNAME", |l, v| l.max_hostname = v),
    ("PROTOCOL_MAX_MSGID", |l, v| l.max_msgid = v),
    ("PROTOCOL_MAX_PROCID", |l, v| l.max_procid = v),
    ("PROTOCOL_MAX_ELEMENT_NAME", |l, v| l.max_element_name = v),
    ("PROTOCOL_MAX_PARAM_NAME", |l, v| l.max_param_name = v),
];

#[derive(Debug, Error)]
pub enum ConfError {
    #[error("failed to read limits file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse limits file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },

    #[error("invalid limits: {0}")]
    Invalid(String),
}

impl FieldLimits {
    /// Load limits from file or environment variables.
    /// Priority: Environment Variables > Limits File > Defaults
    pub fn load() -> Result<Self, ConfError> {
        let mut limits = match std::env::var(LIMITS_FILE_VAR) {
            Ok(path) if Path::new(&path).exists() => {
                tracing::info!("Loading field limits from: {}", path);
                Self::from_file(&path)?
            }
            Ok(path) => {
                tracing::info!("Limits file not found at {}, using defaults", path);
                Self::default()
            }
            Err(_) => Self::default(),
        };

        for (var, set) in ENV_OVERRIDES {
            if let Ok(raw) = std::env::var(var) {
                match raw.parse() {
                    Ok(value) => set(&mut limits, value),
                    Err(_) => {
                        tracing::warn!("Ignoring {}: {:?} is not a valid byte count", var, raw);
                    }
                }
            }
        }

        limits.validate()?;
        Ok(limits)
    }

    /// Load limits from a TOML file.
    pub fn from_file(path: &str) -> Result<Self, ConfError> {
        let mut file = File::open(path).map_err(|source| ConfError::Io {
            path: path.to_string(),
            source,
        })?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|source| ConfError::Io {
                path: path.to_string(),
                source,
            })?;

        let limits: FieldLimits =
            toml::from_str(&contents).map_err(|source| ConfError::Parse {
                path: path.to_string(),
                source,
            })?;
        Ok(limits)
    }

    /// Check that loaded values are sane. A zero bound in a loaded config is
    /// almost always a typo or a truncated file, not a deliberate ban on a
    /// field, so loading rejects it; callers that really want to forbid a
    /// field set the bound programmatically.
    pub fn validate(&self) -> Result<(), ConfError> {
        let bounds = [
            ("max_app_name", self.max_app_name),
            ("max_hostname", self.max_hostname),
            ("max_msgid", self.max_msgid),
            ("max_procid", self.max_procid),
            ("max_element_name", self.max_element_name),
            ("max_param_name", self.max_param_name),
        ];

        for (name, value) in bounds {
            if value == 0 {
                return Err(ConfError::Invalid(format!("{} must be > 0", name)));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;

    // Process environment is shared across test threads; every test that
    // touches PROTOCOL_* vars holds this while they are set.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_load_env_overrides_win_over_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_hostname = 64\nmax_msgid = 16").unwrap();
        std::env::set_var(LIMITS_FILE_VAR, file.path());
        std::env::set_var("PROTOCOL_MAX_HOSTNAME", "100");

        let loaded = FieldLimits::load();

        std::env::remove_var(LIMITS_FILE_VAR);
        std::env::remove_var("PROTOCOL_MAX_HOSTNAME");

        let limits = loaded.unwrap();
        // env beats file, file beats default, untouched fields stay default
        assert_eq!(limits.max_hostname, 100);
        assert_eq!(limits.max_msgid, 16);
        assert_eq!(limits.max_app_name, 48);
    }

    #[test]
    fn test_load_without_file_var_uses_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        std::env::remove_var(LIMITS_FILE_VAR);
        let limits = FieldLimits::load().unwrap();
        assert_eq!(limits, FieldLimits::default());
    }

    #[test]
    fn test_load_keeps_default_on_unparsable_env_override() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        std::env::remove_var(LIMITS_FILE_VAR);
        std::env::set_var("PROTOCOL_MAX_MSGID", "3z");

        let loaded = FieldLimits::load();

        std::env::remove_var("PROTOCOL_MAX_MSGID");

        assert_eq!(loaded.unwrap().max_msgid, 32);
    }

    #[test]
    fn test_from_file_overrides_listed_fields_only() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_hostname = 64\nmax_msgid = 16").unwrap();

        let limits = FieldLimits::from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(limits.max_hostname, 64);
        assert_eq!(limits.max_msgid, 16);
        assert_eq!(limits.max_app_name, 48);
    }

    #[test]
    fn test_from_file_missing_path_is_io_error() {
        let err = FieldLimits::from_file("/nonexistent/limits.toml").unwrap_err();
        assert!(matches!(err, ConfError::Io { .. }));
    }

    #[test]
    fn test_from_file_bad_toml_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_hostname = \"not a number\"").unwrap();

        let err = FieldLimits::from_file(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, ConfError::Parse { .. }));
    }

    #[test]
    fn test_validate_rejects_zero_bound() {
        let mut limits = FieldLimits::default();
        limits.max_procid = 0;
        let err = limits.validate().unwrap_err();
        assert!(err.to_string().contains("max_procid"));
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(FieldLimits::default().validate().is_ok());
    }
}
