use std::path::PathBuf;

/// Palette file read when `PALETTE_FILE` is not set (relative to the
/// working directory).
pub const DEFAULT_PALETTE_FILE: &str = "palette";

/// Runtime configuration, taken from environment variables.
///
/// - `PALETTE_FILE`: path to the 768-byte palette (default `palette`)
/// - `TEXCONV_PARALLEL`: `0`/`false`/`no`/`off` to disable the rayon search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where the raw palette bytes are read from
    pub palette_path: PathBuf,

    /// Whether quantization runs on the rayon thread pool
    pub parallel: bool,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup("PALETTE_FILE").filter(|p| !p.trim().is_empty()) {
            config.palette_path = PathBuf::from(path);
        }

        if let Some(value) = lookup("TEXCONV_PARALLEL") {
            match parse_flag(&value) {
                Some(enabled) => config.parallel = enabled,
                None => {
                    tracing::warn!(value = %value, "Invalid TEXCONV_PARALLEL, using default");
                }
            }
        }

        tracing::debug!(
            palette = %config.palette_path.display(),
            parallel = config.parallel,
            "Loaded configuration"
        );

        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            palette_path: PathBuf::from(DEFAULT_PALETTE_FILE),
            parallel: true,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.palette_path, PathBuf::from("palette"));
        assert!(config.parallel);
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_palette_file_override() {
        let config = Config::from_lookup(lookup_from(&[("PALETTE_FILE", "/tmp/pal.bin")]));
        assert_eq!(config.palette_path, PathBuf::from("/tmp/pal.bin"));
    }

    #[test]
    fn test_blank_palette_file_ignored() {
        let config = Config::from_lookup(lookup_from(&[("PALETTE_FILE", "  ")]));
        assert_eq!(config.palette_path, PathBuf::from(DEFAULT_PALETTE_FILE));
    }

    #[test]
    fn test_parallel_flag_values() {
        for off in ["0", "false", "No", "OFF"] {
            let config = Config::from_lookup(lookup_from(&[("TEXCONV_PARALLEL", off)]));
            assert!(!config.parallel, "{off} should disable parallel mode");
        }
        for on in ["1", "true", "yes", "On"] {
            let config = Config::from_lookup(lookup_from(&[("TEXCONV_PARALLEL", on)]));
            assert!(config.parallel, "{on} should enable parallel mode");
        }
    }

    #[test]
    fn test_invalid_parallel_flag_keeps_default() {
        let config = Config::from_lookup(lookup_from(&[("TEXCONV_PARALLEL", "maybe")]));
        assert!(config.parallel);
    }
}
