use std::{env, fs, path::PathBuf};

use crate::prelude::*;
use nestify::nest;
use serde::{Deserialize, Serialize};

nest! {
    #[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]*
    #[serde(rename_all = "kebab-case", default)]*
    /// Persistent configuration for jarctl.
    ///
    /// Loaded from `~/.config/jarctl/config.yaml` (or the XDG equivalent)
    /// when present; every field falls back to its default otherwise. CLI
    /// flags override file values.
    pub struct JarctlConfig {
        pub scan: pub struct ScanConfig {
            /// Directory under which artifacts are discovered.
            pub root: PathBuf,
            /// Literal substring a file name must contain to count as an
            /// artifact. Not anchored to the end of the name.
            pub suffix: String,
        },
        pub runtime: pub struct RuntimeConfig {
            /// Java executable used to launch artifacts.
            pub java_bin: String,
            /// Heap flag passed to every launch.
            pub heap_flag: String,
        },
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            root: PathBuf::from("."),
            suffix: ".jar".to_string(),
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        RuntimeConfig {
            java_bin: "java".to_string(),
            heap_flag: "-Xmx1G".to_string(),
        }
    }
}

impl Default for JarctlConfig {
    fn default() -> Self {
        JarctlConfig {
            scan: ScanConfig::default(),
            runtime: RuntimeConfig::default(),
        }
    }
}

/// Get the path to the configuration file, following the XDG Base Directory
/// Specification: `$XDG_CONFIG_HOME/jarctl/config.yaml`, falling back to
/// `~/.config/jarctl/config.yaml`.
fn get_configuration_file_path() -> PathBuf {
    let config_dir = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = env::var("HOME").expect("HOME env variable not set");
            PathBuf::from(home).join(".config")
        });
    config_dir.join("jarctl").join("config.yaml")
}

impl JarctlConfig {
    /// Load the configuration. If no file exists, return the defaults.
    pub fn load() -> Result<Self> {
        let config_path = get_configuration_file_path();

        match fs::read(&config_path) {
            Ok(config_str) => {
                let config: JarctlConfig =
                    serde_yaml::from_slice(&config_str).context(format!(
                        "Failed to parse jarctl config at {}",
                        config_path.display()
                    ))?;
                debug!("Config loaded from {}", config_path.display());
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Config file not found at {}", config_path.display());
                Ok(JarctlConfig::default())
            }
            Err(e) => bail!("Failed to load config: {e}"),
        }
    }

    /// Apply CLI overrides on top of the loaded values. The root is
    /// tilde-expanded, since a ~ may reach us unexpanded by the shell.
    pub fn with_overrides(mut self, root: Option<&str>, suffix: Option<&str>) -> Self {
        if let Some(root) = root {
            self.scan.root = PathBuf::from(shellexpand::tilde(root).as_ref());
        }
        if let Some(suffix) = suffix {
            self.scan.suffix = suffix.to_owned();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_original_fixed_constants() {
        let config = JarctlConfig::default();
        assert_eq!(config.scan.suffix, ".jar");
        assert_eq!(config.runtime.java_bin, "java");
        assert_eq!(config.runtime.heap_flag, "-Xmx1G");
    }

    #[test]
    fn partial_config_files_fall_back_to_defaults() {
        let config: JarctlConfig = serde_yaml::from_str("scan:\n  root: /srv/deploy\n").unwrap();
        assert_eq!(config.scan.root, PathBuf::from("/srv/deploy"));
        assert_eq!(config.scan.suffix, ".jar");
        assert_eq!(config.runtime, RuntimeConfig::default());
    }

    #[test]
    fn kebab_case_keys_are_used_for_the_runtime_section() {
        let config: JarctlConfig =
            serde_yaml::from_str("runtime:\n  java-bin: /opt/jdk/bin/java\n  heap-flag: -Xmx2G\n")
                .unwrap();
        assert_eq!(config.runtime.java_bin, "/opt/jdk/bin/java");
        assert_eq!(config.runtime.heap_flag, "-Xmx2G");
    }

    #[test]
    fn cli_flags_override_file_values() {
        let config = JarctlConfig::default().with_overrides(Some("/srv/apps"), Some(".war"));
        assert_eq!(config.scan.root, PathBuf::from("/srv/apps"));
        assert_eq!(config.scan.suffix, ".war");
    }

    #[test]
    fn overriding_nothing_keeps_the_loaded_values() {
        let config = JarctlConfig::default().with_overrides(None, None);
        assert_eq!(config, JarctlConfig::default());
    }
}
