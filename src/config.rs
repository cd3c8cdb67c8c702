use crate::domain::{BumpSeverity, Module, ModuleKind, Version, ROOT_PATH};
use crate::error::{ModverError, Result};
use crate::graph::ModuleGraph;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Commit-type mapping target: a severity or explicit ignore.
///
/// `Ignore` exists only at the configuration/classification layer; it is
/// resolved to `BumpSeverity::None` before anything reaches the cascade.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TypeMapping {
    Major,
    Minor,
    Patch,
    Ignore,
}

/// Represents the complete configuration for modver.
///
/// Contains commit classification rules, the dependency-transfer table,
/// pre-release and snapshot settings, run mode flags, and the module
/// manifest supplied by the adapter.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub severities: SeverityConfig,

    #[serde(default)]
    pub cascade: CascadeConfig,

    #[serde(default)]
    pub prerelease: PrereleaseConfig,

    #[serde(default)]
    pub snapshot: SnapshotConfig,

    #[serde(default)]
    pub modes: ModeConfig,

    #[serde(default)]
    pub modules: Vec<ManifestModule>,
}

/// Returns the default commit type to severity mapping.
fn default_type_mapping() -> HashMap<String, TypeMapping> {
    let mut map = HashMap::new();
    map.insert("feat".to_string(), TypeMapping::Minor);
    map.insert("fix".to_string(), TypeMapping::Patch);
    map.insert("perf".to_string(), TypeMapping::Patch);
    map.insert("refactor".to_string(), TypeMapping::Patch);
    map.insert("docs".to_string(), TypeMapping::Ignore);
    map.insert("style".to_string(), TypeMapping::Ignore);
    map.insert("test".to_string(), TypeMapping::Ignore);
    map.insert("chore".to_string(), TypeMapping::Ignore);
    map.insert("build".to_string(), TypeMapping::Ignore);
    map.insert("ci".to_string(), TypeMapping::Ignore);
    map
}

/// Configuration for commit classification.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SeverityConfig {
    #[serde(default = "default_type_mapping")]
    pub types: HashMap<String, TypeMapping>,

    /// Severity for commit types absent from the mapping
    #[serde(default)]
    pub default_severity: BumpSeverity,
}

impl Default for SeverityConfig {
    fn default() -> Self {
        SeverityConfig {
            types: default_type_mapping(),
            default_severity: BumpSeverity::None,
        }
    }
}

fn default_transfer() -> BumpSeverity {
    BumpSeverity::Patch
}

/// Dependency-transfer table: the severity a dependent module receives for
/// each severity of the module it depends on.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CascadeConfig {
    #[serde(default = "default_transfer")]
    pub major: BumpSeverity,

    #[serde(default = "default_transfer")]
    pub minor: BumpSeverity,

    #[serde(default = "default_transfer")]
    pub patch: BumpSeverity,
}

impl CascadeConfig {
    /// Severity transferred across one affects edge for a source severity
    ///
    /// `None` is never a cascade source and transfers nothing.
    pub fn transfer(&self, source: BumpSeverity) -> BumpSeverity {
        match source {
            BumpSeverity::Major => self.major,
            BumpSeverity::Minor => self.minor,
            BumpSeverity::Patch => self.patch,
            BumpSeverity::None => BumpSeverity::None,
        }
    }
}

impl Default for CascadeConfig {
    fn default() -> Self {
        CascadeConfig {
            major: default_transfer(),
            minor: default_transfer(),
            patch: default_transfer(),
        }
    }
}

fn default_prerelease_identifier() -> String {
    "alpha".to_string()
}

/// Pre-release settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct PrereleaseConfig {
    #[serde(default = "default_prerelease_identifier")]
    pub identifier: String,
}

impl Default for PrereleaseConfig {
    fn default() -> Self {
        PrereleaseConfig {
            identifier: default_prerelease_identifier(),
        }
    }
}

fn default_snapshot_suffix() -> String {
    "SNAPSHOT".to_string()
}

fn default_true() -> bool {
    true
}

/// Snapshot suffix settings, including the adapter capability flag.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct SnapshotConfig {
    #[serde(default = "default_snapshot_suffix")]
    pub suffix: String,

    /// Whether the adapter's version format supports snapshot suffixes
    #[serde(default = "default_true")]
    pub supported: bool,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        SnapshotConfig {
            suffix: default_snapshot_suffix(),
            supported: default_true(),
        }
    }
}

/// Run mode flags, all off by default; CLI flags OR into these.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct ModeConfig {
    #[serde(default)]
    pub prerelease: bool,

    #[serde(default)]
    pub include_unchanged: bool,

    #[serde(default)]
    pub build_metadata: bool,

    #[serde(default)]
    pub snapshot: bool,
}

/// One module entry of the adapter-supplied manifest.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ManifestModule {
    pub id: String,

    /// Display name, defaults to the id
    #[serde(default)]
    pub name: Option<String>,

    /// Path relative to the repository root, "." for the root module
    pub path: String,

    pub version: String,

    /// Ids of modules a change here propagates to
    #[serde(default)]
    pub affects: Vec<String>,

    /// Whether the module declares its own version (vs. inheriting one)
    #[serde(default = "default_true")]
    pub declared_version: bool,
}

impl ManifestModule {
    fn to_module(&self) -> Result<Module> {
        let version = Version::parse(&self.version).map_err(|e| {
            ModverError::version(format!("Module '{}': {}", self.id, e))
        })?;

        Ok(Module {
            id: self.id.clone(),
            name: self.name.clone().unwrap_or_else(|| self.id.clone()),
            path: self.path.clone(),
            kind: if self.path == ROOT_PATH {
                ModuleKind::Root
            } else {
                ModuleKind::Module
            },
            affects: self.affects.clone(),
            version,
            declared_version: self.declared_version,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            severities: SeverityConfig::default(),
            cascade: CascadeConfig::default(),
            prerelease: PrereleaseConfig::default(),
            snapshot: SnapshotConfig::default(),
            modes: ModeConfig::default(),
            modules: Vec::new(),
        }
    }
}

impl Config {
    /// Reject configurations the calculation cannot run with.
    ///
    /// Typed deserialization already rejects malformed severity values; this
    /// covers the string-valued fields.
    pub fn validate(&self) -> Result<()> {
        if self.prerelease.identifier.is_empty()
            || !self
                .prerelease
                .identifier
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(ModverError::config(format!(
                "Invalid prerelease identifier: '{}'",
                self.prerelease.identifier
            )));
        }

        if self.snapshot.suffix.is_empty()
            || !self
                .snapshot
                .suffix
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(ModverError::config(format!(
                "Invalid snapshot suffix: '{}'",
                self.snapshot.suffix
            )));
        }

        Ok(())
    }

    /// Build the validated module graph from the manifest entries
    pub fn build_graph(&self) -> Result<ModuleGraph> {
        let modules = self
            .modules
            .iter()
            .map(|entry| entry.to_module())
            .collect::<Result<Vec<_>>>()?;
        ModuleGraph::new(modules)
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `modver.toml` in current directory
/// 3. `~/.config/.modver.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed, or fails validation
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./modver.toml").exists() {
        fs::read_to_string("./modver.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".modver.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config =
        toml::from_str(&config_str).map_err(|e| ModverError::config(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_type_mapping() {
        let config = Config::default();
        assert_eq!(
            config.severities.types.get("feat"),
            Some(&TypeMapping::Minor)
        );
        assert_eq!(
            config.severities.types.get("docs"),
            Some(&TypeMapping::Ignore)
        );
        assert_eq!(config.severities.default_severity, BumpSeverity::None);
    }

    #[test]
    fn test_transfer_table_defaults_to_patch() {
        let cascade = CascadeConfig::default();
        assert_eq!(cascade.transfer(BumpSeverity::Major), BumpSeverity::Patch);
        assert_eq!(cascade.transfer(BumpSeverity::Minor), BumpSeverity::Patch);
        assert_eq!(cascade.transfer(BumpSeverity::Patch), BumpSeverity::Patch);
        assert_eq!(cascade.transfer(BumpSeverity::None), BumpSeverity::None);
    }

    #[test]
    fn test_parse_full_config() {
        let raw = r#"
            [severities]
            default_severity = "patch"

            [severities.types]
            feat = "minor"
            docs = "ignore"

            [cascade]
            major = "major"
            minor = "patch"
            patch = "patch"

            [prerelease]
            identifier = "rc"

            [modes]
            prerelease = true

            [[modules]]
            id = "root"
            path = "."
            version = "1.0.0"

            [[modules]]
            id = "core"
            path = "core"
            version = "2.1.0"
            affects = ["root"]
        "#;

        let config: Config = toml::from_str(raw).unwrap();
        assert_eq!(config.severities.default_severity, BumpSeverity::Patch);
        assert_eq!(config.cascade.major, BumpSeverity::Major);
        assert_eq!(config.prerelease.identifier, "rc");
        assert!(config.modes.prerelease);
        assert!(!config.modes.snapshot);
        assert_eq!(config.modules.len(), 2);
        assert_eq!(config.modules[1].affects, vec!["root".to_string()]);
    }

    #[test]
    fn test_malformed_severity_is_fatal_at_parse() {
        let raw = r#"
            [severities.types]
            feat = "huge"
        "#;
        assert!(toml::from_str::<Config>(raw).is_err());

        let raw = r#"
            [cascade]
            major = "ignore"
        "#;
        // "ignore" is not a severity; it must not leak into the transfer table
        assert!(toml::from_str::<Config>(raw).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_identifiers() {
        let mut config = Config::default();
        config.prerelease.identifier = "al pha".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.snapshot.suffix = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_build_graph_reports_version_error_with_module_id() {
        let mut config = Config::default();
        config.modules.push(ManifestModule {
            id: "root".to_string(),
            name: None,
            path: ".".to_string(),
            version: "not-a-version".to_string(),
            affects: Vec::new(),
            declared_version: true,
        });

        let err = config.build_graph().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("root"));
        assert!(msg.contains("not-a-version"));
    }
}
