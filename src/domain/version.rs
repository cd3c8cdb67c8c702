use crate::domain::prerelease::PreRelease;
use crate::domain::severity::BumpSeverity;
use crate::error::{ModverError, Result};
use std::fmt;

/// Semantic version with optional pre-release tag and build metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub prerelease: Option<PreRelease>,
    pub build: Option<String>,
}

impl Version {
    /// Create a plain release version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
            prerelease: None,
            build: None,
        }
    }

    /// Parse a version string (e.g. "1.2.3", "v1.2.3-alpha.0", "1.2.3+abc123")
    pub fn parse(s: &str) -> Result<Self> {
        // Tolerate a 'v' or 'V' prefix from tag-style inputs
        let clean = s.trim_start_matches('v').trim_start_matches('V');

        let (rest, build) = match clean.split_once('+') {
            Some((rest, build)) if !build.is_empty() => (rest, Some(build.to_string())),
            Some(_) => {
                return Err(ModverError::version(format!(
                    "Empty build metadata in '{}'",
                    s
                )))
            }
            None => (clean, None),
        };

        let (numbers, prerelease) = match rest.split_once('-') {
            Some((numbers, tag)) => (numbers, Some(PreRelease::parse(tag)?)),
            None => (rest, None),
        };

        let parts: Vec<&str> = numbers.split('.').collect();
        if parts.len() != 3 {
            return Err(ModverError::version(format!(
                "Invalid version format: '{}' - expected X.Y.Z",
                s
            )));
        }

        let major = parts[0]
            .parse::<u32>()
            .map_err(|_| ModverError::version(format!("Invalid major version: {}", parts[0])))?;
        let minor = parts[1]
            .parse::<u32>()
            .map_err(|_| ModverError::version(format!("Invalid minor version: {}", parts[1])))?;
        let patch = parts[2]
            .parse::<u32>()
            .map_err(|_| ModverError::version(format!("Invalid patch version: {}", parts[2])))?;

        Ok(Version {
            major,
            minor,
            patch,
            prerelease,
            build,
        })
    }

    /// Apply a release bump, clearing any pre-release tag and build metadata
    ///
    /// A `None` severity leaves the version untouched.
    pub fn bump(&self, severity: BumpSeverity) -> Self {
        match severity {
            BumpSeverity::Major => Version::new(self.major + 1, 0, 0),
            BumpSeverity::Minor => Version::new(self.major, self.minor + 1, 0),
            BumpSeverity::Patch => Version::new(self.major, self.minor, self.patch + 1),
            BumpSeverity::None => self.clone(),
        }
    }

    /// Apply a pre-release bump with the given identifier
    ///
    /// A version already carrying a pre-release tag keeps its release numbers
    /// and increments the tag's counter. A version without one opens a fresh
    /// tag at counter 0 after bumping the release component for the severity
    /// (patch-level when the severity is `None`).
    pub fn prerelease_bump(&self, severity: BumpSeverity, identifier: &str) -> Self {
        match &self.prerelease {
            Some(tag) => Version {
                major: self.major,
                minor: self.minor,
                patch: self.patch,
                prerelease: Some(tag.incremented()),
                build: None,
            },
            None => {
                let effective = if severity == BumpSeverity::None {
                    BumpSeverity::Patch
                } else {
                    severity
                };
                let mut next = self.bump(effective);
                next.prerelease = Some(PreRelease::opened(identifier));
                next
            }
        }
    }

    /// Attach build metadata (rendered after any pre-release tag)
    pub fn with_build(&self, metadata: &str) -> Self {
        Version {
            build: Some(metadata.to_string()),
            ..self.clone()
        }
    }

    /// Append a snapshot suffix to the pre-release portion, idempotently
    ///
    /// A version whose pre-release tag already ends with the suffix is
    /// returned unchanged, so repeated application is safe.
    pub fn append_snapshot(&self, suffix: &str) -> Self {
        let prerelease = match &self.prerelease {
            None => PreRelease {
                identifier: suffix.to_string(),
                counter: None,
            },
            Some(tag) => {
                let rendered = tag.to_string();
                if rendered == suffix || rendered.ends_with(&format!("-{}", suffix)) {
                    return self.clone();
                }
                PreRelease {
                    identifier: format!("{}-{}", rendered, suffix),
                    counter: None,
                }
            }
        };

        Version {
            prerelease: Some(prerelease),
            ..self.clone()
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(prerelease) = &self.prerelease {
            write!(f, "-{}", prerelease)?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}
