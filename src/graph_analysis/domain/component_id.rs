use crate::shared::Result;
use std::fmt;
use std::str::FromStr;

/// Sentinel version label meaning "the latest version, not yet resolved"
pub const LATEST: &str = "latest";

/// Delimiter between a component and its version in canonical strings
pub const VERSION_DELIMITER: char = '@';

/// Delimiter between the scope and the component name
const SCOPE_DELIMITER: char = '/';

/// Maximum length for a component identifier string (security limit)
const MAX_ID_LENGTH: usize = 512;

/// ComponentId value object identifying a component, optionally at a version
///
/// Canonical forms:
/// - without version: `scope/name` (or `name` when unscoped)
/// - with version: `scope/name@1.0.0`
///
/// An identifier with no version, or with the [`LATEST`] sentinel, requests
/// the latest version of the component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId {
    scope: Option<String>,
    name: String,
    version: Option<String>,
}

impl ComponentId {
    pub fn new(scope: Option<String>, name: String, version: Option<String>) -> Result<Self> {
        if name.is_empty() {
            anyhow::bail!("Component name cannot be empty");
        }
        if let Some(scope) = &scope {
            if scope.is_empty() {
                anyhow::bail!("Component scope cannot be empty when provided");
            }
        }
        if let Some(version) = &version {
            if version.is_empty() {
                anyhow::bail!("Component version cannot be empty when provided");
            }
            if version.contains(VERSION_DELIMITER) {
                anyhow::bail!(
                    "Component version '{}' must not contain '{}'",
                    version,
                    VERSION_DELIMITER
                );
            }
        }

        Ok(Self {
            scope,
            name,
            version,
        })
    }

    /// Parses a canonical identifier string such as `scope/name@1.0.0`
    pub fn parse(id: &str) -> Result<Self> {
        let id = id.trim();
        if id.is_empty() {
            anyhow::bail!("Component identifier cannot be empty");
        }

        // Security: Length limit to prevent DoS
        if id.len() > MAX_ID_LENGTH {
            anyhow::bail!(
                "Component identifier is too long ({} bytes). Maximum allowed: {} bytes",
                id.len(),
                MAX_ID_LENGTH
            );
        }

        let (without_version, version) = match id.rsplit_once(VERSION_DELIMITER) {
            Some((head, version)) => (head, Some(version.to_string())),
            None => (id, None),
        };

        let (scope, name) = match without_version.split_once(SCOPE_DELIMITER) {
            Some((scope, name)) => (Some(scope.to_string()), name.to_string()),
            None => (None, without_version.to_string()),
        };

        Self::new(scope, name, version)
    }

    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// True when this identifier asks for the latest version
    pub fn is_latest(&self) -> bool {
        match self.version.as_deref() {
            None => true,
            Some(version) => version == LATEST,
        }
    }

    /// Returns a copy of this identifier pinned to `version`
    pub fn with_version(&self, version: &str) -> Self {
        Self {
            scope: self.scope.clone(),
            name: self.name.clone(),
            version: Some(version.to_string()),
        }
    }

    /// Returns a copy of this identifier with the version removed
    pub fn without_version(&self) -> Self {
        Self {
            scope: self.scope.clone(),
            name: self.name.clone(),
            version: None,
        }
    }

    pub fn to_string_without_version(&self) -> String {
        match &self.scope {
            Some(scope) => format!("{}{}{}", scope, SCOPE_DELIMITER, self.name),
            None => self.name.clone(),
        }
    }

    /// Canonical string including the version. Falls back to the
    /// without-version form when no version is set.
    pub fn to_string_with_version(&self) -> String {
        match &self.version {
            Some(version) => format!(
                "{}{}{}",
                self.to_string_without_version(),
                VERSION_DELIMITER,
                version
            ),
            None => self.to_string_without_version(),
        }
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_with_version())
    }
}

impl FromStr for ComponentId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}
