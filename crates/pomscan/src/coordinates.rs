//! Effective coordinate resolution
//!
//! groupId, artifactId and version fall back to the `<parent>` block when the
//! project leaves them empty. A coordinate missing from both is an authoring
//! defect in the build output and is reported as a fatal error. Packaging
//! always resolves, defaulting to `jar`.

use std::fmt;
use std::path::Path;

use crate::descriptor::Descriptor;
use crate::error::{Error, Result};

/// Declared artifact type of a module
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Packaging {
    #[default]
    Jar,
    Pom,
    /// Anything else (`war`, `ear`, `bundle`, ...)
    Other(String),
}

impl From<&str> for Packaging {
    fn from(s: &str) -> Self {
        match s.trim() {
            "" | "jar" => Packaging::Jar,
            "pom" => Packaging::Pom,
            other => Packaging::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Packaging {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Packaging::Jar => write!(f, "jar"),
            Packaging::Pom => write!(f, "pom"),
            Packaging::Other(s) => write!(f, "{}", s),
        }
    }
}

/// Fully resolved coordinates of one descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinates {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub packaging: Packaging,
}

impl Descriptor {
    /// Effective groupId
    pub fn group_id(&self) -> Result<&str> {
        self.fallback("groupId", &self.group_id, &self.parent.group_id)
    }

    /// Effective artifactId
    pub fn artifact_id(&self) -> Result<&str> {
        self.fallback("artifactId", &self.artifact_id, &self.parent.artifact_id)
    }

    /// Effective version
    pub fn version(&self) -> Result<&str> {
        self.fallback("version", &self.version, &self.parent.version)
    }

    /// Effective packaging, `jar` when undeclared
    pub fn packaging(&self) -> Packaging {
        Packaging::from(self.packaging.as_str())
    }

    pub fn is_pom_packaging(&self) -> bool {
        self.packaging() == Packaging::Pom
    }

    /// Resolve every coordinate at once
    pub fn resolve(&self) -> Result<Coordinates> {
        Ok(Coordinates {
            group_id: self.group_id()?.to_string(),
            artifact_id: self.artifact_id()?.to_string(),
            version: self.version()?.to_string(),
            packaging: self.packaging(),
        })
    }

    fn fallback<'a>(&self, field: &'static str, own: &'a str, parent: &'a str) -> Result<&'a str> {
        [own, parent]
            .into_iter()
            .map(str::trim)
            .find(|value| !value.is_empty())
            .ok_or_else(|| unresolved(field, &self.path))
    }
}

fn unresolved(field: &'static str, descriptor: &Path) -> Error {
    Error::UnresolvedCoordinate {
        field,
        descriptor: descriptor.to_path_buf(),
    }
}
