//! `mvn deploy:deploy-file` command generation

use std::borrow::Cow;
use std::collections::HashSet;

use crate::coordinates::{Coordinates, Packaging};
use crate::locate::DEFAULT_ARTIFACT_SUFFIX;

/// Maven goal every generated command runs
pub const DEPLOY_GOAL: &str = "mvn deploy:deploy-file";

/// Parameters shared by every generated command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptOptions {
    /// `-DrepositoryId`
    pub repository_id: String,
    /// `-Durl`
    pub url: String,
    /// Raw token placed before the command
    pub prefix: String,
    /// Raw token placed after the command
    pub suffix: String,
    /// Only descriptors with this packaging get a command
    pub packaging: Packaging,
    /// File suffix of `jar`-packaged artifacts
    pub artifact_suffix: String,
    /// Shell-quote substituted values
    pub quote: bool,
}

impl Default for ScriptOptions {
    fn default() -> Self {
        Self {
            repository_id: "REPO_ID".to_string(),
            url: "NEXUS_URL".to_string(),
            prefix: String::new(),
            suffix: "-e".to_string(),
            packaging: Packaging::Jar,
            artifact_suffix: DEFAULT_ARTIFACT_SUFFIX.to_string(),
            quote: true,
        }
    }
}

impl ScriptOptions {
    /// Whether a descriptor with `packaging` should get a command
    pub fn accepts(&self, packaging: &Packaging) -> bool {
        &self.packaging == packaging
    }
}

/// One deploy command, ready to render
#[derive(Debug, Clone)]
pub struct DeployCommand<'a> {
    pub coordinates: &'a Coordinates,
    /// Artifact path relative to the scan root
    pub file: &'a str,
    pub options: &'a ScriptOptions,
}

impl<'a> DeployCommand<'a> {
    pub fn new(coordinates: &'a Coordinates, file: &'a str, options: &'a ScriptOptions) -> Self {
        Self {
            coordinates,
            file,
            options,
        }
    }

    /// Render the command line
    pub fn render(&self) -> String {
        let packaging = self.coordinates.packaging.to_string();

        let properties = [
            ("groupId", self.value(&self.coordinates.group_id)),
            ("artifactId", self.value(&self.coordinates.artifact_id)),
            ("version", self.value(&self.coordinates.version)),
            ("packaging", self.value(&packaging)),
            ("file", self.value(self.file)),
            ("repositoryId", self.value(&self.options.repository_id)),
            ("url", self.value(&self.options.url)),
        ];

        let mut tokens: Vec<String> = Vec::with_capacity(properties.len() + 3);
        if !self.options.prefix.is_empty() {
            tokens.push(self.options.prefix.clone());
        }
        tokens.push(DEPLOY_GOAL.to_string());
        for (name, value) in properties {
            tokens.push(format!("-D{}={}", name, value));
        }
        if !self.options.suffix.is_empty() {
            tokens.push(self.options.suffix.clone());
        }

        tokens.join(" ")
    }

    fn value<'v>(&self, value: &'v str) -> Cow<'v, str> {
        if self.options.quote {
            shell_quote(value)
        } else {
            Cow::Borrowed(value)
        }
    }
}

/// Build the command for one artifact, or `None` when its packaging is
/// filtered out
pub fn emit(coordinates: &Coordinates, file: &str, options: &ScriptOptions) -> Option<String> {
    if !options.accepts(&coordinates.packaging) {
        return None;
    }
    Some(DeployCommand::new(coordinates, file, options).render())
}

/// Quote `value` for a POSIX shell when it holds anything beyond a plain word
pub fn shell_quote(value: &str) -> Cow<'_, str> {
    let plain = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "_./:@%+=,-".contains(c));

    if plain {
        Cow::Borrowed(value)
    } else {
        Cow::Owned(format!("'{}'", value.replace('\'', "'\\''")))
    }
}

/// Unique, non-empty entries in first-seen order
pub fn distinct(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .into_iter()
        .filter(|item| !item.is_empty() && seen.insert(item.clone()))
        .collect()
}
