//! Vanity configuration parsing and resolution.
//!
//! Turns a `vanity.yml` document into an ordered list of [`VanityPath`]
//! records, filling in the VCS and `go-source` display template from the
//! repository URL when they are not given explicitly.

use serde::Deserialize;
use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::vcs::{KnownHost, Vcs};

/// Raw document layout of `vanity.yml`.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    #[serde(default)]
    host: String,
    #[serde(default)]
    paths: BTreeMap<String, RawPath>,
}

#[derive(Debug, Default, Deserialize)]
struct RawPath {
    #[serde(default)]
    repo: String,
    #[serde(default)]
    display: Option<String>,
    #[serde(default)]
    vcs: Option<String>,
    #[serde(default)]
    packages: Vec<String>,
}

/// One configured vanity import path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VanityPath {
    path: String,
    repo: String,
    display: String,
    vcs: Vcs,
    packages: Vec<String>,
}

impl VanityPath {
    /// Import path below the host, without trailing slash (e.g. `/foo`).
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// `go-source` display template, or empty when none is known.
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn vcs(&self) -> Vcs {
        self.vcs
    }

    /// Sub-packages that receive a copy of the project page.
    pub fn packages(&self) -> &[String] {
        &self.packages
    }

    /// Full import path, `host` followed by the path.
    pub fn import_path(&self, host: &str) -> String {
        format!("{}{}", host, self.path)
    }
}

/// Resolved vanity configuration.
///
/// Paths are ordered lexicographically by their normalized path so that
/// every render over the same configuration sees the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VanityConfig {
    host: String,
    paths: Vec<VanityPath>,
    ignored: Vec<String>,
}

impl VanityConfig {
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn paths(&self) -> &[VanityPath] {
        &self.paths
    }

    /// Document keys that were not recognized and were skipped.
    pub fn ignored_keys(&self) -> &[String] {
        &self.ignored
    }
}

/// Parses and resolves a vanity configuration document.
///
/// # Errors
///
/// Returns error if:
/// - The document is not valid YAML or has the wrong shape
/// - A path names a VCS other than bzr, git, hg or svn
/// - A path has no VCS and none can be inferred from its repository
///
/// No partial configuration is returned when any path fails.
///
/// # Examples
///
/// ```
/// let config = go_vanity_gen::resolve(
///     b"host: go.example.com\npaths:\n  /foo:\n    repo: https://github.com/user/foo\n",
/// )?;
/// assert_eq!(config.paths()[0].vcs().as_str(), "git");
/// # Ok::<(), go_vanity_gen::Error>(())
/// ```
pub fn resolve(document: &[u8]) -> Result<VanityConfig> {
    let mut ignored = Vec::new();
    let deserializer = serde_yaml_ng::Deserializer::from_slice(document);
    let raw: RawConfig = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
        ignored.push(path.to_string());
    })?;

    // Keys that normalize to the same path collapse; the later key wins.
    let mut resolved = BTreeMap::new();
    for (key, entry) in raw.paths {
        let path = resolve_path(&key, entry)?;
        resolved.insert(path.path.clone(), path);
    }

    Ok(VanityConfig {
        host: raw.host,
        paths: resolved.into_values().collect(),
        ignored,
    })
}

fn resolve_path(key: &str, entry: RawPath) -> Result<VanityPath> {
    let host = KnownHost::detect(&entry.repo);

    let display = match entry.display {
        Some(display) if !display.is_empty() => display,
        _ => host
            .map(|h| h.display_template(&entry.repo))
            .unwrap_or_default(),
    };

    let vcs = match entry.vcs.as_deref() {
        Some(name) if !name.is_empty() => name.parse::<Vcs>().map_err(|_| Error::UnknownVcs {
            path: key.to_string(),
            vcs: name.to_string(),
        })?,
        _ => host
            .and_then(|h| h.default_vcs())
            .ok_or_else(|| Error::UninferableVcs {
                path: key.to_string(),
                repo: entry.repo.clone(),
            })?,
    };

    Ok(VanityPath {
        path: key.strip_suffix('/').unwrap_or(key).to_string(),
        repo: entry.repo,
        display,
        vcs,
        packages: entry.packages,
    })
}
