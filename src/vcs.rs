//! Version control systems and repository host conventions.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Version control system understood by `go get`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Vcs {
    Bzr,
    Git,
    Hg,
    Svn,
}

impl Vcs {
    /// Returns the identifier used in `go-import` meta tags.
    pub fn as_str(&self) -> &'static str {
        match self {
            Vcs::Bzr => "bzr",
            Vcs::Git => "git",
            Vcs::Hg => "hg",
            Vcs::Svn => "svn",
        }
    }
}

impl fmt::Display for Vcs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known VCS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVcs(pub String);

impl FromStr for Vcs {
    type Err = UnknownVcs;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bzr" => Ok(Vcs::Bzr),
            "git" => Ok(Vcs::Git),
            "hg" => Ok(Vcs::Hg),
            "svn" => Ok(Vcs::Svn),
            other => Err(UnknownVcs(other.to_string())),
        }
    }
}

/// Repository hosts with known browse URL conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnownHost {
    GitHub,
    Bitbucket,
}

impl KnownHost {
    /// Detects the host of a repository URL by prefix.
    ///
    /// Matching is exact and case sensitive: `http://github.com/...` or a
    /// mixed case host is not recognized.
    pub fn detect(repo: &str) -> Option<Self> {
        if repo.starts_with("https://github.com/") {
            Some(KnownHost::GitHub)
        } else if repo.starts_with("https://bitbucket.org") {
            Some(KnownHost::Bitbucket)
        } else {
            None
        }
    }

    /// Builds the three part `go-source` display template for a repository.
    ///
    /// The `{/dir}`, `{file}` and `{line}` placeholders are left for the
    /// `go` tool to expand.
    pub fn display_template(&self, repo: &str) -> String {
        match self {
            KnownHost::GitHub => format!(
                "{repo} {repo}/tree/master{{/dir}} {repo}/blob/master{{/dir}}/{{file}}#L{{line}}"
            ),
            KnownHost::Bitbucket => format!(
                "{repo} {repo}/src/default{{/dir}} {repo}/src/default{{/dir}}/{{file}}#{{file}}-{{line}}"
            ),
        }
    }

    /// VCS implied by the host, if the host serves only one.
    pub fn default_vcs(&self) -> Option<Vcs> {
        match self {
            KnownHost::GitHub => Some(Vcs::Git),
            // Bitbucket served both git and hg
            KnownHost::Bitbucket => None,
        }
    }
}
