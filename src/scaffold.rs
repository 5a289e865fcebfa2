//! Starter input files for a new vanity site.

use anyhow::{Context, Result};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};

use crate::site::{INDEX_FILE, PROJECT_FILE, VANITY_FILE};

/// Example `vanity.yml` written by `--init`.
pub const STARTER_VANITY: &str = "\
host: go.example.com
paths:
  /mycoolproject:
    repo: https://github.com/user/mycoolproject
    packages:
      - pkg/package1
      - pkg/package2
";

/// Starter index template listing every import path.
pub fn starter_index() -> String {
    let markup: Markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "{{ Host }}" }
            }
            body {
                h1 { "Welcome to {{ Host }}" }
                ul {
                    (PreEscaped("{% for v in Vanity %}"))
                    li {
                        a href="https://pkg.go.dev/{{ v.Path }}" { "{{ v.Path }}" }
                    }
                    (PreEscaped("{% endfor %}"))
                }
            }
        }
    };
    markup.into_string()
}

/// Starter project template with `go-import` and `go-source` meta tags.
pub fn starter_project() -> String {
    let markup: Markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta http-equiv="Content-Type" content="text/html; charset=utf-8";
                meta name="go-import" content="{{ Import }} {{ VCS }} {{ Repo }}";
                meta name="go-source" content="{{ Import }} {{ Display }}";
                meta http-equiv="refresh" content="0; url=https://pkg.go.dev/{{ Import }}";
            }
            body {
                "Redirecting to "
                a href="https://pkg.go.dev/{{ Import }}" { "pkg.go.dev/{{ Import }}" }
            }
        }
    };
    markup.into_string()
}

/// Writes starter input files into `dir`, creating it if needed.
///
/// Existing files are left untouched.
///
/// # Returns
///
/// Files that were written
///
/// # Errors
///
/// Returns error if the directory or a file cannot be written
pub fn write_starter_files(dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create folder {}", dir.display()))?;

    let files = [
        (INDEX_FILE, starter_index()),
        (PROJECT_FILE, starter_project()),
        (VANITY_FILE, STARTER_VANITY.to_string()),
    ];

    let mut written = Vec::new();
    for (name, content) in files {
        let path = dir.join(name);
        if path.exists() {
            tracing::info!(path = %path.display(), "keeping existing file");
            continue;
        }
        fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        written.push(path);
    }

    Ok(written)
}
