//! Shared test utilities for integration tests.
//!
//! Provides the sample templates and vanity configuration used across test
//! files, plus a helper that lays them out as an input directory.

#![allow(dead_code)]

use anyhow::Result;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const VANITY_CONFIG: &str = "
host: go.example.com
paths:
  /mycoolproject:
    repo: https://github.com/user/mycoolproject
    packages:
      - pkg/package1
      - pkg/package2

  /myothercoolproject:
    repo: https://github.com/user/myothercoolproject
";

pub const INDEX_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<body>
<h1>Welcome to {{ Host }}</h1>
<ul>
{% for v in Vanity %}<li><a href="https://pkg.go.dev/{{ v.Path }}">{{ v.Path }}</a></li>{% endfor %}
</ul>
</body>
</html>"#;

pub const INDEX_OUT: &str = r#"<!DOCTYPE html>
<html>
<body>
<h1>Welcome to go.example.com</h1>
<ul>
<li><a href="https://pkg.go.dev/go.example.com/mycoolproject">go.example.com/mycoolproject</a></li><li><a href="https://pkg.go.dev/go.example.com/myothercoolproject">go.example.com/myothercoolproject</a></li>
</ul>
</body>
</html>"#;

pub const PROJECT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta http-equiv="Content-Type" content="text/html; charset=utf-8"/>
<meta name="go-import" content="{{ Import }} {{ VCS }} {{ Repo }}">
<meta name="go-source" content="{{ Import }} {{ Display }}">
</head>
<body>
Nothing to see here folks!
</body>
</html>"#;

pub const MYCOOLPROJECT_OUT: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta http-equiv="Content-Type" content="text/html; charset=utf-8"/>
<meta name="go-import" content="go.example.com/mycoolproject git https://github.com/user/mycoolproject">
<meta name="go-source" content="go.example.com/mycoolproject https://github.com/user/mycoolproject https://github.com/user/mycoolproject/tree/master{/dir} https://github.com/user/mycoolproject/blob/master{/dir}/{file}#L{line}">
</head>
<body>
Nothing to see here folks!
</body>
</html>"#;

pub const MYOTHERCOOLPROJECT_OUT: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta http-equiv="Content-Type" content="text/html; charset=utf-8"/>
<meta name="go-import" content="go.example.com/myothercoolproject git https://github.com/user/myothercoolproject">
<meta name="go-source" content="go.example.com/myothercoolproject https://github.com/user/myothercoolproject https://github.com/user/myothercoolproject/tree/master{/dir} https://github.com/user/myothercoolproject/blob/master{/dir}/{file}#L{line}">
</head>
<body>
Nothing to see here folks!
</body>
</html>"#;

/// Writes an input directory with the given templates and config.
///
/// # Errors
///
/// Returns error if the directory or any file cannot be created
pub fn write_input_dir(index: &str, project: &str, vanity: &str) -> Result<TempDir> {
    let dir = TempDir::new()?;
    write_file(dir.path(), "index.tmpl", index)?;
    write_file(dir.path(), "project.tmpl", project)?;
    write_file(dir.path(), "vanity.yml", vanity)?;
    Ok(dir)
}

/// Writes an input directory with the sample templates and config.
pub fn sample_input_dir() -> Result<TempDir> {
    write_input_dir(INDEX_TEMPLATE, PROJECT_TEMPLATE, VANITY_CONFIG)
}

/// Writes file below `root`, creating parent directories as needed.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(root: &Path, path: &str, content: &str) -> Result<()> {
    let file_path = root.join(path);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}
