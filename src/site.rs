//! Reading inputs and writing the generated site to disk.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::render::{RenderedSet, render_index, render_project};
use crate::vanity::resolve;

/// Index template file name inside the input directory.
pub const INDEX_FILE: &str = "index.tmpl";
/// Project template file name inside the input directory.
pub const PROJECT_FILE: &str = "project.tmpl";
/// Vanity configuration file name inside the input directory.
pub const VANITY_FILE: &str = "vanity.yml";

/// Raw contents of the input directory.
#[derive(Debug, Clone)]
pub struct Inputs {
    pub index: String,
    pub project: String,
    pub vanity: Vec<u8>,
}

/// Summary of a completed generation run.
#[derive(Debug, Clone)]
pub struct Report {
    pub paths: usize,
    pub files: Vec<PathBuf>,
}

/// Reads the three input files from a directory.
///
/// # Errors
///
/// Returns error naming the file if any of them cannot be read or a
/// template is not valid UTF8.
pub fn read_inputs(dir: &Path) -> Result<Inputs> {
    let read_template = |name: &str| -> Result<String> {
        let path = dir.join(name);
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file {}", path.display()))
    };

    let vanity_path = dir.join(VANITY_FILE);
    let vanity = fs::read(&vanity_path)
        .with_context(|| format!("Failed to read file {}", vanity_path.display()))?;

    Ok(Inputs {
        index: read_template(INDEX_FILE)?,
        project: read_template(PROJECT_FILE)?,
        vanity,
    })
}

/// Joins an import path or package name below `base`.
///
/// Leading slashes are dropped so the result stays inside `base`.
///
/// # Errors
///
/// Returns error if the path contains a `..` component.
fn join_relative(base: &Path, path: &str) -> Result<PathBuf> {
    let relative = Path::new(path.trim_start_matches('/'));
    if relative
        .components()
        .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
    {
        bail!("Path escapes output directory: {}", path);
    }
    Ok(base.join(relative))
}

fn write_page(dir: &Path, content: &[u8]) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create folder {}", dir.display()))?;
    let file = dir.join("index.html");
    fs::write(&file, content)
        .with_context(|| format!("Failed to create file {}", file.display()))?;
    tracing::debug!(path = %file.display(), "wrote page");
    Ok(file)
}

/// Writes the index and every project page below `out_dir`.
///
/// Each configured path gets `<out><path>/index.html`, and each of its
/// packages a byte-identical copy at `<out><path>/<package>/index.html`.
///
/// # Returns
///
/// Every file written, index first.
///
/// # Errors
///
/// Returns error if a path escapes the output directory or any directory
/// or file cannot be written. Files written before the failure remain.
pub fn write_site(out_dir: &Path, index: &[u8], rendered: &RenderedSet) -> Result<Vec<PathBuf>> {
    let mut written = vec![write_page(out_dir, index)?];

    for (path, page) in rendered.iter() {
        let base = join_relative(out_dir, path)?;
        written.push(write_page(&base, page.content())?);
        for package in page.packages() {
            let dir = join_relative(&base, package)
                .with_context(|| format!("Invalid package {} for {}", package, path))?;
            written.push(write_page(&dir, page.content())?);
        }
    }

    Ok(written)
}

/// Runs a full generation: read inputs, resolve, render, write.
///
/// Nothing is written until the configuration resolves and both templates
/// render successfully.
///
/// # Errors
///
/// Returns the first failure of any step.
pub fn generate(input: &Path, output: &Path) -> Result<Report> {
    let inputs = read_inputs(input)?;

    let config = resolve(&inputs.vanity).context("Failed to resolve vanity config")?;
    for key in config.ignored_keys() {
        tracing::warn!(key = %key, "ignoring unknown key in {}", VANITY_FILE);
    }
    tracing::info!(host = config.host(), paths = config.paths().len(), "resolved vanity config");

    let index = render_index(config.paths(), config.host(), &inputs.index)
        .context("Failed to generate index")?;
    let rendered = render_project(config.paths(), config.host(), &inputs.project)
        .context("Failed to generate project files")?;

    let files = write_site(output, &index, &rendered)?;
    tracing::info!(files = files.len(), output = %output.display(), "generated site");

    Ok(Report {
        paths: config.paths().len(),
        files,
    })
}
