//! Template rendering for the index and project pages.
//!
//! Both templates are Tera templates supplied by the user. Rendering is
//! byte-exact substitution: auto-escaping is off so `go-source` display
//! templates such as `{/dir}` and `#L{line}` reach the page untouched.
//! Referencing an undefined variable is a render error.

use serde::Serialize;
use std::collections::BTreeMap;
use tera::{Context, Tera};

use crate::error::{Error, Result};
use crate::vanity::VanityPath;

const INDEX_TEMPLATE: &str = "index.tmpl";
const PROJECT_TEMPLATE: &str = "project.tmpl";

/// Context exposed to the index template.
#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct IndexContext<'a> {
    host: &'a str,
    vanity: Vec<IndexEntry<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct IndexEntry<'a> {
    path: String,
    repo: &'a str,
}

/// Context exposed to the project template.
#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct ProjectContext<'a> {
    import: String,
    repo: &'a str,
    display: &'a str,
    #[serde(rename = "VCS")]
    vcs: &'a str,
    host: &'a str,
}

/// Rendered project page for one configured path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    packages: Vec<String>,
    content: Vec<u8>,
}

impl RenderedPage {
    /// Sub-packages that receive a copy of this page.
    pub fn packages(&self) -> &[String] {
        &self.packages
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }
}

/// Project pages keyed by configured path (e.g. `/foo`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedSet {
    pages: BTreeMap<String, RenderedPage>,
}

impl RenderedSet {
    /// Returns the page for a path, or `None` if the path is not configured.
    pub fn get(&self, path: &str) -> Option<&RenderedPage> {
        self.pages.get(path)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Iterates pages in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RenderedPage)> {
        self.pages.iter().map(|(path, page)| (path.as_str(), page))
    }
}

/// Parses a template under the given name with auto-escaping disabled.
fn compile(name: &str, source: &str) -> Result<Tera> {
    let mut tera = Tera::default();
    tera.autoescape_on(vec![]);
    tera.add_raw_template(name, source)
        .map_err(|source| Error::TemplateParse {
            name: name.to_string(),
            source,
        })?;
    Ok(tera)
}

/// Renders the site index page.
///
/// The template sees `Host` and `Vanity`, a sequence of `{Path, Repo}`
/// entries in the same order as `paths`, where `Path` is the full import
/// path (`host` followed by the configured path).
///
/// # Errors
///
/// Returns error if the template cannot be parsed or references data that
/// does not exist.
pub fn render_index(paths: &[VanityPath], host: &str, template: &str) -> Result<Vec<u8>> {
    let tera = compile(INDEX_TEMPLATE, template)?;

    let vanity = paths
        .iter()
        .map(|p| IndexEntry {
            path: p.import_path(host),
            repo: p.repo(),
        })
        .collect();
    let context =
        Context::from_serialize(IndexContext { host, vanity }).map_err(Error::Context)?;

    let rendered = tera
        .render(INDEX_TEMPLATE, &context)
        .map_err(|source| Error::TemplateRender {
            name: INDEX_TEMPLATE.to_string(),
            source,
        })?;

    Ok(rendered.into_bytes())
}

/// Renders one project page per configured path.
///
/// The template is parsed once and executed for each path with `Import`,
/// `Repo`, `Display`, `VCS` and `Host`. The first failing path aborts the
/// whole call and no partial set is returned.
///
/// # Errors
///
/// Returns error if the template cannot be parsed or fails to render for
/// any path.
pub fn render_project(paths: &[VanityPath], host: &str, template: &str) -> Result<RenderedSet> {
    let tera = compile(PROJECT_TEMPLATE, template)?;

    let mut pages = BTreeMap::new();
    for path in paths {
        let import = path.import_path(host);
        let context = Context::from_serialize(ProjectContext {
            import: import.clone(),
            repo: path.repo(),
            display: path.display(),
            vcs: path.vcs().as_str(),
            host,
        })
        .map_err(Error::Context)?;

        let rendered = tera
            .render(PROJECT_TEMPLATE, &context)
            .map_err(|source| Error::TemplateRender {
                name: format!("{} for {}", PROJECT_TEMPLATE, import),
                source,
            })?;

        pages.insert(
            path.path().to_string(),
            RenderedPage {
                packages: path.packages().to_vec(),
                content: rendered.into_bytes(),
            },
        );
    }

    Ok(RenderedSet { pages })
}
