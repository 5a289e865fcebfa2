//! Static page generator for Go vanity import paths.
//!
//! A `vanity.yml` document maps import paths below a host to source
//! repositories. [`resolve`] turns it into [`VanityPath`] records, and
//! [`render_index`] / [`render_project`] execute user templates against
//! them to produce pages carrying `go-import` and `go-source` meta tags.

mod config;
mod error;
pub mod logging;
mod render;
pub mod scaffold;
pub mod site;
mod vanity;
mod vcs;

pub use config::Config;
pub use error::{Error, Result};
pub use render::{RenderedPage, RenderedSet, render_index, render_project};
pub use site::{Report, generate};
pub use vanity::{VanityConfig, VanityPath, resolve};
pub use vcs::{KnownHost, UnknownVcs, Vcs};
