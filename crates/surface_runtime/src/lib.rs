//! Surface bootstrap: icon templates, backend selection, and compute-module mount.
//!
//! The runtime owns the startup order the surface depends on: icon templates are
//! injected first, then the file I/O backend is detected once and wrapped in the
//! bridge, and only then is the compute module mounted with its two capabilities.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod boot;
mod icons;

pub use boot::{boot, boot_with, ComputeModule};
pub use icons::load_icon_templates;
