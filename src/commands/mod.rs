//! Interactive workflows
//!
//! - **session**: the top-level menu loop and the install sub-menu
//! - **install**: pick and install a single formula or cask
//! - **uninstall**: pick and remove an installed package
//! - **bundle**: collect several packages, then install the ones missing

pub mod bundle;
pub mod install;
pub mod session;
pub mod uninstall;

pub use bundle::{BundleEntry, BundleReport, build_bundle, bundle, install_bundle};
pub use install::install;
pub use session::{install_menu, run};
pub use uninstall::uninstall;

use crate::api::Catalog;
use crate::brew::PackageManager;
use crate::select::Selector;

/// External collaborators shared by every workflow.
pub struct Context<'a, C, S, P> {
    pub catalog: &'a C,
    pub selector: &'a S,
    pub brew: &'a P,
}

impl<'a, C, S, P> Context<'a, C, S, P>
where
    C: Catalog,
    S: Selector,
    P: PackageManager,
{
    pub fn new(catalog: &'a C, selector: &'a S, brew: &'a P) -> Self {
        Self {
            catalog,
            selector,
            brew,
        }
    }
}
