use super::Context;
use crate::api::Catalog;
use crate::brew::{BrewCommand, PackageManager};
use crate::error::Result;
use crate::menu::PackageKind;
use crate::select::{Selector, select_one};
use colored::Colorize;

/// Pick one formula or cask from the catalog and install it.
///
/// Returns the installed name, or `None` when nothing was picked. Packages
/// already present are not filtered out here; `brew` decides what a repeated
/// install means. A non-zero exit from `brew` is returned as an error.
pub async fn install<C, S, P>(
    ctx: &Context<'_, C, S, P>,
    kind: PackageKind,
) -> Result<Option<String>>
where
    C: Catalog,
    S: Selector,
    P: PackageManager,
{
    let candidates = match kind {
        PackageKind::Formula => ctx.catalog.formulas().await,
        PackageKind::Cask => ctx.catalog.casks().await,
    };

    let Some(name) = select_one(ctx.selector, &candidates)? else {
        tracing::debug!("no {} selected", kind);
        return Ok(None);
    };

    let command = match kind {
        PackageKind::Formula => BrewCommand::install(&name),
        PackageKind::Cask => BrewCommand::install_cask(&name),
    };

    println!("Installing {} {}...", kind, name.cyan());
    ctx.brew.run_checked(&command)?;
    println!(
        "{} {} has been successfully installed.",
        "✓".green(),
        name.bold()
    );

    Ok(Some(name))
}
