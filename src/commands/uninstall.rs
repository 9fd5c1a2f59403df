use super::Context;
use crate::api::Catalog;
use crate::brew::{BrewCommand, PackageManager};
use crate::error::Result;
use crate::select::{Selector, select_one};
use colored::Colorize;

/// Pick one installed package and remove it with `--zap`.
///
/// Returns the removed name, or `None` when nothing is installed or nothing
/// was picked.
pub fn uninstall<C, S, P>(ctx: &Context<'_, C, S, P>) -> Result<Option<String>>
where
    C: Catalog,
    S: Selector,
    P: PackageManager,
{
    let installed = ctx.brew.installed()?;
    if installed.is_empty() {
        println!(
            "{} No Homebrew packages are installed on the system.",
            "⚠".yellow()
        );
        return Ok(None);
    }

    let Some(name) = select_one(ctx.selector, &installed)? else {
        return Ok(None);
    };

    println!("Uninstalling {}...", name.cyan());
    ctx.brew.run_checked(&BrewCommand::uninstall(&name))?;
    println!(
        "{} {} has been successfully uninstalled.",
        "✓".green(),
        name.bold()
    );

    Ok(Some(name))
}
