//! Top-level menu loop
//!
//! ```text
//! MENU --i--> INSTALL_MENU --f/c/b--> flow --> MENU
//!   |              \--a--> MENU
//!   |--u--> UNINSTALL --> MENU
//!   \--e--> exit
//! ```
//!
//! Errors from a flow are printed and the loop continues. Only `e` or the end
//! of input leaves the loop.

use super::{Context, bundle, install, uninstall};
use crate::api::Catalog;
use crate::brew::PackageManager;
use crate::error::Result;
use crate::menu::{INSTALL_PROMPT, InstallCommand, MAIN_PROMPT, MenuCommand, PackageKind};
use crate::select::Selector;
use crate::term::Prompter;
use colored::Colorize;
use std::fmt::Display;

/// Run the interactive menu until the user exits.
pub async fn run<C, S, P, R>(ctx: &Context<'_, C, S, P>, prompter: &mut R) -> Result<()>
where
    C: Catalog,
    S: Selector,
    P: PackageManager,
    R: Prompter,
{
    loop {
        let Some(answer) = prompter.ask(MAIN_PROMPT)? else {
            tracing::debug!("end of input at main menu");
            return Ok(());
        };

        match MenuCommand::parse(&answer) {
            MenuCommand::Exit => return Ok(()),
            MenuCommand::Install => install_menu(ctx, prompter).await?,
            MenuCommand::Uninstall => report(uninstall(ctx)),
            MenuCommand::Invalid => invalid(),
        }
    }
}

/// Ask what to install and run that flow once.
///
/// Re-asks on unrecognized input. Abort or end of input returns without doing
/// anything. Only prompt I/O errors are returned; flow errors are printed.
pub async fn install_menu<C, S, P, R>(ctx: &Context<'_, C, S, P>, prompter: &mut R) -> Result<()>
where
    C: Catalog,
    S: Selector,
    P: PackageManager,
    R: Prompter,
{
    loop {
        let Some(answer) = prompter.ask(INSTALL_PROMPT)? else {
            return Ok(());
        };

        match InstallCommand::parse(&answer) {
            InstallCommand::Formula => report(install(ctx, PackageKind::Formula).await),
            InstallCommand::Cask => report(install(ctx, PackageKind::Cask).await),
            InstallCommand::Bundle => report(bundle(ctx, prompter).await),
            InstallCommand::Abort => {}
            InstallCommand::Invalid => {
                invalid();
                continue;
            }
        }
        return Ok(());
    }
}

fn invalid() {
    println!("{} Invalid operation. Try again.", "✗".red());
}

fn report<T, E: Display>(result: std::result::Result<T, E>) {
    if let Err(e) = result {
        tracing::debug!("operation failed: {}", e);
        println!("{} {}", "✗".red(), e);
    }
}
