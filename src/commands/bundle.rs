//! Bundle installs
//!
//! A bundle is built interactively one package at a time, then committed in
//! one pass. The kind of every entry is fixed when it is picked, so the
//! commit always uses `--formula` or `--cask` explicitly. Packages already
//! installed at commit time are skipped.

use super::Context;
use crate::api::Catalog;
use crate::brew::{BrewCommand, PackageManager};
use crate::error::Result;
use crate::menu::{
    BUNDLE_KIND_PROMPT, BundleCommand, CONTINUE_PROMPT, PackageKind, is_affirmative,
};
use crate::select::{Selector, select_one};
use crate::term::Prompter;
use colored::Colorize;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleEntry {
    pub name: String,
    pub kind: PackageKind,
}

impl BundleEntry {
    pub fn new(name: impl Into<String>, kind: PackageKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    fn command(&self) -> BrewCommand {
        match self.kind {
            PackageKind::Formula => BrewCommand::install_formula(&self.name),
            PackageKind::Cask => BrewCommand::install_cask(&self.name),
        }
    }
}

/// Outcome of committing a bundle, in bundle order
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BundleReport {
    pub installed: Vec<String>,
    pub skipped: Vec<String>,
    pub failed: Vec<String>,
}

impl BundleReport {
    pub fn is_empty(&self) -> bool {
        self.installed.is_empty() && self.skipped.is_empty() && self.failed.is_empty()
    }
}

/// Build a bundle and install it.
pub async fn bundle<C, S, P, R>(
    ctx: &Context<'_, C, S, P>,
    prompter: &mut R,
) -> Result<BundleReport>
where
    C: Catalog,
    S: Selector,
    P: PackageManager,
    R: Prompter,
{
    let entries = build_bundle(ctx, prompter).await?;
    install_bundle(ctx.brew, &entries)
}

/// Ask for packages until the user aborts or declines to add more.
///
/// Aborting keeps whatever was already added. A failing pick is reported and
/// counts as an empty one.
pub async fn build_bundle<C, S, P, R>(
    ctx: &Context<'_, C, S, P>,
    prompter: &mut R,
) -> Result<Vec<BundleEntry>>
where
    C: Catalog,
    S: Selector,
    P: PackageManager,
    R: Prompter,
{
    let mut entries = Vec::new();

    loop {
        let Some(answer) = prompter.ask(BUNDLE_KIND_PROMPT)? else {
            break;
        };

        let kind = match BundleCommand::parse(&answer) {
            BundleCommand::Add(kind) => kind,
            BundleCommand::Abort => break,
            BundleCommand::Invalid => {
                println!("{} Invalid operation. Try again.", "✗".red());
                continue;
            }
        };

        let candidates = match kind {
            PackageKind::Formula => ctx.catalog.formulas().await,
            PackageKind::Cask => ctx.catalog.casks().await,
        };

        let picked = select_one(ctx.selector, &candidates).unwrap_or_else(|e| {
            tracing::warn!("bundle pick failed: {}", e);
            println!("{} {}", "✗".red(), e);
            None
        });

        if let Some(name) = picked {
            println!(
                "{} {} ({}) has been added to the bundle.",
                "+".green(),
                name.bold(),
                kind.to_string().dimmed()
            );
            entries.push(BundleEntry::new(name, kind));
        }

        match prompter.ask(CONTINUE_PROMPT)? {
            Some(answer) if is_affirmative(&answer) => {}
            _ => break,
        }
    }

    Ok(entries)
}

/// Install every entry not already installed, in order.
///
/// The installed list is read once, before the first install. A failing
/// entry is reported and the rest still run. An empty bundle runs nothing.
pub fn install_bundle<P: PackageManager>(
    brew: &P,
    entries: &[BundleEntry],
) -> Result<BundleReport> {
    let mut report = BundleReport::default();
    if entries.is_empty() {
        return Ok(report);
    }

    let installed: HashSet<String> = brew.installed()?.into_iter().collect();

    println!("Installing bundle packages...");
    for entry in entries {
        if installed.contains(&entry.name) {
            println!(
                "  {} {} is already installed, skipping",
                "⚠".yellow(),
                entry.name.bold()
            );
            report.skipped.push(entry.name.clone());
            continue;
        }

        match brew.run_checked(&entry.command()) {
            Ok(()) => {
                println!(
                    "  {} {} has been successfully installed.",
                    "✓".green(),
                    entry.name.bold()
                );
                report.installed.push(entry.name.clone());
            }
            Err(e) => {
                tracing::warn!("bundle entry {} failed: {}", entry.name, e);
                println!(
                    "  {} Failed to install {}: {}",
                    "✗".red(),
                    entry.name.bold(),
                    e
                );
                report.failed.push(entry.name.clone());
            }
        }
    }

    println!(
        "{} Bundle complete: {} installed, {} skipped, {} failed",
        "✓".green().bold(),
        report.installed.len().to_string().bold(),
        report.skipped.len(),
        report.failed.len()
    );

    Ok(report)
}
