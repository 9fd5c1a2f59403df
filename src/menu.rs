//! Menu tokens.
//!
//! Every prompt accepts a single letter, case-insensitive and trimmed. Input
//! that maps to nothing is a distinct `Invalid` variant so callers can report
//! it and ask again.

use std::fmt;

pub const MAIN_PROMPT: &str =
    "What operation do you want to perform? Install (I)  Uninstall (U)  Exit (E): ";
pub const INSTALL_PROMPT: &str =
    "Do you want to install a formula (F), a cask (C), a bundle (B) or abort (A): ";
pub const BUNDLE_KIND_PROMPT: &str =
    "Do you want to add a formula (F) or a cask (C) to the bundle, or abort (A)? (F/C/A): ";
pub const CONTINUE_PROMPT: &str =
    "Do you want to add more packages to the bundle? Yes (Y)  No (N): ";

fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Top level choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Install,
    Uninstall,
    Exit,
    Invalid,
}

impl MenuCommand {
    pub fn parse(input: &str) -> Self {
        match normalize(input).as_str() {
            "i" => Self::Install,
            "u" => Self::Uninstall,
            "e" => Self::Exit,
            _ => Self::Invalid,
        }
    }
}

/// What the install sub-menu should install
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallCommand {
    Formula,
    Cask,
    Bundle,
    Abort,
    Invalid,
}

impl InstallCommand {
    pub fn parse(input: &str) -> Self {
        match normalize(input).as_str() {
            "f" => Self::Formula,
            "c" => Self::Cask,
            "b" => Self::Bundle,
            "a" => Self::Abort,
            _ => Self::Invalid,
        }
    }
}

/// Kind of package, fixed at the moment its name is fetched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageKind {
    Formula,
    Cask,
}

impl fmt::Display for PackageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackageKind::Formula => write!(f, "formula"),
            PackageKind::Cask => write!(f, "cask"),
        }
    }
}

/// Answer to the bundle "formula or cask?" prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BundleCommand {
    Add(PackageKind),
    Abort,
    Invalid,
}

impl BundleCommand {
    pub fn parse(input: &str) -> Self {
        match normalize(input).as_str() {
            "f" => Self::Add(PackageKind::Formula),
            "c" => Self::Add(PackageKind::Cask),
            "a" => Self::Abort,
            _ => Self::Invalid,
        }
    }
}

/// Only an explicit `y` continues.
pub fn is_affirmative(input: &str) -> bool {
    normalize(input) == "y"
}
