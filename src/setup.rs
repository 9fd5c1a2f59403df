//! Startup environment checks.
//!
//! Makes sure Homebrew and fzf are present before the menu starts. A missing
//! Homebrew is bootstrapped (after making sure a compiler toolchain exists)
//! with the official install script; a missing fzf is installed through
//! Homebrew. Every step is best effort: failures are printed and the run
//! continues.

use crate::brew::{Brew, BrewCommand, PackageManager};
use crate::config::Config;
use crate::error::{BrewifyError, Result};
use crate::select::Fzf;
use colored::Colorize;
use std::process::{Command, Stdio};

/// Official Homebrew bootstrap. The script is downloaded first and passed to
/// bash whole so its own prompts can still read the terminal.
pub const HOMEBREW_BOOTSTRAP: &str = concat!(
    r#"/bin/bash -c "$(curl -fsSL "#,
    r#"https://raw.githubusercontent.com/Homebrew/install/HEAD/install.sh)""#,
);

/// Probes and installers for the tools brewify depends on.
pub trait Toolchain {
    fn has_brew(&self) -> bool;
    fn has_compiler(&self) -> bool;
    fn has_fzf(&self) -> bool;
    fn install_compiler(&self) -> Result<()>;
    fn install_brew(&self) -> Result<()>;
    fn install_fzf(&self) -> Result<()>;
}

/// State of one tool after setup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolState {
    /// Already present
    Present,
    /// Was missing and the install step succeeded
    Installed,
    /// Was missing and the install step failed or is not possible here
    Missing,
    /// Not checked because it was not needed
    Skipped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetupReport {
    pub compiler: ToolState,
    pub brew: ToolState,
    pub fzf: ToolState,
}

impl SetupReport {
    /// Whether the interactive flows can work
    pub fn ready(&self) -> bool {
        let ok = |s: ToolState| matches!(s, ToolState::Present | ToolState::Installed);
        ok(self.brew) && ok(self.fzf)
    }
}

/// Run all checks. Never fails.
pub fn ensure_environment<T: Toolchain>(tools: &T) -> SetupReport {
    let mut report = SetupReport {
        compiler: ToolState::Skipped,
        brew: ToolState::Present,
        fzf: ToolState::Present,
    };

    if tools.has_brew() {
        println!("{} Homebrew is already installed", "✓".green());
    } else {
        println!(
            "{} Homebrew is not installed. Checking the compiler toolchain...",
            "⚠".yellow()
        );
        report.compiler = ensure_compiler(tools);

        println!("Initiating Homebrew installation...");
        report.brew = attempt("Homebrew", || tools.install_brew());
    }

    if tools.has_fzf() {
        tracing::debug!("fzf found");
    } else if report.brew == ToolState::Missing {
        println!("{} fzf is not installed and Homebrew is unavailable to install it", "✗".red());
        report.fzf = ToolState::Missing;
    } else {
        println!("{} fzf is not installed. Installing...", "⚠".yellow());
        report.fzf = attempt("fzf", || tools.install_fzf());
    }

    report
}

fn ensure_compiler<T: Toolchain>(tools: &T) -> ToolState {
    if tools.has_compiler() {
        println!("{} Compiler toolchain is already installed", "✓".green());
        return ToolState::Present;
    }

    println!("Compiler toolchain is not installed. Initiating installation...");
    attempt("Compiler toolchain", || tools.install_compiler())
}

fn attempt(what: &str, install: impl FnOnce() -> Result<()>) -> ToolState {
    match install() {
        Ok(()) => {
            println!("{} {} has been successfully installed", "✓".green(), what);
            ToolState::Installed
        }
        Err(e) => {
            tracing::warn!("{} installation failed: {}", what, e);
            println!("{} {} installation failed: {}", "✗".red(), what, e);
            ToolState::Missing
        }
    }
}

/// Probes and installs on the real system
pub struct SystemToolchain {
    brew: Brew,
    fzf: Fzf,
}

impl SystemToolchain {
    pub fn new(config: &Config) -> Self {
        Self {
            brew: Brew::new(config),
            fzf: Fzf::new(config),
        }
    }
}

/// Run a probe, discarding its output
fn probe(program: &str, args: &[&str]) -> bool {
    let ok = Command::new(program)
        .args(args)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false);
    tracing::debug!("probe {} {:?}: {}", program, args, ok);
    ok
}

fn run_step(program: &str, args: &[&str]) -> Result<()> {
    tracing::debug!("running {} {:?}", program, args);
    let status = Command::new(program).args(args).status()?;
    if status.success() {
        Ok(())
    } else {
        Err(BrewifyError::CommandFailed {
            command: format!("{} {}", program, args.join(" ")),
            code: status.code(),
        })
    }
}

impl Toolchain for SystemToolchain {
    fn has_brew(&self) -> bool {
        self.brew.is_available()
    }

    #[cfg(target_os = "macos")]
    fn has_compiler(&self) -> bool {
        probe("xcode-select", &["-p"])
    }

    #[cfg(not(target_os = "macos"))]
    fn has_compiler(&self) -> bool {
        probe("cc", &["--version"])
    }

    fn has_fzf(&self) -> bool {
        self.fzf.is_available()
    }

    #[cfg(target_os = "macos")]
    fn install_compiler(&self) -> Result<()> {
        run_step("xcode-select", &["--install"])
    }

    #[cfg(not(target_os = "macos"))]
    fn install_compiler(&self) -> Result<()> {
        Err(anyhow::anyhow!(
            "no automatic toolchain install on this platform; \
             install a C compiler with your system package manager"
        )
        .into())
    }

    fn install_brew(&self) -> Result<()> {
        run_step("/bin/bash", &["-c", HOMEBREW_BOOTSTRAP])
    }

    fn install_fzf(&self) -> Result<()> {
        self.brew.run_checked(&BrewCommand::install("fzf"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ready() {
        let report = SetupReport {
            compiler: ToolState::Skipped,
            brew: ToolState::Present,
            fzf: ToolState::Installed,
        };
        assert!(report.ready());

        let report = SetupReport {
            fzf: ToolState::Missing,
            ..report
        };
        assert!(!report.ready());
    }

    #[test]
    fn test_missing_probe_binary() {
        assert!(!probe("brewify-definitely-not-a-real-binary", &[]));
    }

    #[test]
    fn test_bootstrap_command() {
        assert_eq!(
            HOMEBREW_BOOTSTRAP,
            "/bin/bash -c \"$(curl -fsSL \
             https://raw.githubusercontent.com/Homebrew/install/HEAD/install.sh)\""
        );
    }
}
