// Environment check tests with a fake toolchain

use brewify::error::{BrewifyError, Result};
use brewify::setup::{SetupReport, ToolState, Toolchain, ensure_environment};
use std::cell::RefCell;

#[derive(Default)]
struct FakeToolchain {
    brew: bool,
    compiler: bool,
    fzf: bool,
    broken_installs: Vec<&'static str>,
    installs: RefCell<Vec<&'static str>>,
}

impl FakeToolchain {
    fn install(&self, what: &'static str) -> Result<()> {
        self.installs.borrow_mut().push(what);
        if self.broken_installs.contains(&what) {
            Err(BrewifyError::CommandFailed {
                command: format!("install {what}"),
                code: Some(1),
            })
        } else {
            Ok(())
        }
    }
}

impl Toolchain for FakeToolchain {
    fn has_brew(&self) -> bool {
        self.brew
    }
    fn has_compiler(&self) -> bool {
        self.compiler
    }
    fn has_fzf(&self) -> bool {
        self.fzf
    }
    fn install_compiler(&self) -> Result<()> {
        self.install("compiler")
    }
    fn install_brew(&self) -> Result<()> {
        self.install("brew")
    }
    fn install_fzf(&self) -> Result<()> {
        self.install("fzf")
    }
}

#[test]
fn test_everything_present() {
    let tools = FakeToolchain {
        brew: true,
        compiler: true,
        fzf: true,
        ..Default::default()
    };

    let report = ensure_environment(&tools);

    assert!(tools.installs.borrow().is_empty());
    assert_eq!(
        report,
        SetupReport {
            compiler: ToolState::Skipped,
            brew: ToolState::Present,
            fzf: ToolState::Present,
        }
    );
    assert!(report.ready());
}

#[test]
fn test_missing_fzf_installed_through_brew() {
    let tools = FakeToolchain {
        brew: true,
        ..Default::default()
    };

    let report = ensure_environment(&tools);

    assert_eq!(*tools.installs.borrow(), vec!["fzf"]);
    assert_eq!(report.fzf, ToolState::Installed);
    // Compiler only matters when Homebrew must be bootstrapped
    assert_eq!(report.compiler, ToolState::Skipped);
}

#[test]
fn test_bootstrap_checks_compiler_first() {
    let tools = FakeToolchain::default();

    let report = ensure_environment(&tools);

    assert_eq!(*tools.installs.borrow(), vec!["compiler", "brew", "fzf"]);
    assert_eq!(report.compiler, ToolState::Installed);
    assert_eq!(report.brew, ToolState::Installed);
    assert!(report.ready());
}

#[test]
fn test_present_compiler_not_reinstalled() {
    let tools = FakeToolchain {
        compiler: true,
        fzf: true,
        ..Default::default()
    };

    let report = ensure_environment(&tools);

    assert_eq!(*tools.installs.borrow(), vec!["brew"]);
    assert_eq!(report.compiler, ToolState::Present);
}

#[test]
fn test_failures_are_not_fatal() {
    let tools = FakeToolchain {
        broken_installs: vec!["compiler", "brew"],
        ..Default::default()
    };

    let report = ensure_environment(&tools);

    // Homebrew bootstrap still attempted after the compiler failed
    assert_eq!(*tools.installs.borrow(), vec!["compiler", "brew"]);
    assert_eq!(report.compiler, ToolState::Missing);
    assert_eq!(report.brew, ToolState::Missing);
    assert_eq!(report.fzf, ToolState::Missing);
    assert!(!report.ready());
}

#[test]
fn test_failed_fzf_install() {
    let tools = FakeToolchain {
        brew: true,
        broken_installs: vec!["fzf"],
        ..Default::default()
    };

    let report = ensure_environment(&tools);

    assert_eq!(report.fzf, ToolState::Missing);
    assert_eq!(report.brew, ToolState::Present);
}
