//! Package manager invocation.
//!
//! Commands are built as argument vectors and spawned directly, never through
//! a shell, so package names reach `brew` verbatim.

use crate::config::Config;
use crate::error::{BrewifyError, Result};
use colored::Colorize;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// One package manager invocation, without the program name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrewCommand {
    args: Vec<String>,
    target: Option<String>,
}

impl BrewCommand {
    fn with_target(args: &[&str], target: &str) -> Self {
        let mut args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        args.push(target.to_string());
        Self {
            args,
            target: Some(target.to_string()),
        }
    }

    /// `install <name>`
    pub fn install(name: &str) -> Self {
        Self::with_target(&["install"], name)
    }

    /// `install --formula <name>`, used by bundles so a name shared with a
    /// cask resolves to the formula.
    pub fn install_formula(name: &str) -> Self {
        Self::with_target(&["install", "--formula"], name)
    }

    /// `install --cask <name>`
    pub fn install_cask(name: &str) -> Self {
        Self::with_target(&["install", "--cask"], name)
    }

    /// `uninstall --zap <name>` (also removes files associated with casks)
    pub fn uninstall(name: &str) -> Self {
        Self::with_target(&["uninstall", "--zap"], name)
    }

    /// `list`
    pub fn list() -> Self {
        Self {
            args: vec!["list".to_string()],
            target: None,
        }
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Package the command acts on, if any
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Whether running the command changes installed state
    pub fn is_mutating(&self) -> bool {
        self.target.is_some()
    }

    pub fn display(&self, program: &str) -> String {
        format!("{} {}", program, self.args.join(" "))
    }
}

/// Exit status of a finished package manager command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    pub code: Option<i32>,
}

impl CommandStatus {
    pub const SUCCESS: CommandStatus = CommandStatus { code: Some(0) };

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Anything that can run package manager commands.
pub trait PackageManager {
    /// Run `command` attached to the terminal and wait for it.
    fn execute(&self, command: &BrewCommand) -> Result<CommandStatus>;

    /// Names of every installed formula and cask.
    fn installed(&self) -> Result<Vec<String>>;

    /// Program name shown in messages
    fn program_name(&self) -> String {
        "brew".to_string()
    }

    /// Run `command` and turn a non-zero exit into an error.
    fn run_checked(&self, command: &BrewCommand) -> Result<()> {
        let status = self.execute(command)?;
        if status.success() {
            Ok(())
        } else {
            Err(BrewifyError::CommandFailed {
                command: command.display(&self.program_name()),
                code: status.code,
            })
        }
    }
}

/// The real `brew` executable
#[derive(Debug, Clone)]
pub struct Brew {
    program: PathBuf,
    dry_run: bool,
}

impl Brew {
    pub fn new(config: &Config) -> Self {
        Self {
            program: config.brew.clone(),
            dry_run: config.dry_run,
        }
    }

    fn spawn_error(&self, err: std::io::Error) -> BrewifyError {
        if err.kind() == std::io::ErrorKind::NotFound {
            BrewifyError::ToolMissing(self.program_name())
        } else {
            err.into()
        }
    }

    /// Whether the executable answers `--version`
    pub fn is_available(&self) -> bool {
        Command::new(&self.program)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }
}

impl PackageManager for Brew {
    fn program_name(&self) -> String {
        self.program.display().to_string()
    }

    fn execute(&self, command: &BrewCommand) -> Result<CommandStatus> {
        let shown = command.display(&self.program_name());

        if self.dry_run && command.is_mutating() {
            println!("  {} {}", "Would run:".dimmed(), shown.cyan());
            return Ok(CommandStatus::SUCCESS);
        }

        tracing::debug!("running {}", shown);
        let status = Command::new(&self.program)
            .args(command.args())
            .status()
            .map_err(|e| self.spawn_error(e))?;
        tracing::debug!("{} exited with {:?}", shown, status.code());

        Ok(CommandStatus {
            code: status.code(),
        })
    }

    fn installed(&self) -> Result<Vec<String>> {
        let command = BrewCommand::list();
        tracing::debug!("running {}", command.display(&self.program_name()));

        let output = Command::new(&self.program)
            .args(command.args())
            .stdin(Stdio::null())
            .output()
            .map_err(|e| self.spawn_error(e))?;

        if !output.status.success() {
            return Err(BrewifyError::CommandFailed {
                command: command.display(&self.program_name()),
                code: output.status.code(),
            });
        }

        Ok(parse_installed(&String::from_utf8_lossy(&output.stdout)))
    }
}

/// Parse `brew list` output: one name per line.
///
/// When attached to a terminal `brew list` prints `==> Formulae` / `==> Casks`
/// headings; those and blank lines are dropped.
pub fn parse_installed(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("==>"))
        .map(String::from)
        .collect()
}
