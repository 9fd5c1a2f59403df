//! Fuzzy selection of a single item through `fzf`.

use crate::config::Config;
use crate::error::{BrewifyError, Result};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Header shown above the candidate list
pub const SELECT_HEADER: &str = "Search and select an item:";

/// Interactive chooser over a list of candidates.
pub trait Selector {
    /// Block until the user picks one candidate or cancels.
    ///
    /// Only called with a non-empty candidate list; see [`select_one`].
    fn pick(&self, header: &str, candidates: &[String]) -> Result<Option<String>>;
}

/// Let the user pick one of `candidates`.
///
/// An empty candidate list yields `None` without showing a prompt.
pub fn select_one<S: Selector + ?Sized>(
    selector: &S,
    candidates: &[String],
) -> Result<Option<String>> {
    if candidates.is_empty() {
        tracing::debug!("no candidates, skipping selector");
        return Ok(None);
    }
    selector.pick(SELECT_HEADER, candidates)
}

/// `fzf` running full screen on the controlling terminal
#[derive(Debug, Clone)]
pub struct Fzf {
    program: PathBuf,
}

impl Fzf {
    pub fn new(config: &Config) -> Self {
        Self {
            program: config.fzf.clone(),
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

impl Selector for Fzf {
    fn pick(&self, header: &str, candidates: &[String]) -> Result<Option<String>> {
        tracing::debug!(
            "launching {} with {} candidates",
            self.program.display(),
            candidates.len()
        );

        // stderr stays on the terminal: fzf draws its UI there
        let mut child = Command::new(&self.program)
            .args(["--header", header, "--no-multi", "--height", "40%", "--reverse"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    BrewifyError::ToolMissing(self.program.display().to_string())
                } else {
                    e.into()
                }
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            let input = candidates.join("\n");
            // fzf closes its input early when the user accepts before reading
            // everything; a broken pipe here is not a failure
            if let Err(e) = stdin.write_all(input.as_bytes())
                && e.kind() != std::io::ErrorKind::BrokenPipe
            {
                return Err(e.into());
            }
        }

        let output = child.wait_with_output()?;
        interpret_exit(output.status.code(), &String::from_utf8_lossy(&output.stdout))
    }
}

/// Map an fzf exit code and its stdout to a selection.
///
/// 0 means a line was accepted, 1 means nothing matched the query and 130
/// means the user pressed Esc or Ctrl-C. Anything else is an fzf error.
pub fn interpret_exit(code: Option<i32>, stdout: &str) -> Result<Option<String>> {
    match code {
        Some(0) => Ok(stdout
            .lines()
            .next()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)),
        Some(1) | Some(130) | None => Ok(None),
        Some(code) => Err(BrewifyError::SelectorFailed { code }),
    }
}
