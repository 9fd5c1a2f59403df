use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrewifyError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("{url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("`{command}` exited with {}", describe_exit(.code))]
    CommandFailed { command: String, code: Option<i32> },

    #[error("Fuzzy finder failed (exit status {code})")]
    SelectorFailed { code: i32 },

    #[error("Required tool not found: {0}")]
    ToolMissing(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Error: {0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, BrewifyError>;

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "a signal".to_string(),
    }
}
