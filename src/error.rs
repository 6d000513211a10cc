use thiserror::Error;

/// Failures of the terminal presentation layer. The simulation itself never fails.
#[derive(Debug, Error)]
pub enum Error {
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("terminal is {cols}x{rows}, need at least {min_cols}x{min_rows}")]
    TerminalTooSmall {
        cols: u16,
        rows: u16,
        min_cols: u16,
        min_rows: u16,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
