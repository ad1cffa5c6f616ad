/// Errors that can occur in the TUI layer.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An I/O error occurred (terminal, event reading, log file, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The global logger could not be installed.
    #[error("logger error: {0}")]
    Logger(#[from] log::SetLoggerError),

    /// The platform does not provide a cache directory for the default log file.
    #[error("could not determine cache directory")]
    NoCacheDir,
}
