use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Selector error: {0}")]
    Selector(#[from] selector::SelectorError),

    #[error("Record error: {0}")]
    Record(#[from] records::RecordError),

    #[error("Log file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("A logger was already installed")]
    LoggerInstalled(#[from] log::SetLoggerError),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;
