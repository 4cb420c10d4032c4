use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum LineaturError {
    #[error("paper size \"{0}\" chosen for printing is unknown/not allowed")]
    /// The paper size name is not one of the catalogued sizes
    UnknownPaperSize(String),

    #[error("wrong arguments for {option}: {value}")]
    /// A colon-separated number list contains a token that isn't an unsigned integer
    MalformedNumberList { option: &'static str, value: String },

    #[error("wrong number of arguments for {option}: {value} (expected {expected}, got {found})")]
    /// A colon-separated number list has the wrong number of entries
    WrongArity {
        option: &'static str,
        value: String,
        expected: &'static str,
        found: usize,
    },

    #[error("invalid input: {0}")]
    /// Geometry inputs that can't produce a ruling, e.g. proportions summing to zero
    InvalidInput(String),

    #[error("no PDF object was allocated for {0}")]
    /// An object was referenced before it was written
    MissingObject(String),

    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),
}
