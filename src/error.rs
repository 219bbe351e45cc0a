use thiserror::Error;

macro_rules! encoding_error {
    ($($arg:tt)*) => {
        $crate::Error::MalformedEncoding {
            message: format!($($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library
/// can potentially return.
///
/// # Error Categories
///
/// ## Input Boundary
/// - [`Error::InputTool`] - An external text producer (objdump, nm) failed
/// - [`Error::FileError`] - Filesystem I/O errors
///
/// ## Decoding
/// - [`Error::MalformedEncoding`] - A compressed symbol name could not be decoded
///
/// ## Analysis
/// - [`Error::UnknownRoot`] - Requested dominance root is not in the graph
/// - [`Error::GraphError`] - Internal graph construction error
#[derive(Error, Debug)]
pub enum Error {
    /// An external tool could not be located, could not be spawned, or exited
    /// with a non-zero status.
    ///
    /// This is fatal for the whole analysis run: no partial graph is produced
    /// when either text producer fails.
    #[error("{tool}: {message}")]
    InputTool {
        /// Name of the tool that failed (e.g. `objdump`, `aarch64-linux-gnu-nm`)
        tool: String,
        /// What went wrong: spawn error, exit status, or bad output
        message: String,
    },

    /// A compressed symbol encoding is damaged and could not be decoded.
    ///
    /// Raised when a length prefix points past the end of the identifier, when
    /// the input ends where a component was expected, or when too few
    /// components are present to strip the disambiguation suffix. The error
    /// includes the source location where the malformation was detected.
    ///
    /// Decoding never silently falls back to the raw name.
    #[error("malformed encoding - {file}:{line}: {message}")]
    MalformedEncoding {
        /// Detailed description of what was malformed
        message: String,
        /// The source file in which this error was detected
        file: &'static str,
        /// The source line in which this error was detected
        line: u32,
    },

    /// The requested dominance root is not a node in the graph.
    ///
    /// Fatal only for the dominance request; a graph description already
    /// produced from the same run remains valid.
    #[error("root symbol '{0}' is not a node in the graph")]
    UnknownRoot(String),

    /// Graph construction error.
    ///
    /// Raised when an edge references a node id that does not exist in the
    /// graph. Indicates a bug in the caller, not bad input.
    #[error("{0}")]
    GraphError(String),

    /// File I/O error.
    ///
    /// Wraps standard I/O errors from writing graph descriptions or reading
    /// inputs at the boundary.
    #[error("{0}")]
    FileError(#[from] std::io::Error),
}
