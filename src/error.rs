use thiserror::Error;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

macro_rules! out_of_bounds_error {
    () => {
        crate::Error::OutOfBounds
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// This enum covers all possible error conditions that can occur while resolving class bytes,
/// parsing class files, and sorting members. Each variant provides specific context about the
/// failure mode to enable appropriate error handling.
///
/// # Error Categories
///
/// ## Class File Parsing Errors
/// - [`Error::Malformed`] - Corrupted or invalid class file structure
/// - [`Error::OutOfBounds`] - Attempted to read beyond the class file boundaries
/// - [`Error::NotSupported`] - Input is not a class file (bad magic)
/// - [`Error::Empty`] - Empty input provided
///
/// ## Class Resolution Errors
/// - [`Error::ClassNotFound`] - A byte-stream provider could not locate the named class
/// - [`Error::FileError`] - Filesystem I/O errors
///
/// ## Configuration and Synchronization Errors
/// - [`Error::Configuration`] - Invalid sorter configuration (e.g. no strategy supplied)
/// - [`Error::LockError`] - Strategy slot lock was poisoned
///
/// Missing debug information is deliberately *not* an error: a method without line-number
/// records resolves through the caller-supplied default instead (see
/// [`crate::sorter::LineNumberStrategy`]).
///
/// # Examples
///
/// ```rust
/// use classorder::{classfile::ClassSummary, Error};
///
/// match ClassSummary::from_bytes(&[0xDE, 0xAD, 0xBE, 0xEF]) {
///     Err(Error::NotSupported) => eprintln!("not a class file"),
///     Err(Error::Malformed { message, file, line }) => {
///         eprintln!("malformed class file: {} ({}:{})", message, file, line);
///     }
///     Err(e) => eprintln!("other error: {}", e),
///     Ok(_) => unreachable!(),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The class file is damaged and could not be parsed.
    ///
    /// This error indicates that the input does not conform to the JVM class file format.
    /// The error includes the source location where the malformation was detected for
    /// debugging purposes.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// An out of bound access was attempted while parsing the file.
    ///
    /// This error occurs when trying to read data beyond the end of the class file
    /// buffer. It's a safety check to prevent buffer overruns during parsing.
    #[error("Out of Bound read would have occurred!")]
    OutOfBounds,

    /// This file type is not supported.
    ///
    /// Indicates that the input does not start with the `0xCAFEBABE` class file magic
    /// and therefore is not a JVM class file.
    #[error("This file type is not supported")]
    NotSupported,

    /// Provided input was empty.
    ///
    /// This error occurs when an empty file or buffer is provided where actual class
    /// file data was expected.
    #[error("Provided input was empty")]
    Empty,

    /// A byte-stream provider could not locate the requested class.
    ///
    /// Surfaced when a [`crate::file::ClassSource`] has no bytes for the given
    /// fully-qualified name. This indicates an environment problem (the class is not on
    /// the configured path) rather than missing debug information, and is therefore
    /// fatal instead of defaulted.
    #[error("Class not found - {0}")]
    ClassNotFound(String),

    /// File I/O error.
    ///
    /// Wraps standard I/O errors that can occur during file operations such as reading
    /// from disk, permission issues, or filesystem errors.
    #[error("{0}")]
    FileError(#[from] std::io::Error),

    /// Invalid sorter configuration.
    ///
    /// Returned by [`crate::sorter::MemberSorter::set_strategy`] when no strategy is
    /// supplied. The previously active strategy stays in effect.
    #[error("Invalid configuration - {0}")]
    Configuration(String),

    /// Failed to lock target.
    ///
    /// This error occurs when the strategy slot lock is poisoned, typically after a
    /// panic in another thread that held the lock.
    #[error("Failed to lock target")]
    LockError,
}
