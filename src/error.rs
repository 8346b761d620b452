use sles::*;

pub type Result<T> = std::result::Result<T, Error>;

/// A failed OpenSL ES call.
///
/// Each result code other than `SL_RESULT_SUCCESS` has its own variant. The
/// remaining variants are raised on the Rust side before or after a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("preconditions violated")]
    PreconditionsViolated,
    #[error("invalid parameter")]
    ParameterInvalid,
    #[error("memory allocation failed")]
    MemoryFailure,
    #[error("insufficient resources")]
    ResourceError,
    #[error("resources lost")]
    ResourceLost,
    #[error("I/O error")]
    IoError,
    #[error("buffer too small")]
    BufferInsufficient,
    #[error("content corrupted")]
    ContentCorrupted,
    #[error("content unsupported")]
    ContentUnsupported,
    #[error("content not found")]
    ContentNotFound,
    #[error("permission denied")]
    PermissionDenied,
    #[error("feature unsupported")]
    FeatureUnsupported,
    #[error("internal error")]
    InternalError,
    #[error("unknown error")]
    UnknownError,
    #[error("operation aborted")]
    OperationAborted,
    #[error("control lost")]
    ControlLost,
    #[error("read-only")]
    Readonly,
    #[error("engine option unsupported")]
    EngineOptionUnsupported,
    #[error("data source and sink incompatible")]
    SourceSinkIncompatible,
    /// A result code outside the OpenSL ES 1.1 table.
    #[error("unrecognized result code {0:#x}")]
    Unrecognized(SLresult),
    /// The implementation left a vtable slot null.
    #[error("interface does not implement {0}")]
    MissingMethod(&'static str),
    /// A state or enumeration value the implementation returned that this crate does not know.
    #[error("unexpected value {0:#x} for {1}")]
    UnexpectedValue(SLuint32, &'static str),
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

impl Error {
    /// Maps a result code to an error. `SL_RESULT_SUCCESS` yields `None`.
    pub fn from_raw(result: SLresult) -> Option<Error> {
        let error = match result {
            SL_RESULT_SUCCESS => return None,
            SL_RESULT_PRECONDITIONS_VIOLATED => Error::PreconditionsViolated,
            SL_RESULT_PARAMETER_INVALID => Error::ParameterInvalid,
            SL_RESULT_MEMORY_FAILURE => Error::MemoryFailure,
            SL_RESULT_RESOURCE_ERROR => Error::ResourceError,
            SL_RESULT_RESOURCE_LOST => Error::ResourceLost,
            SL_RESULT_IO_ERROR => Error::IoError,
            SL_RESULT_BUFFER_INSUFFICIENT => Error::BufferInsufficient,
            SL_RESULT_CONTENT_CORRUPTED => Error::ContentCorrupted,
            SL_RESULT_CONTENT_UNSUPPORTED => Error::ContentUnsupported,
            SL_RESULT_CONTENT_NOT_FOUND => Error::ContentNotFound,
            SL_RESULT_PERMISSION_DENIED => Error::PermissionDenied,
            SL_RESULT_FEATURE_UNSUPPORTED => Error::FeatureUnsupported,
            SL_RESULT_INTERNAL_ERROR => Error::InternalError,
            SL_RESULT_UNKNOWN_ERROR => Error::UnknownError,
            SL_RESULT_OPERATION_ABORTED => Error::OperationAborted,
            SL_RESULT_CONTROL_LOST => Error::ControlLost,
            SL_RESULT_READONLY => Error::Readonly,
            SL_RESULT_ENGINEOPTION_UNSUPPORTED => Error::EngineOptionUnsupported,
            SL_RESULT_SOURCE_SINK_INCOMPATIBLE => Error::SourceSinkIncompatible,
            other => Error::Unrecognized(other),
        };

        Some(error)
    }

    /// The result code reported for this error.
    ///
    /// Errors raised before reaching the implementation map to the closest
    /// code: `SL_RESULT_FEATURE_UNSUPPORTED` for a missing method,
    /// `SL_RESULT_PARAMETER_INVALID` for a rejected argument and
    /// `SL_RESULT_UNKNOWN_ERROR` for an unexpected value.
    pub fn code(&self) -> SLresult {
        match *self {
            Error::PreconditionsViolated => SL_RESULT_PRECONDITIONS_VIOLATED,
            Error::ParameterInvalid => SL_RESULT_PARAMETER_INVALID,
            Error::MemoryFailure => SL_RESULT_MEMORY_FAILURE,
            Error::ResourceError => SL_RESULT_RESOURCE_ERROR,
            Error::ResourceLost => SL_RESULT_RESOURCE_LOST,
            Error::IoError => SL_RESULT_IO_ERROR,
            Error::BufferInsufficient => SL_RESULT_BUFFER_INSUFFICIENT,
            Error::ContentCorrupted => SL_RESULT_CONTENT_CORRUPTED,
            Error::ContentUnsupported => SL_RESULT_CONTENT_UNSUPPORTED,
            Error::ContentNotFound => SL_RESULT_CONTENT_NOT_FOUND,
            Error::PermissionDenied => SL_RESULT_PERMISSION_DENIED,
            Error::FeatureUnsupported => SL_RESULT_FEATURE_UNSUPPORTED,
            Error::InternalError => SL_RESULT_INTERNAL_ERROR,
            Error::UnknownError => SL_RESULT_UNKNOWN_ERROR,
            Error::OperationAborted => SL_RESULT_OPERATION_ABORTED,
            Error::ControlLost => SL_RESULT_CONTROL_LOST,
            Error::Readonly => SL_RESULT_READONLY,
            Error::EngineOptionUnsupported => SL_RESULT_ENGINEOPTION_UNSUPPORTED,
            Error::SourceSinkIncompatible => SL_RESULT_SOURCE_SINK_INCOMPATIBLE,
            Error::Unrecognized(code) => code,
            Error::MissingMethod(_) => SL_RESULT_FEATURE_UNSUPPORTED,
            Error::UnexpectedValue(..) => SL_RESULT_UNKNOWN_ERROR,
            Error::InvalidArgument(_) => SL_RESULT_PARAMETER_INVALID,
        }
    }
}

/// Converts a result code returned by an OpenSL ES call.
pub fn check(result: SLresult) -> Result<()> {
    match Error::from_raw(result) {
        None => Ok(()),
        Some(error) => Err(error),
    }
}
