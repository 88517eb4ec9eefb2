//! Error types for the Galaxy3D reflection crate
//!
//! Errors only leave the per-frame path in tests and host adapters:
//! the camera event bus logs them and moves on, so a failed frame
//! degrades to "no reflection this frame".

use std::fmt;

/// Result type for reflection operations
pub type Result<T> = std::result::Result<T, Error>;

/// Galaxy3D reflection errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Backend-specific error (allocation refused, device lost, etc.)
    BackendError(String),

    /// Out of GPU memory
    OutOfMemory,

    /// Invalid resource (texture, camera, surface)
    InvalidResource(String),

    /// Initialization failed (component, subscription)
    InitializationFailed(String),

    /// The external renderer failed to render a camera
    RenderFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::OutOfMemory => write!(f, "Out of GPU memory"),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::RenderFailed(msg) => write!(f, "Render failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Log an ERROR message and build an `Error::BackendError` from it
///
/// # Example
///
/// ```no_run
/// # use galaxy_3d_reflection::engine_err;
/// let err = engine_err!("galaxy3d::reflection", "Target {}x{} refused", 0, 0);
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::galaxy3d::Error::BackendError(message)
    }};
}

/// Log an ERROR message and return `Err(Error::BackendError)` from the enclosing function
///
/// # Example
///
/// ```no_run
/// # use galaxy_3d_reflection::engine_bail;
/// fn check(width: u32) -> galaxy_3d_reflection::galaxy3d::Result<()> {
///     if width == 0 {
///         engine_bail!("galaxy3d::reflection", "Zero-width target");
///     }
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
