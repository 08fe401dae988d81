use std::fmt;
use std::path::PathBuf;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the context and backend boundary.
///
/// The taxonomy is closed on purpose:
/// - `Config` — a hint carried the wrong variant, or the configuration is
///   invalid (zero-sized surface) or mutated after the surface exists.
/// - `SurfaceCreation` — the backend refused the requested mode.
/// - `ResourceLoad` — a path did not resolve to a valid font/texture.
/// - `Precondition` — a frame or draw operation ran before `create_surface`
///   succeeded, or with a stale resource handle.
///
/// No operation retries internally; every failure is terminal for that call
/// and the retry/degrade/abort decision belongs to the caller.
#[derive(Debug)]
pub enum Error {
    Config { message: String },
    SurfaceCreation { message: String },
    ResourceLoad { path: PathBuf, message: String },
    Precondition { message: String },
}

impl Error {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Error::Config { message: message.into() }
    }

    pub(crate) fn surface_creation(message: impl fmt::Display) -> Self {
        Error::SurfaceCreation { message: message.to_string() }
    }

    pub(crate) fn resource_load(path: impl Into<PathBuf>, message: impl fmt::Display) -> Self {
        Error::ResourceLoad { path: path.into(), message: message.to_string() }
    }

    pub(crate) fn precondition(message: impl Into<String>) -> Self {
        Error::Precondition { message: message.into() }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config { message } => write!(f, "configuration error: {message}"),
            Error::SurfaceCreation { message } => write!(f, "surface creation failed: {message}"),
            Error::ResourceLoad { path, message } => {
                write!(f, "failed to load {}: {message}", path.display())
            }
            Error::Precondition { message } => write!(f, "precondition violated: {message}"),
        }
    }
}

impl std::error::Error for Error {}
