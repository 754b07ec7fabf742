// MIT/Apache2 License

use std::fmt;

/// Sum error type for breadgl operations.
///
/// An entry point that the driver does not export is *not* an error; it is recorded
/// in the [`DispatchTable`](crate::DispatchTable) as an unsupported slot. Errors are
/// reserved for the cases where nothing useful can be loaded at all.
#[derive(Debug)]
pub enum Error {
    /// A static string message.
    StaticMsg(&'static str),
    /// A string message.
    Msg(String),
    /// There is no current context to resolve entry points against.
    NoCurrentContext,
    /// The dispatcher already holds a loaded table.
    AlreadyLoaded,
    /// The dispatcher is in the middle of loading a table. Only reachable after a pending
    /// load was leaked, see [`LoadState::Loading`](crate::LoadState::Loading).
    Loading,
    /// A system library providing the "get proc address" primitive could not be opened.
    #[cfg(any(feature = "egl", feature = "wgl"))]
    LibraryUnavailable(libloading::Error),
}

impl std::error::Error for Error {
    #[inline]
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            #[cfg(any(feature = "egl", feature = "wgl"))]
            Self::LibraryUnavailable(le) => Some(le),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StaticMsg(s) => f.write_str(s),
            Self::Msg(s) => f.write_str(s),
            Self::NoCurrentContext => {
                f.write_str("No current context to resolve entry points against")
            }
            Self::AlreadyLoaded => f.write_str("Dispatch table has already been loaded"),
            Self::Loading => f.write_str("Dispatch table is currently being loaded"),
            #[cfg(any(feature = "egl", feature = "wgl"))]
            Self::LibraryUnavailable(le) => write!(f, "Unable to open system library: {}", le),
        }
    }
}

#[cfg(any(feature = "egl", feature = "wgl"))]
impl From<libloading::Error> for Error {
    #[inline]
    fn from(le: libloading::Error) -> Self {
        Self::LibraryUnavailable(le)
    }
}

/// Convenience result type.
pub type Result<T = ()> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            Error::NoCurrentContext.to_string(),
            "No current context to resolve entry points against"
        );
        assert_eq!(Error::StaticMsg("oops").to_string(), "oops");
        assert_eq!(Error::Msg("bad driver".into()).to_string(), "bad driver");
    }
}
