// MIT/Apache2 License

use std::ffi::CStr;

#[cfg(feature = "async")]
use std::{future::Future, pin::Pin};

#[cfg(feature = "async")]
pub type GenericResult<'future, T = ()> =
    Pin<Box<dyn Future<Output = crate::Result<T>> + Send + 'future>>;

/// Static container for a CStr.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub(crate) struct StaticCstr {
    inner: &'static str,
}

impl StaticCstr {
    #[inline]
    pub(crate) const fn new(inner: &'static str) -> Self {
        Self { inner }
    }

    /// The string without its trailing nul.
    #[inline]
    pub(crate) fn as_str(self) -> &'static str {
        &self.inner[..self.inner.len() - 1]
    }

    #[inline]
    pub(crate) fn get(self) -> &'static CStr {
        let bytes = self.inner.as_bytes();
        debug_assert_eq!(bytes[bytes.len() - 1], b'\0');
        // SAFETY: every StaticCstr is built with concat!(.., "\0") and GL names hold no
        //         interior nuls
        unsafe { CStr::from_bytes_with_nul_unchecked(bytes) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_cstr() {
        let s = StaticCstr::new("glClear\0");
        assert_eq!(s.as_str(), "glClear");
        assert_eq!(s.get().to_bytes(), b"glClear");
    }
}
