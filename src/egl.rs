// MIT/Apache2 License

//! A [`GlDispatch`] implementation over the system's EGL library.

use crate::{
    gl::types::{EGLint, EGL_EXTENSIONS, EGL_NO_CONTEXT, EGL_NO_DISPLAY, EGL_VERSION},
    pfn, GlDispatch, Platform, ProcAddress, Version,
};
use libloading::Library;
use std::{
    ffi::{c_void, CStr, OsStr},
    fmt,
};

#[cfg(windows)]
const LIBRARY_NAMES: &[&str] = &["libEGL.dll"];
#[cfg(not(windows))]
const LIBRARY_NAMES: &[&str] = &["libEGL.so.1", "libEGL.so"];

/// EGL, loaded at runtime.
///
/// Entry points resolve through `eglGetProcAddress`, falling back to the library's
/// exports for core functions that older implementations refuse to hand out.
pub struct EglBinding {
    get_proc_address: pfn::eglGetProcAddress,
    get_current_context: pfn::eglGetCurrentContext,
    get_current_display: pfn::eglGetCurrentDisplay,
    query_string: pfn::eglQueryString,
    // must outlive the pointers above
    library: Library,
}

impl fmt::Debug for EglBinding {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EglBinding").finish()
    }
}

impl EglBinding {
    /// Open the system EGL library.
    pub fn open() -> crate::Result<Self> {
        let mut last_error = None;
        for name in LIBRARY_NAMES {
            match Self::from_library(name) {
                Ok(binding) => return Ok(binding),
                Err(e) => {
                    log::debug!("Unable to open {}: {}", name, e);
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or(crate::Error::StaticMsg("No EGL library names to try")))
    }

    /// Open a specific EGL library.
    pub fn from_library<P: AsRef<OsStr>>(path: P) -> crate::Result<Self> {
        // SAFETY: loading libEGL runs no initialization routines with preconditions
        let library = unsafe { Library::new(path)? };

        // SAFETY: the symbols are declared with their EGL signatures
        unsafe {
            let get_proc_address = *library.get::<pfn::eglGetProcAddress>(b"eglGetProcAddress\0")?;
            let get_current_context =
                *library.get::<pfn::eglGetCurrentContext>(b"eglGetCurrentContext\0")?;
            let get_current_display =
                *library.get::<pfn::eglGetCurrentDisplay>(b"eglGetCurrentDisplay\0")?;
            let query_string = *library.get::<pfn::eglQueryString>(b"eglQueryString\0")?;

            Ok(Self {
                get_proc_address,
                get_current_context,
                get_current_display,
                query_string,
                library,
            })
        }
    }

    #[inline]
    fn query(&self, name: EGLint) -> Option<String> {
        // SAFETY: eglQueryString takes any display, and returns null on failure
        unsafe {
            let display = (self.get_current_display)();
            if display == EGL_NO_DISPLAY {
                return None;
            }

            let s = (self.query_string)(display, name);
            if s.is_null() {
                None
            } else {
                Some(CStr::from_ptr(s).to_string_lossy().into_owned())
            }
        }
    }
}

impl GlDispatch for EglBinding {
    #[inline]
    fn platform(&self) -> Platform {
        Platform::Egl
    }

    #[inline]
    fn is_current(&mut self) -> crate::Result<bool> {
        // SAFETY: no preconditions
        Ok(unsafe { (self.get_current_context)() } != EGL_NO_CONTEXT)
    }

    fn get_proc_address(&mut self, name: &CStr) -> crate::Result<Option<ProcAddress>> {
        // SAFETY: name is nul terminated
        let proc = unsafe { (self.get_proc_address)(name.as_ptr()) };
        if let Some(proc) = proc {
            // SAFETY: EGL hands out the address of the named function
            return Ok(unsafe { ProcAddress::from_raw(proc as *const c_void) });
        }

        // SAFETY: we only take the address of the symbol
        let export = unsafe {
            self.library
                .get::<unsafe extern "system" fn()>(name.to_bytes_with_nul())
                .ok()
                .map(|sym| *sym as *const c_void)
        };
        // SAFETY: the library exports the named function
        Ok(export.and_then(|ptr| unsafe { ProcAddress::from_raw(ptr) }))
    }

    #[inline]
    fn platform_extensions(&mut self) -> crate::Result<Option<String>> {
        Ok(self.query(EGL_EXTENSIONS))
    }

    #[inline]
    fn platform_version(&mut self) -> crate::Result<Option<Version>> {
        Ok(self.query(EGL_VERSION).and_then(|v| Version::parse(&v)))
    }
}
