// MIT/Apache2 License

use super::{DispatchTable, ProcAddress, Version};
use crate::LoaderConfig;
use std::ffi::CStr;

#[cfg(feature = "async")]
use crate::util::GenericResult;

/// The window system interface a binding resolves entry points through.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Platform {
    /// Windows' WGL. The WGL lists are loaded.
    Wgl,
    /// Khronos' EGL. The EGL list is loaded.
    Egl,
    /// Any other interface (GLX, CGL, a test harness). Only the GL lists are loaded.
    Other,
}

/// The type used to resolve GL entry points for one context.
pub trait GlDispatch {
    /// Create a dispatch table for the current context, using the default configuration.
    #[inline]
    fn functions(&mut self) -> crate::Result<DispatchTable> {
        DispatchTable::load(self, &LoaderConfig::default())
    }

    /// The window system interface this binding speaks.
    fn platform(&self) -> Platform;

    /// Whether a context is current on this thread. Nothing can be loaded without one.
    fn is_current(&mut self) -> crate::Result<bool>;

    /// Get the procedural address of the given function.
    ///
    /// Returns `Ok(None)` if the driver does not export the function. Errors are reserved
    /// for the primitive itself being unusable.
    fn get_proc_address(&mut self, name: &CStr) -> crate::Result<Option<ProcAddress>>;

    /// The space separated extension string of the window system interface, such as the
    /// result of `wglGetExtensionsStringARB` or `eglQueryString(EGL_EXTENSIONS)`.
    #[inline]
    fn platform_extensions(&mut self) -> crate::Result<Option<String>> {
        Ok(None)
    }

    /// The version of the window system interface, if it is versioned.
    #[inline]
    fn platform_version(&mut self) -> crate::Result<Option<Version>> {
        Ok(None)
    }
}

impl<D: GlDispatch + ?Sized> GlDispatch for &mut D {
    #[inline]
    fn platform(&self) -> Platform {
        (**self).platform()
    }
    #[inline]
    fn is_current(&mut self) -> crate::Result<bool> {
        (**self).is_current()
    }
    #[inline]
    fn get_proc_address(&mut self, name: &CStr) -> crate::Result<Option<ProcAddress>> {
        (**self).get_proc_address(name)
    }
    #[inline]
    fn platform_extensions(&mut self) -> crate::Result<Option<String>> {
        (**self).platform_extensions()
    }
    #[inline]
    fn platform_version(&mut self) -> crate::Result<Option<Version>> {
        (**self).platform_version()
    }
}

#[cfg(feature = "async")]
pub trait AsyncGlDispatch: Send {
    /// Create a dispatch table for the current context, using the default configuration.
    #[inline]
    fn functions_async<'future>(&'future mut self) -> GenericResult<'future, DispatchTable>
    where
        Self: Sized,
    {
        Box::pin(async move { DispatchTable::load_async(self, &LoaderConfig::default()).await })
    }

    /// The window system interface this binding speaks.
    fn platform(&self) -> Platform;

    /// Whether a context is current.
    fn is_current_async<'future>(&'future mut self) -> GenericResult<'future, bool>;

    /// Get the procedural address of the given function.
    fn get_proc_address_async<'future, 'a, 'b>(
        &'a mut self,
        name: &'b CStr,
    ) -> GenericResult<'future, Option<ProcAddress>>
    where
        'a: 'future,
        'b: 'future;

    /// The space separated extension string of the window system interface.
    #[inline]
    fn platform_extensions_async<'future>(
        &'future mut self,
    ) -> GenericResult<'future, Option<String>> {
        Box::pin(async { Ok(None) })
    }

    /// The version of the window system interface, if it is versioned.
    #[inline]
    fn platform_version_async<'future>(
        &'future mut self,
    ) -> GenericResult<'future, Option<Version>> {
        Box::pin(async { Ok(None) })
    }
}
