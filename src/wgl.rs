// MIT/Apache2 License

//! A [`GlDispatch`] implementation over `opengl32.dll`.

use crate::{pfn, Entry, GlDispatch, Platform, ProcAddress};
use libloading::Library;
use std::{
    ffi::{c_void, CStr},
    fmt,
};

/// WGL, loaded at runtime.
///
/// `wglGetProcAddress` only hands out functions past OpenGL 1.1, so everything else is
/// taken from `opengl32.dll`'s exports.
pub struct WglBinding {
    get_proc_address: pfn::wglGetProcAddress,
    get_current_context: pfn::wglGetCurrentContext,
    get_current_dc: pfn::wglGetCurrentDC,
    // must outlive the pointers above
    library: Library,
}

impl fmt::Debug for WglBinding {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WglBinding").finish()
    }
}

impl WglBinding {
    /// Open the system's `opengl32.dll`.
    pub fn open() -> crate::Result<Self> {
        // SAFETY: opengl32.dll has no initialization preconditions
        let library = unsafe { Library::new("opengl32.dll")? };

        // SAFETY: the symbols are declared with their WGL signatures
        unsafe {
            let get_proc_address = *library.get::<pfn::wglGetProcAddress>(b"wglGetProcAddress\0")?;
            let get_current_context =
                *library.get::<pfn::wglGetCurrentContext>(b"wglGetCurrentContext\0")?;
            let get_current_dc = *library.get::<pfn::wglGetCurrentDC>(b"wglGetCurrentDC\0")?;

            Ok(Self {
                get_proc_address,
                get_current_context,
                get_current_dc,
                library,
            })
        }
    }

    #[inline]
    fn wgl_proc(&self, name: &CStr) -> Option<ProcAddress> {
        // SAFETY: name is nul terminated
        let proc = unsafe { (self.get_proc_address)(name.as_ptr()) };
        let addr = proc.map_or(0, |f| f as usize as isize);

        // some drivers return small integers instead of null on failure
        match addr {
            0 | 1 | 2 | 3 | -1 => None,
            // SAFETY: WGL hands out the address of the named function
            addr => unsafe { ProcAddress::from_raw(addr as *const c_void) },
        }
    }

    #[inline]
    fn export(&self, name: &CStr) -> Option<ProcAddress> {
        // SAFETY: we only take the address of the symbol
        unsafe {
            self.library
                .get::<unsafe extern "system" fn()>(name.to_bytes_with_nul())
                .ok()
                .and_then(|sym| ProcAddress::from_raw(*sym as *const c_void))
        }
    }
}

impl GlDispatch for WglBinding {
    #[inline]
    fn platform(&self) -> Platform {
        Platform::Wgl
    }

    #[inline]
    fn is_current(&mut self) -> crate::Result<bool> {
        // SAFETY: no preconditions
        Ok(!unsafe { (self.get_current_context)() }.is_null())
    }

    #[inline]
    fn get_proc_address(&mut self, name: &CStr) -> crate::Result<Option<ProcAddress>> {
        Ok(self.wgl_proc(name).or_else(|| self.export(name)))
    }

    fn platform_extensions(&mut self) -> crate::Result<Option<String>> {
        let c_str = |ptr: *const std::os::raw::c_char| {
            if ptr.is_null() {
                None
            } else {
                // SAFETY: the extension string is nul terminated and static
                Some(unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned())
            }
        };

        if let Some(arb) = self.wgl_proc(Entry::wglGetExtensionsStringARB.descriptor().c_name()) {
            // SAFETY: resolved by name, and there is a current context
            let arb = unsafe {
                std::mem::transmute::<*const c_void, pfn::wglGetExtensionsStringARB>(arb.as_ptr())
            };
            let dc = unsafe { (self.get_current_dc)() };
            return Ok(c_str(unsafe { arb(dc) }));
        }

        if let Some(ext) = self.wgl_proc(Entry::wglGetExtensionsStringEXT.descriptor().c_name()) {
            // SAFETY: as above
            let ext = unsafe {
                std::mem::transmute::<*const c_void, pfn::wglGetExtensionsStringEXT>(ext.as_ptr())
            };
            return Ok(c_str(unsafe { ext() }));
        }

        Ok(None)
    }
}
