// MIT/Apache2 License

#![allow(non_camel_case_types)]

use std::{ffi::c_void, os::raw::c_uint};

pub type EGLBoolean = c_uint;
pub type EGLenum = c_uint;
pub type EGLint = i32;
pub type EGLAttrib = isize;
pub type EGLTime = u64;

pub type EGLDisplay = *mut c_void;
pub type EGLConfig = *mut c_void;
pub type EGLContext = *mut c_void;
pub type EGLSurface = *mut c_void;
pub type EGLImage = *mut c_void;
pub type EGLSync = *mut c_void;
pub type EGLClientBuffer = *mut c_void;

pub type EGLNativeDisplayType = *mut c_void;
pub type EGLNativePixmapType = *mut c_void;
pub type EGLNativeWindowType = *mut c_void;

pub type __eglMustCastToProperFunctionPointerType = Option<unsafe extern "system" fn()>;

pub const EGL_EXTENSIONS: EGLint = 0x3055;
pub const EGL_VERSION: EGLint = 0x3054;

pub const EGL_NO_CONTEXT: EGLContext = std::ptr::null_mut();
pub const EGL_NO_DISPLAY: EGLDisplay = std::ptr::null_mut();
