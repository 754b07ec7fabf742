// MIT/Apache2 License

#![allow(non_camel_case_types)]
#![allow(clippy::upper_case_acronyms)]

use std::{
    ffi::c_void,
    os::raw::{c_char, c_float, c_int, c_uint, c_ulong},
};

pub type BOOL = c_int;
pub type UINT = c_uint;
pub type DWORD = c_ulong;
pub type FLOAT = c_float;
pub type LPCSTR = *const c_char;

pub type HDC = *mut c_void;
pub type HGLRC = *mut c_void;
pub type HPBUFFERARB = *mut c_void;

pub type PROC = Option<unsafe extern "system" fn() -> isize>;

/// Only ever handled by pointer.
#[repr(C)]
pub struct PIXELFORMATDESCRIPTOR {
    _private: [u8; 0],
}
