// MIT/Apache2 License

#![allow(non_camel_case_types)]

use std::{
    ffi::c_void,
    os::raw::{c_char, c_double, c_float, c_int, c_uchar, c_uint},
};

/* GL Types */
pub type GLbitfield = c_uint;
pub type GLboolean = c_uchar;
pub type GLubyte = c_uchar;
pub type GLchar = c_char;
pub type GLsizeiptr = isize;
pub type GLintptr = isize;
pub type GLvoid = c_void;
pub type GLenum = c_uint;
pub type GLint = c_int;
pub type GLuint = c_uint;
pub type GLsizei = c_int;
pub type GLfloat = c_float;
pub type GLdouble = c_double;
pub type GLuint64 = u64;

#[repr(C)]
pub struct __GLsync {
    _private: [u8; 0],
}

pub type GLsync = *mut __GLsync;

pub type GLDEBUGPROC = Option<
    unsafe extern "system" fn(
        source: GLenum,
        ty: GLenum,
        id: GLuint,
        severity: GLenum,
        length: GLsizei,
        message: *const GLchar,
        user_param: *mut GLvoid,
    ),
>;

/* Constants needed to probe a context */
pub const GL_EXTENSIONS: GLenum = 0x1F03;
pub const GL_VERSION: GLenum = 0x1F02;
pub const GL_NUM_EXTENSIONS: GLenum = 0x821D;
