// MIT/Apache2 License

//! The compiled-in list of entry points.
//!
//! Every entry point has exactly one [`Descriptor`] in [`DESCRIPTORS`], one ordinal in
//! [`Entry`], one function pointer type in [`pfn`] and one typed accessor on
//! [`DispatchTable`]. All four are generated from the same invocation of
//! `define_entry_points!`, which must stay sorted by name.

#![allow(non_snake_case)]
#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]

use super::{Descriptor, DispatchTable, FuncList, Suffix, SuffixSet};
use crate::util::StaticCstr;
use std::{fmt, mem};

macro_rules! define_entry_points {
    ($(
        $list: ident $($req: literal)? $([$($suffix: ident $($suffix_req: literal)?),*])?
        $fname: ident ($($arg: ty),*) $(-> $ret: ty)?;
    )*) => {
        /// Ordinal of an entry point in the dispatch table.
        #[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(u16)]
        pub enum Entry {
            $($fname),*
        }

        impl Entry {
            /// Number of entry points known to this crate.
            pub const COUNT: usize = [$(stringify!($fname)),*].len();

            /// Every entry point, in table order.
            pub const ALL: [Entry; Entry::COUNT] = [$(Entry::$fname),*];
        }

        /// Function pointer types for every entry point.
        pub mod pfn {
            #![allow(non_camel_case_types)]

            use crate::gl::types::*;
            #[allow(unused_imports)]
            use std::os::raw::{c_char, c_int, c_void};

            $(
                pub type $fname = unsafe extern "system" fn($($arg),*) $(-> $ret)?;
            )*
        }

        /// Descriptors for every entry point, sorted by name.
        pub static DESCRIPTORS: [Descriptor; Entry::COUNT] = [
            $(
                Descriptor {
                    entry: Entry::$fname,
                    name: StaticCstr::new(concat!(stringify!($fname), '\0')),
                    list: FuncList::$list,
                    signature: stringify!(unsafe extern "system" fn($($arg),*) $(-> $ret)?),
                    requires: concat!("" $(, $req)?),
                    aliases: SuffixSet::EMPTY $($(.with(Suffix::$suffix))*)?,
                    alias_requires: &[$($((Suffix::$suffix, concat!("" $(, $suffix_req)?)),)*)?],
                }
            ),*
        ];

        impl DispatchTable {
            $(
                /// Typed accessor for the entry point of the same name.
                #[inline]
                pub fn $fname(&self) -> Option<pfn::$fname> {
                    // SAFETY: the slot was resolved by looking up this entry point's own
                    //         name (or a functionally equivalent alias), so the address has
                    //         this signature
                    self.get(Entry::$fname).map(|addr| unsafe {
                        mem::transmute::<*const std::ffi::c_void, pfn::$fname>(addr.as_ptr())
                    })
                }
            )*
        }
    }
}

impl Entry {
    /// Look up an entry point by its canonical name.
    #[inline]
    pub fn from_name(name: &str) -> Option<Entry> {
        DESCRIPTORS
            .binary_search_by(|d| d.name().cmp(name))
            .ok()
            .map(|i| DESCRIPTORS[i].entry)
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn descriptor(self) -> &'static Descriptor {
        &DESCRIPTORS[self.index()]
    }

    #[inline]
    pub fn name(self) -> &'static str {
        self.descriptor().name()
    }

    /// The entry point that stands in for this one when this one is unsupported.
    #[inline]
    pub fn alternative(self) -> Option<Entry> {
        ALTERNATIVES
            .iter()
            .find(|(entry, _)| *entry == self)
            .map(|(_, alt)| *alt)
    }
}

impl fmt::Debug for Entry {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Entry {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl PartialEq<str> for Entry {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.name() == other
    }
}

/// Extension entry points that applications look up by a name their driver might not
/// advertise, paired with the functionally identical entry point to use instead.
pub static ALTERNATIVES: &[(Entry, Entry)] = &[
    (Entry::glBlendColorEXT, Entry::glBlendColor),
    (Entry::glBlendEquationEXT, Entry::glBlendEquation),
    (Entry::glCopyTexSubImage3DEXT, Entry::glCopyTexSubImage3D),
];

define_entry_points! {
    Egl eglBindAPI(EGLenum) -> EGLBoolean;
    Egl eglBindTexImage(EGLDisplay, EGLSurface, EGLint) -> EGLBoolean;
    Egl eglChooseConfig(EGLDisplay, *const EGLint, *mut EGLConfig, EGLint, *mut EGLint) -> EGLBoolean;
    Egl "EGL_KHR_fence_sync EGL_VERSION_1_5" [KHR "EGL_KHR_fence_sync"] eglClientWaitSync(EGLDisplay, EGLSync, EGLint, EGLTime) -> EGLint;
    Egl eglCopyBuffers(EGLDisplay, EGLSurface, EGLNativePixmapType) -> EGLBoolean;
    Egl eglCreateContext(EGLDisplay, EGLConfig, EGLContext, *const EGLint) -> EGLContext;
    Egl "EGL_VERSION_1_5" eglCreateImage(EGLDisplay, EGLContext, EGLenum, EGLClientBuffer, *const EGLAttrib) -> EGLImage;
    Egl eglCreatePbufferSurface(EGLDisplay, EGLConfig, *const EGLint) -> EGLSurface;
    Egl "EGL_VERSION_1_5" eglCreateSync(EGLDisplay, EGLenum, *const EGLAttrib) -> EGLSync;
    Egl eglCreateWindowSurface(EGLDisplay, EGLConfig, EGLNativeWindowType, *const EGLint) -> EGLSurface;
    Egl eglDestroyContext(EGLDisplay, EGLContext) -> EGLBoolean;
    Egl "EGL_KHR_image_base EGL_VERSION_1_5" [KHR "EGL_KHR_image_base"] eglDestroyImage(EGLDisplay, EGLImage) -> EGLBoolean;
    Egl eglDestroySurface(EGLDisplay, EGLSurface) -> EGLBoolean;
    Egl "EGL_KHR_fence_sync EGL_VERSION_1_5" [KHR "EGL_KHR_fence_sync"] eglDestroySync(EGLDisplay, EGLSync) -> EGLBoolean;
    Egl eglGetConfigAttrib(EGLDisplay, EGLConfig, EGLint, *mut EGLint) -> EGLBoolean;
    Egl eglGetConfigs(EGLDisplay, *mut EGLConfig, EGLint, *mut EGLint) -> EGLBoolean;
    Egl eglGetCurrentContext() -> EGLContext;
    Egl eglGetCurrentDisplay() -> EGLDisplay;
    Egl eglGetCurrentSurface(EGLint) -> EGLSurface;
    Egl eglGetDisplay(EGLNativeDisplayType) -> EGLDisplay;
    Egl eglGetError() -> EGLint;
    Egl "EGL_VERSION_1_5" eglGetPlatformDisplay(EGLenum, *mut c_void, *const EGLAttrib) -> EGLDisplay;
    Egl eglGetProcAddress(*const c_char) -> __eglMustCastToProperFunctionPointerType;
    Egl eglInitialize(EGLDisplay, *mut EGLint, *mut EGLint) -> EGLBoolean;
    Egl eglMakeCurrent(EGLDisplay, EGLSurface, EGLSurface, EGLContext) -> EGLBoolean;
    Egl eglQueryAPI() -> EGLenum;
    Egl eglQueryContext(EGLDisplay, EGLContext, EGLint, *mut EGLint) -> EGLBoolean;
    Egl "EGL_EXT_image_dma_buf_import_modifiers" eglQueryDmaBufFormatsEXT(EGLDisplay, EGLint, *mut EGLint, *mut EGLint) -> EGLBoolean;
    Egl eglQueryString(EGLDisplay, EGLint) -> *const c_char;
    Egl eglQuerySurface(EGLDisplay, EGLSurface, EGLint, *mut EGLint) -> EGLBoolean;
    Egl eglReleaseThread() -> EGLBoolean;
    Egl eglSurfaceAttrib(EGLDisplay, EGLSurface, EGLint, EGLint) -> EGLBoolean;
    Egl eglSwapBuffers(EGLDisplay, EGLSurface) -> EGLBoolean;
    Egl eglSwapInterval(EGLDisplay, EGLint) -> EGLBoolean;
    Egl eglTerminate(EGLDisplay) -> EGLBoolean;
    Egl eglWaitClient() -> EGLBoolean;
    Egl eglWaitGL() -> EGLBoolean;
    Egl eglWaitNative(EGLint) -> EGLBoolean;
    Gl glAccum(GLenum, GLfloat);
    GlExt "GL_VERSION_1_3" [ARB "GL_ARB_multitexture"] glActiveTexture(GLenum);
    Gl glAlphaFunc(GLenum, GLfloat);
    GlExt "GL_VERSION_2_0" glAttachShader(GLuint, GLuint);
    Gl glBegin(GLenum);
    GlExt "GL_ARB_vertex_buffer_object GL_VERSION_1_5" [ARB "GL_ARB_vertex_buffer_object"] glBindBuffer(GLenum, GLuint);
    GlExt "GL_ARB_framebuffer_object GL_VERSION_3_0" [EXT "GL_EXT_framebuffer_object"] glBindFramebuffer(GLenum, GLuint);
    GlExt "GL_ARB_framebuffer_object GL_VERSION_3_0" [EXT "GL_EXT_framebuffer_object"] glBindRenderbuffer(GLenum, GLuint);
    Gl glBindTexture(GLenum, GLuint);
    GlExt "GL_ARB_vertex_array_object GL_VERSION_3_0" [OES "GL_OES_vertex_array_object", APPLE "GL_APPLE_vertex_array_object"] glBindVertexArray(GLuint);
    GlExt "GL_ARB_imaging GL_VERSION_1_4" [EXT "GL_EXT_blend_color"] glBlendColor(GLfloat, GLfloat, GLfloat, GLfloat);
    GlExt "GL_EXT_blend_color" glBlendColorEXT(GLfloat, GLfloat, GLfloat, GLfloat);
    GlExt "GL_ARB_imaging GL_VERSION_1_4" [EXT "GL_EXT_blend_minmax"] glBlendEquation(GLenum);
    GlExt "GL_EXT_blend_minmax" glBlendEquationEXT(GLenum);
    Gl glBlendFunc(GLenum, GLenum);
    GlExt "GL_VERSION_1_4" [EXT "GL_EXT_blend_func_separate"] glBlendFuncSeparate(GLenum, GLenum, GLenum, GLenum);
    GlExt "GL_ARB_vertex_buffer_object GL_VERSION_1_5" [ARB "GL_ARB_vertex_buffer_object"] glBufferData(GLenum, GLsizeiptr, *const GLvoid, GLenum);
    GlExt "GL_ARB_vertex_buffer_object GL_VERSION_1_5" [ARB "GL_ARB_vertex_buffer_object"] glBufferSubData(GLenum, GLintptr, GLsizeiptr, *const GLvoid);
    Gl glCallList(GLuint);
    GlExt "GL_ARB_framebuffer_object GL_VERSION_3_0" [EXT "GL_EXT_framebuffer_object"] glCheckFramebufferStatus(GLenum) -> GLenum;
    Gl glClear(GLbitfield);
    Gl glClearColor(GLfloat, GLfloat, GLfloat, GLfloat);
    Gl glClearDepth(GLdouble);
    Gl glClearStencil(GLint);
    GlExt "GL_ARB_sync GL_VERSION_3_2" [APPLE "GL_APPLE_sync"] glClientWaitSync(GLsync, GLbitfield, GLuint64) -> GLenum;
    Gl glColor3f(GLfloat, GLfloat, GLfloat);
    Gl glColor4f(GLfloat, GLfloat, GLfloat, GLfloat);
    Gl glColor4ub(GLubyte, GLubyte, GLubyte, GLubyte);
    Gl glColorMask(GLboolean, GLboolean, GLboolean, GLboolean);
    GlExt "GL_VERSION_2_0" [ARB "GL_ARB_shader_objects"] glCompileShader(GLuint);
    GlExt "GL_VERSION_1_3" [ARB "GL_ARB_texture_compression"] glCompressedTexImage2D(GLenum, GLint, GLenum, GLsizei, GLsizei, GLint, GLsizei, *const GLvoid);
    Gl glCopyTexImage2D(GLenum, GLint, GLenum, GLint, GLint, GLsizei, GLsizei, GLint);
    GlExt "GL_VERSION_1_2" [EXT "GL_EXT_copy_texture"] glCopyTexSubImage3D(GLenum, GLint, GLint, GLint, GLint, GLint, GLint, GLsizei, GLsizei);
    GlExt "GL_EXT_copy_texture" glCopyTexSubImage3DEXT(GLenum, GLint, GLint, GLint, GLint, GLint, GLint, GLsizei, GLsizei);
    GlExt "GL_VERSION_2_0" glCreateProgram() -> GLuint;
    GlExt "GL_VERSION_2_0" glCreateShader(GLenum) -> GLuint;
    Gl glCullFace(GLenum);
    GlExt "GL_KHR_debug GL_VERSION_4_3" [KHR "GL_KHR_debug", ARB "GL_ARB_debug_output"] glDebugMessageCallback(GLDEBUGPROC, *const GLvoid);
    GlExt "GL_ARB_vertex_buffer_object GL_VERSION_1_5" [ARB "GL_ARB_vertex_buffer_object"] glDeleteBuffers(GLsizei, *const GLuint);
    GlExt "GL_ARB_framebuffer_object GL_VERSION_3_0" [EXT "GL_EXT_framebuffer_object"] glDeleteFramebuffers(GLsizei, *const GLuint);
    Gl glDeleteLists(GLuint, GLsizei);
    GlExt "GL_VERSION_2_0" glDeleteProgram(GLuint);
    GlExt "GL_VERSION_2_0" glDeleteShader(GLuint);
    GlExt "GL_ARB_sync GL_VERSION_3_2" [APPLE "GL_APPLE_sync"] glDeleteSync(GLsync);
    Gl glDeleteTextures(GLsizei, *const GLuint);
    GlExt "GL_ARB_vertex_array_object GL_VERSION_3_0" [OES "GL_OES_vertex_array_object", APPLE "GL_APPLE_vertex_array_object"] glDeleteVertexArrays(GLsizei, *const GLuint);
    Gl glDepthFunc(GLenum);
    Gl glDepthMask(GLboolean);
    Gl glDisable(GLenum);
    GlExt "GL_VERSION_2_0" [ARB "GL_ARB_vertex_program"] glDisableVertexAttribArray(GLuint);
    Gl glDrawArrays(GLenum, GLint, GLsizei);
    GlExt "GL_ARB_draw_instanced GL_VERSION_3_1" [ARB "GL_ARB_draw_instanced", EXT "GL_EXT_draw_instanced"] glDrawArraysInstanced(GLenum, GLint, GLsizei, GLsizei);
    GlExt "GL_VERSION_2_0" [ARB "GL_ARB_draw_buffers"] glDrawBuffers(GLsizei, *const GLenum);
    Gl glDrawElements(GLenum, GLsizei, GLenum, *const GLvoid);
    GlExt "GL_ARB_draw_instanced GL_VERSION_3_1" [ARB "GL_ARB_draw_instanced", EXT "GL_EXT_draw_instanced"] glDrawElementsInstanced(GLenum, GLsizei, GLenum, *const GLvoid, GLsizei);
    Gl glEnable(GLenum);
    GlExt "GL_VERSION_2_0" [ARB "GL_ARB_vertex_program"] glEnableVertexAttribArray(GLuint);
    Gl glEnd();
    Gl glEndList();
    GlExt "GL_ARB_sync GL_VERSION_3_2" [APPLE "GL_APPLE_sync"] glFenceSync(GLenum, GLbitfield) -> GLsync;
    Gl glFinish();
    Gl glFlush();
    GlExt "GL_ARB_framebuffer_object GL_VERSION_3_0" [EXT "GL_EXT_framebuffer_object"] glFramebufferRenderbuffer(GLenum, GLenum, GLenum, GLuint);
    GlExt "GL_ARB_framebuffer_object GL_VERSION_3_0" [EXT "GL_EXT_framebuffer_object"] glFramebufferTexture2D(GLenum, GLenum, GLenum, GLuint, GLint);
    Gl glFrontFace(GLenum);
    GlExt "GL_ARB_vertex_buffer_object GL_VERSION_1_5" [ARB "GL_ARB_vertex_buffer_object"] glGenBuffers(GLsizei, *mut GLuint);
    GlExt "GL_ARB_framebuffer_object GL_VERSION_3_0" [EXT "GL_EXT_framebuffer_object"] glGenFramebuffers(GLsizei, *mut GLuint);
    Gl glGenLists(GLsizei) -> GLuint;
    GlExt "GL_ARB_framebuffer_object GL_VERSION_3_0" [EXT "GL_EXT_framebuffer_object"] glGenRenderbuffers(GLsizei, *mut GLuint);
    Gl glGenTextures(GLsizei, *mut GLuint);
    GlExt "GL_ARB_vertex_array_object GL_VERSION_3_0" [OES "GL_OES_vertex_array_object", APPLE "GL_APPLE_vertex_array_object"] glGenVertexArrays(GLsizei, *mut GLuint);
    GlExt "GL_ARB_framebuffer_object GL_VERSION_3_0" [EXT "GL_EXT_framebuffer_object"] glGenerateMipmap(GLenum);
    GlExt "GL_VERSION_2_0" [ARB "GL_ARB_vertex_shader"] glGetAttribLocation(GLuint, *const GLchar) -> GLint;
    Gl glGetError() -> GLenum;
    Gl glGetFloatv(GLenum, *mut GLfloat);
    Gl glGetIntegerv(GLenum, *mut GLint);
    GlExt "GL_VERSION_2_0" glGetProgramInfoLog(GLuint, GLsizei, *mut GLsizei, *mut GLchar);
    GlExt "GL_VERSION_2_0" glGetProgramiv(GLuint, GLenum, *mut GLint);
    GlExt "GL_VERSION_2_0" glGetShaderInfoLog(GLuint, GLsizei, *mut GLsizei, *mut GLchar);
    GlExt "GL_VERSION_2_0" glGetShaderiv(GLuint, GLenum, *mut GLint);
    Gl glGetString(GLenum) -> *const GLubyte;
    GlExt "GL_VERSION_3_0" glGetStringi(GLenum, GLuint) -> *const GLubyte;
    GlExt "GL_VERSION_2_0" [ARB "GL_ARB_shader_objects"] glGetUniformLocation(GLuint, *const GLchar) -> GLint;
    Gl glHint(GLenum, GLenum);
    Gl glIsEnabled(GLenum) -> GLboolean;
    Gl glIsTexture(GLuint) -> GLboolean;
    Gl glLineWidth(GLfloat);
    GlExt "GL_VERSION_2_0" [ARB "GL_ARB_shader_objects"] glLinkProgram(GLuint);
    Gl glLoadIdentity();
    Gl glLoadMatrixf(*const GLfloat);
    GlExt "GL_ARB_vertex_buffer_object GL_VERSION_1_5" [ARB "GL_ARB_vertex_buffer_object", OES "GL_OES_mapbuffer"] glMapBuffer(GLenum, GLenum) -> *mut GLvoid;
    GlExt "GL_ARB_map_buffer_range GL_VERSION_3_0" [EXT "GL_EXT_map_buffer_range"] glMapBufferRange(GLenum, GLintptr, GLsizeiptr, GLbitfield) -> *mut GLvoid;
    Gl glMatrixMode(GLenum);
    Gl glNewList(GLuint, GLenum);
    Gl glNormal3f(GLfloat, GLfloat, GLfloat);
    Gl glOrtho(GLdouble, GLdouble, GLdouble, GLdouble, GLdouble, GLdouble);
    Gl glPixelStorei(GLenum, GLint);
    Gl glPointSize(GLfloat);
    Gl glPolygonMode(GLenum, GLenum);
    Gl glPopMatrix();
    Gl glPushMatrix();
    Gl glReadPixels(GLint, GLint, GLsizei, GLsizei, GLenum, GLenum, *mut GLvoid);
    GlExt "GL_ARB_framebuffer_object GL_VERSION_3_0" [EXT "GL_EXT_framebuffer_object"] glRenderbufferStorage(GLenum, GLenum, GLsizei, GLsizei);
    Gl glRotatef(GLfloat, GLfloat, GLfloat, GLfloat);
    Gl glScalef(GLfloat, GLfloat, GLfloat);
    Gl glScissor(GLint, GLint, GLsizei, GLsizei);
    GlExt "GL_VERSION_2_0" [ARB "GL_ARB_shader_objects"] glShaderSource(GLuint, GLsizei, *const *const GLchar, *const GLint);
    Gl glStencilFunc(GLenum, GLint, GLuint);
    Gl glStencilOp(GLenum, GLenum, GLenum);
    Gl glTexCoord2f(GLfloat, GLfloat);
    Gl glTexImage2D(GLenum, GLint, GLint, GLsizei, GLsizei, GLint, GLenum, GLenum, *const GLvoid);
    Gl glTexParameteri(GLenum, GLenum, GLint);
    Gl glTexSubImage2D(GLenum, GLint, GLint, GLint, GLsizei, GLsizei, GLenum, GLenum, *const GLvoid);
    Gl glTranslatef(GLfloat, GLfloat, GLfloat);
    GlExt "GL_VERSION_2_0" [ARB "GL_ARB_shader_objects"] glUniform1f(GLint, GLfloat);
    GlExt "GL_VERSION_2_0" [ARB "GL_ARB_shader_objects"] glUniform1i(GLint, GLint);
    GlExt "GL_VERSION_2_0" [ARB "GL_ARB_shader_objects"] glUniform4f(GLint, GLfloat, GLfloat, GLfloat, GLfloat);
    GlExt "GL_VERSION_2_0" [ARB "GL_ARB_shader_objects"] glUniformMatrix4fv(GLint, GLsizei, GLboolean, *const GLfloat);
    GlExt "GL_ARB_vertex_buffer_object GL_VERSION_1_5" [ARB "GL_ARB_vertex_buffer_object", OES "GL_OES_mapbuffer"] glUnmapBuffer(GLenum) -> GLboolean;
    GlExt "GL_VERSION_2_0" glUseProgram(GLuint);
    Gl glVertex2f(GLfloat, GLfloat);
    Gl glVertex3f(GLfloat, GLfloat, GLfloat);
    GlExt "GL_ARB_instanced_arrays GL_VERSION_3_3" [ARB "GL_ARB_instanced_arrays", ANGLE "GL_ANGLE_instanced_arrays"] glVertexAttribDivisor(GLuint, GLuint);
    GlExt "GL_VERSION_2_0" [ARB "GL_ARB_vertex_program"] glVertexAttribPointer(GLuint, GLint, GLenum, GLboolean, GLsizei, *const GLvoid);
    Gl glViewport(GLint, GLint, GLsizei, GLsizei);
    GlExt "GL_ARB_sync GL_VERSION_3_2" [APPLE "GL_APPLE_sync"] glWaitSync(GLsync, GLbitfield, GLuint64);
    WglExt "WGL_ARB_pixel_format" wglChoosePixelFormatARB(HDC, *const c_int, *const FLOAT, UINT, *mut c_int, *mut UINT) -> BOOL;
    Wgl wglCopyContext(HGLRC, HGLRC, UINT) -> BOOL;
    Wgl wglCreateContext(HDC) -> HGLRC;
    WglExt "WGL_ARB_create_context" wglCreateContextAttribsARB(HDC, HGLRC, *const c_int) -> HGLRC;
    Wgl wglCreateLayerContext(HDC, c_int) -> HGLRC;
    WglExt "WGL_ARB_pbuffer" wglCreatePbufferARB(HDC, c_int, c_int, c_int, *const c_int) -> HPBUFFERARB;
    Wgl wglDeleteContext(HGLRC) -> BOOL;
    Wgl wglDescribePixelFormat(HDC, c_int, UINT, *mut PIXELFORMATDESCRIPTOR) -> c_int;
    WglExt "WGL_ARB_pbuffer" wglDestroyPbufferARB(HPBUFFERARB) -> BOOL;
    Wgl wglGetCurrentContext() -> HGLRC;
    Wgl wglGetCurrentDC() -> HDC;
    WglExt "WGL_ARB_extensions_string" wglGetExtensionsStringARB(HDC) -> *const c_char;
    WglExt "WGL_EXT_extensions_string" wglGetExtensionsStringEXT() -> *const c_char;
    WglExt "WGL_ARB_pbuffer" wglGetPbufferDCARB(HPBUFFERARB) -> HDC;
    Wgl wglGetPixelFormat(HDC) -> c_int;
    WglExt "WGL_ARB_pixel_format" wglGetPixelFormatAttribivARB(HDC, c_int, c_int, UINT, *const c_int, *mut c_int) -> BOOL;
    Wgl wglGetProcAddress(LPCSTR) -> PROC;
    WglExt "WGL_EXT_swap_control" wglGetSwapIntervalEXT() -> c_int;
    WglExt "WGL_ARB_make_current_read" wglMakeContextCurrentARB(HDC, HDC, HGLRC) -> BOOL;
    Wgl wglMakeCurrent(HDC, HGLRC) -> BOOL;
    WglExt "WGL_ARB_pbuffer" wglReleasePbufferDCARB(HPBUFFERARB, HDC) -> c_int;
    Wgl wglSetPixelFormat(HDC, c_int, *const PIXELFORMATDESCRIPTOR) -> BOOL;
    Wgl wglShareLists(HGLRC, HGLRC) -> BOOL;
    Wgl wglSwapBuffers(HDC) -> BOOL;
    WglExt "WGL_EXT_swap_control" wglSwapIntervalEXT(c_int) -> BOOL;
    Wgl wglUseFontBitmapsA(HDC, DWORD, DWORD, DWORD) -> BOOL;
}
