// MIT/Apache2 License

//! Runtime dispatch tables for OpenGL, WGL and EGL.
//!
//! Most GL entry points are not guaranteed to exist in every driver, so they cannot be
//! linked against statically. Instead, a [`GlDispatch`] implementation wraps the platform's
//! "get proc address" primitive, and a [`DispatchTable`] is built from it once per context
//! by walking the compiled-in list of [`DESCRIPTORS`]. Callers then check each entry point
//! before calling through it:
//!
//! ```no_run
//! # fn with_binding<B: breadgl::GlDispatch>(binding: &mut B) -> breadgl::Result {
//! let table = breadgl::DispatchTable::load(binding, &breadgl::LoaderConfig::from_env())?;
//! if let Some(clear) = table.glClear() {
//!     unsafe { clear(0x4000) };
//! }
//! # Ok(())
//! # }
//! ```

mod config;
mod error;

pub mod gl;

#[cfg(all(feature = "egl", not(target_os = "macos")))]
pub mod egl;
#[cfg(all(windows, feature = "wgl"))]
pub mod wgl;

pub(crate) mod util;

pub use config::*;
pub use error::*;
pub use gl::*;
