// MIT/Apache2 License

//! C ABI types used by the entry point signatures.

mod egl;
mod gl;
mod wgl;

pub use egl::*;
pub use gl::*;
pub use wgl::*;
