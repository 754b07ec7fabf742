// MIT/Apache2 License

use super::{
    pfn,
    types::{GLint, GLuint, GL_EXTENSIONS, GL_NUM_EXTENSIONS, GL_VERSION},
    ProcAddress,
};
use std::{collections::BTreeSet, ffi::CStr, fmt, mem, os::raw::c_char};

/// A `major.minor` version number.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
}

impl Version {
    #[inline]
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Parse the leading version number out of a version string.
    ///
    /// This accepts the formats drivers actually return, such as `4.6.0 NVIDIA 535.54`,
    /// `OpenGL ES 3.2 Mesa 23.1` and `1.5 Mesa`.
    pub fn parse(s: &str) -> Option<Self> {
        let start = s.find(|c: char| c.is_ascii_digit())?;
        let s = &s[start..];
        let mut parts = s.splitn(2, '.');
        let major = parts.next()?.parse().ok()?;
        let rest = parts.next()?;
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        let minor = rest[..end].parse().ok()?;
        Some(Self { major, minor })
    }

    /// Parse a `GL_VERSION_3_0` style token, given the token without its prefix.
    #[inline]
    fn from_token(s: &str) -> Option<Self> {
        let mut parts = s.splitn(2, '_');
        let major = parts.next()?.parse().ok()?;
        let minor = parts.next()?.parse().ok()?;
        Some(Self { major, minor })
    }
}

impl fmt::Display for Version {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// What a context advertises. Anything that could not be determined is `None`, and
/// requirements on it are assumed to be met.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Capabilities {
    gl_version: Option<Version>,
    gl_extensions: Option<BTreeSet<String>>,
    platform_version: Option<Version>,
    platform_extensions: Option<BTreeSet<String>>,
}

impl Capabilities {
    /// Capabilities that rule nothing out.
    #[inline]
    pub fn unknown() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_gl_version(mut self, version: Version) -> Self {
        self.gl_version = Some(version);
        self
    }

    #[inline]
    pub fn with_gl_extensions<I: IntoIterator<Item = S>, S: Into<String>>(mut self, exts: I) -> Self {
        self.gl_extensions = Some(exts.into_iter().map(Into::into).collect());
        self
    }

    #[inline]
    pub fn with_platform_version(mut self, version: Version) -> Self {
        self.platform_version = Some(version);
        self
    }

    #[inline]
    pub fn with_platform_extensions<I: IntoIterator<Item = S>, S: Into<String>>(
        mut self,
        exts: I,
    ) -> Self {
        self.platform_extensions = Some(exts.into_iter().map(Into::into).collect());
        self
    }

    #[inline]
    pub fn gl_version(&self) -> Option<Version> {
        self.gl_version
    }

    #[inline]
    pub fn platform_version(&self) -> Option<Version> {
        self.platform_version
    }

    /// Whether the GL or window system extension is advertised. `false` when unknown.
    #[inline]
    pub fn has_extension(&self, name: &str) -> bool {
        let set = if name.starts_with("GL_") {
            &self.gl_extensions
        } else {
            &self.platform_extensions
        };
        set.as_ref().map_or(false, |set| set.contains(name))
    }

    /// Whether a single requirement token is met.
    pub fn satisfies(&self, token: &str) -> bool {
        if let Some(v) = token.strip_prefix("GL_VERSION_") {
            return version_at_least(self.gl_version, v);
        }
        if let Some(v) = token
            .strip_prefix("EGL_VERSION_")
            .or_else(|| token.strip_prefix("WGL_VERSION_"))
        {
            return version_at_least(self.platform_version, v);
        }

        let set = if token.starts_with("GL_") {
            &self.gl_extensions
        } else {
            &self.platform_extensions
        };
        set.as_ref().map_or(true, |set| set.contains(token))
    }

    /// Whether a requirement string, a space separated list of alternatives, is met.
    #[inline]
    pub fn supports(&self, requires: &str) -> bool {
        let mut tokens = requires.split_ascii_whitespace().peekable();
        tokens.peek().is_none() || tokens.any(|t| self.satisfies(t))
    }

    /// Remove the named extensions, as configured by the user.
    pub(crate) fn disable(&mut self, disabled: &[String]) {
        if disabled.is_empty() {
            return;
        }

        for set in self
            .gl_extensions
            .iter_mut()
            .chain(self.platform_extensions.iter_mut())
        {
            set.retain(|ext| {
                if disabled.iter().any(|d| d == ext) {
                    log::trace!("-- {} (disabled by config)", ext);
                    false
                } else {
                    true
                }
            });
        }
    }
}

#[inline]
fn version_at_least(have: Option<Version>, token: &str) -> bool {
    match (have, Version::from_token(token)) {
        (Some(have), Some(need)) => have >= need,
        (None, _) => true,
        (Some(_), None) => {
            log::warn!("Malformed version requirement \"{}\"", token);
            false
        }
    }
}

/// Split a space separated extension string into its names.
pub(crate) fn split_extensions(list: &str) -> BTreeSet<String> {
    list.split_ascii_whitespace().map(String::from).collect()
}

/// The entry points needed to ask a context what it supports.
#[derive(Debug, Copy, Clone, Default)]
pub(crate) struct Probe {
    pub(crate) get_string: Option<ProcAddress>,
    pub(crate) get_integerv: Option<ProcAddress>,
    pub(crate) get_stringi: Option<ProcAddress>,
}

impl Probe {
    /// Query the current context's GL version and extensions.
    ///
    /// # Safety
    ///
    /// The addresses must be the context's `glGetString`, `glGetIntegerv` and `glGetStringi`,
    /// and the context must be current on this thread.
    pub(crate) unsafe fn query(self) -> Capabilities {
        let mut caps = Capabilities::unknown();

        let get_string = match self.get_string {
            Some(gs) => mem::transmute::<*const std::ffi::c_void, pfn::glGetString>(gs.as_ptr()),
            None => {
                log::debug!("glGetString is unavailable, not probing context capabilities");
                return caps;
            }
        };

        caps.gl_version = match c_str(get_string(GL_VERSION) as *const c_char) {
            Some(version) => {
                let parsed = Version::parse(version);
                if parsed.is_none() {
                    log::warn!("Invalid OpenGL version string \"{}\"", version);
                }
                parsed
            }
            None => None,
        };

        // indexed extensions are the only ones available on 3.0+ core contexts
        let indexed = match (caps.gl_version, self.get_integerv, self.get_stringi) {
            (Some(v), Some(gi), Some(gsi)) if v.major >= 3 => {
                let get_integerv = mem::transmute::<_, pfn::glGetIntegerv>(gi.as_ptr());
                let get_stringi = mem::transmute::<_, pfn::glGetStringi>(gsi.as_ptr());

                let mut count: GLint = 0;
                get_integerv(GL_NUM_EXTENSIONS, &mut count);
                Some(
                    (0..count.max(0) as GLuint)
                        .filter_map(|i| c_str(get_stringi(GL_EXTENSIONS, i) as *const c_char))
                        .map(String::from)
                        .collect::<BTreeSet<_>>(),
                )
            }
            _ => None,
        };

        caps.gl_extensions = indexed.or_else(|| {
            c_str(get_string(GL_EXTENSIONS) as *const c_char).map(split_extensions)
        });

        if let Some(ref exts) = caps.gl_extensions {
            for ext in exts {
                log::trace!("++ {}", ext);
            }
        }

        caps
    }
}

#[inline]
unsafe fn c_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        None
    } else {
        CStr::from_ptr(ptr).to_str().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parse() {
        assert_eq!(Version::parse("4.6.0 NVIDIA 535.54"), Some(Version::new(4, 6)));
        assert_eq!(Version::parse("OpenGL ES 3.2 Mesa 23.1"), Some(Version::new(3, 2)));
        assert_eq!(Version::parse("1.5"), Some(Version::new(1, 5)));
        assert_eq!(Version::parse("2.1 Mesa 20.0"), Some(Version::new(2, 1)));
        assert_eq!(Version::parse("garbage"), None);
        assert_eq!(Version::parse("3"), None);
    }

    #[test]
    fn test_version_ordering() {
        assert!(Version::new(3, 10) > Version::new(3, 2));
        assert!(Version::new(4, 0) > Version::new(3, 3));
    }

    #[test]
    fn test_supports_versions() {
        let caps = Capabilities::unknown().with_gl_version(Version::new(2, 1));
        assert!(caps.supports(""));
        assert!(caps.supports("GL_VERSION_1_5"));
        assert!(caps.supports("GL_VERSION_2_1"));
        assert!(!caps.supports("GL_VERSION_3_0"));
        // extensions are unknown, so they cannot rule anything out
        assert!(caps.supports("GL_ARB_vertex_array_object GL_VERSION_3_0"));
    }

    #[test]
    fn test_supports_extensions() {
        let caps = Capabilities::unknown()
            .with_gl_version(Version::new(2, 1))
            .with_gl_extensions(vec!["GL_ARB_vertex_buffer_object", "GL_EXT_framebuffer_object"]);
        assert!(caps.supports("GL_ARB_vertex_buffer_object GL_VERSION_1_5"));
        assert!(!caps.supports("GL_ARB_vertex_array_object GL_VERSION_3_0"));
        assert!(caps.has_extension("GL_EXT_framebuffer_object"));
        assert!(!caps.has_extension("GL_KHR_debug"));
        // platform extensions are unknown
        assert!(caps.supports("WGL_ARB_pbuffer"));
    }

    #[test]
    fn test_supports_platform() {
        let caps = Capabilities::unknown()
            .with_platform_version(Version::new(1, 4))
            .with_platform_extensions(vec!["EGL_KHR_fence_sync"]);
        assert!(caps.supports("EGL_KHR_fence_sync EGL_VERSION_1_5"));
        assert!(!caps.supports("EGL_VERSION_1_5"));
        assert!(!caps.supports("EGL_EXT_image_dma_buf_import_modifiers"));
    }

    #[test]
    fn test_disable() {
        let mut caps = Capabilities::unknown()
            .with_gl_extensions(vec!["GL_ARB_sync", "GL_KHR_debug"])
            .with_platform_extensions(vec!["WGL_EXT_swap_control"]);
        caps.disable(&["GL_KHR_debug".to_string(), "WGL_EXT_swap_control".to_string()]);
        assert!(caps.has_extension("GL_ARB_sync"));
        assert!(!caps.has_extension("GL_KHR_debug"));
        assert!(!caps.has_extension("WGL_EXT_swap_control"));
    }

    #[test]
    fn test_probe_without_get_string() {
        let caps = unsafe { Probe::default().query() };
        assert_eq!(caps, Capabilities::unknown());
    }
}
