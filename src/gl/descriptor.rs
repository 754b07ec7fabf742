// MIT/Apache2 License

use super::Entry;
use crate::util::StaticCstr;
use std::{ffi::{c_void, CStr}, fmt, ptr::NonNull};

/// Thread safe container for a resolved entry point.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ProcAddress(NonNull<c_void>);

// SAFETY: a function address is immutable code, it can be shared with any thread.
unsafe impl Send for ProcAddress {}
unsafe impl Sync for ProcAddress {}

impl ProcAddress {
    /// Create a new entry point address.
    ///
    /// # Safety
    ///
    /// Behavior is undefined if the pointer is not, in fact, the address of the function
    /// it is later looked up as.
    #[inline]
    pub const unsafe fn new(ptr: NonNull<c_void>) -> Self {
        Self(ptr)
    }

    /// Create a new entry point address from what a "get proc address" primitive returned,
    /// mapping null to `None`.
    ///
    /// # Safety
    ///
    /// Same contract as [`ProcAddress::new`].
    #[inline]
    pub unsafe fn from_raw(ptr: *const c_void) -> Option<Self> {
        NonNull::new(ptr as *mut c_void).map(Self)
    }

    /// Get the inner pointer.
    #[inline]
    pub fn into_inner(self) -> NonNull<c_void> {
        self.0
    }

    #[inline]
    pub fn as_ptr(self) -> *const c_void {
        self.0.as_ptr()
    }
}

impl fmt::Debug for ProcAddress {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProcAddress({:p})", self.0)
    }
}

/// The list an entry point is declared in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FuncList {
    /// OpenGL 1.1 functions, exported directly by the system GL library.
    Gl,
    /// Everything past OpenGL 1.1, core or extension.
    GlExt,
    /// Core WGL functions.
    Wgl,
    /// WGL extension functions.
    WglExt,
    /// EGL functions, core or extension.
    Egl,
}

impl FuncList {
    pub const ALL: [FuncList; 5] = [
        FuncList::Gl,
        FuncList::GlExt,
        FuncList::Wgl,
        FuncList::WglExt,
        FuncList::Egl,
    ];

    /// Iterate over the descriptors declared in this list.
    #[inline]
    pub fn descriptors(self) -> impl Iterator<Item = &'static Descriptor> {
        super::DESCRIPTORS.iter().filter(move |d| d.list == self)
    }
}

/// Vendor or registry suffix that an entry point might also be exported under.
///
/// The declaration order is the order aliases are tried in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
#[allow(clippy::upper_case_acronyms)]
pub enum Suffix {
    ARB,
    EXT,
    KHR,
    OES,
    NV,
    AMD,
    APPLE,
    ANGLE,
    MESA,
}

impl Suffix {
    pub const ORDER: [Suffix; 9] = [
        Suffix::ARB,
        Suffix::EXT,
        Suffix::KHR,
        Suffix::OES,
        Suffix::NV,
        Suffix::AMD,
        Suffix::APPLE,
        Suffix::ANGLE,
        Suffix::MESA,
    ];

    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Suffix::ARB => "ARB",
            Suffix::EXT => "EXT",
            Suffix::KHR => "KHR",
            Suffix::OES => "OES",
            Suffix::NV => "NV",
            Suffix::AMD => "AMD",
            Suffix::APPLE => "APPLE",
            Suffix::ANGLE => "ANGLE",
            Suffix::MESA => "MESA",
        }
    }
}

impl fmt::Display for Suffix {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A set of suffixes, stored as a bitmask.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct SuffixSet(u16);

impl SuffixSet {
    pub const EMPTY: SuffixSet = SuffixSet(0);

    #[inline]
    pub const fn with(self, suffix: Suffix) -> Self {
        Self(self.0 | (1u16 << suffix as u8))
    }

    #[inline]
    pub const fn contains(self, suffix: Suffix) -> bool {
        self.0 & (1u16 << suffix as u8) != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over the suffixes in the order they are tried in.
    #[inline]
    pub fn iter(self) -> impl Iterator<Item = Suffix> {
        Suffix::ORDER.iter().copied().filter(move |s| self.contains(*s))
    }
}

impl fmt::Debug for SuffixSet {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Compiled-in description of one entry point.
#[derive(Copy, Clone)]
pub struct Descriptor {
    pub(crate) entry: Entry,
    pub(crate) name: StaticCstr,
    pub(crate) list: FuncList,
    pub(crate) signature: &'static str,
    pub(crate) requires: &'static str,
    pub(crate) aliases: SuffixSet,
    pub(crate) alias_requires: &'static [(Suffix, &'static str)],
}

impl Descriptor {
    #[inline]
    pub fn entry(&self) -> Entry {
        self.entry
    }

    /// The canonical name, e.g. `glBindBuffer`.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name.as_str()
    }

    #[inline]
    pub fn c_name(&self) -> &'static CStr {
        self.name.get()
    }

    #[inline]
    pub fn list(&self) -> FuncList {
        self.list
    }

    /// The function pointer type this entry is called through, e.g.
    /// `unsafe extern "system" fn(GLenum, GLuint)`.
    #[inline]
    pub fn signature(&self) -> &'static str {
        self.signature
    }

    /// Space separated extensions and `GL_VERSION_x_y` style tokens, any one of which makes
    /// this entry point available. Empty if it is always available.
    #[inline]
    pub fn requires(&self) -> &'static str {
        self.requires
    }

    /// Suffixes this entry point is also exported under.
    #[inline]
    pub fn aliases(&self) -> SuffixSet {
        self.aliases
    }

    /// What makes the suffixed alias available, in the same format as [`requires`].
    ///
    /// Vendor aliases usually come from their own extension, such as
    /// `GL_APPLE_vertex_array_object` for `glBindVertexArrayAPPLE`. Aliases declared
    /// without one share the canonical requirements.
    ///
    /// [`requires`]: Descriptor::requires
    #[inline]
    pub fn alias_requires(&self, suffix: Suffix) -> &'static str {
        self.alias_requires
            .iter()
            .find(|(s, req)| *s == suffix && !req.is_empty())
            .map_or(self.requires, |(_, req)| *req)
    }
}

impl fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Descriptor")
            .field("name", &self.name())
            .field("list", &self.list)
            .field("signature", &self.signature)
            .field("requires", &self.requires)
            .field("aliases", &self.aliases)
            .field("alias_requires", &self.alias_requires)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_set_order() {
        let set = SuffixSet::EMPTY
            .with(Suffix::APPLE)
            .with(Suffix::ARB)
            .with(Suffix::OES);
        let order: Vec<Suffix> = set.iter().collect();
        assert_eq!(order, vec![Suffix::ARB, Suffix::OES, Suffix::APPLE]);
        assert!(!set.contains(Suffix::EXT));
        assert!(SuffixSet::EMPTY.is_empty());
    }

    #[test]
    fn test_proc_address_null() {
        assert!(unsafe { ProcAddress::from_raw(std::ptr::null()) }.is_none());
        let addr = unsafe { ProcAddress::from_raw(0x1000 as *const c_void) }.unwrap();
        assert_eq!(addr.as_ptr() as usize, 0x1000);
    }
}
