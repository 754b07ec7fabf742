// MIT/Apache2 License

use super::{
    caps::{split_extensions, Probe},
    Capabilities, Descriptor, Entry, FuncList, GlDispatch, Platform, ProcAddress, Suffix,
    Version, ALTERNATIVES,
};
use crate::{Error, LoaderConfig};
use std::{
    borrow::Cow,
    ffi::{CStr, CString},
    fmt,
};
use tinyvec::ArrayVec;

#[cfg(feature = "async")]
use super::AsyncGlDispatch;

/// Where a resolved pointer came from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Origin {
    /// The entry point's own name.
    Canonical,
    /// The entry point's name with a vendor suffix appended.
    Alias(Suffix),
    /// A functionally identical entry point, see [`Entry::alternative`].
    Alternative(Entry),
}

impl Default for Origin {
    #[inline]
    fn default() -> Self {
        Origin::Canonical
    }
}

/// Why an entry point is unavailable.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Unsupported {
    /// The entry point belongs to a window system interface this binding does not speak.
    WrongPlatform,
    /// The context advertises none of the extensions or versions that provide it.
    MissingRequirement,
    /// The primitive returned null for every name it was tried under.
    NotExported,
}

/// One entry in a [`DispatchTable`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Slot {
    Resolved { address: ProcAddress, origin: Origin },
    Unsupported(Unsupported),
}

impl Slot {
    #[inline]
    pub fn address(&self) -> Option<ProcAddress> {
        match self {
            Slot::Resolved { address, .. } => Some(*address),
            Slot::Unsupported(_) => None,
        }
    }

    #[inline]
    pub fn origin(&self) -> Option<Origin> {
        match self {
            Slot::Resolved { origin, .. } => Some(*origin),
            Slot::Unsupported(_) => None,
        }
    }

    #[inline]
    pub fn is_supported(&self) -> bool {
        matches!(self, Slot::Resolved { .. })
    }
}

/// Resolved entry points for one context.
///
/// A table holds exactly one [`Slot`] per [`Entry`], filled in once by [`DispatchTable::load`]
/// and never changed afterwards, so it can be shared between threads freely. Pointers in
/// the table are only meaningful for the context it was loaded against (or contexts
/// sharing its driver and pixel format).
pub struct DispatchTable {
    slots: Box<[Slot]>,
    platform: Platform,
    capabilities: Capabilities,
}

impl DispatchTable {
    /// Resolve every entry point through the given binding.
    ///
    /// Fails if the binding has no current context or if its primitive fails outright.
    /// Entry points that simply are not there end up as unsupported slots.
    pub fn load<D: GlDispatch + ?Sized>(binding: &mut D, config: &LoaderConfig) -> crate::Result<Self> {
        if !binding.is_current()? {
            log::warn!("No current context found, cannot resolve entry points");
            return Err(Error::NoCurrentContext);
        }

        let platform = binding.platform();
        let capabilities = if config.check_extensions {
            let probe = Probe {
                get_string: binding.get_proc_address(Entry::glGetString.descriptor().c_name())?,
                get_integerv: binding
                    .get_proc_address(Entry::glGetIntegerv.descriptor().c_name())?,
                get_stringi: binding.get_proc_address(Entry::glGetStringi.descriptor().c_name())?,
            };
            let platform_extensions = binding.platform_extensions()?;
            let platform_version = binding.platform_version()?;

            // SAFETY: the addresses were resolved by name from a binding with a current
            //         context
            let gl = unsafe { probe.query() };
            combine_capabilities(gl, platform_extensions, platform_version, config)
        } else {
            Capabilities::unknown()
        };

        let mut loader = Loader::new(config, platform, capabilities);
        for entry in Entry::ALL.iter().copied() {
            let slot = match loader.plan(entry) {
                Plan::Skip(reason) => Slot::Unsupported(reason),
                Plan::Lookup(candidates) => {
                    let mut slot = Slot::Unsupported(Unsupported::NotExported);
                    for origin in candidates {
                        let name = candidate_name(entry.descriptor(), origin);
                        if let Some(address) = binding.get_proc_address(&name)? {
                            slot = Slot::Resolved { address, origin };
                            break;
                        }
                    }
                    slot
                }
            };
            loader.record(entry, slot);
        }

        Ok(loader.finish())
    }

    /// Resolve every entry point through the given asynchronous binding.
    #[cfg(feature = "async")]
    pub async fn load_async<D: AsyncGlDispatch + ?Sized>(
        binding: &mut D,
        config: &LoaderConfig,
    ) -> crate::Result<Self> {
        if !binding.is_current_async().await? {
            log::warn!("No current context found, cannot resolve entry points");
            return Err(Error::NoCurrentContext);
        }

        let platform = binding.platform();
        let capabilities = if config.check_extensions {
            let probe = Probe {
                get_string: binding
                    .get_proc_address_async(Entry::glGetString.descriptor().c_name())
                    .await?,
                get_integerv: binding
                    .get_proc_address_async(Entry::glGetIntegerv.descriptor().c_name())
                    .await?,
                get_stringi: binding
                    .get_proc_address_async(Entry::glGetStringi.descriptor().c_name())
                    .await?,
            };
            let platform_extensions = binding.platform_extensions_async().await?;
            let platform_version = binding.platform_version_async().await?;

            // SAFETY: see load()
            let gl = unsafe { probe.query() };
            combine_capabilities(gl, platform_extensions, platform_version, config)
        } else {
            Capabilities::unknown()
        };

        let mut loader = Loader::new(config, platform, capabilities);
        for entry in Entry::ALL.iter().copied() {
            let slot = match loader.plan(entry) {
                Plan::Skip(reason) => Slot::Unsupported(reason),
                Plan::Lookup(candidates) => {
                    let mut slot = Slot::Unsupported(Unsupported::NotExported);
                    for origin in candidates {
                        let name = candidate_name(entry.descriptor(), origin);
                        if let Some(address) = binding.get_proc_address_async(&name).await? {
                            slot = Slot::Resolved { address, origin };
                            break;
                        }
                    }
                    slot
                }
            };
            loader.record(entry, slot);
        }

        Ok(loader.finish())
    }

    /// The slot for an entry point.
    #[inline]
    pub fn slot(&self, entry: Entry) -> &Slot {
        &self.slots[entry.index()]
    }

    /// The address of an entry point, or `None` if it is unsupported.
    #[inline]
    pub fn get(&self, entry: Entry) -> Option<ProcAddress> {
        self.slot(entry).address()
    }

    #[inline]
    pub fn is_supported(&self, entry: Entry) -> bool {
        self.slot(entry).is_supported()
    }

    /// Look up an entry point by name.
    ///
    /// `name` must be one of the names in [`DESCRIPTORS`](super::DESCRIPTORS). Anything else
    /// is a bug in the caller, and panics in debug builds.
    #[inline]
    pub fn resolve(&self, name: &str) -> Option<ProcAddress> {
        let entry = Entry::from_name(name);
        debug_assert!(entry.is_some(), "`{}` is not a known entry point", name);
        entry.and_then(|entry| self.get(entry))
    }

    /// Iterate over every entry point and its slot.
    #[inline]
    pub fn slots(&self) -> impl Iterator<Item = (Entry, &Slot)> + '_ {
        Entry::ALL.iter().copied().zip(self.slots.iter())
    }

    /// Number of entry points that resolved.
    #[inline]
    pub fn supported_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_supported()).count()
    }

    #[inline]
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// What the context advertised when the table was loaded.
    #[inline]
    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Release the table. The context it was loaded from is not affected.
    #[inline]
    pub fn teardown(self) {
        log::trace!(
            "Tearing down dispatch table with {} resolved entry points",
            self.supported_count()
        );
    }
}

impl fmt::Debug for DispatchTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatchTable")
            .field("platform", &self.platform)
            .field("supported", &self.supported_count())
            .field("total", &self.slots.len())
            .finish()
    }
}

fn combine_capabilities(
    mut caps: Capabilities,
    platform_extensions: Option<String>,
    platform_version: Option<Version>,
    config: &LoaderConfig,
) -> Capabilities {
    if let Some(list) = platform_extensions {
        let exts = split_extensions(&list);
        for ext in &exts {
            log::trace!("++ {}", ext);
        }
        caps = caps.with_platform_extensions(exts);
    }
    if let Some(version) = platform_version {
        caps = caps.with_platform_version(version);
    }
    caps.disable(&config.disabled_extensions);
    caps
}

/// The name to hand to the primitive for a given origin.
fn candidate_name(desc: &Descriptor, origin: Origin) -> Cow<'static, CStr> {
    match origin {
        Origin::Canonical => Cow::Borrowed(desc.c_name()),
        Origin::Alias(suffix) => {
            let mut bytes = Vec::with_capacity(desc.name().len() + suffix.as_str().len() + 1);
            bytes.extend_from_slice(desc.name().as_bytes());
            bytes.extend_from_slice(suffix.as_str().as_bytes());
            // SAFETY: entry point names and suffixes are plain ASCII identifiers
            Cow::Owned(unsafe { CString::from_vec_unchecked(bytes) })
        }
        Origin::Alternative(alt) => Cow::Borrowed(alt.descriptor().c_name()),
    }
}

/// What to do for one entry point.
enum Plan {
    Skip(Unsupported),
    /// Names to try, in order.
    Lookup(ArrayVec<[Origin; 10]>),
}

/// Table state shared by the synchronous and asynchronous loading paths.
struct Loader<'c> {
    config: &'c LoaderConfig,
    platform: Platform,
    capabilities: Capabilities,
    slots: Vec<Slot>,
}

impl<'c> Loader<'c> {
    #[inline]
    fn new(config: &'c LoaderConfig, platform: Platform, capabilities: Capabilities) -> Self {
        Self {
            config,
            platform,
            capabilities,
            slots: Vec::with_capacity(Entry::COUNT),
        }
    }

    fn plan(&self, entry: Entry) -> Plan {
        let desc = entry.descriptor();

        let on_platform = match desc.list() {
            FuncList::Gl | FuncList::GlExt => true,
            FuncList::Wgl | FuncList::WglExt => self.platform == Platform::Wgl,
            FuncList::Egl => self.platform == Platform::Egl,
        };
        if !on_platform {
            return Plan::Skip(Unsupported::WrongPlatform);
        }

        // each name is gated on its own requirements
        let mut candidates = ArrayVec::new();
        if self.allows(desc.requires()) {
            candidates.push(Origin::Canonical);
        }
        candidates.extend(
            desc.aliases()
                .iter()
                .filter(|&suffix| self.allows(desc.alias_requires(suffix)))
                .map(Origin::Alias),
        );

        if candidates.is_empty() {
            Plan::Skip(Unsupported::MissingRequirement)
        } else {
            Plan::Lookup(candidates)
        }
    }

    #[inline]
    fn allows(&self, requires: &str) -> bool {
        !self.config.check_extensions || self.capabilities.supports(requires)
    }

    fn record(&mut self, entry: Entry, slot: Slot) {
        debug_assert_eq!(self.slots.len(), entry.index());

        match slot {
            Slot::Resolved { address, origin: Origin::Canonical } => {
                log::trace!("{} -> {:?}", entry, address);
            }
            Slot::Resolved { address, origin } => {
                log::trace!("{} -> {:?} (via {:?})", entry, address, origin);
            }
            Slot::Unsupported(Unsupported::MissingRequirement) => {
                log::debug!(
                    "Extension {} required for {} not supported",
                    entry.descriptor().requires(),
                    entry
                );
            }
            Slot::Unsupported(Unsupported::NotExported) => {
                log::debug!("Function {} not supported by driver", entry);
            }
            Slot::Unsupported(Unsupported::WrongPlatform) => {}
        }

        self.slots.push(slot);
    }

    fn finish(self) -> DispatchTable {
        let mut slots = self.slots.into_boxed_slice();
        debug_assert_eq!(slots.len(), Entry::COUNT);

        for &(entry, alt) in ALTERNATIVES {
            if slots[entry.index()].is_supported() {
                continue;
            }
            if let Some(address) = slots[alt.index()].address() {
                log::warn!("{} not supported, using {} instead", entry, alt);
                slots[entry.index()] = Slot::Resolved {
                    address,
                    origin: Origin::Alternative(alt),
                };
            }
        }

        let table = DispatchTable {
            slots,
            platform: self.platform,
            capabilities: self.capabilities,
        };
        log::debug!(
            "Resolved {} of {} entry points",
            table.supported_count(),
            Entry::COUNT
        );
        table
    }
}
