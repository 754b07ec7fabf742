// MIT/Apache2 License

use breadgl::{
    types::{GLenum, GLint, GLubyte, GLuint, GL_EXTENSIONS, GL_NUM_EXTENSIONS, GL_VERSION},
    Dispatcher, DispatchTable, Entry, Error, GlDispatch, LoadState, LoaderConfig, Origin,
    Platform, ProcAddress, Slot, Suffix, Unsupported, DESCRIPTORS,
};
use std::{
    collections::HashMap,
    ffi::{c_void, CStr},
    ptr,
    sync::Arc,
    thread,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A binding whose driver exports a fixed set of names.
struct MockBinding {
    current: bool,
    broken: bool,
    platform: Platform,
    exports: HashMap<String, usize>,
    platform_extensions: Option<String>,
    lookups: Vec<String>,
}

impl MockBinding {
    fn new(names: &[&str]) -> Self {
        let mut binding = MockBinding {
            current: true,
            broken: false,
            platform: Platform::Other,
            exports: HashMap::new(),
            platform_extensions: None,
            lookups: Vec::new(),
        };
        for name in names {
            binding.export(name);
        }
        binding
    }

    /// Export a name at a fake address. The address is never called.
    fn export(&mut self, name: &str) {
        let addr = 0x1000 + self.exports.len() * 0x10;
        self.exports.insert(name.to_string(), addr);
    }

    /// Export a name at the address of a real function.
    fn export_fn(&mut self, name: &str, addr: usize) {
        self.exports.insert(name.to_string(), addr);
    }
}

impl GlDispatch for MockBinding {
    fn platform(&self) -> Platform {
        self.platform
    }

    fn is_current(&mut self) -> breadgl::Result<bool> {
        Ok(self.current)
    }

    fn get_proc_address(&mut self, name: &CStr) -> breadgl::Result<Option<ProcAddress>> {
        if self.broken {
            return Err(Error::StaticMsg("get proc address is unavailable"));
        }

        let name = name.to_str().unwrap();
        self.lookups.push(name.to_string());
        Ok(self
            .exports
            .get(name)
            .and_then(|addr| unsafe { ProcAddress::from_raw(*addr as *const c_void) }))
    }

    fn platform_extensions(&mut self) -> breadgl::Result<Option<String>> {
        Ok(self.platform_extensions.clone())
    }
}

extern "system" fn gl21_get_string(name: GLenum) -> *const GLubyte {
    match name {
        GL_VERSION => b"2.1 Mesa 20.0.8\0".as_ptr(),
        GL_EXTENSIONS => {
            b"GL_ARB_vertex_buffer_object GL_ARB_framebuffer_object GL_EXT_framebuffer_object \
              GL_KHR_debug \0"
                .as_ptr()
        }
        _ => ptr::null(),
    }
}

extern "system" fn gl46_get_string(name: GLenum) -> *const GLubyte {
    match name {
        GL_VERSION => b"4.6.0 NVIDIA 535.54.03\0".as_ptr(),
        _ => ptr::null(),
    }
}

extern "system" fn apple_get_string(name: GLenum) -> *const GLubyte {
    match name {
        GL_VERSION => b"2.1 APPLE-18.0.26\0".as_ptr(),
        GL_EXTENSIONS => {
            b"GL_APPLE_vertex_array_object GL_EXT_framebuffer_object GL_APPLE_sync\0".as_ptr()
        }
        _ => ptr::null(),
    }
}

extern "system" fn gles2_get_string(name: GLenum) -> *const GLubyte {
    match name {
        GL_VERSION => b"OpenGL ES 2.0 Mesa 23.1.4\0".as_ptr(),
        GL_EXTENSIONS => b"GL_OES_vertex_array_object GL_OES_mapbuffer \
              GL_ANGLE_instanced_arrays GL_EXT_draw_instanced\0"
            .as_ptr(),
        _ => ptr::null(),
    }
}

extern "system" fn gl30_get_string(name: GLenum) -> *const GLubyte {
    match name {
        GL_VERSION => b"3.0 Mesa 20.0.8\0".as_ptr(),
        GL_EXTENSIONS => b"GL_EXT_framebuffer_object GL_APPLE_vertex_array_object\0".as_ptr(),
        _ => ptr::null(),
    }
}

static GL46_EXTENSIONS: [&[u8]; 2] = [b"GL_ARB_sync\0", b"GL_KHR_debug\0"];

extern "system" fn gl46_get_integerv(name: GLenum, data: *mut GLint) {
    if name == GL_NUM_EXTENSIONS {
        unsafe { *data = GL46_EXTENSIONS.len() as GLint };
    }
}

extern "system" fn gl46_get_stringi(name: GLenum, index: GLuint) -> *const GLubyte {
    match (name, GL46_EXTENSIONS.get(index as usize)) {
        (GL_EXTENSIONS, Some(ext)) => ext.as_ptr(),
        _ => ptr::null(),
    }
}

fn gl21_binding(names: &[&str]) -> MockBinding {
    let mut binding = MockBinding::new(names);
    binding.export_fn("glGetString", gl21_get_string as usize);
    binding
}

fn gl46_binding(names: &[&str]) -> MockBinding {
    let mut binding = MockBinding::new(names);
    binding.export_fn("glGetString", gl46_get_string as usize);
    binding.export_fn("glGetIntegerv", gl46_get_integerv as usize);
    binding.export_fn("glGetStringi", gl46_get_stringi as usize);
    binding
}

fn classification(table: &DispatchTable) -> Vec<bool> {
    table.slots().map(|(_, slot)| slot.is_supported()).collect()
}

#[test]
fn resolves_exported_entry_points() {
    init_logger();
    let mut binding = MockBinding::new(&["glBegin", "glEnd", "glClear"]);
    let table = DispatchTable::load(&mut binding, &LoaderConfig::default()).unwrap();

    assert!(table.resolve("glBegin").is_some());
    assert!(table.resolve("glEnd").is_some());
    assert!(table.resolve("glClear").is_some());
    assert!(table.resolve("glBindVertexArray").is_none());

    assert!(table.glClear().is_some());
    assert!(table.glBindVertexArray().is_none());
    assert_eq!(table.supported_count(), 3);
}

#[test]
fn every_descriptor_has_one_slot() {
    init_logger();
    let mut binding = MockBinding::new(&["glClear", "wglSwapBuffers", "eglSwapBuffers"]);
    let table = DispatchTable::load(&mut binding, &LoaderConfig::default()).unwrap();

    assert_eq!(table.slots().count(), DESCRIPTORS.len());
    for (entry, slot) in table.slots() {
        match slot {
            Slot::Resolved { address, .. } => assert!(!address.as_ptr().is_null()),
            Slot::Unsupported(_) => assert!(table.resolve(entry.name()).is_none()),
        }
    }

    // window system entry points are never looked up on a foreign platform
    assert_eq!(
        *table.slot(Entry::wglSwapBuffers),
        Slot::Unsupported(Unsupported::WrongPlatform)
    );
    assert_eq!(
        *table.slot(Entry::eglSwapBuffers),
        Slot::Unsupported(Unsupported::WrongPlatform)
    );
    assert!(!binding.lookups.iter().any(|name| name.starts_with("wgl")));
    assert!(!binding.lookups.iter().any(|name| name.starts_with("egl")));
}

#[test]
fn fails_without_current_context() {
    init_logger();
    let mut binding = MockBinding::new(&["glClear"]);
    binding.current = false;

    match DispatchTable::load(&mut binding, &LoaderConfig::default()) {
        Err(Error::NoCurrentContext) => {}
        other => panic!("expected NoCurrentContext, got {:?}", other),
    }
    assert!(binding.lookups.is_empty());
}

#[test]
fn propagates_primitive_failure() {
    init_logger();
    let mut binding = MockBinding::new(&["glClear"]);
    binding.broken = true;

    match DispatchTable::load(&mut binding, &LoaderConfig::default()) {
        Err(Error::StaticMsg(_)) => {}
        other => panic!("expected the primitive's error, got {:?}", other),
    }
}

#[test]
fn loading_is_idempotent() {
    init_logger();
    let names = ["glClear", "glGenBuffersARB", "glBindFramebufferEXT", "glDrawArrays"];
    let first = DispatchTable::load(&mut MockBinding::new(&names), &LoaderConfig::default()).unwrap();
    let second = DispatchTable::load(&mut MockBinding::new(&names), &LoaderConfig::default()).unwrap();

    assert_eq!(classification(&first), classification(&second));
    for entry in Entry::ALL.iter().copied() {
        assert_eq!(first.slot(entry).origin(), second.slot(entry).origin());
    }
}

#[test]
fn prefers_canonical_names_then_suffix_order() {
    init_logger();
    let names = [
        "glGenBuffers",
        "glGenBuffersARB",
        "glMapBufferOES",
        "glMapBufferARB",
        "glBindVertexArrayAPPLE",
    ];

    for _ in 0..2 {
        let mut binding = MockBinding::new(&names);
        let table = DispatchTable::load(&mut binding, &LoaderConfig::default()).unwrap();

        assert_eq!(table.slot(Entry::glGenBuffers).origin(), Some(Origin::Canonical));
        assert_eq!(
            table.get(Entry::glGenBuffers).unwrap().as_ptr() as usize,
            binding.exports["glGenBuffers"]
        );
        assert_eq!(
            table.slot(Entry::glMapBuffer).origin(),
            Some(Origin::Alias(Suffix::ARB))
        );
        assert_eq!(
            table.get(Entry::glMapBuffer).unwrap().as_ptr() as usize,
            binding.exports["glMapBufferARB"]
        );
        assert_eq!(
            table.slot(Entry::glBindVertexArray).origin(),
            Some(Origin::Alias(Suffix::APPLE))
        );
    }
}

#[test]
fn gates_on_gl_extension_string() {
    init_logger();
    let mut binding = gl21_binding(&[
        "glBindVertexArray",
        "glGenBuffers",
        "glBindFramebufferEXT",
        "glDebugMessageCallback",
    ]);
    let config = LoaderConfig::default().disable_extension("GL_KHR_debug");
    let table = DispatchTable::load(&mut binding, &config).unwrap();

    let caps = table.capabilities();
    assert_eq!(caps.gl_version(), Some(breadgl::Version::new(2, 1)));
    assert!(caps.has_extension("GL_ARB_vertex_buffer_object"));
    assert!(!caps.has_extension("GL_KHR_debug"));

    // exported, but 2.1 without GL_ARB_vertex_array_object does not provide it
    assert_eq!(
        *table.slot(Entry::glBindVertexArray),
        Slot::Unsupported(Unsupported::MissingRequirement)
    );
    assert!(!binding.lookups.iter().any(|n| n == "glBindVertexArray"));

    assert!(table.is_supported(Entry::glGenBuffers));
    assert_eq!(
        table.slot(Entry::glBindFramebuffer).origin(),
        Some(Origin::Alias(Suffix::EXT))
    );
    assert_eq!(
        *table.slot(Entry::glDebugMessageCallback),
        Slot::Unsupported(Unsupported::MissingRequirement)
    );

    // the probe functions are callable through the table
    let get_string = table.glGetString().unwrap();
    let version = unsafe { CStr::from_ptr(get_string(GL_VERSION) as *const _) };
    assert_eq!(version.to_str().unwrap(), "2.1 Mesa 20.0.8");
}

#[test]
fn vendor_aliases_on_legacy_contexts() {
    init_logger();
    let mut binding = MockBinding::new(&[
        "glBindVertexArray",
        "glBindVertexArrayAPPLE",
        "glBindFramebufferEXT",
        "glFenceSyncAPPLE",
    ]);
    binding.export_fn("glGetString", apple_get_string as usize);
    let table = DispatchTable::load(&mut binding, &LoaderConfig::default()).unwrap();

    assert_eq!(
        table.slot(Entry::glBindVertexArray).origin(),
        Some(Origin::Alias(Suffix::APPLE))
    );
    assert_eq!(
        table.get(Entry::glBindVertexArray).unwrap().as_ptr() as usize,
        binding.exports["glBindVertexArrayAPPLE"]
    );
    assert_eq!(
        table.slot(Entry::glBindFramebuffer).origin(),
        Some(Origin::Alias(Suffix::EXT))
    );
    assert_eq!(
        table.slot(Entry::glFenceSync).origin(),
        Some(Origin::Alias(Suffix::APPLE))
    );

    // names the context does not advertise are never asked for
    for name in &["glBindVertexArray", "glBindVertexArrayOES", "glBindFramebuffer"] {
        assert!(
            !binding.lookups.iter().any(|n| n == *name),
            "{} was looked up",
            name
        );
    }
}

#[test]
fn vendor_aliases_on_gles2() {
    init_logger();
    let mut binding = MockBinding::new(&[
        "glBindVertexArrayOES",
        "glMapBufferOES",
        "glVertexAttribDivisorANGLE",
        "glDrawArraysInstancedEXT",
    ]);
    binding.export_fn("glGetString", gles2_get_string as usize);
    let table = DispatchTable::load(&mut binding, &LoaderConfig::default()).unwrap();

    assert_eq!(table.capabilities().gl_version(), Some(breadgl::Version::new(2, 0)));
    assert_eq!(
        table.slot(Entry::glBindVertexArray).origin(),
        Some(Origin::Alias(Suffix::OES))
    );
    assert_eq!(
        table.slot(Entry::glMapBuffer).origin(),
        Some(Origin::Alias(Suffix::OES))
    );
    assert_eq!(
        table.slot(Entry::glVertexAttribDivisor).origin(),
        Some(Origin::Alias(Suffix::ANGLE))
    );
    assert_eq!(
        table.slot(Entry::glDrawArraysInstanced).origin(),
        Some(Origin::Alias(Suffix::EXT))
    );
    assert_eq!(
        *table.slot(Entry::glFenceSync),
        Slot::Unsupported(Unsupported::MissingRequirement)
    );
}

#[test]
fn canonical_names_win_over_advertised_aliases() {
    init_logger();
    let mut binding = MockBinding::new(&[
        "glBindFramebuffer",
        "glBindFramebufferEXT",
        "glBindVertexArray",
        "glBindVertexArrayAPPLE",
    ]);
    binding.export_fn("glGetString", gl30_get_string as usize);
    let table = DispatchTable::load(&mut binding, &LoaderConfig::default()).unwrap();

    assert_eq!(
        table.slot(Entry::glBindFramebuffer).origin(),
        Some(Origin::Canonical)
    );
    assert_eq!(
        table.get(Entry::glBindFramebuffer).unwrap().as_ptr() as usize,
        binding.exports["glBindFramebuffer"]
    );
    assert_eq!(
        table.slot(Entry::glBindVertexArray).origin(),
        Some(Origin::Canonical)
    );
    assert!(!binding.lookups.iter().any(|n| n == "glBindFramebufferEXT"));
    assert!(!binding.lookups.iter().any(|n| n == "glBindVertexArrayAPPLE"));
}

#[test]
fn gates_on_indexed_extensions() {
    init_logger();
    let mut binding = gl46_binding(&["glBindVertexArray", "glFenceSync", "glMapBufferRange"]);
    let table = DispatchTable::load(&mut binding, &LoaderConfig::default()).unwrap();

    let caps = table.capabilities();
    assert_eq!(caps.gl_version(), Some(breadgl::Version::new(4, 6)));
    assert!(caps.has_extension("GL_ARB_sync"));
    assert!(caps.has_extension("GL_KHR_debug"));

    assert!(table.is_supported(Entry::glBindVertexArray));
    assert!(table.is_supported(Entry::glFenceSync));
    assert!(table.is_supported(Entry::glMapBufferRange));
    assert_eq!(
        *table.slot(Entry::glDebugMessageCallback),
        Slot::Unsupported(Unsupported::NotExported)
    );
}

#[test]
fn skips_gating_when_disabled() {
    init_logger();
    let mut binding = gl21_binding(&["glBindVertexArray"]);
    let config = LoaderConfig::default().check_extensions(false);
    let table = DispatchTable::load(&mut binding, &config).unwrap();

    assert!(table.is_supported(Entry::glBindVertexArray));
    assert_eq!(table.capabilities().gl_version(), None);
}

#[test]
fn falls_back_to_alternatives() {
    init_logger();
    let mut binding = MockBinding::new(&["glCopyTexSubImage3D"]);
    let table = DispatchTable::load(&mut binding, &LoaderConfig::default()).unwrap();

    assert_eq!(
        table.slot(Entry::glCopyTexSubImage3DEXT).origin(),
        Some(Origin::Alternative(Entry::glCopyTexSubImage3D))
    );
    assert_eq!(
        table.get(Entry::glCopyTexSubImage3DEXT),
        table.get(Entry::glCopyTexSubImage3D)
    );
}

#[test]
fn loads_window_system_lists() {
    init_logger();
    let mut binding = gl21_binding(&[
        "wglSwapBuffers",
        "wglChoosePixelFormatARB",
        "wglCreatePbufferARB",
    ]);
    binding.platform = Platform::Wgl;
    binding.platform_extensions = Some("WGL_ARB_pixel_format WGL_ARB_extensions_string".into());
    let table = DispatchTable::load(&mut binding, &LoaderConfig::default()).unwrap();

    assert_eq!(table.platform(), Platform::Wgl);
    assert!(table.is_supported(Entry::wglSwapBuffers));
    assert!(table.is_supported(Entry::wglChoosePixelFormatARB));
    assert_eq!(
        *table.slot(Entry::wglCreatePbufferARB),
        Slot::Unsupported(Unsupported::MissingRequirement)
    );
    assert_eq!(
        *table.slot(Entry::eglBindAPI),
        Slot::Unsupported(Unsupported::WrongPlatform)
    );
}

#[test]
fn concurrent_reads() {
    init_logger();
    let names: Vec<&str> = DESCRIPTORS
        .iter()
        .map(|d| d.name())
        .filter(|n| n.starts_with("gl"))
        .step_by(3)
        .collect();
    let mut binding = MockBinding::new(&names);
    let table = Arc::new(DispatchTable::load(&mut binding, &LoaderConfig::default()).unwrap());
    let expected: Vec<Option<ProcAddress>> =
        DESCRIPTORS.iter().map(|d| table.resolve(d.name())).collect();
    let expected = Arc::new(expected);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let table = table.clone();
            let expected = expected.clone();
            thread::spawn(move || {
                for _ in 0..200 {
                    for (d, want) in DESCRIPTORS.iter().zip(expected.iter()) {
                        assert_eq!(table.resolve(d.name()), *want);
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "is not a known entry point")]
fn unknown_names_are_a_bug() {
    let mut binding = MockBinding::new(&["glClear"]);
    let table = DispatchTable::load(&mut binding, &LoaderConfig::default()).unwrap();
    table.resolve("glNotARealFunction");
}

#[test]
fn dispatcher_lifecycle() {
    init_logger();
    let mut dispatcher = Dispatcher::default();
    assert_eq!(dispatcher.state(), LoadState::Unloaded);
    assert!(dispatcher.table().is_none());

    let mut binding = MockBinding::new(&["glClear"]);
    binding.current = false;
    assert!(dispatcher.initialize(&mut binding).is_err());
    assert_eq!(dispatcher.state(), LoadState::Unloaded);

    binding.current = true;
    let table = dispatcher.initialize(&mut binding).unwrap();
    assert_eq!(dispatcher.state(), LoadState::Loaded);
    assert!(table.is_supported(Entry::glClear));
    assert!(Arc::ptr_eq(&table, dispatcher.table().unwrap()));

    match dispatcher.initialize(&mut binding) {
        Err(Error::AlreadyLoaded) => {}
        other => panic!("expected AlreadyLoaded, got {:?}", other),
    }

    let old = dispatcher.teardown().unwrap();
    assert_eq!(dispatcher.state(), LoadState::Unloaded);
    // readers holding the old table keep a valid view
    assert!(old.is_supported(Entry::glClear));

    let fresh = dispatcher.initialize(&mut binding).unwrap();
    assert!(!Arc::ptr_eq(&old, &fresh));
    assert_eq!(classification(&old), classification(&fresh));
}

#[test]
fn default_functions() {
    init_logger();
    let mut binding = MockBinding::new(&["glFlush"]);
    let table = binding.functions().unwrap();
    assert!(table.glFlush().is_some());
    table.teardown();
}

#[cfg(feature = "async")]
mod asynchronous {
    use super::*;
    use breadgl::AsyncGlDispatch;

    struct AsyncMock(MockBinding);

    impl AsyncGlDispatch for AsyncMock {
        fn platform(&self) -> Platform {
            self.0.platform
        }

        fn is_current_async<'future>(
            &'future mut self,
        ) -> Pin<Box<dyn Future<Output = breadgl::Result<bool>> + Send + 'future>> {
            Box::pin(async move { self.0.is_current() })
        }

        fn get_proc_address_async<'future, 'a, 'b>(
            &'a mut self,
            name: &'b CStr,
        ) -> Pin<Box<dyn Future<Output = breadgl::Result<Option<ProcAddress>>> + Send + 'future>>
        where
            'a: 'future,
            'b: 'future,
        {
            Box::pin(async move { self.0.get_proc_address(name) })
        }
    }

    use std::{future::Future, pin::Pin};

    #[test]
    fn loads_asynchronously() {
        init_logger();
        let names = ["glBegin", "glEnd", "glClear", "glGenBuffersARB"];
        let mut binding = AsyncMock(MockBinding::new(&names));
        let table = futures_lite::future::block_on(DispatchTable::load_async(
            &mut binding,
            &LoaderConfig::default(),
        ))
        .unwrap();

        let sync = DispatchTable::load(&mut MockBinding::new(&names), &LoaderConfig::default())
            .unwrap();
        assert_eq!(classification(&table), classification(&sync));
        assert_eq!(
            table.slot(Entry::glGenBuffers).origin(),
            Some(Origin::Alias(Suffix::ARB))
        );
    }

    #[test]
    fn dispatcher_loads_asynchronously() {
        init_logger();
        let mut dispatcher = Dispatcher::default();
        let mut binding = AsyncMock(MockBinding::new(&["glClear"]));
        let table =
            futures_lite::future::block_on(dispatcher.initialize_async(&mut binding)).unwrap();
        assert_eq!(dispatcher.state(), LoadState::Loaded);
        assert!(table.is_supported(Entry::glClear));
    }
}
