// MIT/Apache2 License

use std::env;

/// Environment variable holding extensions to hide from every context.
pub const DISABLED_EXTENSIONS_VAR: &str = "BREADGL_DISABLED_EXTENSIONS";
/// Environment variable that turns off requirement checking.
pub const SKIP_EXTENSION_CHECK_VAR: &str = "BREADGL_SKIP_EXTENSION_CHECK";

/// Knobs for loading a [`DispatchTable`](crate::DispatchTable).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Only look up an entry point if the context advertises one of the extensions or
    /// versions that provide it. Some primitives, such as `glXGetProcAddress`, return
    /// non-null for any name, so this defaults to `true`.
    pub check_extensions: bool,
    /// Extensions to treat as unsupported even if the context advertises them.
    pub disabled_extensions: Vec<String>,
}

impl Default for LoaderConfig {
    #[inline]
    fn default() -> Self {
        Self {
            check_extensions: true,
            disabled_extensions: Vec::new(),
        }
    }
}

impl LoaderConfig {
    /// Read the configuration from the process environment.
    #[inline]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read the configuration through an arbitrary variable lookup.
    pub fn from_lookup<F: FnMut(&str) -> Option<String>>(mut lookup: F) -> Self {
        let mut config = Self::default();

        if let Some(list) = lookup(DISABLED_EXTENSIONS_VAR) {
            config.disabled_extensions = parse_extension_list(&list);
            log::debug!("Disabled extensions: {:?}", &config.disabled_extensions);
        }

        if let Some(skip) = lookup(SKIP_EXTENSION_CHECK_VAR) {
            config.check_extensions = !parse_flag(&skip);
            if !config.check_extensions {
                log::debug!("Extension checking turned off by {}", SKIP_EXTENSION_CHECK_VAR);
            }
        }

        config
    }

    #[inline]
    pub fn check_extensions(mut self, check: bool) -> Self {
        self.check_extensions = check;
        self
    }

    #[inline]
    pub fn disable_extension<S: Into<String>>(mut self, ext: S) -> Self {
        self.disabled_extensions.push(ext.into());
        self
    }
}

/// Split a list of extension names separated by whitespace, commas or semicolons.
pub fn parse_extension_list(list: &str) -> Vec<String> {
    list.split(|c: char| c.is_ascii_whitespace() || c == ',' || c == ';')
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[inline]
fn parse_flag(s: &str) -> bool {
    matches!(
        s.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_extension_list() {
        assert_eq!(
            parse_extension_list("GL_ARB_sync, GL_KHR_debug;WGL_EXT_swap_control  "),
            vec!["GL_ARB_sync", "GL_KHR_debug", "WGL_EXT_swap_control"]
        );
        assert!(parse_extension_list(" ,; ").is_empty());
    }

    #[test]
    fn test_from_lookup() {
        let config = LoaderConfig::from_lookup(|key| match key {
            DISABLED_EXTENSIONS_VAR => Some("GL_ARB_buffer_storage GL_EXT_buffer_storage".into()),
            SKIP_EXTENSION_CHECK_VAR => Some("Yes".into()),
            _ => None,
        });
        assert!(!config.check_extensions);
        assert_eq!(
            config.disabled_extensions,
            vec!["GL_ARB_buffer_storage", "GL_EXT_buffer_storage"]
        );

        let config = LoaderConfig::from_lookup(|_| None);
        assert_eq!(config, LoaderConfig::default());
        assert!(config.check_extensions);
    }

    #[test]
    fn test_builder() {
        let config = LoaderConfig::default()
            .check_extensions(false)
            .disable_extension("GL_KHR_debug");
        assert!(!config.check_extensions);
        assert_eq!(config.disabled_extensions, vec!["GL_KHR_debug"]);
    }
}
