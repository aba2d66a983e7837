// context-info/src/context_info.rs
//
//! The per-context capability descriptor.

use crate::config::Config;
use crate::emulation::EmulationLayers;
use crate::error::Error;
use crate::extension::{Extension, ExtensionFamily, ExtensionSet};
use crate::info::{GLApi, GLVersion};
use crate::query::{ContextQuery, StringName};

use bitflags::bitflags;
use log::{debug, info};
use std::collections::BTreeSet;
use std::fmt;

/// Extensions the shim layer implements itself, whatever the driver.
const REGAL_EXTENSIONS: [&str; 4] = [
    "GL_REGAL_enable",
    "GL_REGAL_error_string",
    "GL_REGAL_extension_query",
    "GL_REGAL_log",
];

const REGAL_PREFIX: &str = "GL_REGAL_";

bitflags! {
    /// The kind of context.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ContextProfile: u8 {
        /// Desktop GL with the deprecated fixed-function entry points.
        const COMPATIBILITY = 0x01;
        /// Desktop GL core profile.
        const CORE          = 0x02;
        /// OpenGL ES.
        const ES            = 0x04;
    }
}

const FLAG_WORDS: usize = (Extension::ALL.len() + 63) / 64;

/// One bit per known extension.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
struct ExtensionFlags([u64; FLAG_WORDS]);

impl ExtensionFlags {
    #[inline]
    fn set(&mut self, extension: Extension) {
        let index = extension.index();
        self.0[index / 64] |= 1 << (index % 64);
    }

    #[inline]
    fn get(&self, extension: Extension) -> bool {
        let index = extension.index();
        self.0[index / 64] & (1 << (index % 64)) != 0
    }
}

impl fmt::Debug for ExtensionFlags {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter
            .debug_set()
            .entries(Extension::ALL.iter().filter(|&&extension| self.get(extension)))
            .finish()
    }
}

/// Which extensions and versions a rendering context has.
///
/// A `ContextInfo` is filled in once, right after the context is created, and consulted for
/// the rest of the context's life to choose between native and emulated code paths.
#[derive(Clone, Debug, Default)]
pub struct ContextInfo {
    // As reported by the OpenGL implementation.
    pub vendor: String,
    pub renderer: String,
    pub version: String,
    pub extensions: String,

    // As reported to the application.
    pub regal_vendor: String,
    pub regal_renderer: String,
    pub regal_version: String,
    pub regal_extensions: String,

    pub profile: ContextProfile,

    /// Desktop GL version; zero on OpenGL ES.
    pub gl_version: GLVersion,
    /// OpenGL ES version; zero on desktop GL.
    pub gles_version: GLVersion,
    pub glsl_version: GLVersion,
    pub glx_version: GLVersion,

    driver_extensions: ExtensionSet,
    window_system_extensions: ExtensionSet,
    regal_extension_set: BTreeSet<String>,
    flags: ExtensionFlags,
    emulation: EmulationLayers,
}

impl ContextInfo {
    /// Creates a descriptor with every flag false and every version zero.
    pub fn new() -> ContextInfo {
        ContextInfo::default()
    }

    /// Queries the driver and builds a descriptor for the current context.
    pub fn detect(query: &dyn ContextQuery, config: &Config) -> Result<ContextInfo, Error> {
        let mut info = ContextInfo::new();

        info.vendor = query.string(StringName::Vendor).unwrap_or_default();
        info.renderer = query.string(StringName::Renderer).unwrap_or_default();
        info.version = query.string(StringName::Version).unwrap_or_default();

        let (api, api_version) = GLVersion::parse_gl(&info.version)?;
        match api {
            GLApi::GL => info.gl_version = api_version,
            GLApi::GLES => info.gles_version = api_version,
        }

        let glsl = query.string(StringName::ShadingLanguageVersion).unwrap_or_default();
        info.glsl_version = GLVersion::parse_glsl(&glsl);

        info.profile = match api {
            GLApi::GLES => ContextProfile::ES,
            GLApi::GL if api_version >= GLVersion::new(3, 2) => {
                profile_from_mask(query.profile_mask())
            }
            GLApi::GL => ContextProfile::COMPATIBILITY,
        };

        info.driver_extensions = query.extensions().into_iter().collect();
        info.extensions = info.driver_extensions.to_string();
        for extension in info.driver_extensions.known() {
            if extension.family() == ExtensionFamily::Gl {
                info.flags.set(extension);
            }
        }

        if let Some(window_system_extensions) = query.window_system_extensions() {
            info.window_system_extensions = ExtensionSet::parse(&window_system_extensions);
            let native = native_window_system();
            for extension in info.window_system_extensions.known() {
                if Some(extension.family()) == native {
                    info.flags.set(extension);
                }
            }
        }

        if let Some(glx_version) = query.window_system_version() {
            if cfg!(glx) {
                info.glx_version = glx_version;
            }
        }

        info.emulation = EmulationLayers::required(&info) & config.allowed_layers();
        info.fill_reported_strings(config);

        info!("{} context {} on {} ({}), {} driver extensions, emulating {:?}",
              if info.is_gles() { "OpenGL ES" } else { "OpenGL" },
              info.version,
              info.renderer,
              info.vendor,
              info.driver_extensions.len(),
              info.emulation);
        debug!("Context profile: {:?}", info.profile);
        debug!("GLSL version: {:?}, GLX version: {:?}", info.glsl_version, info.glx_version);
        debug!("Reported extensions: {}", info.regal_extensions);

        Ok(info)
    }

    /// Re-initializes this descriptor from the driver.
    ///
    /// The descriptor is reset first, so on error it is left empty.
    pub fn init(&mut self, query: &dyn ContextQuery, config: &Config) -> Result<(), Error> {
        *self = ContextInfo::new();
        *self = ContextInfo::detect(query, config)?;
        Ok(())
    }

    fn fill_reported_strings(&mut self, config: &Config) {
        self.regal_vendor = config.vendor.clone().unwrap_or_else(|| self.vendor.clone());
        self.regal_renderer = config.renderer.clone().unwrap_or_else(|| self.renderer.clone());
        self.regal_version = config.version.clone().unwrap_or_else(|| self.version.clone());

        self.regal_extension_set = match config.extensions {
            Some(ref extensions) => extensions.split_whitespace().map(str::to_owned).collect(),
            None => {
                let mut names: BTreeSet<String> =
                    self.driver_extensions.iter().map(str::to_owned).collect();
                names.extend(REGAL_EXTENSIONS.iter().map(|name| name.to_string()));
                names.extend(self.emulation
                                 .advertised_extensions()
                                 .into_iter()
                                 .map(str::to_owned));
                names
            }
        };
        self.regal_extensions = self.regal_extension_set
                                    .iter()
                                    .map(String::as_str)
                                    .collect::<Vec<_>>()
                                    .join(" ");

        for name in self.regal_extension_set.iter() {
            if !name.starts_with(REGAL_PREFIX) {
                continue;
            }
            if let Some(extension) = Extension::from_name(name) {
                self.flags.set(extension);
            }
        }
    }

    /// Returns true if the driver reports the named extension, in either its GL or its
    /// window-system extension string.
    ///
    /// This is an exact match; emulated extensions are not included.
    pub fn get_extension(&self, name: &str) -> bool {
        self.driver_extensions.contains(name) || self.window_system_extensions.contains(name)
    }

    /// Returns true if every space-separated name in `names` is supported.
    ///
    /// Names may be extensions or version tokens such as `GL_VERSION_3_2`, `GL_ES_VERSION_2_0`
    /// and `GLX_VERSION_1_4`. Extensions provided through emulation count as supported. An
    /// empty list is not supported.
    pub fn is_supported(&self, names: &str) -> bool {
        let mut tokens = names.split_whitespace().peekable();
        if tokens.peek().is_none() {
            return false;
        }
        tokens.all(|token| self.token_supported(token))
    }

    fn token_supported(&self, token: &str) -> bool {
        if let Some(suffix) = token.strip_prefix("GL_VERSION_") {
            return GLVersion::parse_token_suffix(suffix)
                .map_or(false, |version| self.gl_version_at_least(version.major, version.minor));
        }
        if let Some(suffix) = token.strip_prefix("GL_ES_VERSION_") {
            return GLVersion::parse_token_suffix(suffix).map_or(false, |version| {
                self.is_gles() && self.gles_version >= version
            });
        }
        if let Some(suffix) = token.strip_prefix("GLX_VERSION_") {
            return GLVersion::parse_token_suffix(suffix).map_or(false, |version| {
                !self.glx_version.is_zero() && self.glx_version >= version
            });
        }

        if Extension::from_name(token).map_or(false, |extension| self.has(extension)) {
            return true;
        }
        self.regal_extension_set.contains(token)
    }

    /// Returns the flag for a known extension.
    #[inline]
    pub fn has(&self, extension: Extension) -> bool {
        self.flags.get(extension)
    }

    /// Iterates over the known extensions whose flag is set.
    pub fn supported_extensions(&self) -> impl Iterator<Item = Extension> + '_ {
        Extension::ALL.iter().copied().filter(move |&extension| self.has(extension))
    }

    /// Returns true if this is a desktop GL context of at least the given version.
    #[inline]
    pub fn gl_version_at_least(&self, major: u8, minor: u8) -> bool {
        !self.is_gles() && !self.gl_version.is_zero() &&
            self.gl_version >= GLVersion::new(major, minor)
    }

    #[inline]
    pub fn is_gles(&self) -> bool {
        self.profile.contains(ContextProfile::ES)
    }

    #[inline]
    pub fn is_core(&self) -> bool {
        self.profile.contains(ContextProfile::CORE)
    }

    #[inline]
    pub fn is_compat(&self) -> bool {
        self.profile.contains(ContextProfile::COMPATIBILITY)
    }

    /// The emulation layers active for this context.
    #[inline]
    pub fn emulation(&self) -> EmulationLayers {
        self.emulation
    }
}

fn profile_from_mask(mask: Option<u32>) -> ContextProfile {
    let mask = match mask {
        None | Some(0) => return ContextProfile::COMPATIBILITY,
        Some(mask) => mask,
    };
    let mut profile = ContextProfile::empty();
    if mask & glow::CONTEXT_CORE_PROFILE_BIT != 0 {
        profile |= ContextProfile::CORE;
    }
    if mask & glow::CONTEXT_COMPATIBILITY_PROFILE_BIT != 0 {
        profile |= ContextProfile::COMPATIBILITY;
    }
    if profile.is_empty() {
        ContextProfile::COMPATIBILITY
    } else {
        profile
    }
}

fn native_window_system() -> Option<ExtensionFamily> {
    if cfg!(wgl) {
        Some(ExtensionFamily::Wgl)
    } else if cfg!(glx) {
        Some(ExtensionFamily::Glx)
    } else {
        None
    }
}
