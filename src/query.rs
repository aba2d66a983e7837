// context-info/src/query.rs
//
//! The queries a `ContextInfo` issues against the driver.

use crate::info::GLVersion;

use glow::HasContext;

// A lost context may keep reporting errors forever.
const MAX_STALE_ERRORS: usize = 16;

/// A string queryable with `glGetString`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StringName {
    /// `GL_VENDOR`.
    Vendor,
    /// `GL_RENDERER`.
    Renderer,
    /// `GL_VERSION`.
    Version,
    /// `GL_SHADING_LANGUAGE_VERSION`.
    ShadingLanguageVersion,
}

/// Everything a `ContextInfo` needs to know about the driver.
///
/// Implementations must answer for the context that is current on the calling thread.
pub trait ContextQuery {
    /// Returns the requested `glGetString` value, or `None` if the driver doesn't have
    /// it or rejected the query.
    fn string(&self, name: StringName) -> Option<String>;

    /// Returns the GL extensions the driver reports, one name per element.
    fn extensions(&self) -> Vec<String>;

    /// Returns the value of `GL_CONTEXT_PROFILE_MASK`, or `None` if the driver doesn't accept
    /// the query.
    fn profile_mask(&self) -> Option<u32>;

    /// Returns the window-system binding version (e.g. from `glXQueryVersion`), if known.
    fn window_system_version(&self) -> Option<GLVersion> {
        None
    }

    /// Returns the window-system extension string (e.g. from `wglGetExtensionsStringARB`), if
    /// known.
    fn window_system_extensions(&self) -> Option<String> {
        None
    }
}

impl ContextQuery for glow::Context {
    fn string(&self, name: StringName) -> Option<String> {
        let parameter = match name {
            StringName::Vendor => glow::VENDOR,
            StringName::Renderer => glow::RENDERER,
            StringName::Version => glow::VERSION,
            StringName::ShadingLanguageVersion => {
                // `glow` panics on a null string, which is what pre-2.0 drivers return here.
                if !has_shading_language(self.version().major) {
                    return None;
                }
                glow::SHADING_LANGUAGE_VERSION
            }
        };
        unsafe {
            drain_errors(|| self.get_error());
            let value = self.get_parameter_string(parameter);
            if self.get_error() != glow::NO_ERROR {
                return None;
            }
            Some(value)
        }
    }

    fn extensions(&self) -> Vec<String> {
        // `glow` collects these once when the context is wrapped.
        let mut names: Vec<String> = self.supported_extensions().iter().cloned().collect();
        names.sort();
        names
    }

    fn profile_mask(&self) -> Option<u32> {
        unsafe {
            drain_errors(|| self.get_error());
            let mask = self.get_parameter_i32(glow::CONTEXT_PROFILE_MASK);
            if self.get_error() != glow::NO_ERROR {
                return None;
            }
            Some(mask as u32)
        }
    }
}

/// Clears errors left pending by earlier calls, so they aren't blamed on the next query.
///
/// Returns the number of errors discarded.
pub(crate) fn drain_errors<F>(mut get_error: F) -> usize where F: FnMut() -> u32 {
    for drained in 0..MAX_STALE_ERRORS {
        if get_error() == glow::NO_ERROR {
            return drained;
        }
    }
    MAX_STALE_ERRORS
}

/// GLSL arrived with GL 2.0 and GLES 2.0.
#[inline]
pub(crate) fn has_shading_language(major_version: u32) -> bool {
    major_version >= 2
}

/// Driver strings captured ahead of time.
///
/// This is useful when the strings come from somewhere other than a live `glow` context, for
/// instance a different loader or a recorded trace.
#[derive(Clone, Debug, Default)]
pub struct DriverStrings {
    /// The `GL_VENDOR` string.
    pub vendor: String,
    /// The `GL_RENDERER` string.
    pub renderer: String,
    /// The `GL_VERSION` string.
    pub version: String,
    /// The `GL_SHADING_LANGUAGE_VERSION` string; empty if the driver has none.
    pub shading_language_version: String,
    /// The GL extensions, one name per element.
    pub extensions: Vec<String>,
    /// The `GL_CONTEXT_PROFILE_MASK` value, if the driver accepted the query.
    pub profile_mask: Option<u32>,
    /// The window-system binding version, if known.
    pub window_system_version: Option<GLVersion>,
    /// The window-system extension string, if known.
    pub window_system_extensions: Option<String>,
}

impl DriverStrings {
    /// Snapshots everything the given query reports.
    pub fn capture(query: &dyn ContextQuery) -> DriverStrings {
        DriverStrings {
            vendor: query.string(StringName::Vendor).unwrap_or_default(),
            renderer: query.string(StringName::Renderer).unwrap_or_default(),
            version: query.string(StringName::Version).unwrap_or_default(),
            shading_language_version: query
                .string(StringName::ShadingLanguageVersion)
                .unwrap_or_default(),
            extensions: query.extensions(),
            profile_mask: query.profile_mask(),
            window_system_version: query.window_system_version(),
            window_system_extensions: query.window_system_extensions(),
        }
    }
}

impl ContextQuery for DriverStrings {
    fn string(&self, name: StringName) -> Option<String> {
        let value = match name {
            StringName::Vendor => &self.vendor,
            StringName::Renderer => &self.renderer,
            StringName::Version => &self.version,
            StringName::ShadingLanguageVersion => &self.shading_language_version,
        };
        Some(value.clone())
    }

    fn extensions(&self) -> Vec<String> {
        self.extensions.clone()
    }

    fn profile_mask(&self) -> Option<u32> {
        self.profile_mask
    }

    fn window_system_version(&self) -> Option<GLVersion> {
        self.window_system_version
    }

    fn window_system_extensions(&self) -> Option<String> {
        self.window_system_extensions.clone()
    }
}
