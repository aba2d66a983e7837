// context-info/src/info.rs
//
//! OpenGL information.

use crate::error::Error;

use log::warn;

const ES_PREFIXES: [&str; 3] = ["OpenGL ES-CM ", "OpenGL ES-CL ", "OpenGL ES "];
const GLSL_ES_PREFIX: &str = "OpenGL ES GLSL ES ";

/// The API (OpenGL or OpenGL ES).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GLApi {
    /// OpenGL (full or desktop OpenGL).
    GL,
    /// OpenGL ES (embedded OpenGL).
    GLES,
}

/// A major and minor version number pair.
///
/// Since OpenGL and OpenGL ES have different version numbering schemes, the meaning of a value
/// depends on which field of `ContextInfo` it was read from. The zero version means "absent".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GLVersion {
    /// The major version (e.g. 4 in 4.2).
    pub major: u8,
    /// The minor version (e.g. 2 in 4.2).
    pub minor: u8,
}

impl GLVersion {
    /// Creates a version structure with the given major and minor version numbers.
    #[inline]
    pub fn new(major: u8, minor: u8) -> GLVersion {
        GLVersion { major, minor }
    }

    /// Returns true if this is the zero version, i.e. nothing was reported.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.major == 0 && self.minor == 0
    }

    /// Parses a `GL_VERSION` string, as returned by `glGetString`.
    ///
    /// Desktop drivers report e.g. `4.6.0 NVIDIA 535.54.03`; OpenGL ES drivers prefix the
    /// version with `OpenGL ES ` (or `OpenGL ES-CM ` / `OpenGL ES-CL ` on 1.x).
    pub fn parse_gl(version_string: &str) -> Result<(GLApi, GLVersion), Error> {
        let trimmed = version_string.trim();
        if trimmed.is_empty() {
            return Err(Error::NoVersionString);
        }

        let (api, rest) = match ES_PREFIXES
            .iter()
            .find_map(|prefix| trimmed.strip_prefix(prefix))
        {
            Some(rest) => (GLApi::GLES, rest),
            None => (GLApi::GL, trimmed),
        };

        match parse_major_minor(rest) {
            Some(version) => Ok((api, version)),
            None => Err(Error::MalformedVersionString(version_string.to_owned())),
        }
    }

    /// Parses a `GL_SHADING_LANGUAGE_VERSION` string.
    ///
    /// The minor component is kept as written, so `4.60` yields `4.60`, not `4.6`. Malformed
    /// strings yield the zero version; GLSL is advisory and never fails initialization.
    pub fn parse_glsl(version_string: &str) -> GLVersion {
        let trimmed = version_string.trim();
        if trimmed.is_empty() {
            return GLVersion::default();
        }
        let rest = trimmed.strip_prefix(GLSL_ES_PREFIX).unwrap_or(trimmed);
        match parse_major_minor(rest) {
            Some(version) => version,
            None => {
                warn!("Couldn't parse the shading language version {:?}", version_string);
                GLVersion::default()
            }
        }
    }

    /// Parses a `<major>_<minor>` suffix, as found in `GL_VERSION_3_2` style tokens.
    pub(crate) fn parse_token_suffix(suffix: &str) -> Option<GLVersion> {
        let mut parts = suffix.split('_');
        let major = parts.next()?.parse().ok()?;
        let minor = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(GLVersion::new(major, minor))
    }
}

fn parse_major_minor(version_string: &str) -> Option<GLVersion> {
    // Drop the vendor-specific suffix, if any.
    let number = version_string.split_whitespace().next()?;
    let mut version_string_iter = number.split('.');
    let major = version_string_iter.next()?.parse().ok()?;
    let minor = leading_digits(version_string_iter.next()?)?.parse().ok()?;
    Some(GLVersion::new(major, minor))
}

fn leading_digits(component: &str) -> Option<&str> {
    let end = component
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(component.len());
    if end == 0 {
        None
    } else {
        Some(&component[..end])
    }
}
