// context-info/src/lib.rs
//
//! Per-context OpenGL capability descriptors.
//!
//! An API-shimming layer creates one `ContextInfo` per rendering context, right after the
//! context becomes current. It records the driver's vendor, renderer, version and extension
//! strings, one flag per known GL/WGL/GLX extension, and the strings the layer itself reports
//! to the application. The layer then consults it for the life of the context to decide
//! whether each feature is served by the driver or by an emulation layer.
//!
//! ```ignore
//! use context_info::{Config, ContextInfo, Extension};
//!
//! let info = ContextInfo::detect(&gl, &Config::from_env())?;
//! if !info.has(Extension::GlExtDirectStateAccess) {
//!     // Route DSA entry points through the emulation layer.
//! }
//! ```

pub mod error;
pub use crate::error::Error;

mod config;
pub use crate::config::Config;

mod context_info;
pub use crate::context_info::{ContextInfo, ContextProfile};

mod emulation;
pub use crate::emulation::EmulationLayers;

mod extension;
pub use crate::extension::{Extension, ExtensionFamily, ExtensionSet};

mod info;
pub use crate::info::{GLApi, GLVersion};

mod query;
pub use crate::query::{ContextQuery, DriverStrings, StringName};

#[cfg(test)]
mod tests;
