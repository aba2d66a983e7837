// context-info/src/config.rs
//
//! Settings that shape what the shim layer reports and emulates.

use crate::emulation::{EmulationLayers, LAYER_NAMES};

use log::{debug, warn};
use std::env;

/// Overrides and switches applied while a `ContextInfo` is initialized.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Replaces the reported `GL_VENDOR`.
    pub vendor: Option<String>,
    /// Replaces the reported `GL_RENDERER`.
    pub renderer: Option<String>,
    /// Replaces the reported `GL_VERSION`.
    pub version: Option<String>,
    /// Replaces the reported extension string wholesale.
    pub extensions: Option<String>,
    /// Master switch. When false, no emulation layer is activated.
    pub emulation: bool,
    /// The layers that may be activated if the driver lacks the functionality.
    pub enabled: EmulationLayers,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            vendor: None,
            renderer: None,
            version: None,
            extensions: None,
            emulation: true,
            enabled: EmulationLayers::all(),
        }
    }
}

impl Config {
    /// Reads the configuration from `REGAL_*` environment variables.
    ///
    /// Variables that are unset keep their default. Unparseable switches are ignored with a
    /// warning.
    pub fn from_env() -> Config {
        Config::from_lookup(|name| env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Config where F: Fn(&str) -> Option<String> {
        let mut config = Config::default();

        config.vendor = lookup("REGAL_GL_VENDOR");
        config.renderer = lookup("REGAL_GL_RENDERER");
        config.version = lookup("REGAL_GL_VERSION");
        config.extensions = lookup("REGAL_GL_EXTENSIONS");

        if let Some(enabled) = lookup_switch(&lookup, "REGAL_EMULATION") {
            config.emulation = enabled;
        }
        for &(layer, suffix) in LAYER_NAMES.iter() {
            let name = format!("REGAL_EMU_{}", suffix);
            if let Some(enabled) = lookup_switch(&lookup, &name) {
                config.enabled.set(layer, enabled);
            }
        }

        debug!("Configuration from environment: {:?}", config);
        config
    }

    /// Returns the layers that may be activated, taking the master switch into account.
    #[inline]
    pub fn allowed_layers(&self) -> EmulationLayers {
        if self.emulation {
            self.enabled
        } else {
            EmulationLayers::empty()
        }
    }
}

fn lookup_switch<F>(lookup: &F, name: &str) -> Option<bool> where F: Fn(&str) -> Option<String> {
    let value = lookup(name)?;
    match parse_switch(&value) {
        Some(enabled) => Some(enabled),
        None => {
            warn!("Ignoring {}={:?}: expected a boolean", name, value);
            None
        }
    }
}

pub(crate) fn parse_switch(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
