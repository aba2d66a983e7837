// context-info/src/emulation.rs
//
//! Decides which emulation layers a context needs.

use crate::context_info::ContextInfo;
use crate::extension::Extension;
use crate::info::GLVersion;

use bitflags::bitflags;

bitflags! {
    /// The emulation layers that can stand in for missing driver functionality.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct EmulationLayers: u8 {
        /// Direct state access.
        const DSA        = 0x01;
        /// Debug markers and string markers.
        const MARKER     = 0x02;
        /// Vertex array objects.
        const VAO        = 0x04;
        /// Immediate mode and the fixed-function pipeline.
        const IFF        = 0x08;
        /// Sampler objects.
        const SO         = 0x10;
        /// Immutable texture storage.
        const TEXSTO     = 0x20;
        /// `glDraw*BaseVertex`.
        const BASEVERTEX = 0x40;
    }
}

/// Every layer, paired with the suffix of its `REGAL_EMU_*` environment variable.
pub(crate) const LAYER_NAMES: [(EmulationLayers, &str); 7] = [
    (EmulationLayers::DSA, "DSA"),
    (EmulationLayers::MARKER, "MARKER"),
    (EmulationLayers::VAO, "VAO"),
    (EmulationLayers::IFF, "IFF"),
    (EmulationLayers::SO, "SO"),
    (EmulationLayers::TEXSTO, "TEXSTO"),
    (EmulationLayers::BASEVERTEX, "BASEVERTEX"),
];

impl EmulationLayers {
    /// Returns the layers the context can't do without, given what the driver provides.
    pub fn required(info: &ContextInfo) -> EmulationLayers {
        let mut layers = EmulationLayers::empty();
        let desktop = !info.is_gles();

        if !info.has(Extension::GlExtDirectStateAccess) {
            layers |= EmulationLayers::DSA;
        }
        if !info.has(Extension::GlExtDebugMarker) {
            layers |= EmulationLayers::MARKER;
        }

        let native_vao = if desktop {
            info.gl_version_at_least(3, 0) ||
                info.has(Extension::GlArbVertexArrayObject) ||
                info.has(Extension::GlAppleVertexArrayObject)
        } else {
            info.gles_version >= GLVersion::new(3, 0) ||
                info.get_extension("GL_OES_vertex_array_object")
        };
        if !native_vao {
            layers |= EmulationLayers::VAO;
        }

        // Core profiles and ES 2.0+ have no fixed-function pipeline.
        if info.is_core() || info.gles_version >= GLVersion::new(2, 0) {
            layers |= EmulationLayers::IFF;
        }

        let native_so = if desktop {
            info.gl_version_at_least(3, 3) || info.has(Extension::GlArbSamplerObjects)
        } else {
            info.gles_version >= GLVersion::new(3, 0)
        };
        if !native_so {
            layers |= EmulationLayers::SO;
        }

        let native_texsto = if desktop {
            info.gl_version_at_least(4, 2) || info.has(Extension::GlArbTextureStorage)
        } else {
            info.gles_version >= GLVersion::new(3, 0) ||
                info.get_extension("GL_EXT_texture_storage")
        };
        if !native_texsto {
            layers |= EmulationLayers::TEXSTO;
        }

        let native_base_vertex = if desktop {
            info.gl_version_at_least(3, 2) || info.has(Extension::GlArbDrawElementsBaseVertex)
        } else {
            info.gles_version >= GLVersion::new(3, 2) ||
                info.get_extension("GL_OES_draw_elements_base_vertex") ||
                info.get_extension("GL_EXT_draw_elements_base_vertex")
        };
        if !native_base_vertex {
            layers |= EmulationLayers::BASEVERTEX;
        }

        layers
    }

    /// Returns the extension names the active layers add to the reported extension string.
    pub fn advertised_extensions(self) -> Vec<&'static str> {
        let mut names = vec![];
        if self.contains(EmulationLayers::DSA) {
            names.push("GL_EXT_direct_state_access");
        }
        if self.contains(EmulationLayers::MARKER) {
            names.extend_from_slice(&[
                "GL_EXT_debug_marker",
                "GL_GREMEDY_string_marker",
                "GL_GREMEDY_frame_terminator",
            ]);
        }
        if self.contains(EmulationLayers::VAO) {
            names.push("GL_ARB_vertex_array_object");
        }
        if self.contains(EmulationLayers::SO) {
            names.push("GL_ARB_sampler_objects");
        }
        if self.contains(EmulationLayers::TEXSTO) {
            names.push("GL_ARB_texture_storage");
        }
        if self.contains(EmulationLayers::BASEVERTEX) {
            names.push("GL_ARB_draw_elements_base_vertex");
        }
        names
    }
}
