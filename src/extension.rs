// context-info/src/extension.rs
//
//! The catalogue of known GL, WGL and GLX extensions, and parsed extension strings.

use fnv::{FnvHashMap, FnvHashSet};
use lazy_static::lazy_static;
use std::fmt::{self, Display, Formatter};

/// The window-system binding an extension belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExtensionFamily {
    /// Core OpenGL extensions, reported through `GL_EXTENSIONS`.
    Gl,
    /// Windows extensions, reported through `wglGetExtensionsStringARB`.
    Wgl,
    /// X11 extensions, reported through `glXQueryExtensionsString`.
    Glx,
}

macro_rules! extensions {
    ($($family:ident $variant:ident => $name:literal,)*) => {
        /// A known extension.
        ///
        /// Each variant is one capability flag of a `ContextInfo`.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Extension {
            $(
                #[doc = $name]
                $variant,
            )*
        }

        impl Extension {
            /// Every known extension, in catalogue order.
            pub const ALL: &'static [Extension] = &[$(Extension::$variant,)*];

            /// The canonical name, as it appears in driver extension strings.
            pub fn name(self) -> &'static str {
                match self {
                    $(Extension::$variant => $name,)*
                }
            }

            /// The window-system binding this extension belongs to.
            pub fn family(self) -> ExtensionFamily {
                match self {
                    $(Extension::$variant => ExtensionFamily::$family,)*
                }
            }
        }
    };
}

extensions! {
    Gl Gl3dfxTbuffer => "GL_3DFX_tbuffer",
    Gl GlAmdDebugOutput => "GL_AMD_debug_output",
    Gl GlAmdDrawBuffersBlend => "GL_AMD_draw_buffers_blend",
    Gl GlAmdMultiDrawIndirect => "GL_AMD_multi_draw_indirect",
    Gl GlAmdNameGenDelete => "GL_AMD_name_gen_delete",
    Gl GlAmdPerformanceMonitor => "GL_AMD_performance_monitor",
    Gl GlAmdSamplePositions => "GL_AMD_sample_positions",
    Gl GlAmdStencilOperationExtended => "GL_AMD_stencil_operation_extended",
    Gl GlAmdVertexShaderTessellator => "GL_AMD_vertex_shader_tessellator",
    Gl GlAppleElementArray => "GL_APPLE_element_array",
    Gl GlAppleFence => "GL_APPLE_fence",
    Gl GlAppleFlushBufferRange => "GL_APPLE_flush_buffer_range",
    Gl GlAppleFlushRender => "GL_APPLE_flush_render",
    Gl GlAppleObjectPurgeable => "GL_APPLE_object_purgeable",
    Gl GlAppleTextureRange => "GL_APPLE_texture_range",
    Gl GlAppleVertexArrayObject => "GL_APPLE_vertex_array_object",
    Gl GlAppleVertexArrayRange => "GL_APPLE_vertex_array_range",
    Gl GlAppleVertexProgramEvaluators => "GL_APPLE_vertex_program_evaluators",
    Gl GlArbEs2Compatibility => "GL_ARB_ES2_compatibility",
    Gl GlArbBaseInstance => "GL_ARB_base_instance",
    Gl GlArbBlendFuncExtended => "GL_ARB_blend_func_extended",
    Gl GlArbClEvent => "GL_ARB_cl_event",
    Gl GlArbColorBufferFloat => "GL_ARB_color_buffer_float",
    Gl GlArbCopyBuffer => "GL_ARB_copy_buffer",
    Gl GlArbDebugOutput => "GL_ARB_debug_output",
    Gl GlArbDrawBuffers => "GL_ARB_draw_buffers",
    Gl GlArbDrawBuffersBlend => "GL_ARB_draw_buffers_blend",
    Gl GlArbDrawElementsBaseVertex => "GL_ARB_draw_elements_base_vertex",
    Gl GlArbDrawIndirect => "GL_ARB_draw_indirect",
    Gl GlArbDrawInstanced => "GL_ARB_draw_instanced",
    Gl GlArbFramebufferObject => "GL_ARB_framebuffer_object",
    Gl GlArbGeometryShader4 => "GL_ARB_geometry_shader4",
    Gl GlArbGetProgramBinary => "GL_ARB_get_program_binary",
    Gl GlArbGpuShaderFp64 => "GL_ARB_gpu_shader_fp64",
    Gl GlArbHalfFloatPixel => "GL_ARB_half_float_pixel",
    Gl GlArbImaging => "GL_ARB_imaging",
    Gl GlArbInstancedArrays => "GL_ARB_instanced_arrays",
    Gl GlArbInternalformatQuery => "GL_ARB_internalformat_query",
    Gl GlArbMapBufferRange => "GL_ARB_map_buffer_range",
    Gl GlArbMatrixPalette => "GL_ARB_matrix_palette",
    Gl GlArbMultisample => "GL_ARB_multisample",
    Gl GlArbMultitexture => "GL_ARB_multitexture",
    Gl GlArbOcclusionQuery => "GL_ARB_occlusion_query",
    Gl GlArbPointParameters => "GL_ARB_point_parameters",
    Gl GlArbProvokingVertex => "GL_ARB_provoking_vertex",
    Gl GlArbRobustness => "GL_ARB_robustness",
    Gl GlArbSampleShading => "GL_ARB_sample_shading",
    Gl GlArbSamplerObjects => "GL_ARB_sampler_objects",
    Gl GlArbSeparateShaderObjects => "GL_ARB_separate_shader_objects",
    Gl GlArbShaderObjects => "GL_ARB_shader_objects",
    Gl GlArbShaderSubroutine => "GL_ARB_shader_subroutine",
    Gl GlArbShadingLanguageInclude => "GL_ARB_shading_language_include",
    Gl GlArbSync => "GL_ARB_sync",
    Gl GlArbTessellationShader => "GL_ARB_tessellation_shader",
    Gl GlArbTextureBufferObject => "GL_ARB_texture_buffer_object",
    Gl GlArbTextureCompression => "GL_ARB_texture_compression",
    Gl GlArbTextureMultisample => "GL_ARB_texture_multisample",
    Gl GlArbTextureStorage => "GL_ARB_texture_storage",
    Gl GlArbTimerQuery => "GL_ARB_timer_query",
    Gl GlArbTransformFeedback2 => "GL_ARB_transform_feedback2",
    Gl GlArbTransformFeedback3 => "GL_ARB_transform_feedback3",
    Gl GlArbTransformFeedbackInstanced => "GL_ARB_transform_feedback_instanced",
    Gl GlArbTransposeMatrix => "GL_ARB_transpose_matrix",
    Gl GlArbUniformBufferObject => "GL_ARB_uniform_buffer_object",
    Gl GlArbVertexArrayObject => "GL_ARB_vertex_array_object",
    Gl GlArbVertexAttrib64bit => "GL_ARB_vertex_attrib_64bit",
    Gl GlArbVertexBlend => "GL_ARB_vertex_blend",
    Gl GlArbVertexBufferObject => "GL_ARB_vertex_buffer_object",
    Gl GlArbVertexProgram => "GL_ARB_vertex_program",
    Gl GlArbVertexShader => "GL_ARB_vertex_shader",
    Gl GlArbVertexType2101010Rev => "GL_ARB_vertex_type_2_10_10_10_rev",
    Gl GlArbViewportArray => "GL_ARB_viewport_array",
    Gl GlArbWindowPos => "GL_ARB_window_pos",
    Gl GlAtiDrawBuffers => "GL_ATI_draw_buffers",
    Gl GlAtiElementArray => "GL_ATI_element_array",
    Gl GlAtiEnvmapBumpmap => "GL_ATI_envmap_bumpmap",
    Gl GlAtiFragmentShader => "GL_ATI_fragment_shader",
    Gl GlAtiMapObjectBuffer => "GL_ATI_map_object_buffer",
    Gl GlAtiPnTriangles => "GL_ATI_pn_triangles",
    Gl GlAtiSeparateStencil => "GL_ATI_separate_stencil",
    Gl GlAtiVertexArrayObject => "GL_ATI_vertex_array_object",
    Gl GlAtiVertexAttribArrayObject => "GL_ATI_vertex_attrib_array_object",
    Gl GlAtiVertexStreams => "GL_ATI_vertex_streams",
    Gl GlExtBindableUniform => "GL_EXT_bindable_uniform",
    Gl GlExtBlendColor => "GL_EXT_blend_color",
    Gl GlExtBlendEquationSeparate => "GL_EXT_blend_equation_separate",
    Gl GlExtBlendFuncSeparate => "GL_EXT_blend_func_separate",
    Gl GlExtBlendMinmax => "GL_EXT_blend_minmax",
    Gl GlExtColorSubtable => "GL_EXT_color_subtable",
    Gl GlExtCompiledVertexArray => "GL_EXT_compiled_vertex_array",
    Gl GlExtConvolution => "GL_EXT_convolution",
    Gl GlExtCoordinateFrame => "GL_EXT_coordinate_frame",
    Gl GlExtCopyTexture => "GL_EXT_copy_texture",
    Gl GlExtCullVertex => "GL_EXT_cull_vertex",
    Gl GlExtDebugMarker => "GL_EXT_debug_marker",
    Gl GlExtDepthBoundsTest => "GL_EXT_depth_bounds_test",
    Gl GlExtDirectStateAccess => "GL_EXT_direct_state_access",
    Gl GlExtDrawBuffers2 => "GL_EXT_draw_buffers2",
    Gl GlExtDrawInstanced => "GL_EXT_draw_instanced",
    Gl GlExtDrawRangeElements => "GL_EXT_draw_range_elements",
    Gl GlExtFogCoord => "GL_EXT_fog_coord",
    Gl GlExtFragmentLighting => "GL_EXT_fragment_lighting",
    Gl GlExtFramebufferBlit => "GL_EXT_framebuffer_blit",
    Gl GlExtFramebufferMultisample => "GL_EXT_framebuffer_multisample",
    Gl GlExtFramebufferObject => "GL_EXT_framebuffer_object",
    Gl GlExtGeometryShader4 => "GL_EXT_geometry_shader4",
    Gl GlExtGpuProgramParameters => "GL_EXT_gpu_program_parameters",
    Gl GlExtGpuShader4 => "GL_EXT_gpu_shader4",
    Gl GlExtHistogram => "GL_EXT_histogram",
    Gl GlExtIndexFunc => "GL_EXT_index_func",
    Gl GlExtIndexMaterial => "GL_EXT_index_material",
    Gl GlExtLightTexture => "GL_EXT_light_texture",
    Gl GlExtMultiDrawArrays => "GL_EXT_multi_draw_arrays",
    Gl GlExtMultisample => "GL_EXT_multisample",
    Gl GlExtPalettedTexture => "GL_EXT_paletted_texture",
    Gl GlExtPixelTransform => "GL_EXT_pixel_transform",
    Gl GlExtPointParameters => "GL_EXT_point_parameters",
    Gl GlExtPolygonOffset => "GL_EXT_polygon_offset",
    Gl GlExtProvokingVertex => "GL_EXT_provoking_vertex",
    Gl GlExtSceneMarker => "GL_EXT_scene_marker",
    Gl GlExtSecondaryColor => "GL_EXT_secondary_color",
    Gl GlExtSeparateShaderObjects => "GL_EXT_separate_shader_objects",
    Gl GlExtShaderImageLoadStore => "GL_EXT_shader_image_load_store",
    Gl GlExtStencilClearTag => "GL_EXT_stencil_clear_tag",
    Gl GlExtStencilTwoSide => "GL_EXT_stencil_two_side",
    Gl GlExtSubtexture => "GL_EXT_subtexture",
    Gl GlExtTexture3d => "GL_EXT_texture3D",
    Gl GlExtTextureArray => "GL_EXT_texture_array",
    Gl GlExtTextureBufferObject => "GL_EXT_texture_buffer_object",
    Gl GlExtTextureInteger => "GL_EXT_texture_integer",
    Gl GlExtTextureObject => "GL_EXT_texture_object",
    Gl GlExtTexturePerturbNormal => "GL_EXT_texture_perturb_normal",
    Gl GlExtTimerQuery => "GL_EXT_timer_query",
    Gl GlExtTransformFeedback => "GL_EXT_transform_feedback",
    Gl GlExtVertexArray => "GL_EXT_vertex_array",
    Gl GlExtVertexAttrib64bit => "GL_EXT_vertex_attrib_64bit",
    Gl GlExtVertexShader => "GL_EXT_vertex_shader",
    Gl GlExtVertexWeighting => "GL_EXT_vertex_weighting",
    Gl GlExtX11SyncObject => "GL_EXT_x11_sync_object",
    Gl GlGremedyFrameTerminator => "GL_GREMEDY_frame_terminator",
    Gl GlGremedyStringMarker => "GL_GREMEDY_string_marker",
    Gl GlHpImageTransform => "GL_HP_image_transform",
    Gl GlIbmMultimodeDrawArrays => "GL_IBM_multimode_draw_arrays",
    Gl GlIbmVertexArrayLists => "GL_IBM_vertex_array_lists",
    Gl GlIngrBlendFuncSeparate => "GL_INGR_blend_func_separate",
    Gl GlIntelParallelArrays => "GL_INTEL_parallel_arrays",
    Gl GlIntelTextureScissor => "GL_INTEL_texture_scissor",
    Gl GlKtxBufferRegion => "GL_KTX_buffer_region",
    Gl GlMesaResizeBuffers => "GL_MESA_resize_buffers",
    Gl GlMesaWindowPos => "GL_MESA_window_pos",
    Gl GlNvBindlessTexture => "GL_NV_bindless_texture",
    Gl GlNvConditionalRender => "GL_NV_conditional_render",
    Gl GlNvCopyImage => "GL_NV_copy_image",
    Gl GlNvDepthBufferFloat => "GL_NV_depth_buffer_float",
    Gl GlNvEvaluators => "GL_NV_evaluators",
    Gl GlNvExplicitMultisample => "GL_NV_explicit_multisample",
    Gl GlNvFence => "GL_NV_fence",
    Gl GlNvFragmentProgram => "GL_NV_fragment_program",
    Gl GlNvFramebufferMultisampleCoverage => "GL_NV_framebuffer_multisample_coverage",
    Gl GlNvGeometryProgram4 => "GL_NV_geometry_program4",
    Gl GlNvGpuProgram4 => "GL_NV_gpu_program4",
    Gl GlNvGpuShader5 => "GL_NV_gpu_shader5",
    Gl GlNvHalfFloat => "GL_NV_half_float",
    Gl GlNvOcclusionQuery => "GL_NV_occlusion_query",
    Gl GlNvParameterBufferObject => "GL_NV_parameter_buffer_object",
    Gl GlNvPathRendering => "GL_NV_path_rendering",
    Gl GlNvPixelDataRange => "GL_NV_pixel_data_range",
    Gl GlNvPointSprite => "GL_NV_point_sprite",
    Gl GlNvPresentVideo => "GL_NV_present_video",
    Gl GlNvPrimitiveRestart => "GL_NV_primitive_restart",
    Gl GlNvRegisterCombiners => "GL_NV_register_combiners",
    Gl GlNvRegisterCombiners2 => "GL_NV_register_combiners2",
    Gl GlNvShaderBufferLoad => "GL_NV_shader_buffer_load",
    Gl GlNvTextureBarrier => "GL_NV_texture_barrier",
    Gl GlNvTextureMultisample => "GL_NV_texture_multisample",
    Gl GlNvTransformFeedback => "GL_NV_transform_feedback",
    Gl GlNvTransformFeedback2 => "GL_NV_transform_feedback2",
    Gl GlNvVdpauInterop => "GL_NV_vdpau_interop",
    Gl GlNvVertexArrayRange => "GL_NV_vertex_array_range",
    Gl GlNvVertexAttribInteger64bit => "GL_NV_vertex_attrib_integer_64bit",
    Gl GlNvVertexBufferUnifiedMemory => "GL_NV_vertex_buffer_unified_memory",
    Gl GlNvVertexProgram => "GL_NV_vertex_program",
    Gl GlNvVertexProgram4 => "GL_NV_vertex_program4",
    Gl GlNvVideoCapture => "GL_NV_video_capture",
    Gl GlPgiMiscHints => "GL_PGI_misc_hints",
    Gl GlRegalEnable => "GL_REGAL_enable",
    Gl GlRegalErrorString => "GL_REGAL_error_string",
    Gl GlRegalExtensionQuery => "GL_REGAL_extension_query",
    Gl GlRegalLog => "GL_REGAL_log",
    Gl GlSgisDetailTexture => "GL_SGIS_detail_texture",
    Gl GlSgisFogFunction => "GL_SGIS_fog_function",
    Gl GlSgisMultisample => "GL_SGIS_multisample",
    Gl GlSgisPixelTexture => "GL_SGIS_pixel_texture",
    Gl GlSgisPointParameters => "GL_SGIS_point_parameters",
    Gl GlSgisSharpenTexture => "GL_SGIS_sharpen_texture",
    Gl GlSgisTexture4d => "GL_SGIS_texture4D",
    Gl GlSgisTextureColorMask => "GL_SGIS_texture_color_mask",
    Gl GlSgisTextureFilter4 => "GL_SGIS_texture_filter4",
    Gl GlSgixAsync => "GL_SGIX_async",
    Gl GlSgixFlushRaster => "GL_SGIX_flush_raster",
    Gl GlSgixFogTexture => "GL_SGIX_fog_texture",
    Gl GlSgixFragmentLighting => "GL_SGIX_fragment_lighting",
    Gl GlSgixFramezoom => "GL_SGIX_framezoom",
    Gl GlSgixIglooInterface => "GL_SGIX_igloo_interface",
    Gl GlSgixInstruments => "GL_SGIX_instruments",
    Gl GlSgixListPriority => "GL_SGIX_list_priority",
    Gl GlSgixPixelTexture => "GL_SGIX_pixel_texture",
    Gl GlSgixPolynomialFfd => "GL_SGIX_polynomial_ffd",
    Gl GlSgixReferencePlane => "GL_SGIX_reference_plane",
    Gl GlSgixSprite => "GL_SGIX_sprite",
    Gl GlSgixTagSampleBuffer => "GL_SGIX_tag_sample_buffer",
    Gl GlSgiColorTable => "GL_SGI_color_table",
    Gl GlSunxConstantData => "GL_SUNX_constant_data",
    Gl GlSunGlobalAlpha => "GL_SUN_global_alpha",
    Gl GlSunMeshArray => "GL_SUN_mesh_array",
    Gl GlSunReadVideoPixels => "GL_SUN_read_video_pixels",
    Gl GlSunTriangleList => "GL_SUN_triangle_list",
    Gl GlSunVertex => "GL_SUN_vertex",
    Gl GlWinSwapHint => "GL_WIN_swap_hint",
    Wgl Wgl3dlStereoControl => "WGL_3DL_stereo_control",
    Wgl WglAmdGpuAssociation => "WGL_AMD_gpu_association",
    Wgl WglArbBufferRegion => "WGL_ARB_buffer_region",
    Wgl WglArbCreateContext => "WGL_ARB_create_context",
    Wgl WglArbExtensionsString => "WGL_ARB_extensions_string",
    Wgl WglArbMakeCurrentRead => "WGL_ARB_make_current_read",
    Wgl WglArbPbuffer => "WGL_ARB_pbuffer",
    Wgl WglArbPixelFormat => "WGL_ARB_pixel_format",
    Wgl WglArbRenderTexture => "WGL_ARB_render_texture",
    Wgl WglExtDisplayColorTable => "WGL_EXT_display_color_table",
    Wgl WglExtExtensionsString => "WGL_EXT_extensions_string",
    Wgl WglExtMakeCurrentRead => "WGL_EXT_make_current_read",
    Wgl WglExtPbuffer => "WGL_EXT_pbuffer",
    Wgl WglExtPixelFormat => "WGL_EXT_pixel_format",
    Wgl WglExtSwapControl => "WGL_EXT_swap_control",
    Wgl WglGdi => "WGL_GDI",
    Wgl WglI3dDigitalVideoControl => "WGL_I3D_digital_video_control",
    Wgl WglI3dGamma => "WGL_I3D_gamma",
    Wgl WglI3dGenlock => "WGL_I3D_genlock",
    Wgl WglI3dImageBuffer => "WGL_I3D_image_buffer",
    Wgl WglI3dSwapFrameLock => "WGL_I3D_swap_frame_lock",
    Wgl WglI3dSwapFrameUsage => "WGL_I3D_swap_frame_usage",
    Wgl WglNvCopyImage => "WGL_NV_copy_image",
    Wgl WglNvGpuAffinity => "WGL_NV_gpu_affinity",
    Wgl WglNvPresentVideo => "WGL_NV_present_video",
    Wgl WglNvSwapGroup => "WGL_NV_swap_group",
    Wgl WglNvVertexArrayRange => "WGL_NV_vertex_array_range",
    Wgl WglNvVideoCapture => "WGL_NV_video_capture",
    Wgl WglNvVideoOutput => "WGL_NV_video_output",
    Wgl WglOmlSyncControl => "WGL_OML_sync_control",
    Glx GlxArbCreateContext => "GLX_ARB_create_context",
    Glx GlxArbGetProcAddress => "GLX_ARB_get_proc_address",
    Glx GlxAtiRenderTexture => "GLX_ATI_render_texture",
    Glx GlxExtImportContext => "GLX_EXT_import_context",
    Glx GlxExtSwapControl => "GLX_EXT_swap_control",
    Glx GlxExtTextureFromPixmap => "GLX_EXT_texture_from_pixmap",
    Glx GlxMesaAgpOffset => "GLX_MESA_agp_offset",
    Glx GlxMesaCopySubBuffer => "GLX_MESA_copy_sub_buffer",
    Glx GlxMesaPixmapColormap => "GLX_MESA_pixmap_colormap",
    Glx GlxMesaReleaseBuffers => "GLX_MESA_release_buffers",
    Glx GlxMesaSet3dfxMode => "GLX_MESA_set_3dfx_mode",
    Glx GlxNvCopyImage => "GLX_NV_copy_image",
    Glx GlxNvPresentVideo => "GLX_NV_present_video",
    Glx GlxNvSwapGroup => "GLX_NV_swap_group",
    Glx GlxNvVertexArrayRange => "GLX_NV_vertex_array_range",
    Glx GlxNvVideoOutput => "GLX_NV_video_output",
    Glx GlxOmlSyncControl => "GLX_OML_sync_control",
    Glx GlxSgixFbconfig => "GLX_SGIX_fbconfig",
    Glx GlxSgixPbuffer => "GLX_SGIX_pbuffer",
    Glx GlxSgixSwapBarrier => "GLX_SGIX_swap_barrier",
    Glx GlxSgixSwapGroup => "GLX_SGIX_swap_group",
    Glx GlxSgixVideoResize => "GLX_SGIX_video_resize",
    Glx GlxSgiCushion => "GLX_SGI_cushion",
    Glx GlxSgiMakeCurrentRead => "GLX_SGI_make_current_read",
    Glx GlxSgiSwapControl => "GLX_SGI_swap_control",
    Glx GlxSgiVideoSync => "GLX_SGI_video_sync",
    Glx GlxSunGetTransparentIndex => "GLX_SUN_get_transparent_index",
    Glx GlxSunVideoResize => "GLX_SUN_video_resize",
}

lazy_static! {
    static ref EXTENSIONS_BY_NAME: FnvHashMap<&'static str, Extension> =
        Extension::ALL.iter().map(|&extension| (extension.name(), extension)).collect();
}

impl Extension {
    /// Looks up a known extension by its exact, case-sensitive name.
    pub fn from_name(name: &str) -> Option<Extension> {
        EXTENSIONS_BY_NAME.get(name).copied()
    }

    /// Returns the number of the bit that stores this extension's flag.
    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl Display for Extension {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// A parsed extension string.
///
/// Membership is by whole token: `GL_EXT_texture` is not a member of
/// `"GL_EXT_texture3D GL_EXT_texture_object"`. Tokens keep the order in which the driver
/// first reported them.
#[derive(Clone, Debug, Default)]
pub struct ExtensionSet {
    names: Vec<String>,
    index: FnvHashSet<String>,
}

impl ExtensionSet {
    /// Creates an empty set.
    pub fn new() -> ExtensionSet {
        ExtensionSet::default()
    }

    /// Parses a whitespace-separated extension string, as returned by `glGetString`.
    pub fn parse(extension_string: &str) -> ExtensionSet {
        extension_string.split_whitespace().collect()
    }

    /// Adds a name, returning false if it was already present.
    pub fn insert(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.index.contains(name) {
            return false;
        }
        self.index.insert(name.to_owned());
        self.names.push(name.to_owned());
        true
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates over the names in the order they were first reported.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }

    /// Iterates over the names that belong to the known catalogue.
    pub fn known(&self) -> impl Iterator<Item = Extension> + '_ {
        self.iter().filter_map(Extension::from_name)
    }
}

impl<S: AsRef<str>> FromIterator<S> for ExtensionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> ExtensionSet {
        let mut set = ExtensionSet::new();
        set.extend(iter);
        set
    }
}

impl<S: AsRef<str>> Extend<S> for ExtensionSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        // Some `glGetStringi` shims return several names in one element.
        for element in iter {
            for name in element.as_ref().split_whitespace() {
                self.insert(name);
            }
        }
    }
}

/// Joins the names with single spaces, which is the form `glGetString` uses.
impl Display for ExtensionSet {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        for (index, name) in self.names.iter().enumerate() {
            if index > 0 {
                formatter.write_str(" ")?;
            }
            formatter.write_str(name)?;
        }
        Ok(())
    }
}
