// context-info/src/tests.rs
//
//! Unit tests.

use crate::config::parse_switch;
use crate::query::{drain_errors, has_shading_language};
use crate::{Config, ContextInfo, ContextProfile, DriverStrings, EmulationLayers, Error};
use crate::{Extension, ExtensionFamily, ExtensionSet, GLApi, GLVersion};

use fnv::FnvHashSet;
use serial_test::serial;
use std::env;

fn strings(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

fn desktop_core() -> DriverStrings {
    DriverStrings {
        vendor: "NVIDIA Corporation".to_owned(),
        renderer: "NVIDIA GeForce RTX 3070/PCIe/SSE2".to_owned(),
        version: "4.6.0 NVIDIA 535.54.03".to_owned(),
        shading_language_version: "4.60 NVIDIA".to_owned(),
        extensions: strings(&[
            "GL_ARB_sampler_objects",
            "GL_ARB_texture_storage",
            "GL_EXT_direct_state_access",
            "GL_ARB_debug_output",
            "GL_NV_path_rendering",
            "GL_EXT_texture3D",
        ]),
        profile_mask: Some(0x1),
        window_system_version: Some(GLVersion::new(1, 4)),
        window_system_extensions: Some(
            "GLX_ARB_create_context GLX_EXT_swap_control WGL_ARB_pixel_format".to_owned(),
        ),
    }
}

fn legacy_desktop() -> DriverStrings {
    DriverStrings {
        vendor: "Mesa/X.org".to_owned(),
        renderer: "llvmpipe (LLVM 15.0.7, 256 bits)".to_owned(),
        version: "2.1 Mesa 10.1.3".to_owned(),
        shading_language_version: "1.20".to_owned(),
        extensions: strings(&["GL_ARB_multitexture", "GL_EXT_framebuffer_object"]),
        // Drivers may answer the query even below 3.2; it must be ignored.
        profile_mask: Some(0x1),
        ..DriverStrings::default()
    }
}

fn gles(version: &str, extensions: &[&str]) -> DriverStrings {
    DriverStrings {
        vendor: "ARM".to_owned(),
        renderer: "Mali-G78".to_owned(),
        version: version.to_owned(),
        shading_language_version: "OpenGL ES GLSL ES 3.20".to_owned(),
        extensions: strings(extensions),
        ..DriverStrings::default()
    }
}

fn detect(strings: &DriverStrings) -> ContextInfo {
    ContextInfo::detect(strings, &Config::default()).unwrap()
}

#[test]
fn test_new_descriptor_is_empty() {
    let info = ContextInfo::new();
    assert!(info.vendor.is_empty());
    assert!(info.regal_extensions.is_empty());
    assert!(info.gl_version.is_zero());
    assert!(info.gles_version.is_zero());
    assert!(info.glx_version.is_zero());
    assert!(info.profile.is_empty());
    assert_eq!(info.supported_extensions().count(), 0);
    assert!(Extension::ALL.iter().all(|&extension| !info.has(extension)));
    assert!(!info.get_extension("GL_ARB_sync"));
    assert!(!info.is_supported("GL_VERSION_1_0"));
    assert!(!info.is_supported("GL_VERSION_0_0"));
    assert!(!info.is_supported("GLX_VERSION_0_0"));
    assert_eq!(info.emulation(), EmulationLayers::empty());
}

#[test]
fn test_detect_desktop_core() {
    let info = detect(&desktop_core());
    assert_eq!(info.vendor, "NVIDIA Corporation");
    assert_eq!(info.version, "4.6.0 NVIDIA 535.54.03");
    assert_eq!(info.gl_version, GLVersion::new(4, 6));
    assert!(info.gles_version.is_zero());
    assert_eq!(info.glsl_version, GLVersion::new(4, 60));
    assert_eq!(info.profile, ContextProfile::CORE);
    assert!(info.is_core());
    assert!(!info.is_compat());
    assert!(!info.is_gles());

    assert!(info.has(Extension::GlArbSamplerObjects));
    assert!(info.has(Extension::GlNvPathRendering));
    assert!(info.has(Extension::GlExtTexture3d));
    assert!(!info.has(Extension::GlArbSync));
    assert_eq!(info.extensions,
               "GL_ARB_sampler_objects GL_ARB_texture_storage GL_EXT_direct_state_access \
                GL_ARB_debug_output GL_NV_path_rendering GL_EXT_texture3D");
}

#[test]
fn test_get_extension_matches_whole_names() {
    let info = detect(&desktop_core());
    assert!(info.get_extension("GL_EXT_texture3D"));
    assert!(!info.get_extension("GL_EXT_texture"));
    assert!(!info.get_extension("GL_EXT_texture3"));
    assert!(!info.get_extension("gl_ext_texture3d"));
    assert!(!info.get_extension(""));
    // Window-system strings are searched regardless of the platform.
    assert!(info.get_extension("GLX_EXT_swap_control"));
    assert!(info.get_extension("WGL_ARB_pixel_format"));
    // Shim-provided extensions aren't driver extensions.
    assert!(!info.get_extension("GL_REGAL_log"));
}

#[test]
fn test_is_supported_token_lists() {
    let info = detect(&desktop_core());
    assert!(info.is_supported("GL_VERSION_4_6"));
    assert!(info.is_supported("GL_VERSION_1_0 GL_VERSION_3_3"));
    assert!(info.is_supported("GL_VERSION_4_2  GL_ARB_sampler_objects\tGL_NV_path_rendering"));
    assert!(!info.is_supported("GL_VERSION_4_6 GL_ARB_sync"));
    assert!(!info.is_supported("GL_VERSION_5_0"));
    assert!(!info.is_supported("GL_VERSION_4"));
    assert!(!info.is_supported("GL_VERSION_x_y"));
    assert!(!info.is_supported("GL_ES_VERSION_2_0"));
    assert!(!info.is_supported("GL_UNKNOWN_extension"));
    assert!(!info.is_supported(""));
    assert!(!info.is_supported("   "));
}

#[test]
fn test_emulated_extensions_are_supported_but_not_native() {
    let info = detect(&desktop_core());
    let layers = info.emulation();
    assert!(layers.contains(EmulationLayers::MARKER));
    assert!(layers.contains(EmulationLayers::IFF));
    assert!(!layers.contains(EmulationLayers::DSA));
    assert!(!layers.contains(EmulationLayers::VAO));
    assert!(!layers.contains(EmulationLayers::SO));
    assert!(!layers.contains(EmulationLayers::TEXSTO));
    assert!(!layers.contains(EmulationLayers::BASEVERTEX));

    assert!(!info.has(Extension::GlExtDebugMarker));
    assert!(!info.get_extension("GL_EXT_debug_marker"));
    assert!(info.is_supported("GL_EXT_debug_marker GL_GREMEDY_string_marker"));
    assert!(info.is_supported("GL_GREMEDY_frame_terminator"));
}

#[test]
fn test_reported_strings_default_to_driver() {
    let info = detect(&desktop_core());
    assert_eq!(info.regal_vendor, info.vendor);
    assert_eq!(info.regal_renderer, info.renderer);
    assert_eq!(info.regal_version, info.version);

    let reported: Vec<&str> = info.regal_extensions.split(' ').collect();
    let mut sorted = reported.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(reported, sorted);
    for name in info.extensions.split(' ') {
        assert!(reported.contains(&name), "{} missing from the reported set", name);
    }
    assert!(reported.contains(&"GL_REGAL_extension_query"));
    assert!(reported.contains(&"GL_EXT_debug_marker"));
    assert!(info.has(Extension::GlRegalExtensionQuery));
    assert!(info.has(Extension::GlRegalLog));
    assert!(info.is_supported("GL_REGAL_enable GL_REGAL_error_string"));
}

#[test]
fn test_config_overrides_reported_strings() {
    let config = Config {
        vendor: Some("Regal".to_owned()),
        renderer: Some("Regal over NVIDIA".to_owned()),
        version: Some("2.1 Regal".to_owned()),
        extensions: Some("GL_REGAL_log GL_FOO_bar".to_owned()),
        ..Config::default()
    };
    let info = ContextInfo::detect(&desktop_core(), &config).unwrap();
    assert_eq!(info.vendor, "NVIDIA Corporation");
    assert_eq!(info.regal_vendor, "Regal");
    assert_eq!(info.regal_renderer, "Regal over NVIDIA");
    assert_eq!(info.regal_version, "2.1 Regal");
    assert_eq!(info.regal_extensions, "GL_FOO_bar GL_REGAL_log");
    assert!(info.has(Extension::GlRegalLog));
    assert!(!info.has(Extension::GlRegalExtensionQuery));
    assert!(info.is_supported("GL_FOO_bar"));
    // The override replaces the advertised set, not the driver's.
    assert!(info.is_supported("GL_NV_path_rendering"));
    assert!(!info.is_supported("GL_EXT_debug_marker"));
    // The driver version still drives version tokens.
    assert!(info.is_supported("GL_VERSION_4_6"));
}

#[test]
fn test_emulation_switches() {
    let config = Config { emulation: false, ..Config::default() };
    let info = ContextInfo::detect(&desktop_core(), &config).unwrap();
    assert_eq!(info.emulation(), EmulationLayers::empty());
    assert!(!info.is_supported("GL_EXT_debug_marker"));

    let config = Config {
        enabled: EmulationLayers::all() - EmulationLayers::MARKER,
        ..Config::default()
    };
    let info = ContextInfo::detect(&desktop_core(), &config).unwrap();
    assert_eq!(info.emulation(), EmulationLayers::IFF);
}

#[test]
fn test_legacy_desktop_is_compatibility() {
    let info = detect(&legacy_desktop());
    assert_eq!(info.gl_version, GLVersion::new(2, 1));
    assert_eq!(info.glsl_version, GLVersion::new(1, 20));
    assert_eq!(info.profile, ContextProfile::COMPATIBILITY);
    assert!(info.has(Extension::GlArbMultitexture));
    assert!(info.has(Extension::GlExtFramebufferObject));
    assert!(info.is_supported("GL_VERSION_2_1"));
    assert!(!info.is_supported("GL_VERSION_3_0"));
    assert_eq!(info.emulation(),
               EmulationLayers::DSA |
               EmulationLayers::MARKER |
               EmulationLayers::VAO |
               EmulationLayers::SO |
               EmulationLayers::TEXSTO |
               EmulationLayers::BASEVERTEX);
    assert!(info.is_supported("GL_ARB_vertex_array_object GL_ARB_texture_storage"));
    assert!(info.is_supported("GL_EXT_direct_state_access"));
}

#[test]
fn test_profile_mask() {
    let mut strings = desktop_core();
    strings.version = "3.2.0".to_owned();

    strings.profile_mask = Some(0x2);
    assert_eq!(detect(&strings).profile, ContextProfile::COMPATIBILITY);

    strings.profile_mask = Some(0x3);
    assert_eq!(detect(&strings).profile, ContextProfile::CORE | ContextProfile::COMPATIBILITY);

    strings.profile_mask = None;
    assert_eq!(detect(&strings).profile, ContextProfile::COMPATIBILITY);

    strings.profile_mask = Some(0);
    assert_eq!(detect(&strings).profile, ContextProfile::COMPATIBILITY);

    strings.profile_mask = Some(0x8);
    assert_eq!(detect(&strings).profile, ContextProfile::COMPATIBILITY);

    strings.profile_mask = Some(0x1);
    let info = detect(&strings);
    assert!(info.is_core());
    assert!(info.emulation().contains(EmulationLayers::IFF));
}

#[test]
fn test_detect_gles() {
    let info = detect(&gles("OpenGL ES 3.2 v1.r32p1", &["GL_EXT_debug_marker"]));
    assert!(info.is_gles());
    assert_eq!(info.profile, ContextProfile::ES);
    assert_eq!(info.gles_version, GLVersion::new(3, 2));
    assert!(info.gl_version.is_zero());
    assert_eq!(info.glsl_version, GLVersion::new(3, 20));
    assert!(info.is_supported("GL_ES_VERSION_2_0 GL_ES_VERSION_3_2"));
    assert!(!info.is_supported("GL_ES_VERSION_3_3"));
    assert!(!info.is_supported("GL_VERSION_1_0"));
    assert!(!info.gl_version_at_least(1, 0));

    let layers = info.emulation();
    assert!(layers.contains(EmulationLayers::IFF));
    assert!(!layers.contains(EmulationLayers::VAO));
    assert!(!layers.contains(EmulationLayers::MARKER));
}

#[test]
fn test_gles2_vertex_array_objects() {
    let info = detect(&gles("OpenGL ES 2.0 build 1.10", &["GL_OES_vertex_array_object"]));
    assert_eq!(info.gles_version, GLVersion::new(2, 0));
    assert!(!info.emulation().contains(EmulationLayers::VAO));

    let info = detect(&gles("OpenGL ES 2.0 build 1.10", &[]));
    assert!(info.emulation().contains(EmulationLayers::VAO));
}

#[test]
fn test_gles1_common_profile() {
    let info = detect(&gles("OpenGL ES-CM 1.1", &[]));
    assert!(info.is_gles());
    assert_eq!(info.gles_version, GLVersion::new(1, 1));
    assert!(!info.emulation().contains(EmulationLayers::IFF));
}

#[cfg(glx)]
#[test]
fn test_glx_window_system() {
    let info = detect(&desktop_core());
    assert!(info.has(Extension::GlxArbCreateContext));
    assert!(info.has(Extension::GlxExtSwapControl));
    assert!(!info.has(Extension::WglArbPixelFormat));
    assert_eq!(info.glx_version, GLVersion::new(1, 4));
    assert!(info.is_supported("GLX_VERSION_1_3 GLX_ARB_create_context"));
    assert!(!info.is_supported("GLX_VERSION_1_5"));
}

#[cfg(wgl)]
#[test]
fn test_wgl_window_system() {
    let info = detect(&desktop_core());
    assert!(info.has(Extension::WglArbPixelFormat));
    assert!(!info.has(Extension::GlxArbCreateContext));
    assert!(info.glx_version.is_zero());
    assert!(!info.is_supported("GLX_VERSION_1_0"));
}

#[cfg(not(any(glx, wgl)))]
#[test]
fn test_no_window_system_flags() {
    let info = detect(&desktop_core());
    assert!(!info.has(Extension::WglArbPixelFormat));
    assert!(!info.has(Extension::GlxArbCreateContext));
    assert!(info.glx_version.is_zero());
}

#[test]
fn test_detect_errors() {
    let mut strings = desktop_core();
    strings.version = String::new();
    match ContextInfo::detect(&strings, &Config::default()) {
        Err(Error::NoVersionString) => {}
        other => panic!("unexpected result: {:?}", other),
    }

    strings.version = "OpenGL ES unknown".to_owned();
    match ContextInfo::detect(&strings, &Config::default()) {
        Err(Error::MalformedVersionString(version)) => assert_eq!(version, "OpenGL ES unknown"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_init_starts_over() {
    let mut info = ContextInfo::new();
    info.init(&desktop_core(), &Config::default()).unwrap();
    assert!(info.has(Extension::GlNvPathRendering));

    info.init(&gles("OpenGL ES 3.0", &[]), &Config::default()).unwrap();
    assert!(!info.has(Extension::GlNvPathRendering));
    assert!(info.gl_version.is_zero());
    assert!(info.is_gles());

    let mut broken = desktop_core();
    broken.version = "not a version".to_owned();
    assert!(info.init(&broken, &Config::default()).is_err());
    assert!(info.version.is_empty());
    assert!(info.gles_version.is_zero());
    assert_eq!(info.supported_extensions().count(), 0);
}

#[test]
fn test_supported_extensions_lists_set_flags() {
    let info = detect(&legacy_desktop());
    let supported: Vec<Extension> = info.supported_extensions().collect();
    assert!(supported.contains(&Extension::GlArbMultitexture));
    assert!(supported.contains(&Extension::GlExtFramebufferObject));
    assert!(supported.contains(&Extension::GlRegalExtensionQuery));
    // Emulated extensions don't set native flags.
    assert!(!supported.contains(&Extension::GlExtDirectStateAccess));
    assert!(supported.iter().all(|&extension| info.has(extension)));
}

#[test]
fn test_extension_catalogue() {
    assert_eq!(Extension::from_name("GL_ARB_ES2_compatibility"),
               Some(Extension::GlArbEs2Compatibility));
    assert_eq!(Extension::from_name("gl_arb_es2_compatibility"), None);
    assert_eq!(Extension::from_name("GL_ARB_ES2"), None);
    assert_eq!(Extension::GlSgisTexture4d.name(), "GL_SGIS_texture4D");
    assert_eq!(Extension::Gl3dfxTbuffer.to_string(), "GL_3DFX_tbuffer");
    assert_eq!(Extension::GlArbVertexType2101010Rev.name(), "GL_ARB_vertex_type_2_10_10_10_rev");
    assert_eq!(Extension::WglNvCopyImage.family(), ExtensionFamily::Wgl);
    assert_eq!(Extension::GlxNvCopyImage.family(), ExtensionFamily::Glx);
    assert_eq!(Extension::GlNvCopyImage.family(), ExtensionFamily::Gl);

    let mut names = FnvHashSet::default();
    for &extension in Extension::ALL {
        assert!(names.insert(extension.name()), "duplicate name {}", extension);
        let prefix = match extension.family() {
            ExtensionFamily::Gl => "GL_",
            ExtensionFamily::Wgl => "WGL_",
            ExtensionFamily::Glx => "GLX_",
        };
        assert!(extension.name().starts_with(prefix));
    }
}

#[test]
fn test_extension_set() {
    let set = ExtensionSet::parse("  GL_B GL_A\nGL_B \t GL_C ");
    assert_eq!(set.len(), 3);
    assert_eq!(set.iter().collect::<Vec<_>>(), ["GL_B", "GL_A", "GL_C"]);
    assert_eq!(set.to_string(), "GL_B GL_A GL_C");
    assert!(set.contains("GL_A"));
    assert!(!set.contains("GL_"));
    assert!(ExtensionSet::parse("").is_empty());

    let listed: ExtensionSet = vec!["GL_B", "GL_A", "GL_B", "GL_C"].into_iter().collect();
    assert_eq!(listed.to_string(), set.to_string());

    let known = ExtensionSet::parse("GL_ARB_sync GL_VENDOR_private WGL_ARB_pbuffer");
    assert_eq!(known.known().collect::<Vec<_>>(),
               [Extension::GlArbSync, Extension::WglArbPbuffer]);
}

#[test]
fn test_parse_gl_version() {
    assert_eq!(GLVersion::parse_gl("4.6.0 NVIDIA 535.54.03"),
               Ok((GLApi::GL, GLVersion::new(4, 6))));
    assert_eq!(GLVersion::parse_gl("3.3 (Core Profile) Mesa 23.0.4"),
               Ok((GLApi::GL, GLVersion::new(3, 3))));
    assert_eq!(GLVersion::parse_gl("1.5"), Ok((GLApi::GL, GLVersion::new(1, 5))));
    assert_eq!(GLVersion::parse_gl("OpenGL ES 3.1 Mesa 20.0"),
               Ok((GLApi::GLES, GLVersion::new(3, 1))));
    assert_eq!(GLVersion::parse_gl("OpenGL ES-CL 1.0"),
               Ok((GLApi::GLES, GLVersion::new(1, 0))));
    assert_eq!(GLVersion::parse_gl("   "), Err(Error::NoVersionString));
    assert_eq!(GLVersion::parse_gl("4"), Err(Error::MalformedVersionString("4".to_owned())));
    assert_eq!(GLVersion::parse_gl("four.six"),
               Err(Error::MalformedVersionString("four.six".to_owned())));
}

#[test]
fn test_parse_glsl_version() {
    assert_eq!(GLVersion::parse_glsl("4.60 NVIDIA"), GLVersion::new(4, 60));
    assert_eq!(GLVersion::parse_glsl("1.10.59"), GLVersion::new(1, 10));
    assert_eq!(GLVersion::parse_glsl("OpenGL ES GLSL ES 1.00"), GLVersion::new(1, 0));
    assert_eq!(GLVersion::parse_glsl("OpenGL ES GLSL ES 3.00 build 1"), GLVersion::new(3, 0));
    assert!(GLVersion::parse_glsl("").is_zero());
    assert!(GLVersion::parse_glsl("unknown").is_zero());
}

#[test]
fn test_version_ordering() {
    assert!(GLVersion::new(3, 10) > GLVersion::new(3, 2));
    assert!(GLVersion::new(4, 0) > GLVersion::new(3, 99));
    assert_eq!(GLVersion::default(), GLVersion::new(0, 0));
}

#[test]
fn test_parse_switch() {
    assert_eq!(parse_switch("1"), Some(true));
    assert_eq!(parse_switch(" TRUE "), Some(true));
    assert_eq!(parse_switch("On"), Some(true));
    assert_eq!(parse_switch("no"), Some(false));
    assert_eq!(parse_switch("0"), Some(false));
    assert_eq!(parse_switch("2"), None);
    assert_eq!(parse_switch(""), None);
}

#[test]
fn test_config_from_lookup() {
    let config = Config::from_lookup(|name| match name {
        "REGAL_GL_VENDOR" => Some("Regal".to_owned()),
        "REGAL_EMU_DSA" => Some("0".to_owned()),
        "REGAL_EMU_VAO" => Some("maybe".to_owned()),
        _ => None,
    });
    assert_eq!(config.vendor.as_deref(), Some("Regal"));
    assert_eq!(config.renderer, None);
    assert!(config.emulation);
    assert_eq!(config.enabled, EmulationLayers::all() - EmulationLayers::DSA);
    assert_eq!(config.allowed_layers(), config.enabled);
}

const ENV_VARS: [&str; 12] = [
    "REGAL_GL_VENDOR",
    "REGAL_GL_RENDERER",
    "REGAL_GL_VERSION",
    "REGAL_GL_EXTENSIONS",
    "REGAL_EMULATION",
    "REGAL_EMU_DSA",
    "REGAL_EMU_MARKER",
    "REGAL_EMU_VAO",
    "REGAL_EMU_IFF",
    "REGAL_EMU_SO",
    "REGAL_EMU_TEXSTO",
    "REGAL_EMU_BASEVERTEX",
];

fn clear_env() {
    for name in ENV_VARS.iter() {
        env::remove_var(name);
    }
}

#[test]
#[serial]
fn test_config_from_env_defaults() {
    clear_env();
    assert_eq!(Config::from_env(), Config::default());
}

#[test]
#[serial]
fn test_config_from_env() {
    clear_env();
    env::set_var("REGAL_GL_VERSION", "3.0 Regal");
    env::set_var("REGAL_GL_EXTENSIONS", "GL_REGAL_log");
    env::set_var("REGAL_EMU_MARKER", "off");
    env::set_var("REGAL_EMU_IFF", "nonsense");
    let config = Config::from_env();
    clear_env();

    assert_eq!(config.version.as_deref(), Some("3.0 Regal"));
    assert_eq!(config.extensions.as_deref(), Some("GL_REGAL_log"));
    assert_eq!(config.vendor, None);
    assert_eq!(config.enabled, EmulationLayers::all() - EmulationLayers::MARKER);

    let info = ContextInfo::detect(&desktop_core(), &config).unwrap();
    assert_eq!(info.regal_version, "3.0 Regal");
    assert_eq!(info.emulation(), EmulationLayers::IFF);
}

#[test]
#[serial]
fn test_config_from_env_master_switch() {
    clear_env();
    env::set_var("REGAL_EMULATION", "0");
    let config = Config::from_env();
    clear_env();

    assert!(!config.emulation);
    assert_eq!(config.enabled, EmulationLayers::all());
    assert_eq!(config.allowed_layers(), EmulationLayers::empty());
}

#[test]
fn test_captured_strings_detect_identically() {
    let original = desktop_core();
    let captured = DriverStrings::capture(&original);
    assert_eq!(captured.version, original.version);
    assert_eq!(captured.extensions, original.extensions);
    assert_eq!(captured.profile_mask, Some(0x1));

    let from_original = detect(&original);
    let from_captured = detect(&captured);
    assert_eq!(from_captured.regal_extensions, from_original.regal_extensions);
    assert_eq!(from_captured.profile, from_original.profile);
    assert_eq!(from_captured.supported_extensions().collect::<Vec<_>>(),
               from_original.supported_extensions().collect::<Vec<_>>());
}

#[test]
fn test_gles3_native_features_are_not_emulated() {
    let info = detect(&gles("OpenGL ES 3.2 v1.r32p1", &[]));
    assert_eq!(info.emulation(),
               EmulationLayers::DSA | EmulationLayers::MARKER | EmulationLayers::IFF);
    assert!(!info.regal_extensions.contains("GL_ARB_sampler_objects"));
    assert!(!info.regal_extensions.contains("GL_ARB_texture_storage"));
    assert!(!info.regal_extensions.contains("GL_ARB_draw_elements_base_vertex"));

    // Base-vertex draws only became core in ES 3.2.
    let info = detect(&gles("OpenGL ES 3.0 build 1.10", &[]));
    let layers = info.emulation();
    assert!(!layers.contains(EmulationLayers::SO));
    assert!(!layers.contains(EmulationLayers::TEXSTO));
    assert!(layers.contains(EmulationLayers::BASEVERTEX));

    let info = detect(&gles("OpenGL ES 3.1", &["GL_EXT_draw_elements_base_vertex"]));
    assert!(!info.emulation().contains(EmulationLayers::BASEVERTEX));
}

#[test]
fn test_gles2_emulates_es3_features() {
    let info = detect(&gles("OpenGL ES 2.0 build 1.10", &["GL_EXT_texture_storage"]));
    let layers = info.emulation();
    assert!(layers.contains(EmulationLayers::SO));
    assert!(!layers.contains(EmulationLayers::TEXSTO));
    assert!(layers.contains(EmulationLayers::BASEVERTEX));
}

#[test]
fn test_drain_errors() {
    let mut pending = vec![glow::INVALID_OPERATION, glow::INVALID_ENUM];
    let drained = drain_errors(|| pending.pop().unwrap_or(glow::NO_ERROR));
    assert_eq!(drained, 2);
    assert!(pending.is_empty());

    assert_eq!(drain_errors(|| glow::NO_ERROR), 0);

    // A lost context reports errors forever; draining must still stop.
    let mut calls = 0;
    let drained = drain_errors(|| {
        calls += 1;
        glow::CONTEXT_LOST
    });
    assert_eq!(drained, calls);
    assert!(calls > 0 && calls < 1000);
}

#[test]
fn test_shading_language_requires_version_2() {
    assert!(!has_shading_language(1));
    assert!(has_shading_language(2));
    assert!(has_shading_language(4));
}

#[test]
fn test_missing_shading_language_version() {
    let mut driver = legacy_desktop();
    driver.version = "1.4 Mesa 5.0".to_owned();
    driver.shading_language_version = String::new();
    let info = detect(&driver);
    assert!(info.glsl_version.is_zero());
    assert_eq!(info.gl_version, GLVersion::new(1, 4));
    assert_eq!(info.regal_vendor, "Mesa/X.org");
}

#[test]
fn test_extension_list_elements_with_several_names() {
    let mut driver = legacy_desktop();
    driver.extensions = strings(&["GL_ARB_sync GL_ARB_copy_buffer", " GL_ARB_imaging "]);
    let info = detect(&driver);
    assert!(info.has(Extension::GlArbSync));
    assert!(info.has(Extension::GlArbCopyBuffer));
    assert!(info.has(Extension::GlArbImaging));
    assert!(info.get_extension("GL_ARB_copy_buffer"));
    assert!(!info.get_extension("GL_ARB_sync GL_ARB_copy_buffer"));
    assert_eq!(info.extensions, "GL_ARB_sync GL_ARB_copy_buffer GL_ARB_imaging");
}
