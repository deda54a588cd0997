//! Shader Tests - WGSL parsing and validation
//!
//! Every shader shipped with the renderer must parse and pass naga
//! validation, so a broken shader fails in CI instead of at pipeline
//! creation time on someone's GPU.

use naga::valid::{Capabilities, ValidationFlags, Validator};

fn validate_wgsl(name: &str, source: &str) {
    let module = naga::front::wgsl::parse_str(source)
        .unwrap_or_else(|e| panic!("{} failed to parse: {}", name, e));

    Validator::new(ValidationFlags::all(), Capabilities::default())
        .validate(&module)
        .unwrap_or_else(|e| panic!("{} failed validation: {:?}", name, e));
}

#[test]
fn test_block_shader_is_valid() {
    validate_wgsl("block.wgsl", include_str!("../../shaders/block.wgsl"));
}

#[test]
fn test_highlight_shader_is_valid() {
    validate_wgsl("highlight.wgsl", include_str!("../../shaders/highlight.wgsl"));
}

#[test]
fn test_crosshair_shader_is_valid() {
    validate_wgsl("crosshair.wgsl", include_str!("../../shaders/crosshair.wgsl"));
}

#[test]
fn test_shaders_declare_expected_entry_points() {
    for (name, source) in [
        ("block.wgsl", include_str!("../../shaders/block.wgsl")),
        ("highlight.wgsl", include_str!("../../shaders/highlight.wgsl")),
        ("crosshair.wgsl", include_str!("../../shaders/crosshair.wgsl")),
    ] {
        let module = naga::front::wgsl::parse_str(source).unwrap();
        let entry_points: Vec<&str> = module
            .entry_points
            .iter()
            .map(|ep| ep.name.as_str())
            .collect();
        assert!(
            entry_points.contains(&"vs_main") && entry_points.contains(&"fs_main"),
            "{} must expose vs_main and fs_main, found {:?}",
            name,
            entry_points
        );
    }
}
