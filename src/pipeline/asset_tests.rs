//! Tests for PipelineAsset and PipelineRegistry
//!
//! Validate asset configuration, instance creation, and registry
//! naming/lifecycle rules.

use super::*;

// ============================================================================
// PipelineAsset
// ============================================================================

#[test]
fn test_asset_accessors() {
    let asset = PipelineAsset::new("forward", "forward_pass");
    assert_eq!(asset.name(), "forward");
    assert_eq!(asset.pass_tag(), "forward_pass");
}

#[test]
fn test_create_pipeline_carries_pass_tag() {
    let asset = PipelineAsset::new("forward", "forward_pass");
    let pipeline = asset.create_pipeline();
    assert_eq!(pipeline.pass_tag(), "forward_pass");
}

#[test]
fn test_create_pipeline_allocates_fresh_instances() {
    let asset = PipelineAsset::new("forward", "forward_pass");
    let a = asset.create_pipeline();
    let b = asset.create_pipeline();
    // Independent instances from the same asset
    assert_eq!(a.pass_tag(), b.pass_tag());
}

// ============================================================================
// PipelineRegistry
// ============================================================================

#[test]
fn test_registry_new_is_empty() {
    let registry = PipelineRegistry::new();
    assert_eq!(registry.count(), 0);
}

#[test]
fn test_register_and_lookup() {
    let mut registry = PipelineRegistry::new();
    registry.register(PipelineAsset::new("forward", "forward_pass")).unwrap();

    assert_eq!(registry.count(), 1);
    assert!(registry.asset("forward").is_some());
    assert!(registry.asset("deferred").is_none());
}

#[test]
fn test_register_duplicate_name_fails() {
    let mut registry = PipelineRegistry::new();
    registry.register(PipelineAsset::new("forward", "forward_pass")).unwrap();

    let result = registry.register(PipelineAsset::new("forward", "other_pass"));
    assert!(matches!(
        result,
        Err(crate::nova::Error::InitializationFailed(_))
    ));
    assert_eq!(registry.count(), 1);
    // Original asset untouched
    assert_eq!(registry.asset("forward").unwrap().pass_tag(), "forward_pass");
}

#[test]
fn test_instantiate() {
    let mut registry = PipelineRegistry::new();
    registry.register(PipelineAsset::new("forward", "forward_pass")).unwrap();

    let pipeline = registry.instantiate("forward").unwrap();
    assert_eq!(pipeline.pass_tag(), "forward_pass");
}

#[test]
fn test_instantiate_unknown_fails() {
    let registry = PipelineRegistry::new();
    assert!(matches!(
        registry.instantiate("missing"),
        Err(crate::nova::Error::InitializationFailed(_))
    ));
}

#[test]
fn test_remove() {
    let mut registry = PipelineRegistry::new();
    registry.register(PipelineAsset::new("forward", "forward_pass")).unwrap();

    let removed = registry.remove("forward");
    assert!(removed.is_some());
    assert_eq!(registry.count(), 0);
    assert!(registry.remove("forward").is_none());
}

#[test]
fn test_names_and_clear() {
    let mut registry = PipelineRegistry::new();
    registry.register(PipelineAsset::new("forward", "forward_pass")).unwrap();
    registry.register(PipelineAsset::new("minimal", "depth_pass")).unwrap();

    let mut names = registry.names();
    names.sort_unstable();
    assert_eq!(names, vec!["forward", "minimal"]);

    registry.clear();
    assert_eq!(registry.count(), 0);
}
