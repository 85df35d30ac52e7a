//! Error handling and edge case testing
//!
//! Covers fatal input errors, empty batches, decimal range handling and the
//! achromatic corner of mix-saturate.

use colormix::{
    blend_colors,
    config::{BlendConfig, BlendMode, DecimalPolicy},
    error::{ColorMixError, Result},
    processor::BlendProcessor,
    types::Rgba,
};
use tempfile::TempDir;

#[test]
fn test_missing_input_file_is_fatal() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config = BlendConfig::builder()
        .input(temp_dir.path().join("does-not-exist.txt"))
        .color("fff")
        .build()
        .expect("valid config");

    let error = BlendProcessor::new(config)
        .expect("valid processor")
        .run()
        .unwrap_err();

    assert!(matches!(error, ColorMixError::Io(_)));
    assert!(error.to_string().contains("does-not-exist.txt"));
}

#[test]
fn test_directory_as_input_is_an_io_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config = BlendConfig::builder()
        .input(temp_dir.path())
        .build()
        .expect("valid config");

    let error = BlendProcessor::new(config)
        .expect("valid processor")
        .run()
        .unwrap_err();
    assert!(matches!(error, ColorMixError::Io(_)));
}

#[test]
fn test_empty_file_without_arguments_has_no_colors() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("colors.txt");
    std::fs::write(&path, "\n\n").expect("write");

    let config = BlendConfig::builder().input(&path).build().expect("valid config");
    for mode in BlendMode::ALL {
        let config = BlendConfig { mode, ..config.clone() };
        let error = BlendProcessor::new(config)
            .expect("valid processor")
            .run()
            .unwrap_err();
        assert!(matches!(error, ColorMixError::EmptyBatch));
        assert!(error.to_string().to_lowercase().contains("no valid colors"));
    }
}

#[test]
fn test_all_invalid_tokens_is_empty_batch() {
    let result = blend_colors(["12345", "zzz", "1,2,3"], BlendMode::Mix);
    assert!(matches!(result, Err(ColorMixError::EmptyBatch)));
}

#[test]
fn test_out_of_range_decimal_rejected_by_default() -> Result<()> {
    let report = blend_colors(["999,0,0,255", "0,0,0,255"], BlendMode::Highest)?;

    assert_eq!(report.color, Rgba::opaque(0, 0, 0));
    assert_eq!(report.rejected.len(), 1);
    assert!(report.rejected[0].reason.contains("999"));
    Ok(())
}

#[test]
fn test_out_of_range_decimal_clamped_on_request() -> Result<()> {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("colors.txt");
    std::fs::write(&path, "999,0,0,255\n").expect("write");

    let config = BlendConfig::builder()
        .input(&path)
        .mode(BlendMode::Highest)
        .decimal_policy(DecimalPolicy::Clamp)
        .build()?;
    let report = BlendProcessor::new(config)?.run()?;

    assert_eq!(report.color, Rgba::opaque(255, 0, 0));
    assert!(report.rejected.is_empty());
    Ok(())
}

#[test]
fn test_mix_saturate_on_gray_is_unchanged() -> Result<()> {
    let report = blend_colors(["808080"], BlendMode::MixSaturate)?;
    assert_eq!(report.color, Rgba::opaque(128, 128, 128));

    // saturated colors earlier in the batch do not move a gray base
    let report = blend_colors(["ff0000", "00ff00", "40404080"], BlendMode::MixSaturate)?;
    assert_eq!(report.color, Rgba::new(64, 64, 64, 128));
    assert_eq!(report.saturation, 0.0);
    Ok(())
}

#[test]
fn test_single_sample_identity_for_simple_modes() -> Result<()> {
    for mode in [BlendMode::Mix, BlendMode::Lowest, BlendMode::Highest] {
        let report = blend_colors(["12345678"], mode)?;
        assert_eq!(report.color, Rgba::new(0x12, 0x34, 0x56, 0x78));
    }
    Ok(())
}

#[test]
fn test_whitespace_and_carriage_returns_are_trimmed() -> Result<()> {
    let report = blend_colors(["  abc\r", "\tabc  "], BlendMode::Mix)?;
    assert_eq!(report.color, Rgba::new(170, 187, 204, 255));
    assert!(report.rejected.is_empty());
    Ok(())
}
