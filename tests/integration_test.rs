//! Integration tests for the icon extraction workflow

use std::fs;
use std::path::Path;

use image::{GenericImageView, Rgba, RgbaImage};
use tempfile::tempdir;

use iconslicer::commands::{Command, ExtractCommand, ListCommand};
use iconslicer::utils::logger::Logger;
use iconslicer::{icon_table, ExtractConfig, ExtractError, IconExtractor};

const ICON_NAMES: [&str; 3] = ["e2e-icon.png", "integration-icon.png", "unit-test-icon.png"];

fn write_pyramid(path: &Path, width: u32, height: u32) {
    let buffer = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x * 7 % 256) as u8, (y * 3 % 256) as u8, 128, 255])
    });
    buffer.save(path).unwrap();
}

#[test]
fn test_complete_extraction_workflow() {
    let dir = tempdir().unwrap();
    let public = dir.path().join("public");
    fs::create_dir(&public).unwrap();
    write_pyramid(&public.join("pyramid.png"), 480, 480);

    let config = ExtractConfig::new()
        .set_input_path(public.join("pyramid.png"))
        .set_output_dir(&public);
    let logger = Logger::new(dir.path().join("integration_test.log")).unwrap();

    let outcomes = ExtractCommand::new(config, &logger).extract().unwrap();
    assert_eq!(outcomes.len(), 3);

    let expected: [(u32, u32); 3] = [(50, 50), (50, 50), (60, 60)];
    for (name, dims) in ICON_NAMES.iter().zip(expected) {
        let icon = image::open(public.join(name)).unwrap();
        assert_eq!(icon.dimensions(), dims, "{}", name);
    }

    let log = fs::read_to_string(dir.path().join("integration_test.log")).unwrap();
    assert!(log.contains("Image size: 480x480"));
    assert!(log.contains("Saved e2e-icon.png - E2E clipboard icon"));
    assert!(log.contains("Done! Icons extracted to"));
}

#[test]
fn test_extraction_is_idempotent() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("pyramid.png");
    write_pyramid(&source, 480, 480);

    let logger = Logger::new(dir.path().join("idempotent.log")).unwrap();
    let extractor = IconExtractor::new(&logger, dir.path());

    extractor.run(&source, icon_table().unwrap()).unwrap();
    let first: Vec<Vec<u8>> = ICON_NAMES.iter()
        .map(|name| fs::read(dir.path().join(name)).unwrap())
        .collect();

    extractor.run(&source, icon_table().unwrap()).unwrap();
    let second: Vec<Vec<u8>> = ICON_NAMES.iter()
        .map(|name| fs::read(dir.path().join(name)).unwrap())
        .collect();

    assert_eq!(first, second);
}

#[test]
fn test_missing_source_produces_no_output() {
    let dir = tempdir().unwrap();
    let out_dir = dir.path().join("public");
    fs::create_dir(&out_dir).unwrap();

    let config = ExtractConfig::new()
        .set_input_path(dir.path().join("public").join("pyramid.png"))
        .set_output_dir(&out_dir);
    let logger = Logger::new(dir.path().join("missing.log")).unwrap();

    let result = ExtractCommand::new(config, &logger).execute();
    assert!(matches!(result, Err(ExtractError::NotFound(_))));
    assert_eq!(fs::read_dir(&out_dir).unwrap().count(), 0);
}

#[test]
fn test_small_source_clips_last_icon() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("pyramid.png");
    write_pyramid(&source, 240, 260);

    let logger = Logger::new(dir.path().join("clip.log")).unwrap();
    let extractor = IconExtractor::new(&logger, dir.path());
    let outcomes = extractor.run(&source, icon_table().unwrap()).unwrap();

    assert!(!outcomes[1].clipped);
    assert!(outcomes[2].clipped);
    let icon = image::open(dir.path().join("unit-test-icon.png")).unwrap();
    assert_eq!(icon.dimensions(), (60, 30));
}

#[test]
fn test_unwritable_output_directory() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("pyramid.png");
    write_pyramid(&source, 480, 480);

    let logger = Logger::new(dir.path().join("write.log")).unwrap();
    let extractor = IconExtractor::new(&logger, dir.path().join("not-created"));
    let result = extractor.run(&source, icon_table().unwrap());

    match result {
        Err(ExtractError::Write { path, .. }) => assert!(path.ends_with("e2e-icon.png")),
        other => panic!("expected write error, got {:?}", other),
    }
}

#[test]
fn test_list_command_writes_no_icons() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("pyramid.png");
    write_pyramid(&source, 480, 480);

    let config = ExtractConfig::new()
        .set_input_path(&source)
        .set_output_dir(dir.path());
    let logger = Logger::new(dir.path().join("list.log")).unwrap();

    ListCommand::new(config, &logger).execute().unwrap();

    for name in ICON_NAMES {
        assert!(!dir.path().join(name).exists());
    }
    let log = fs::read_to_string(dir.path().join("list.log")).unwrap();
    assert!(log.contains("Planned output for 480x480 source:"));
    assert!(log.contains("unit-test-icon.png (180, 230, 240, 290) -> 60x60"));
}
