mod common;

use common::{decode_rgb, ScratchDir, BLUE, ICON_SIZES};
use lib_png::{decode, emit, emit_image, icon_path, EmitError, Image};
use std::fs;

#[test]
fn test_emit_default_icons() {
    let dir = ScratchDir::new("defaults");

    for size in ICON_SIZES {
        let path = icon_path(&dir, size);
        emit(size, &path).unwrap();

        let bytes = fs::read(&path).unwrap();
        let decoded = decode_rgb(&bytes);
        assert_eq!(decoded.dimensions(), (size, size));
        assert!(decoded.pixels().all(|pixel| pixel.0 == BLUE));
    }

    assert!(dir.join("icon-192.png").is_file());
    assert!(dir.join("icon-512.png").is_file());
}

#[test]
fn test_emit_overwrites_existing_file() {
    let dir = ScratchDir::new("overwrite");
    let path = icon_path(&dir, 4);
    fs::write(&path, vec![0xFF; 4096]).unwrap();

    emit(4, &path).unwrap();

    let decoded = decode(&fs::read(&path).unwrap()).unwrap();
    assert_eq!((decoded.width, decoded.height), (4, 4));
    assert_eq!(decoded.uniform_color(), Some(BLUE));
}

#[test]
fn test_emit_missing_directory() {
    let scratch = ScratchDir::new("missing");
    let dir = scratch.join("does-not-exist");
    let path = icon_path(&dir, 192);

    let result = emit(192, &path);

    match result {
        Err(EmitError::Io { path: failed, source }) => {
            assert_eq!(failed, path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected I/O failure, got {:?}", other),
    }
    assert!(!path.exists());
}

#[test]
fn test_emit_custom_color() {
    let dir = ScratchDir::new("color");
    let path = dir.join("red.png");

    emit_image(&Image::new(8, [255, 0, 0]), &path).unwrap();

    let decoded = decode_rgb(&fs::read(&path).unwrap());
    assert!(decoded.pixels().all(|pixel| pixel.0 == [255, 0, 0]));
}
