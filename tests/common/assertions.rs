//! Assertion helpers for tests.

use std::path::Path;

use pretty_assertions::assert_eq;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Assert the file at `path` is a PNG and decode it.
pub fn assert_png_file(path: &Path) -> image::RgbaImage {
    let bytes = std::fs::read(path).unwrap_or_else(|e| panic!("{}: {e}", path.display()));
    assert!(
        bytes.starts_with(&PNG_SIGNATURE),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
    image::load_from_memory(&bytes)
        .expect("PNG should decode")
        .to_rgba8()
}

/// Assert every pixel is opaque and neutral gray, as line art must be.
pub fn assert_opaque_gray(image: &image::RgbaImage) {
    for (x, y, p) in image.enumerate_pixels() {
        assert!(
            p[0] == p[1] && p[1] == p[2] && p[3] == 255,
            "Pixel ({x}, {y}) is not opaque gray: {:?}",
            p.0
        );
    }
}

/// Assert a hex color string is `#rrggbb` lowercase.
pub fn assert_hex_format(hex: &str) {
    assert_eq!(hex.len(), 7, "Expected #rrggbb, got {hex:?}");
    assert!(hex.starts_with('#'), "Expected leading '#', got {hex:?}");
    assert!(
        hex[1..]
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)),
        "Expected lowercase hex digits, got {hex:?}"
    );
}
