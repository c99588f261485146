//! Synthetic images and palettes written to temporary directories.

use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};
use tempfile::TempDir;

/// A small thread palette covering the colors the fixture images use.
pub const THREAD_PALETTE_JSON: &str = r##"{
    "1": {"name": "White", "hex": "#ffffff", "rgb": [255, 255, 255]},
    "199": {"name": "Black", "hex": "#000000", "rgb": [0, 0, 0]},
    "321": {"name": "Christmas Red", "hex": "#c72b3b"},
    "700": {"name": "Bright Green", "hex": "#07733f"},
    "797": {"name": "Royal Blue", "hex": "#13477d"},
    "971": {"name": "Pumpkin", "hex": "#f6972b"}
}"##;

pub mod colors {
    pub const RED: [u8; 4] = [0xc8, 0x28, 0x32, 0xff];
    pub const BLUE: [u8; 4] = [0x13, 0x47, 0x7d, 0xff];
    pub const WHITE: [u8; 4] = [0xff, 0xff, 0xff, 0xff];
    pub const BLACK: [u8; 4] = [0x00, 0x00, 0x00, 0xff];
}

/// Temporary workspace that keeps its files alive for the test's duration.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Save `image` as PNG under `name` and return its path.
    pub fn save_png(&self, name: &str, image: &RgbaImage) -> PathBuf {
        let path = self.path(name);
        image.save(&path).expect("Failed to write fixture PNG");
        path
    }

    /// Save `image` as JPEG (RGB, alpha dropped) under `name`.
    pub fn save_jpeg(&self, name: &str, image: &RgbaImage) -> PathBuf {
        let path = self.path(name);
        let rgb = image::DynamicImage::ImageRgba8(image.clone()).to_rgb8();
        rgb.save(&path).expect("Failed to write fixture JPEG");
        path
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, content).expect("Failed to write fixture file");
        path
    }

    pub fn palette(&self) -> PathBuf {
        self.write("threads.json", THREAD_PALETTE_JSON)
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }
}

/// A dark square on a white page, the simplest subject with clear edges.
pub fn square_on_paper(width: u32, height: u32) -> RgbaImage {
    let (x0, x1) = (width / 4, width * 3 / 4);
    let (y0, y1) = (height / 4, height * 3 / 4);
    RgbaImage::from_fn(width, height, |x, y| {
        if (x0..x1).contains(&x) && (y0..y1).contains(&y) {
            Rgba(colors::BLACK)
        } else {
            Rgba(colors::WHITE)
        }
    })
}

/// Left half red, right half blue, with `red_share` of the width red.
pub fn two_tone(width: u32, height: u32, red_share: f64) -> RgbaImage {
    let split = (f64::from(width) * red_share).round() as u32;
    RgbaImage::from_fn(width, height, |x, _| {
        if x < split {
            Rgba(colors::RED)
        } else {
            Rgba(colors::BLUE)
        }
    })
}

pub fn solid(width: u32, height: u32, color: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba(color))
}
