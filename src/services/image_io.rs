use std::io::Cursor;
use std::path::Path;

use image::RgbaImage;
use lineart::LineArt;

use crate::error::AppError;

/// Decode an image file (PNG or JPEG) into RGBA8.
pub fn decode_file(path: &Path) -> Result<RgbaImage, AppError> {
    let bytes = std::fs::read(path).map_err(|e| AppError::Decode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    decode_bytes(&bytes, path)
}

/// Decode in-memory image bytes. `path` is only used for error context.
pub fn decode_bytes(bytes: &[u8], path: &Path) -> Result<RgbaImage, AppError> {
    let image = image::load_from_memory(bytes).map_err(|e| AppError::Decode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let rgba = image.to_rgba8();
    tracing::debug!(
        path = %path.display(),
        width = rgba.width(),
        height = rgba.height(),
        "Decoded image"
    );
    Ok(rgba)
}

/// Encode line art as an optimized PNG.
///
/// Line art is opaque and neutral, so it is written as 8-bit grayscale when
/// every pixel allows it and as RGBA otherwise.
pub fn encode_png(art: &LineArt) -> Result<Vec<u8>, AppError> {
    let raw = art.as_raw();
    let is_opaque_gray = raw
        .chunks_exact(4)
        .all(|p| p[0] == p[1] && p[1] == p[2] && p[3] == 255);

    let (color_type, data) = if is_opaque_gray {
        let gray: Vec<u8> = raw.chunks_exact(4).map(|p| p[0]).collect();
        (png::ColorType::Grayscale, gray)
    } else {
        (png::ColorType::Rgba, raw.to_vec())
    };

    // Encode PNG (fast settings, oxipng re-compresses afterwards)
    let png_bytes = write_png_bytes(art.width(), art.height(), color_type, &data)?;

    let optimized = oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    )
    .unwrap_or(png_bytes);

    tracing::debug!(
        width = art.width(),
        height = art.height(),
        bytes = optimized.len(),
        grayscale = is_opaque_gray,
        "Encoded line art"
    );
    Ok(optimized)
}

/// Encode line art and write it to `path`.
pub fn write_png(art: &LineArt, path: &Path) -> Result<usize, AppError> {
    let bytes = encode_png(art)?;
    std::fs::write(path, &bytes)?;
    Ok(bytes.len())
}

fn write_png_bytes(
    width: u32,
    height: u32,
    color_type: png::ColorType,
    data: &[u8],
) -> Result<Vec<u8>, AppError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(color_type);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        encoder.set_filter(png::FilterType::NoFilter);
        let mut writer = encoder
            .write_header()
            .map_err(|e| AppError::Encode(e.to_string()))?;
        writer
            .write_image_data(data)
            .map_err(|e| AppError::Encode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}
