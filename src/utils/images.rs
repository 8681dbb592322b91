use image::codecs::jpeg::JpegEncoder;
use image::imageops::{self, FilterType};
use image::RgbImage;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Result of cropping a single image file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropOutcome {
    /// Rows `top..bottom` of the resized image were kept
    Cropped { top: u32, bottom: u32 },
    /// Resized height did not exceed the target, so no rows were cut
    TooShort {
        width: u32,
        height: u32,
        resized_height: u32,
    },
}

/// Compute the `[top, bottom)` row window of height `target` inside an image of
/// height `height`, centered as close as possible to `height * center_fraction`.
///
/// Callers guarantee `target < height`. The top edge is clamped before the
/// bottom edge, so results near `0.0` and `1.0` depend on that order.
pub fn crop_window(height: u32, center_fraction: f64, target: u32) -> (u32, u32) {
    let height = i64::from(height);
    let target = i64::from(target);

    let center = (height as f64 * center_fraction).round() as i64;
    let mut top = center - target / 2;
    let mut bottom = top + target;

    if top < 0 {
        top = 0;
        bottom = target;
    } else if bottom > height {
        bottom = height;
        top = height - target;
    }

    (top as u32, bottom as u32)
}

/// Height after scaling an image of `width` x `height` to `target_width`
pub fn resized_height(width: u32, height: u32, target_width: u32) -> u32 {
    let scale = f64::from(target_width) / f64::from(width);
    (f64::from(height) * scale).round().max(1.0) as u32
}

/// Write an RGB image as JPEG, replacing `path` only once encoding succeeded
pub fn save_jpeg(img: &RgbImage, path: &Path, quality: u8) -> io::Result<()> {
    let temp_path = path.with_extension("jpg.tmp");

    let result = (|| -> io::Result<()> {
        let mut writer = BufWriter::new(fs::File::create(&temp_path)?);
        JpegEncoder::new_with_quality(&mut writer, quality)
            .encode_image(img)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        writer.flush()?;
        Ok(())
    })();

    if let Err(e) = result {
        if let Err(cleanup_err) = fs::remove_file(&temp_path) {
            eprintln!("Failed to cleanup temp file: {}", cleanup_err);
        }
        return Err(e);
    }

    fs::rename(&temp_path, path)
}

/// Resize the image at `path` to `width`, then crop it to `target_height` rows
/// centered on `center_fraction`, overwriting the file.
///
/// Images whose resized height is not above `target_height` are saved resized
/// but uncropped. If such an image already had the target width the file is
/// left untouched.
pub fn crop_image(
    path: &Path,
    center_fraction: f64,
    width: u32,
    target_height: u32,
    quality: u8,
) -> io::Result<CropOutcome> {
    let img = image::open(path)
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Failed to decode {}: {}", path.display(), e),
            )
        })?
        .into_rgb8();

    let (original_width, original_height) = img.dimensions();

    let (img, resized) = if original_width != width {
        let new_height = resized_height(original_width, original_height, width);
        let img = imageops::resize(&img, width, new_height, FilterType::Lanczos3);
        (img, true)
    } else {
        (img, false)
    };

    let height = img.height();
    if height <= target_height {
        if resized {
            save_jpeg(&img, path, quality)?;
        }
        return Ok(CropOutcome::TooShort {
            width: original_width,
            height: original_height,
            resized_height: height,
        });
    }

    let (top, bottom) = crop_window(height, center_fraction, target_height);
    let cropped = imageops::crop_imm(&img, 0, top, width, bottom - top).to_image();
    save_jpeg(&cropped, path, quality)?;

    Ok(CropOutcome::Cropped { top, bottom })
}
