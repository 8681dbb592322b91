use crate::destinations::crop_positions::center_for;
use crate::utils::files::{list_jpg_files, total_size};
use crate::utils::images::{crop_image, CropOutcome};
use indicatif::ProgressBar;
use std::collections::HashMap;
use std::io::{self, Write};
use std::path::Path;

/// Banner geometry and encoding for the crop command
#[derive(Debug, Clone, Copy)]
pub struct CropSettings {
    pub width: u32,
    pub height: u32,
    pub quality: u8,
}

impl CropSettings {
    /// Derive the target height from a width:height aspect ratio
    pub fn from_aspect_ratio(width: u32, aspect_ratio: f64, quality: u8) -> io::Result<Self> {
        if !(aspect_ratio.is_finite() && aspect_ratio > 0.0) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid aspect ratio: {}", aspect_ratio),
            ));
        }

        let height = (f64::from(width) / aspect_ratio).round() as u32;
        if width == 0 || height == 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Target size {}x{} is empty", width, height),
            ));
        }

        Ok(Self {
            width,
            height,
            quality: quality.clamp(1, 100),
        })
    }
}

/// Totals printed at the end of a crop run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CropSummary {
    pub cropped: usize,
    pub too_short: usize,
    pub total_bytes: u64,
}

impl CropSummary {
    pub fn print(&self, settings: &CropSettings) {
        println!(
            "\nDone! Cropped: {}, Too short: {} (target {}x{}px)",
            self.cropped, self.too_short, settings.width, settings.height
        );
        println!(
            "Total size: {:.1}MB",
            self.total_bytes as f64 / 1024.0 / 1024.0
        );
    }
}

fn status_line(slug: &str, center: f64, outcome: &CropOutcome) -> String {
    match outcome {
        CropOutcome::Cropped { top, bottom } => format!(
            "  CROP {} (center={:.0}%, rows {}..{})",
            slug,
            center * 100.0,
            top,
            bottom
        ),
        CropOutcome::TooShort {
            width,
            height,
            resized_height,
        } => format!(
            "  SKIP {} ({}x{} → {}px tall, too short to crop)",
            slug, width, height, resized_height
        ),
    }
}

/// Crop every `*.jpg` in `dir` in file-name order.
///
/// A file that cannot be decoded or written aborts the run. One status line per
/// file is written to `out`.
pub fn crop_directory<W: Write>(
    dir: &Path,
    positions: &HashMap<&str, f64>,
    settings: &CropSettings,
    pb: &ProgressBar,
    out: &mut W,
) -> io::Result<CropSummary> {
    let files = list_jpg_files(dir)?;
    pb.set_length(files.len() as u64);

    let mut summary = CropSummary::default();

    for path in &files {
        let slug = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let center = center_for(positions, &slug);

        pb.set_message(slug.clone());
        let outcome = crop_image(
            path,
            center,
            settings.width,
            settings.height,
            settings.quality,
        )?;

        match outcome {
            CropOutcome::Cropped { .. } => summary.cropped += 1,
            CropOutcome::TooShort { .. } => summary.too_short += 1,
        }
        let line = status_line(&slug, center, &outcome);
        pb.suspend(|| writeln!(out, "{}", line))?;
        pb.inc(1);
    }

    pb.finish_and_clear();
    summary.total_bytes = total_size(&list_jpg_files(dir)?);

    Ok(summary)
}
