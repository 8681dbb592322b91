//! Utility modules for destination images
//!
//! This module contains various utility functions organized by functionality:
//! - `files`: Output paths, existence checks and directory listing
//! - `images`: Resizing, crop geometry and JPEG encoding
//! - `http`: Wikipedia REST API client

pub mod files;
pub mod http;
pub mod images;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar shared by both batch commands
pub fn new_progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb
}
