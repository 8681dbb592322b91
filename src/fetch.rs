use crate::destinations::Destination;
use crate::utils::files::{has_complete_image, image_path, remove_if_exists, MIN_IMAGE_BYTES};
use indicatif::ProgressBar;
use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

/// Raw response of an image download
#[derive(Debug, Clone)]
pub struct Download {
    pub status: u16,
    pub bytes: Vec<u8>,
}

/// Where destination photographs come from
pub trait ImageSource {
    /// Resolve the image URL for an article, `None` if the article has no image
    async fn image_url(&self, title: &str) -> io::Result<Option<String>>;

    /// Fetch the bytes behind an image URL
    async fn download(&self, url: &str) -> io::Result<Download>;
}

/// What happened to one catalog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStatus {
    Downloaded { bytes: u64 },
    AlreadyPresent,
    NoMapping,
    NoImage,
    DownloadFailed,
}

impl FetchStatus {
    fn hit_network(&self) -> bool {
        !matches!(self, FetchStatus::AlreadyPresent | FetchStatus::NoMapping)
    }
}

/// Totals printed at the end of a fetch run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FetchSummary {
    pub downloaded: usize,
    pub skipped: usize,
    pub failed: Vec<String>,
}

impl FetchSummary {
    fn record(&mut self, slug: &str, status: &FetchStatus) {
        match status {
            FetchStatus::Downloaded { .. } => self.downloaded += 1,
            FetchStatus::AlreadyPresent => self.skipped += 1,
            _ => self.failed.push(slug.to_string()),
        }
    }

    pub fn print(&self) {
        println!(
            "\nDone! Downloaded: {}, Skipped: {}, Failed: {}",
            self.downloaded,
            self.skipped,
            self.failed.len()
        );
        if !self.failed.is_empty() {
            println!("Failed slugs: {}", self.failed.join(", "));
        }
    }
}

/// Fetch settings that are not part of the catalog
pub struct FetchOptions<'a> {
    pub output_dir: &'a Path,
    pub titles: &'a HashMap<&'a str, &'a str>,
    pub delay: Duration,
}

/// Write a download to `path`, keeping it only if it looks like a real image
fn save_download(download: &Download, path: &Path) -> io::Result<Option<u64>> {
    if download.status != 200 {
        remove_if_exists(path)?;
        return Ok(None);
    }

    if let Err(e) = fs::write(path, &download.bytes) {
        remove_if_exists(path)?;
        return Err(e);
    }

    let size = fs::metadata(path)?.len();
    if size > MIN_IMAGE_BYTES {
        Ok(Some(size))
    } else {
        remove_if_exists(path)?;
        Ok(None)
    }
}

/// Fetch the image of one destination
pub async fn fetch_destination<S: ImageSource>(
    source: &S,
    destination: &Destination,
    options: &FetchOptions<'_>,
    pb: &ProgressBar,
) -> FetchStatus {
    let slug = destination.slug.as_str();
    let output_path = image_path(options.output_dir, slug);

    if has_complete_image(&output_path) {
        return FetchStatus::AlreadyPresent;
    }

    let Some(title) = options.titles.get(slug) else {
        return FetchStatus::NoMapping;
    };

    pb.set_message(format!("{} ('{}')", destination.name, title));

    let image_url = match source.image_url(title).await {
        Ok(Some(url)) => url,
        Ok(None) => return FetchStatus::NoImage,
        Err(e) => {
            pb.suspend(|| eprintln!("  Error fetching wiki data for '{}': {}", title, e));
            return FetchStatus::NoImage;
        }
    };

    let saved = match source.download(&image_url).await {
        Ok(download) => save_download(&download, &output_path),
        Err(e) => Err(e),
    };

    match saved {
        Ok(Some(bytes)) => FetchStatus::Downloaded { bytes },
        Ok(None) => FetchStatus::DownloadFailed,
        Err(e) => {
            pb.suspend(|| eprintln!("  Download error for {}: {}", slug, e));
            if let Err(cleanup_err) = remove_if_exists(&output_path) {
                pb.suspend(|| eprintln!("  Failed to cleanup partial download: {}", cleanup_err));
            }
            FetchStatus::DownloadFailed
        }
    }
}

fn status_line(destination: &Destination, status: &FetchStatus, title: Option<&str>) -> String {
    let slug = &destination.slug;
    let title = title.unwrap_or_default();
    match status {
        FetchStatus::Downloaded { bytes } => format!("  OK {} ({}KB)", slug, bytes / 1024),
        FetchStatus::AlreadyPresent => format!("  SKIP {} (already exists)", slug),
        FetchStatus::NoMapping => format!("  MISS {} - no Wikipedia mapping", slug),
        FetchStatus::NoImage => format!("  NO IMAGE {} ('{}')", slug, title),
        FetchStatus::DownloadFailed => format!("  DOWNLOAD FAILED {} ('{}')", slug, title),
    }
}

/// Fetch images for every destination, one after another.
///
/// Individual failures are recorded in the summary and never stop the run.
/// One status line per destination is written to `out`.
pub async fn fetch_destination_images<S: ImageSource, W: Write>(
    source: &S,
    destinations: &[Destination],
    options: &FetchOptions<'_>,
    pb: &ProgressBar,
    out: &mut W,
) -> io::Result<FetchSummary> {
    let mut summary = FetchSummary::default();

    for destination in destinations {
        let status = fetch_destination(source, destination, options, pb).await;

        let line = status_line(
            destination,
            &status,
            options.titles.get(destination.slug.as_str()).copied(),
        );
        pb.suspend(|| writeln!(out, "{}", line))?;
        summary.record(&destination.slug, &status);
        pb.inc(1);

        if status.hit_network() && !options.delay.is_zero() {
            tokio::time::sleep(options.delay).await;
        }
    }

    pb.finish_and_clear();

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// In-memory image source keyed by article title
    #[derive(Default)]
    struct FakeSource {
        images: HashMap<String, Download>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeSource {
        fn with_image(mut self, title: &str, status: u16, size: usize) -> Self {
            self.images.insert(
                title.to_string(),
                Download {
                    status,
                    bytes: vec![0xFF; size],
                },
            );
            self
        }
    }

    impl ImageSource for FakeSource {
        async fn image_url(&self, title: &str) -> io::Result<Option<String>> {
            self.calls.borrow_mut().push(format!("summary:{}", title));
            Ok(self
                .images
                .contains_key(title)
                .then(|| format!("https://img.test/{}", title)))
        }

        async fn download(&self, url: &str) -> io::Result<Download> {
            self.calls.borrow_mut().push(format!("download:{}", url));
            let title = url.trim_start_matches("https://img.test/");
            self.images
                .get(title)
                .cloned()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "unknown url"))
        }
    }

    fn destination(slug: &str) -> Destination {
        Destination {
            slug: slug.to_string(),
            name: slug.replace('-', " "),
        }
    }

    fn titles() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("botanical-building", "Botanical Building"),
            ("starlight-bowl", "Starlight Bowl"),
            ("palm-canyon", "Balboa Park"),
        ])
    }

    fn options<'a>(dir: &'a Path, titles: &'a HashMap<&'a str, &'a str>) -> FetchOptions<'a> {
        FetchOptions {
            output_dir: dir,
            titles,
            delay: Duration::ZERO,
        }
    }

    #[tokio::test]
    async fn mixed_batch_reports_each_outcome() {
        let dir = tempfile::tempdir().unwrap();
        let titles = titles();
        let source = FakeSource::default()
            .with_image("Botanical Building", 200, 4096)
            .with_image("Starlight Bowl", 404, 4096);
        let destinations = [
            destination("craft-coffee"),
            destination("botanical-building"),
            destination("starlight-bowl"),
        ];

        let summary = fetch_destination_images(
            &source,
            &destinations,
            &options(dir.path(), &titles),
            &ProgressBar::hidden(),
            &mut io::sink(),
        )
        .await
        .unwrap();

        assert_eq!(summary.downloaded, 1);
        assert_eq!(summary.skipped, 0);
        assert_eq!(summary.failed, ["craft-coffee", "starlight-bowl"]);
        assert!(dir.path().join("botanical-building.jpg").exists());
        assert!(!dir.path().join("starlight-bowl.jpg").exists());
        assert!(!dir.path().join("craft-coffee.jpg").exists());
    }

    #[tokio::test]
    async fn existing_image_skips_network() {
        let dir = tempfile::tempdir().unwrap();
        let titles = titles();
        fs::write(dir.path().join("botanical-building.jpg"), vec![1u8; 2048]).unwrap();
        let source = FakeSource::default().with_image("Botanical Building", 200, 4096);

        let summary = fetch_destination_images(
            &source,
            &[destination("botanical-building")],
            &options(dir.path(), &titles),
            &ProgressBar::hidden(),
            &mut io::sink(),
        )
        .await
        .unwrap();

        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.downloaded, 0);
        assert!(source.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn undersized_existing_file_is_fetched_again() {
        let dir = tempfile::tempdir().unwrap();
        let titles = titles();
        let path = dir.path().join("botanical-building.jpg");
        fs::write(&path, b"truncated").unwrap();
        let source = FakeSource::default().with_image("Botanical Building", 200, 4096);

        let status = fetch_destination(
            &source,
            &destination("botanical-building"),
            &options(dir.path(), &titles),
            &ProgressBar::hidden(),
        )
        .await;

        assert_eq!(status, FetchStatus::Downloaded { bytes: 4096 });
        assert_eq!(fs::metadata(&path).unwrap().len(), 4096);
    }

    #[tokio::test]
    async fn tiny_download_is_deleted() {
        let dir = tempfile::tempdir().unwrap();
        let titles = titles();
        let source = FakeSource::default().with_image("Balboa Park", 200, 512);

        let status = fetch_destination(
            &source,
            &destination("palm-canyon"),
            &options(dir.path(), &titles),
            &ProgressBar::hidden(),
        )
        .await;

        assert_eq!(status, FetchStatus::DownloadFailed);
        assert!(!dir.path().join("palm-canyon.jpg").exists());
    }

    #[tokio::test]
    async fn article_without_image_fails_before_download() {
        let dir = tempfile::tempdir().unwrap();
        let titles = titles();
        let source = FakeSource::default();

        let status = fetch_destination(
            &source,
            &destination("starlight-bowl"),
            &options(dir.path(), &titles),
            &ProgressBar::hidden(),
        )
        .await;

        assert_eq!(status, FetchStatus::NoImage);
        assert_eq!(*source.calls.borrow(), ["summary:Starlight Bowl"]);
    }

    #[tokio::test]
    async fn rejected_status_removes_stale_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let titles = titles();
        let path = dir.path().join("palm-canyon.jpg");
        fs::write(&path, b"partial").unwrap();
        let source = FakeSource::default().with_image("Balboa Park", 404, 4096);

        let status = fetch_destination(
            &source,
            &destination("palm-canyon"),
            &options(dir.path(), &titles),
            &ProgressBar::hidden(),
        )
        .await;

        assert_eq!(status, FetchStatus::DownloadFailed);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn status_lines_are_written_with_hidden_bar() {
        let dir = tempfile::tempdir().unwrap();
        let titles = titles();
        fs::write(dir.path().join("palm-canyon.jpg"), vec![1u8; 2048]).unwrap();
        let source = FakeSource::default()
            .with_image("Botanical Building", 200, 4096)
            .with_image("Starlight Bowl", 404, 4096);
        let destinations = [
            destination("palm-canyon"),
            destination("craft-coffee"),
            destination("botanical-building"),
            destination("starlight-bowl"),
        ];

        let mut out = Vec::new();
        fetch_destination_images(
            &source,
            &destinations,
            &options(dir.path(), &titles),
            &ProgressBar::hidden(),
            &mut out,
        )
        .await
        .unwrap();

        let lines: Vec<String> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect();
        assert_eq!(
            lines,
            [
                "  SKIP palm-canyon (already exists)",
                "  MISS craft-coffee - no Wikipedia mapping",
                "  OK botanical-building (4KB)",
                "  DOWNLOAD FAILED starlight-bowl ('Starlight Bowl')",
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn delay_follows_only_network_entries() {
        let dir = tempfile::tempdir().unwrap();
        let titles = titles();
        fs::write(dir.path().join("palm-canyon.jpg"), vec![1u8; 2048]).unwrap();
        let source = FakeSource::default().with_image("Botanical Building", 200, 4096);
        let destinations = [
            destination("palm-canyon"),
            destination("craft-coffee"),
            destination("botanical-building"),
            destination("starlight-bowl"),
        ];
        let options = FetchOptions {
            delay: Duration::from_millis(300),
            ..options(dir.path(), &titles)
        };

        let started = tokio::time::Instant::now();
        let summary = fetch_destination_images(
            &source,
            &destinations,
            &options,
            &ProgressBar::hidden(),
            &mut io::sink(),
        )
        .await
        .unwrap();

        // SKIP and MISS don't wait; the download and the imageless article do
        assert_eq!(started.elapsed(), Duration::from_millis(600));
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.downloaded, 1);
        assert_eq!(summary.failed, ["craft-coffee", "starlight-bowl"]);
    }

    #[test]
    fn status_lines_name_the_slug() {
        let dest = destination("palm-canyon");
        let title = "Balboa Park";
        assert_eq!(
            status_line(&dest, &FetchStatus::Downloaded { bytes: 150_000 }, Some(title)),
            "  OK palm-canyon (146KB)"
        );
        assert_eq!(
            status_line(&dest, &FetchStatus::NoMapping, None),
            "  MISS palm-canyon - no Wikipedia mapping"
        );
        assert_eq!(
            status_line(&dest, &FetchStatus::DownloadFailed, Some(title)),
            "  DOWNLOAD FAILED palm-canyon ('Balboa Park')"
        );
    }
}
