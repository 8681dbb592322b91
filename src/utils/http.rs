use crate::fetch::{Download, ImageSource};
use serde::Deserialize;
use std::io;
use std::time::Duration;

const SUMMARY_API_URL: &str = "https://en.wikipedia.org/api/rest_v1/page/summary/";
const COMMONS_THUMB_URL: &str = "https://upload.wikimedia.org/wikipedia/commons/thumb/";

const SUMMARY_TIMEOUT: Duration = Duration::from_secs(15);
const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct ImageRef {
    source: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PageSummary {
    thumbnail: Option<ImageRef>,
    originalimage: Option<ImageRef>,
}

/// Get standard user agent string
pub fn get_user_agent() -> &'static str {
    "ParkAtBalboaPark/1.0 (https://parkatbalboapark.com; dev@parkatbalboapark.com)"
}

/// Summary endpoint URL for an article title
pub fn summary_url(title: &str) -> io::Result<reqwest::Url> {
    let mut url = reqwest::Url::parse(SUMMARY_API_URL)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    url.path_segments_mut()
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "Summary URL cannot be a base"))?
        .pop_if_empty()
        .push(&title.replace(' ', "_"));
    Ok(url)
}

/// Rewrite a Wikimedia Commons original into a thumbnail URL of the given width.
///
/// `https://upload.wikimedia.org/wikipedia/commons/a/ab/File.jpg` becomes
/// `https://upload.wikimedia.org/wikipedia/commons/thumb/a/ab/File.jpg/800px-File.jpg`.
pub fn commons_thumbnail_url(original: &str, width: u32) -> Option<String> {
    if !original.contains("upload.wikimedia.org") {
        return None;
    }

    let mut parts = original.split("/commons/");
    let (_, rest) = (parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let filename = rest.rsplit('/').next()?;
    Some(format!(
        "{}{}/{}px-{}",
        COMMONS_THUMB_URL, rest, width, filename
    ))
}

/// Pick the image URL out of a page summary
fn resolve_image_url(summary: PageSummary, width: u32) -> Option<String> {
    let original = summary.originalimage.and_then(|image| image.source);
    let thumbnail = summary.thumbnail.and_then(|image| image.source);

    original
        .as_deref()
        .and_then(|source| commons_thumbnail_url(source, width))
        .or(thumbnail)
        .or(original)
}

/// Wikipedia REST API client used by the fetch command
pub struct WikipediaClient {
    client: reqwest::Client,
    width: u32,
}

impl WikipediaClient {
    pub fn new(width: u32) -> io::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(get_user_agent())
            .build()
            .map_err(|e| {
                io::Error::new(
                    io::ErrorKind::Other,
                    format!("Failed to build HTTP client: {}", e),
                )
            })?;

        Ok(Self { client, width })
    }
}

impl ImageSource for WikipediaClient {
    async fn image_url(&self, title: &str) -> io::Result<Option<String>> {
        let response = self
            .client
            .get(summary_url(title)?)
            .timeout(SUMMARY_TIMEOUT)
            .send()
            .await
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Request error: {}", e)))?;

        let summary: PageSummary = response.json().await.map_err(|e| {
            io::Error::new(io::ErrorKind::Other, format!("Failed to parse JSON: {}", e))
        })?;

        Ok(resolve_image_url(summary, self.width))
    }

    async fn download(&self, url: &str) -> io::Result<Download> {
        let response = self
            .client
            .get(url)
            .timeout(DOWNLOAD_TIMEOUT)
            .send()
            .await
            .map_err(|e| {
                io::Error::new(io::ErrorKind::Other, format!("HTTP request failed: {}", e))
            })?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(|e| {
            io::Error::new(
                io::ErrorKind::Other,
                format!("Failed to read response bytes: {}", e),
            )
        })?;

        Ok(Download {
            status,
            bytes: bytes.to_vec(),
        })
    }
}
