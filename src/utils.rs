use url::Url;

/// Derive the local filename for a downloadable audio URL.
///
/// The CDN path is `/{albumId}/{fileId}.mp4`; the file identifier's
/// stem names the local file, always with an `.mp4` extension. Returns
/// None when the URL has no file segment to work with.
pub fn download_filename(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let segments: Vec<&str> = parsed.path_segments()?.filter(|s| !s.is_empty()).collect();

    let file = segments.get(1)?;
    let stem = file.split('.').next().unwrap_or_default();
    if stem.is_empty() {
        return None;
    }

    Some(format!("{}.mp4", stem))
}
