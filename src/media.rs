use url::Url;

/// Content-delivery host serving the downloadable audio renditions.
const AUDIO_CDN_BASE: &str = "https://aac.saavncdn.com";

/// Rewrite a streaming source URL into the direct downloadable-file URL.
///
/// The second-to-last path segment is the album identifier and the last
/// segment's stem is the file identifier; both are re-addressed against
/// the CDN host. Empty, unparsable, or too-short inputs yield an empty
/// string rather than a partial URL.
pub fn downloadable_audio_url(source_url: &str) -> String {
    if source_url.is_empty() {
        return String::new();
    }

    let parsed = match Url::parse(source_url) {
        Ok(parsed) => parsed,
        Err(_) => {
            ::log::debug!("not a parseable audio source URL: {}", source_url);
            return String::new();
        }
    };

    let segments: Vec<&str> = parsed
        .path_segments()
        .map(|segments| segments.filter(|s| !s.is_empty()).collect())
        .unwrap_or_default();

    if segments.len() < 2 {
        ::log::debug!("audio source URL has too few path segments: {}", source_url);
        return String::new();
    }

    let album_id = segments[segments.len() - 2];
    let file_id = segments[segments.len() - 1]
        .split('.')
        .next()
        .unwrap_or_default();

    format!("{}/{}/{}.mp4", AUDIO_CDN_BASE, album_id, file_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrites_against_cdn_host() {
        let derived = downloadable_audio_url("https://site/path/albumId/fileId.mp4?x=1");
        assert_eq!(derived, "https://aac.saavncdn.com/albumId/fileId.mp4");
    }

    #[test]
    fn test_is_pure() {
        let url = "https://cdn/x/y/12345.mp4";
        assert_eq!(downloadable_audio_url(url), downloadable_audio_url(url));
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert_eq!(downloadable_audio_url(""), "");
    }

    #[test]
    fn test_too_few_segments_yields_empty_output() {
        assert_eq!(downloadable_audio_url("https://cdn/only-one"), "");
        assert_eq!(downloadable_audio_url("https://cdn/"), "");
    }

    #[test]
    fn test_unparsable_input_yields_empty_output() {
        assert_eq!(downloadable_audio_url("not a url"), "");
        assert_eq!(downloadable_audio_url("relative/path/file.mp4"), "");
    }

    #[test]
    fn test_extension_is_replaced_not_appended() {
        let derived = downloadable_audio_url("https://cdn/albumId/track.aac");
        assert_eq!(derived, "https://aac.saavncdn.com/albumId/track.mp4");
    }

    #[test]
    fn test_trailing_slash_is_ignored() {
        let derived = downloadable_audio_url("https://cdn/albumId/fileId.mp4/");
        assert_eq!(derived, "https://aac.saavncdn.com/albumId/fileId.mp4");
    }
}
