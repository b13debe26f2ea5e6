use crate::parsers::song;

#[cfg(test)]
mod tests {
    use super::*;

    /// Markup shaped like a fully-populated song page.
    const FULL_PAGE: &str = r#"<html>
        <head>
            <title>Test Song - Test Album</title>
            <meta name="description" content="A general description">
            <meta property="og:description" content="An album description">
            <meta property="music:album" content="https://www.jiosaavn.com/album/test-album/abc">
            <meta property="twitter:image" content="https://images.example/cover.jpg">
            <meta property="twitter:title" content="Test Song">
            <meta property="music:musician" content="https://www.jiosaavn.com/artist/jane-doe-songs/xyz">
            <meta property="music:release_date" content="2021-01-15">
            <meta property="twitter:url" content="https://www.jiosaavn.com/song/test-song/def">
            <meta property="twitter:description" content="A song description">
        </head>
        <body>
            <audio><source src="https://cdn/x/y/12345.mp4"></audio>
            <a title="Song Lyrics" href="/lyrics/test-song">Lyrics</a>
        </body>
    </html>"#;

    #[test]
    fn test_full_page_extraction() {
        let record = song::parse(FULL_PAGE).unwrap();

        assert_eq!(record.album_title, "Test Song - Test Album");
        assert_eq!(record.description, "A general description");
        assert_eq!(record.album_description, "An album description");
        assert_eq!(record.album_url, "https://www.jiosaavn.com/album/test-album/abc");
        assert_eq!(record.album_image_url, "https://images.example/cover.jpg");

        let song_info = &record.song_info;
        assert_eq!(song_info.name, "Test Song - Test Album");
        assert_eq!(song_info.title, "Test Song");
        assert_eq!(song_info.musicians, vec!["Jane Doe".to_string()]);
        assert_eq!(song_info.release_date, "January 15, 2021");
        assert_eq!(song_info.song_url, "https://www.jiosaavn.com/song/test-song/def");
        assert_eq!(song_info.description, "A song description");
        assert_eq!(
            song_info.downloadable_url,
            "https://aac.saavncdn.com/y/12345.mp4"
        );
        assert_eq!(
            song_info.song_lyrics_url,
            "https://www.jiosaavn.com/lyrics/test-song"
        );
    }

    #[test]
    fn test_each_missing_tag_defaults_alone() {
        // Only a title and a release date: every other field must come
        // back empty without disturbing the ones that are present.
        let html = r#"<html>
            <head>
                <title>Sparse Page</title>
                <meta property="music:release_date" content="2023-05-04">
            </head>
            <body></body>
        </html>"#;

        let record = song::parse(html).unwrap();
        assert_eq!(record.album_title, "Sparse Page");
        assert_eq!(record.description, "");
        assert_eq!(record.album_url, "");
        assert_eq!(record.song_info.release_date, "May 04, 2023");
        assert!(record.song_info.musicians.is_empty());
        assert_eq!(record.song_info.downloadable_url, "");
        assert_eq!(record.song_info.song_lyrics_url, "");
    }

    #[test]
    fn test_absent_audio_element_does_not_abort_extraction() {
        let html = r#"<html>
            <head><title>No Audio Here</title></head>
            <body><p>text only</p></body>
        </html>"#;

        let record = song::parse(html).unwrap();
        assert_eq!(record.album_title, "No Audio Here");
        assert_eq!(record.song_info.downloadable_url, "");
    }

    #[test]
    fn test_audio_element_without_source_child() {
        let html = r#"<html>
            <head><title>Empty Audio</title></head>
            <body><audio></audio></body>
        </html>"#;

        let record = song::parse(html).unwrap();
        assert_eq!(record.song_info.downloadable_url, "");
    }

    #[test]
    fn test_malformed_release_date_does_not_abort_extraction() {
        let html = r#"<html>
            <head>
                <title>Bad Date</title>
                <meta property="music:release_date" content="not-a-date">
            </head>
            <body></body>
        </html>"#;

        let record = song::parse(html).unwrap();
        assert_eq!(record.album_title, "Bad Date");
        assert_eq!(record.song_info.release_date, "");
    }

    #[test]
    fn test_musician_order_is_preserved_without_dedup() {
        let html = r#"<html>
            <head>
                <title>Duet</title>
                <meta property="music:musician" content="https://site/artist/zed-alpha-songs/1">
                <meta property="music:musician" content="https://site/artist/ann-brown-songs/2">
                <meta property="music:musician" content="https://site/artist/zed-alpha-songs/3">
            </head>
            <body></body>
        </html>"#;

        let record = song::parse(html).unwrap();
        assert_eq!(
            record.song_info.musicians,
            vec![
                "Zed Alpha".to_string(),
                "Ann Brown".to_string(),
                "Zed Alpha".to_string(),
            ]
        );
    }

    #[test]
    fn test_markup_without_song_metadata_yields_none() {
        let html = "<html><head></head><body><p>nothing here</p></body></html>";
        assert!(song::parse(html).is_none());
    }

    #[test]
    fn test_artist_segment_normalization() {
        assert_eq!(song::artist_segment_to_name("some-artist-songs"), "Some Artist");
        assert_eq!(song::artist_segment_to_name("jane-doe-songs"), "Jane Doe");
        assert_eq!(song::artist_segment_to_name("prince-songs"), "Prince");
    }

    #[test]
    fn test_musician_name_needs_two_path_parts() {
        assert_eq!(song::musician_name("lonely-segment"), None);
        assert_eq!(
            song::musician_name("https://site/artist/jane-doe-songs/xyz"),
            Some("Jane Doe".to_string())
        );
    }

    #[test]
    fn test_release_date_reformat() {
        assert_eq!(
            song::format_release_date("2023-05-04"),
            Some("May 04, 2023".to_string())
        );
        assert_eq!(
            song::format_release_date("2021-01-15"),
            Some("January 15, 2021".to_string())
        );
        assert_eq!(song::format_release_date("not-a-date"), None);
        assert_eq!(song::format_release_date("2023-13-40"), None);
        assert_eq!(song::format_release_date(""), None);
    }
}
