use serde::{Deserialize, Serialize};

/// Structured result of scraping one song page.
///
/// Absence of data is represented uniformly: every field defaults to an
/// empty string (or empty list), never to a missing field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageRecord {
    /// Page title text
    #[serde(default)]
    pub album_title: String,

    /// General meta description
    #[serde(default)]
    pub description: String,

    /// Album-specific meta description
    #[serde(default)]
    pub album_description: String,

    /// Canonical album reference
    #[serde(default)]
    pub album_url: String,

    /// Cover art URL
    #[serde(default)]
    pub album_image_url: String,

    /// Song-level details, always present
    #[serde(default)]
    pub song_info: SongInfo,
}

/// Song-level details nested inside a [`PageRecord`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SongInfo {
    /// Display name, taken from the page title
    #[serde(default)]
    pub name: String,

    /// Display title from the page's share metadata
    #[serde(default)]
    pub title: String,

    /// Musician names in order of appearance in the markup (no dedup)
    #[serde(default)]
    pub musicians: Vec<String>,

    /// Release date reformatted as "Month DD, YYYY"
    #[serde(default)]
    pub release_date: String,

    /// Canonical song page reference
    #[serde(default)]
    pub song_url: String,

    /// Per-song meta description
    #[serde(default)]
    pub description: String,

    /// Direct downloadable-file URL derived from the streaming source
    #[serde(default)]
    pub downloadable_url: String,

    /// Absolute URL of the song lyrics page
    #[serde(default)]
    pub song_lyrics_url: String,
}

impl PageRecord {
    /// True when extraction produced no data at all.
    pub fn is_empty(&self) -> bool {
        self.album_title.is_empty()
            && self.description.is_empty()
            && self.album_description.is_empty()
            && self.album_url.is_empty()
            && self.album_image_url.is_empty()
            && self.song_info.is_empty()
    }
}

impl SongInfo {
    /// True when no song-level field carries data.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.title.is_empty()
            && self.musicians.is_empty()
            && self.release_date.is_empty()
            && self.song_url.is_empty()
            && self.description.is_empty()
            && self.downloadable_url.is_empty()
            && self.song_lyrics_url.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_is_empty() {
        let record = PageRecord::default();
        assert!(record.is_empty());
        assert!(record.song_info.is_empty());
    }

    #[test]
    fn test_record_with_any_field_is_not_empty() {
        let record = PageRecord {
            album_title: "Some Album".to_string(),
            ..PageRecord::default()
        };
        assert!(!record.is_empty());

        let record = PageRecord {
            song_info: SongInfo {
                musicians: vec!["Jane Doe".to_string()],
                ..SongInfo::default()
            },
            ..PageRecord::default()
        };
        assert!(!record.is_empty());
    }

    #[test]
    fn test_serialized_field_names() {
        let record = PageRecord::default();
        let json = serde_json::to_value(&record).unwrap();

        assert!(json.get("album_title").is_some());
        assert!(json.get("song_info").is_some());
        assert!(json["song_info"].get("downloadable_url").is_some());
        assert!(json["song_info"].get("song_lyrics_url").is_some());
        assert!(json["song_info"].get("release_date").is_some());
    }

    #[test]
    fn test_deserialize_tolerates_missing_fields() {
        let record: PageRecord = serde_json::from_str("{}").unwrap();
        assert!(record.is_empty());

        let record: PageRecord =
            serde_json::from_str(r#"{"album_title": "X", "song_info": {}}"#).unwrap();
        assert_eq!(record.album_title, "X");
        assert!(record.song_info.is_empty());
    }
}
