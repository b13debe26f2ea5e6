use crate::media;
use crate::records::{PageRecord, SongInfo};
use chrono::NaiveDate;
use scraper::{Html, Selector};

/// Origin prefixed onto relative lyrics links found in page markup.
const SITE_ORIGIN: &str = "https://www.jiosaavn.com";

/// Parses rendered song page markup into a PageRecord.
///
/// Every field is extracted independently: a missing tag yields the
/// empty default for that field only and never aborts the rest of the
/// extraction. Returns None when the markup carries no recognizable
/// song metadata at all.
pub fn parse(html: &str) -> Option<PageRecord> {
    let doc = Html::parse_document(html);

    let title = page_title(&doc);
    let record = PageRecord {
        album_title: title.clone(),
        description: meta_by_name(&doc, "description"),
        album_description: meta_by_property(&doc, "og:description"),
        album_url: meta_by_property(&doc, "music:album"),
        album_image_url: meta_by_property(&doc, "twitter:image"),
        song_info: SongInfo {
            name: title,
            title: meta_by_property(&doc, "twitter:title"),
            musicians: musicians(&doc),
            release_date: meta_content(&doc, r#"meta[property="music:release_date"]"#)
                .and_then(|raw| format_release_date(&raw))
                .unwrap_or_default(),
            song_url: meta_by_property(&doc, "twitter:url"),
            description: meta_by_property(&doc, "twitter:description"),
            downloadable_url: audio_source(&doc)
                .map(|src| media::downloadable_audio_url(&src))
                .unwrap_or_default(),
            song_lyrics_url: lyrics_url(&doc).unwrap_or_default(),
        },
    };

    if record.is_empty() {
        ::log::debug!("markup carried no song metadata");
        return None;
    }

    Some(record)
}

/// Text of the page `<title>` element, if any.
fn page_title(doc: &Html) -> String {
    let selector = Selector::parse("title").unwrap();
    doc.select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// Content of the first meta tag keyed by `name`.
fn meta_by_name(doc: &Html, name: &str) -> String {
    meta_content(doc, &format!(r#"meta[name="{}"]"#, name)).unwrap_or_default()
}

/// Content of the first meta tag keyed by `property`.
fn meta_by_property(doc: &Html, property: &str) -> String {
    meta_content(doc, &format!(r#"meta[property="{}"]"#, property)).unwrap_or_default()
}

fn meta_content(doc: &Html, css: &str) -> Option<String> {
    let selector = Selector::parse(css).unwrap();
    doc.select(&selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|content| content.to_string())
}

/// Musician names in order of appearance in the markup.
fn musicians(doc: &Html) -> Vec<String> {
    let selector = Selector::parse(r#"meta[property="music:musician"]"#).unwrap();
    doc.select(&selector)
        .filter_map(|el| el.value().attr("content"))
        .filter_map(musician_name)
        .collect()
}

/// Musician meta content is an artist page URL whose second-to-last
/// path segment embeds the artist name, e.g. `.../jane-doe-songs/xxx`.
pub fn musician_name(content: &str) -> Option<String> {
    let parts: Vec<&str> = content.split('/').filter(|p| !p.is_empty()).collect();
    if parts.len() < 2 {
        return None;
    }
    Some(artist_segment_to_name(parts[parts.len() - 2]))
}

/// Normalizes a raw artist identifier segment into a display name:
/// `"some-artist-songs"` becomes `"Some Artist"`.
pub fn artist_segment_to_name(segment: &str) -> String {
    segment
        .replace("-songs", "")
        .split('-')
        .filter(|word| !word.is_empty())
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Reformats a `YYYY-MM-DD` date as `Month DD, YYYY`.
///
/// Anything that does not parse as a date yields None so a malformed
/// tag cannot abort the extraction.
pub fn format_release_date(raw: &str) -> Option<String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|date| date.format("%B %d, %Y").to_string())
}

/// The `src` of the page's `<audio><source>` element, if present.
fn audio_source(doc: &Html) -> Option<String> {
    let selector = Selector::parse("audio source").unwrap();
    doc.select(&selector)
        .next()
        .and_then(|el| el.value().attr("src"))
        .map(|src| src.to_string())
}

/// Absolute URL of the lyrics page, built from its relative link.
fn lyrics_url(doc: &Html) -> Option<String> {
    let selector = Selector::parse(r#"a[title="Song Lyrics"]"#).unwrap();
    doc.select(&selector)
        .next()
        .and_then(|el| el.value().attr("href"))
        .map(|href| format!("{}{}", SITE_ORIGIN, href))
}
