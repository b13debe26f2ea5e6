use crate::error::DownloadError;
use crate::utils;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::io::AsyncWriteExt;

/// Streams a downloadable audio URL into `dir`.
///
/// The local filename comes from the file segment of the URL path; an
/// existing file of the same name is overwritten. The body is written
/// chunk by chunk as it arrives, never buffered whole. Returns the
/// path the file was written to.
pub async fn download_file(
    url: &str,
    dir: &Path,
    timeout_secs: u64,
) -> Result<PathBuf, DownloadError> {
    let filename =
        utils::download_filename(url).ok_or_else(|| DownloadError::BadUrl(url.to_string()))?;

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()?;

    let mut response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(DownloadError::Status {
            url: url.to_string(),
            status,
        });
    }

    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|source| DownloadError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

    let path = dir.join(filename);
    let mut file = tokio::fs::File::create(&path)
        .await
        .map_err(|source| DownloadError::Io {
            path: path.clone(),
            source,
        })?;

    while let Some(chunk) = response.chunk().await? {
        file.write_all(&chunk)
            .await
            .map_err(|source| DownloadError::Io {
                path: path.clone(),
                source,
            })?;
    }

    file.flush().await.map_err(|source| DownloadError::Io {
        path: path.clone(),
        source,
    })?;

    ::log::info!("downloaded {} to {}", url, path.display());
    Ok(path)
}
