use crate::MediaDetailsError;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// A poster downloaded to a local temporary file. The file is deleted when the [Poster] is
/// dropped, so hold on to it until every connector is done with it.
#[derive(Debug)]
pub struct Poster {
    file: NamedTempFile,
}

impl Poster {
    pub(crate) async fn download(
        http: &reqwest::Client,
        url: &str,
    ) -> Result<Self, MediaDetailsError> {
        let response = http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(MediaDetailsError::Status {
                provider: "TMDB images",
                status: response.status(),
            });
        }
        let bytes = response.bytes().await?;

        let extension = Path::new(url)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("jpg");
        let mut file = tempfile::Builder::new()
            .prefix("jellyhook-poster-")
            .suffix(&format!(".{}", extension))
            .tempfile()?;
        file.write_all(&bytes)?;
        file.flush()?;

        Ok(Poster { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}
