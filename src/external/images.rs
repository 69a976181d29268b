use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{upstream_error, Error};

const USER_AGENT: &str = "Mozilla/5.0";

/// Result of fetching one place's image. Failures are values, not errors, so a
/// broken image only ever affects its own card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ImageOutcome {
    Loaded {
        #[serde(skip)]
        bytes: Vec<u8>,
        content_type: Option<String>,
    },
    Missing,
    Failed {
        reason: String,
    },
}

impl ImageOutcome {
    /// Warning shown in place of the image, if any.
    pub fn warning(&self) -> Option<String> {
        match self {
            Self::Loaded { .. } => None,
            Self::Missing => Some("Image not found".into()),
            Self::Failed { reason } => Some(format!("Image error: {}", reason)),
        }
    }
}

fn is_remote(reference: &str) -> bool {
    reference.starts_with("http")
}

#[tracing::instrument(skip(timeout))]
pub async fn fetch_image(reference: &str, timeout: Duration) -> ImageOutcome {
    let reference = reference.trim();

    if reference.is_empty() {
        return ImageOutcome::Missing;
    }

    let result = if is_remote(reference) {
        fetch_remote(reference, timeout).await
    } else {
        fetch_local(Path::new(reference)).await
    };

    match result {
        Ok(Some((bytes, content_type))) => ImageOutcome::Loaded {
            bytes,
            content_type,
        },
        Ok(None) => {
            tracing::warn!("image not found");
            ImageOutcome::Missing
        }
        Err(err) => {
            tracing::warn!(error = %err, "image fetch failed");
            ImageOutcome::Failed {
                reason: err.message,
            }
        }
    }
}

async fn fetch_remote(
    url: &str,
    timeout: Duration,
) -> Result<Option<(Vec<u8>, Option<String>)>, Error> {
    let res = reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()?
        .get(url)
        .send()
        .await?;

    let status = res.status();

    if !status.is_success() {
        return Err(upstream_error(status));
    }

    let content_type = res
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(String::from);

    let bytes = res.bytes().await?;

    Ok(Some((bytes.to_vec(), content_type)))
}

async fn fetch_local(path: &Path) -> Result<Option<(Vec<u8>, Option<String>)>, Error> {
    if !tokio::fs::try_exists(path).await? {
        return Ok(None);
    }

    let bytes = tokio::fs::read(path).await?;
    let content_type = content_type_for(path).map(String::from);

    Ok(Some((bytes, content_type)))
}

fn content_type_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();

    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}
