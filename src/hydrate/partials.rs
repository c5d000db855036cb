//! Partial Templates

use crate::Result;
use async_trait::async_trait;
use tracing::warn;

/// Async collaborator that fetches partial-template text
#[async_trait]
pub trait PartialFetcher: Send + Sync {
    /// Fetch the raw text of a partial by path
    async fn fetch_partial(&self, path: &str) -> Result<String>;
}

/// Outcome of a partial load at the hydration boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartialContent {
    /// Partial text ready to render
    Loaded(String),
    /// Fetch failed; render the degraded error state instead
    Failed,
}

/// Load a partial, degrading to the error-display state on failure
///
/// The failure is logged and swallowed; page initialization keeps
/// going no matter what the fetch does.
pub async fn load_partial(fetcher: &dyn PartialFetcher, path: &str) -> PartialContent {
    match fetcher.fetch_partial(path).await {
        Ok(text) => PartialContent::Loaded(text),
        Err(e) => {
            warn!("Failed to fetch partial {}: {}", path, e);
            PartialContent::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;

    struct FixedFetcher {
        fail: bool,
    }

    #[async_trait]
    impl PartialFetcher for FixedFetcher {
        async fn fetch_partial(&self, path: &str) -> Result<String> {
            if self.fail {
                bail!("partial {} unreachable", path);
            }
            Ok(format!("<nav>{}</nav>", path))
        }
    }

    #[tokio::test]
    async fn test_loaded_partial_passes_through() {
        let fetcher = FixedFetcher { fail: false };
        assert_eq!(
            load_partial(&fetcher, "nav.html").await,
            PartialContent::Loaded("<nav>nav.html</nav>".to_string())
        );
    }

    #[tokio::test]
    async fn test_fetch_failure_degrades_without_error() {
        let fetcher = FixedFetcher { fail: true };
        assert_eq!(
            load_partial(&fetcher, "nav.html").await,
            PartialContent::Failed
        );
    }
}
