//! Tag vocabulary used by the browse filters and profile forms.

use common::tag_vocabulary::TagVocabulary;

use crate::config::tag_vocabulary_path;

pub async fn load_tag_vocabulary() -> anyhow::Result<TagVocabulary> {
    match tag_vocabulary_path() {
        Some(path) => load_tag_vocabulary_from(&path).await,
        None => Ok(TagVocabulary::default()),
    }
}

pub async fn load_tag_vocabulary_from(path: &str) -> anyhow::Result<TagVocabulary> {
    let json = tokio::fs::read_to_string(path).await?;
    let vocabulary = TagVocabulary::from_json_overrides(&json)
        .map_err(|e| anyhow::anyhow!("Invalid tag vocabulary in {path}: {e}"))?;
    tracing::info!("loaded tag vocabulary overrides from {path}");
    Ok(vocabulary)
}
