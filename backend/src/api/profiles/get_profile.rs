use common::profile::{Profile, ProfileId};

use crate::weave_api_utils::weave_api_get;

pub async fn get_profile(profile_id: ProfileId, token: Option<String>) -> anyhow::Result<Profile> {
    let path = format!("/api/profiles/{}", profile_id.0);
    // the API answers `null` for unknown ids
    let profile = weave_api_get::<Option<Profile>>(&path, &[], token.as_deref()).await?;
    match profile {
        Some(profile) => Ok(profile),
        None => anyhow::bail!("Profile not found: {}", profile_id),
    }
}
