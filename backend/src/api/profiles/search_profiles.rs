//! Profile search endpoint and response shaping.

use common::{
    profile::Profile,
    search_query::ProfileSearchRequest,
    search_result::ProfileSearchResponse,
};
use serde::Deserialize;

use crate::weave_api_utils::weave_api_get;

/// Older API versions answer with a bare list and no total.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawProfilesResponse {
    Paged {
        profiles: Vec<Profile>,
        #[serde(rename = "profileCount")]
        profile_count: u64,
    },
    Unpaged(Vec<Profile>),
}

impl From<RawProfilesResponse> for ProfileSearchResponse {
    fn from(raw: RawProfilesResponse) -> Self {
        match raw {
            RawProfilesResponse::Paged { profiles, profile_count } => ProfileSearchResponse { profiles, profile_count },
            RawProfilesResponse::Unpaged(profiles) => {
                let profile_count = profiles.len() as u64;
                ProfileSearchResponse { profiles, profile_count }
            }
        }
    }
}

pub async fn search_profiles(request: ProfileSearchRequest) -> anyhow::Result<ProfileSearchResponse> {
    let params = request.query_params();
    tracing::info!("searching profiles: query={:?} page={}", request.query, request.page);
    let raw = weave_api_get::<RawProfilesResponse>("/api/profiles", &params, request.token.as_deref()).await?;
    Ok(raw.into())
}
