//! Client API calls for profile endpoints.

use common::{
    profile::{Profile, ProfileId},
    search_query::ProfileSearchRequest,
    search_result::ProfileSearchResponse,
    tag_vocabulary::TagVocabulary,
};
use dioxus::prelude::*;




#[server]
pub async fn search_profiles(request: ProfileSearchRequest) -> Result<ProfileSearchResponse, ServerFnError> {
    let x = backend::api::profiles::search_profiles(request).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 502, details: None })
}

#[server]
pub async fn get_profile(profile_id: ProfileId, token: Option<String>) -> Result<Profile, ServerFnError> {
    let x = backend::api::profiles::get_profile(profile_id, token).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 502, details: None })
}

#[server]
pub async fn get_tag_vocabulary() -> Result<TagVocabulary, ServerFnError> {
    let x = backend::api::tag_vocabulary::load_tag_vocabulary().await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
