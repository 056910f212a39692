use serde::{Deserialize, Serialize};

use crate::profile::Profile;


/// One page of profiles plus the total number of matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSearchResponse {
    pub profiles: Vec<Profile>,
    pub profile_count: u64,
}

/// Raised when the remote search call fails for any reason.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unable to load profiles: {message}")]
pub struct SearchFetchFailed {
    pub message: String,
}

impl SearchFetchFailed {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
