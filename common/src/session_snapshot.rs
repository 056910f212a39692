//! Saved browse state used to restore the view after back navigation.

use serde::{Deserialize, Serialize};

use crate::search_session::SearchSession;
use crate::url_codec::{StateParseError, decode_url_safe, encode_url_safe};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub session: SearchSession,
    /// Scroll offset of the result list, in pixels.
    pub scroll_y: f64,
}

impl SessionSnapshot {
    pub fn to_url_string(&self) -> Result<String, StateParseError> {
        encode_url_safe(self)
    }

    pub fn from_url_string(s: &str) -> Result<Self, StateParseError> {
        decode_url_safe(s)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::profile::{Profile, ProfileId};
    use crate::search_result::ProfileSearchResponse;
    use crate::search_session::SearchIntent;

    #[test]
    fn url_string_round_trip_keeps_results_and_scroll() {
        let mut session = SearchSession::new();
        session.dispatch(SearchIntent::SetFreeText("Sleep medicine".to_string())).unwrap();
        session.dispatch(SearchIntent::CommitTerm).unwrap();
        let fetch = session
            .dispatch(SearchIntent::SetAffiliationFilters(BTreeSet::from(["Boston Children's Hospital".to_string()])))
            .unwrap()
            .unwrap();
        let response = ProfileSearchResponse {
            profiles: vec![Profile {
                id: ProfileId("9f1c".to_string()),
                name: "Grace".to_string(),
                image_url: Some("https://example.org/grace.png".to_string()),
                date_updated: Some("2019-03-01T10:00:00".to_string()),
                ..Default::default()
            }],
            profile_count: 7,
        };
        session.apply_fetch_result(&fetch, Ok(response));

        let snapshot = session.snapshot(1234.5);
        let encoded = snapshot.to_url_string().unwrap();
        let decoded = SessionSnapshot::from_url_string(&encoded).unwrap();
        assert_eq!(decoded, snapshot);

        let mut restored = SearchSession::new();
        assert_eq!(restored.restore_snapshot(decoded), 1234.5);
        assert_eq!(restored, session);
        assert!(restored.can_load_more());
    }

    #[test]
    fn snapshot_taken_mid_load_resumes_after_restore() {
        let mut session = SearchSession::new();
        let first = session.begin();
        let snapshot = session.snapshot(0.0);
        assert!(snapshot.session.loading());

        let decoded = SessionSnapshot::from_url_string(&snapshot.to_url_string().unwrap()).unwrap();
        let mut restored = SearchSession::new();
        restored.restore_snapshot(decoded);
        let fetch = restored.resume().unwrap();
        assert_eq!(fetch.request, first.request);

        let response = ProfileSearchResponse {
            profiles: vec![Profile { id: ProfileId("a1".to_string()), ..Default::default() }],
            profile_count: 3,
        };
        restored.apply_fetch_result(&fetch, Ok(response));
        assert!(!restored.loading());
        assert_eq!(restored.results().map(|r| r.len()), Some(1));
        assert!(restored.can_load_more());
    }
}
