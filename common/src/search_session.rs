//! Browse view search state and its transitions.
//!
//! [`SearchSession`] folds user intents into the current facets and emits at
//! most one [`FetchRequest`] per intent. Every emitted request carries the
//! session generation that produced it. Responses for an older generation
//! are dropped by [`SearchSession::apply_fetch_result`], so a slow response
//! can never overwrite results for newer facets.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::profile::Profile;
use crate::search_const::MAX_FREE_TEXT_LEN;
use crate::search_query::{ProfileSearchRequest, SearchFacets, SortKey, dedup_terms};
use crate::search_result::{ProfileSearchResponse, SearchFetchFailed};
use crate::session_snapshot::SessionSnapshot;

#[derive(Debug, Clone, PartialEq)]
pub enum SearchIntent {
    SetFreeText(String),
    CommitTerm,
    RemoveTerms(Vec<String>),
    SetDegreeFilters(BTreeSet<String>),
    SetAffiliationFilters(BTreeSet<String>),
    SetSort { key: SortKey, ascending: bool },
    Submit,
    LoadMore,
    Reset,
    RestoreSnapshot(Box<SessionSnapshot>),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntentRejected {
    #[error("search text is {len} characters, the limit is {}", MAX_FREE_TEXT_LEN)]
    FreeTextTooLong { len: usize },
    #[error("there is no search text to add as a term")]
    EmptyTerm,
    #[error("term {0:?} is already part of the search")]
    DuplicateTerm(String),
    #[error("a search is already loading")]
    AlreadyLoading,
    #[error("no results have been loaded yet")]
    NotLoaded,
    #[error("the loaded results no longer match the search")]
    StaleResults,
    #[error("all {total_count} profiles are already loaded")]
    NoMorePages { total_count: u64 },
}

/// A search the caller must issue against the profile API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub generation: u64,
    pub request: ProfileSearchRequest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    Replaced,
    Appended,
    Failed,
    /// The session moved on since the request was issued; nothing changed.
    Stale,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchSession {
    facets: SearchFacets,
    page: u64,
    results: Option<Vec<Profile>>,
    total_count: u64,
    loading: bool,
    error: Option<String>,
    queried: bool,

    generation: u64,
    merged_generation: Option<u64>,
    active_query: String,
    /// Set when typing moved `page` back to 1 under results that span more pages.
    page_reset: bool,
    /// Request of the current generation that has not been answered yet.
    pending_request: Option<ProfileSearchRequest>,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchSession {
    pub fn new() -> Self {
        Self {
            facets: SearchFacets::default(),
            page: 1,
            results: None,
            total_count: 0,
            loading: false,
            error: None,
            queried: false,
            generation: 0,
            merged_generation: None,
            active_query: String::new(),
            page_reset: false,
            pending_request: None,
        }
    }

    pub fn facets(&self) -> &SearchFacets {
        &self.facets
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn results(&self) -> Option<&[Profile]> {
        self.results.as_deref()
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn queried(&self) -> bool {
        self.queried
    }

    pub fn has_more(&self) -> bool {
        match &self.results {
            Some(results) => (results.len() as u64) < self.total_count,
            None => false,
        }
    }

    pub fn can_load_more(&self) -> bool {
        self.check_load_more().is_ok()
    }

    /// First load of the default list when the browse view mounts fresh.
    pub fn begin(&mut self) -> FetchRequest {
        self.page = 1;
        self.issue_fetch(false)
    }

    pub fn dispatch(&mut self, intent: SearchIntent) -> Result<Option<FetchRequest>, IntentRejected> {
        let result = self.transition(intent);
        if let Err(rejected) = &result {
            tracing::debug!("search intent rejected: {rejected}");
        }
        result
    }

    fn transition(&mut self, intent: SearchIntent) -> Result<Option<FetchRequest>, IntentRejected> {
        match intent {
            SearchIntent::SetFreeText(text) => {
                let len = text.chars().count();
                if len > MAX_FREE_TEXT_LEN {
                    return Err(IntentRejected::FreeTextTooLong { len });
                }
                self.facets.free_text = text;
                self.page = 1;
                self.page_reset = true;
                Ok(None)
            }
            SearchIntent::CommitTerm => {
                let term = self.facets.free_text.trim().to_string();
                if term.is_empty() {
                    return Err(IntentRejected::EmptyTerm);
                }
                if self.facets.contains_term(&term) {
                    return Err(IntentRejected::DuplicateTerm(term));
                }
                self.facets.terms.push(term);
                self.facets.free_text.clear();
                Ok(Some(self.refetch_first_page(false)))
            }
            SearchIntent::RemoveTerms(terms) => {
                self.facets.terms = dedup_terms(terms.into_iter().map(|t| t.trim().to_string()).collect());
                self.queried = true;
                Ok(Some(self.refetch_first_page(false)))
            }
            SearchIntent::SetDegreeFilters(degrees) => {
                self.facets.degree_filters = degrees;
                self.queried = true;
                Ok(Some(self.refetch_first_page(false)))
            }
            SearchIntent::SetAffiliationFilters(affiliations) => {
                self.facets.affiliation_filters = affiliations;
                self.queried = true;
                Ok(Some(self.refetch_first_page(false)))
            }
            SearchIntent::SetSort { key, ascending } => {
                self.facets.sort_key = key;
                self.facets.sort_ascending = ascending;
                Ok(Some(self.refetch_first_page(false)))
            }
            SearchIntent::Submit => {
                self.queried = true;
                Ok(Some(self.refetch_first_page(true)))
            }
            SearchIntent::LoadMore => {
                self.check_load_more()?;
                self.page += 1;
                let query = self.active_query.clone();
                Ok(Some(self.issue_fetch_with_query(query)))
            }
            SearchIntent::Reset => {
                self.facets = SearchFacets::default();
                self.queried = false;
                Ok(Some(self.refetch_first_page(false)))
            }
            SearchIntent::RestoreSnapshot(snapshot) => {
                self.restore_snapshot(*snapshot);
                Ok(None)
            }
        }
    }

    fn check_load_more(&self) -> Result<(), IntentRejected> {
        if self.loading {
            return Err(IntentRejected::AlreadyLoading);
        }
        let Some(results) = &self.results else {
            return Err(IntentRejected::NotLoaded);
        };
        if self.page_reset || self.merged_generation != Some(self.generation) {
            return Err(IntentRejected::StaleResults);
        }
        if results.len() as u64 >= self.total_count {
            return Err(IntentRejected::NoMorePages { total_count: self.total_count });
        }
        Ok(())
    }

    fn refetch_first_page(&mut self, include_free_text: bool) -> FetchRequest {
        self.page = 1;
        self.issue_fetch(include_free_text)
    }

    fn issue_fetch(&mut self, include_free_text: bool) -> FetchRequest {
        let query = self.facets.effective_query(include_free_text);
        self.issue_fetch_with_query(query)
    }

    fn issue_fetch_with_query(&mut self, query: String) -> FetchRequest {
        let request = ProfileSearchRequest {
            token: None,
            query,
            page: self.page,
            degrees: self.facets.degree_filters.clone(),
            affiliations: self.facets.affiliation_filters.clone(),
            sorting: self.facets.sort_key,
            sort_ascending: self.facets.sort_ascending,
        };
        self.issue_request(request)
    }

    fn issue_request(&mut self, request: ProfileSearchRequest) -> FetchRequest {
        self.generation += 1;
        self.loading = true;
        self.pending_request = Some(request.clone());
        FetchRequest { generation: self.generation, request }
    }

    /// Re-issues the unanswered request of a session restored while loading.
    ///
    /// The response to the original request can no longer reach this session,
    /// so the same page is requested again under a new generation.
    pub fn resume(&mut self) -> Option<FetchRequest> {
        if !self.loading {
            return None;
        }
        let Some(request) = self.pending_request.clone() else {
            tracing::warn!("session was loading without a pending request, clearing the flag");
            self.loading = false;
            return None;
        };
        tracing::debug!("resuming search for page {}", request.page);
        self.page = request.page;
        Some(self.issue_request(request))
    }

    /// Merges the outcome of `fetch` into the session.
    ///
    /// Page 1 replaces the results, later pages append to them. A failed
    /// later page rolls `page` back so the next load retries the same page.
    pub fn apply_fetch_result(&mut self, fetch: &FetchRequest, outcome: Result<ProfileSearchResponse, SearchFetchFailed>) -> MergeOutcome {
        if fetch.generation != self.generation {
            tracing::debug!(
                "dropping stale search response for generation {} (current {})",
                fetch.generation, self.generation
            );
            return MergeOutcome::Stale;
        }
        self.loading = false;
        self.pending_request = None;
        let page = fetch.request.page;

        let response = match outcome {
            Ok(response) => response,
            Err(failed) => {
                tracing::warn!("profile search for page {page} failed: {failed}");
                self.error = Some(failed.message);
                if page > 1 {
                    self.page = page - 1;
                    self.page_reset = false;
                    self.merged_generation = Some(self.generation);
                }
                return MergeOutcome::Failed;
            }
        };

        self.error = None;
        self.total_count = response.profile_count;
        self.merged_generation = Some(self.generation);
        self.active_query = fetch.request.query.clone();
        self.page = page;
        self.page_reset = false;
        if page > 1 {
            if let Some(results) = self.results.as_mut() {
                results.extend(response.profiles);
                return MergeOutcome::Appended;
            }
        }
        self.results = Some(response.profiles);
        MergeOutcome::Replaced
    }

    pub fn snapshot(&self, scroll_y: f64) -> SessionSnapshot {
        SessionSnapshot { session: self.clone(), scroll_y }
    }

    /// Replaces the whole session with `snapshot` and returns its scroll offset.
    pub fn restore_snapshot(&mut self, snapshot: SessionSnapshot) -> f64 {
        *self = snapshot.session;
        snapshot.scroll_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ProfileId;

    fn profile(id: &str) -> Profile {
        Profile { id: ProfileId(id.to_string()), name: format!("Profile {id}"), ..Default::default() }
    }

    fn page_of(ids: &[&str], count: u64) -> Result<ProfileSearchResponse, SearchFetchFailed> {
        Ok(ProfileSearchResponse { profiles: ids.iter().map(|id| profile(id)).collect(), profile_count: count })
    }

    fn ids(session: &SearchSession) -> Vec<String> {
        session.results().unwrap_or_default().iter().map(|p| p.id.0.clone()).collect()
    }

    /// Session holding `loaded` profiles out of `count`, all from page 1.
    fn loaded_session(loaded: &[&str], count: u64) -> SearchSession {
        let mut session = SearchSession::new();
        let fetch = session.begin();
        assert_eq!(session.apply_fetch_result(&fetch, page_of(loaded, count)), MergeOutcome::Replaced);
        session
    }

    #[test]
    fn basic_search_issues_query_with_free_text() {
        let mut session = SearchSession::new();
        assert_eq!(session.page(), 1);
        assert!(session.results().is_none());

        assert_eq!(session.dispatch(SearchIntent::SetFreeText("cardiology".to_string())), Ok(None));
        let fetch = session.dispatch(SearchIntent::Submit).unwrap().unwrap();
        assert_eq!(fetch.request.query, "cardiology");
        assert_eq!(fetch.request.page, 1);
        assert!(session.loading());
        assert!(session.queried());

        session.apply_fetch_result(&fetch, page_of(&["A", "B"], 2));
        assert_eq!(ids(&session), vec!["A", "B"]);
        assert_eq!(session.total_count(), 2);
        assert!(!session.loading());
        assert!(!session.has_more());
    }

    #[test]
    fn pagination_appends_next_page() {
        let mut session = loaded_session(&["A", "B"], 5);
        let fetch = session.dispatch(SearchIntent::LoadMore).unwrap().unwrap();
        assert_eq!(fetch.request.page, 2);
        assert_eq!(session.page(), 2);

        assert_eq!(session.apply_fetch_result(&fetch, page_of(&["C", "D"], 5)), MergeOutcome::Appended);
        assert_eq!(ids(&session), vec!["A", "B", "C", "D"]);
        assert!(session.can_load_more());
    }

    #[test]
    fn filter_change_replaces_instead_of_appending() {
        let mut session = loaded_session(&["A", "B"], 5);
        let more = session.dispatch(SearchIntent::LoadMore).unwrap().unwrap();
        session.apply_fetch_result(&more, page_of(&["C", "D"], 5));
        assert_eq!(session.page(), 2);

        let fetch = session
            .dispatch(SearchIntent::SetDegreeFilters(BTreeSet::from(["MD".to_string()])))
            .unwrap()
            .unwrap();
        assert_eq!(session.page(), 1);
        assert_eq!(fetch.request.page, 1);
        assert_eq!(fetch.request.degrees, BTreeSet::from(["MD".to_string()]));

        assert_eq!(session.apply_fetch_result(&fetch, page_of(&["E"], 1)), MergeOutcome::Replaced);
        assert_eq!(ids(&session), vec!["E"]);
        assert_eq!(session.total_count(), 1);
    }

    #[test]
    fn failed_fetch_keeps_previous_results() {
        let mut session = loaded_session(&["A", "B"], 2);
        let fetch = session.dispatch(SearchIntent::Submit).unwrap().unwrap();
        let outcome = session.apply_fetch_result(&fetch, Err(SearchFetchFailed::new("connection reset")));
        assert_eq!(outcome, MergeOutcome::Failed);
        assert_eq!(ids(&session), vec!["A", "B"]);
        assert_eq!(session.error(), Some("connection reset"));
        assert!(!session.loading());
    }

    #[test]
    fn next_success_clears_error() {
        let mut session = loaded_session(&["A"], 1);
        let failing = session.dispatch(SearchIntent::Submit).unwrap().unwrap();
        session.apply_fetch_result(&failing, Err(SearchFetchFailed::new("boom")));
        let retry = session.dispatch(SearchIntent::Submit).unwrap().unwrap();
        session.apply_fetch_result(&retry, page_of(&["B"], 1));
        assert_eq!(session.error(), None);
        assert_eq!(ids(&session), vec!["B"]);
    }

    #[test]
    fn failed_load_more_rolls_page_back_for_retry() {
        let mut session = loaded_session(&["A", "B"], 6);
        let fetch = session.dispatch(SearchIntent::LoadMore).unwrap().unwrap();
        assert_eq!(session.page(), 2);
        session.apply_fetch_result(&fetch, Err(SearchFetchFailed::new("timeout")));
        assert_eq!(session.page(), 1);
        assert_eq!(ids(&session), vec!["A", "B"]);

        let retry = session.dispatch(SearchIntent::LoadMore).unwrap().unwrap();
        assert_eq!(retry.request.page, 2);
    }

    #[test]
    fn failed_first_page_blocks_load_more_on_stale_results() {
        let mut session = loaded_session(&["A", "B"], 6);
        let fetch = session.dispatch(SearchIntent::SetSort { key: SortKey::Name, ascending: true }).unwrap().unwrap();
        session.apply_fetch_result(&fetch, Err(SearchFetchFailed::new("500")));
        assert_eq!(session.dispatch(SearchIntent::LoadMore), Err(IntentRejected::StaleResults));
    }

    #[test]
    fn committing_same_term_twice_is_rejected() {
        let mut session = SearchSession::new();
        session.dispatch(SearchIntent::SetFreeText("Surgery".to_string())).unwrap();
        let fetch = session.dispatch(SearchIntent::CommitTerm).unwrap().unwrap();
        assert_eq!(fetch.request.query, "surgery");
        assert_eq!(session.facets().free_text, "");

        session.dispatch(SearchIntent::SetFreeText("sURGERY".to_string())).unwrap();
        assert_eq!(
            session.dispatch(SearchIntent::CommitTerm),
            Err(IntentRejected::DuplicateTerm("sURGERY".to_string()))
        );
        assert_eq!(session.facets().terms, vec!["Surgery".to_string()]);
    }

    #[test]
    fn empty_term_is_rejected() {
        let mut session = SearchSession::new();
        session.dispatch(SearchIntent::SetFreeText("   ".to_string())).unwrap();
        assert_eq!(session.dispatch(SearchIntent::CommitTerm), Err(IntentRejected::EmptyTerm));
    }

    #[test]
    fn free_text_over_limit_is_rejected() {
        let mut session = SearchSession::new();
        let long = "x".repeat(MAX_FREE_TEXT_LEN + 1);
        assert_eq!(
            session.dispatch(SearchIntent::SetFreeText(long)),
            Err(IntentRejected::FreeTextTooLong { len: MAX_FREE_TEXT_LEN + 1 })
        );
        assert_eq!(session.facets().free_text, "");
        assert!(session.dispatch(SearchIntent::SetFreeText("x".repeat(MAX_FREE_TEXT_LEN))).is_ok());
    }

    #[test]
    fn filter_fetches_ignore_uncommitted_text() {
        let mut session = SearchSession::new();
        session.dispatch(SearchIntent::SetFreeText("oncology".to_string())).unwrap();
        session.dispatch(SearchIntent::CommitTerm).unwrap();
        session.dispatch(SearchIntent::SetFreeText("half typed".to_string())).unwrap();
        let fetch = session
            .dispatch(SearchIntent::SetAffiliationFilters(BTreeSet::from(["MGH".to_string()])))
            .unwrap()
            .unwrap();
        assert_eq!(fetch.request.query, "oncology");
    }

    #[test]
    fn load_more_reuses_the_query_of_the_loaded_results() {
        let mut session = SearchSession::new();
        session.dispatch(SearchIntent::SetFreeText("Pediatrics".to_string())).unwrap();
        let fetch = session.dispatch(SearchIntent::Submit).unwrap().unwrap();
        session.apply_fetch_result(&fetch, page_of(&["A"], 3));
        let more = session.dispatch(SearchIntent::LoadMore).unwrap().unwrap();
        assert_eq!(more.request.query, "pediatrics");
        assert_eq!(more.request.page, 2);
    }

    #[test]
    fn load_more_preconditions() {
        let mut session = SearchSession::new();
        assert_eq!(session.dispatch(SearchIntent::LoadMore), Err(IntentRejected::NotLoaded));

        let fetch = session.begin();
        assert_eq!(session.dispatch(SearchIntent::LoadMore), Err(IntentRejected::AlreadyLoading));
        session.apply_fetch_result(&fetch, page_of(&["A", "B"], 2));
        assert_eq!(session.dispatch(SearchIntent::LoadMore), Err(IntentRejected::NoMorePages { total_count: 2 }));
        assert_eq!(session.page(), 1);
    }

    #[test]
    fn typing_after_load_blocks_load_more_until_next_search() {
        let mut session = loaded_session(&["A", "B"], 10);
        session.dispatch(SearchIntent::SetFreeText("neuro".to_string())).unwrap();
        assert_eq!(session.page(), 1);
        assert_eq!(session.dispatch(SearchIntent::LoadMore), Err(IntentRejected::StaleResults));

        let fetch = session.dispatch(SearchIntent::Submit).unwrap().unwrap();
        session.apply_fetch_result(&fetch, page_of(&["N1", "N2"], 4));
        assert!(session.can_load_more());
    }

    #[test]
    fn response_for_superseded_facets_is_dropped() {
        let mut session = loaded_session(&["A", "B"], 10);
        let old = session.dispatch(SearchIntent::LoadMore).unwrap().unwrap();
        let new = session
            .dispatch(SearchIntent::SetDegreeFilters(BTreeSet::from(["PhD".to_string()])))
            .unwrap()
            .unwrap();

        assert_eq!(session.apply_fetch_result(&old, page_of(&["C", "D"], 10)), MergeOutcome::Stale);
        assert_eq!(ids(&session), vec!["A", "B"]);
        assert!(session.loading());

        assert_eq!(session.apply_fetch_result(&new, page_of(&["P"], 1)), MergeOutcome::Replaced);
        assert_eq!(ids(&session), vec!["P"]);
        assert!(!session.loading());
    }

    #[test]
    fn typing_keeps_the_pending_filter_search() {
        let mut session = loaded_session(&["A", "B"], 10);
        let fetch = session
            .dispatch(SearchIntent::SetDegreeFilters(BTreeSet::from(["MD".to_string()])))
            .unwrap()
            .unwrap();
        session.dispatch(SearchIntent::SetFreeText("c".to_string())).unwrap();
        assert!(session.loading());

        assert_eq!(session.apply_fetch_result(&fetch, page_of(&["E"], 1)), MergeOutcome::Replaced);
        assert_eq!(ids(&session), vec!["E"]);
        assert_eq!(session.facets().degree_filters, BTreeSet::from(["MD".to_string()]));
        assert_eq!(session.facets().free_text, "c");
        assert!(!session.loading());
    }

    #[test]
    fn typing_during_first_load_keeps_it() {
        let mut session = SearchSession::new();
        let fetch = session.begin();
        session.dispatch(SearchIntent::SetFreeText("c".to_string())).unwrap();
        assert!(session.loading());

        assert_eq!(session.apply_fetch_result(&fetch, page_of(&["A", "B"], 4)), MergeOutcome::Replaced);
        assert_eq!(ids(&session), vec!["A", "B"]);
        assert!(!session.loading());
        assert!(session.can_load_more());
    }

    #[test]
    fn typing_during_load_more_still_appends() {
        let mut session = loaded_session(&["A", "B"], 10);
        let more = session.dispatch(SearchIntent::LoadMore).unwrap().unwrap();
        session.dispatch(SearchIntent::SetFreeText("g".to_string())).unwrap();
        assert!(session.loading());

        assert_eq!(session.apply_fetch_result(&more, page_of(&["C"], 10)), MergeOutcome::Appended);
        assert_eq!(ids(&session), vec!["A", "B", "C"]);
        assert_eq!(session.page(), 2);
        assert!(session.can_load_more());
    }

    #[test]
    fn resume_reissues_the_unanswered_page() {
        let mut session = loaded_session(&["A", "B"], 10);
        let lost = session.dispatch(SearchIntent::LoadMore).unwrap().unwrap();
        let snapshot = session.snapshot(80.0);

        let mut restored = SearchSession::new();
        restored.restore_snapshot(snapshot);
        assert!(restored.loading());
        assert_eq!(restored.dispatch(SearchIntent::LoadMore), Err(IntentRejected::AlreadyLoading));

        let again = restored.resume().unwrap();
        assert_eq!(again.request, lost.request);
        assert_ne!(again.generation, lost.generation);
        assert_eq!(restored.apply_fetch_result(&lost, page_of(&["X"], 10)), MergeOutcome::Stale);

        assert_eq!(restored.apply_fetch_result(&again, page_of(&["C", "D"], 10)), MergeOutcome::Appended);
        assert_eq!(ids(&restored), vec!["A", "B", "C", "D"]);
        assert!(!restored.loading());
        assert!(restored.can_load_more());
    }

    #[test]
    fn resume_on_settled_session_does_nothing() {
        let mut session = loaded_session(&["A", "B"], 10);
        let before = session.clone();
        assert_eq!(session.resume(), None);
        assert_eq!(session, before);
    }

    #[test]
    fn reset_restores_default_facets() {
        let mut session = SearchSession::new();
        session.dispatch(SearchIntent::SetFreeText("gi".to_string())).unwrap();
        session.dispatch(SearchIntent::CommitTerm).unwrap();
        session.dispatch(SearchIntent::SetSort { key: SortKey::Name, ascending: true }).unwrap();
        session.dispatch(SearchIntent::Submit).unwrap();
        assert!(session.queried());

        let fetch = session.dispatch(SearchIntent::Reset).unwrap().unwrap();
        assert_eq!(session.facets(), &SearchFacets::default());
        assert!(!session.queried());
        assert_eq!(fetch.request.query, "");
        assert_eq!(fetch.request.sorting, SortKey::DateUpdated);
        assert!(!fetch.request.sort_ascending);
    }

    #[test]
    fn remove_terms_replaces_and_dedups() {
        let mut session = SearchSession::new();
        let fetch = session
            .dispatch(SearchIntent::RemoveTerms(vec!["Art".to_string(), "art ".to_string(), "Music".to_string()]))
            .unwrap()
            .unwrap();
        assert_eq!(session.facets().terms, vec!["Art".to_string(), "Music".to_string()]);
        assert_eq!(fetch.request.query, "art music");
        assert!(session.queried());
    }

    #[test]
    fn sort_change_does_not_mark_queried() {
        let mut session = SearchSession::new();
        let fetch = session.dispatch(SearchIntent::SetSort { key: SortKey::Name, ascending: false }).unwrap().unwrap();
        assert_eq!(fetch.request.sorting, SortKey::Name);
        assert!(!session.queried());
    }

    #[test]
    fn restore_snapshot_intent_replaces_state_without_fetch() {
        let original = loaded_session(&["A", "B"], 4);
        let snapshot = original.snapshot(320.0);

        let mut fresh = SearchSession::new();
        assert_eq!(fresh.dispatch(SearchIntent::RestoreSnapshot(Box::new(snapshot))), Ok(None));
        assert_eq!(fresh, original);
    }
}
