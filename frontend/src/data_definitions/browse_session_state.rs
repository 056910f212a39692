//! Browse view session wiring: intents in, fetches out.

use dioxus::{logger::tracing, prelude::*};

use common::{
    profile::ProfileId,
    search_result::SearchFetchFailed,
    search_session::{FetchRequest, SearchIntent, SearchSession},
    session_snapshot::SessionSnapshot,
    tag_vocabulary::TagVocabulary,
};

use crate::{api::profiles_api::search_profiles, data_definitions::api_credential::ApiCredential, routes::Route};

#[derive(Clone, Copy)]
pub struct BrowseSessionState {
    pub session: ReadSignal<SearchSession>,
    pub dispatch: Callback<SearchIntent>,
    /// Scroll offset of the result list, kept for the snapshot.
    pub scroll_y: Signal<f64>,
    /// Offset to apply once the result list mounts after a restore.
    pub pending_scroll: Signal<Option<f64>>,
    pub open_profile: Callback<ProfileId>,
}

#[derive(Clone, Copy)]
pub struct FacetVocabulary {
    pub vocabulary: Memo<TagVocabulary>,
}

pub fn use_browse_session(initial_snapshot: Option<SessionSnapshot>) -> BrowseSessionState {
    let credential = use_context::<ApiCredential>();
    let restored_scroll = initial_snapshot.as_ref().map(|snapshot| snapshot.scroll_y);
    let is_restored = restored_scroll.is_some();

    let mut session = use_signal(move || {
        let mut session = SearchSession::new();
        if let Some(snapshot) = initial_snapshot {
            tracing::info!("restoring browse session from history");
            session.restore_snapshot(snapshot);
        }
        session
    });
    let scroll_y = use_signal(move || restored_scroll.unwrap_or(0.0));
    let pending_scroll = use_signal(move || restored_scroll);

    let run_fetch = move |fetch: FetchRequest| {
        let token = credential.current();
        spawn(async move {
            let request = fetch.request.clone().with_token(token);
            let outcome = search_profiles(request)
                .await
                .map_err(|e| SearchFetchFailed::new(e.to_string()));
            let merged = session.write().apply_fetch_result(&fetch, outcome);
            tracing::debug!("search generation {} page {}: {:?}", fetch.generation, fetch.request.page, merged);
        });
    };

    // a restored session already holds its results, unless it was saved mid-load
    use_effect(move || {
        let fetch = if is_restored { session.write().resume() } else { Some(session.write().begin()) };
        if let Some(fetch) = fetch {
            run_fetch(fetch);
        }
    });

    let dispatch = use_callback(move |intent: SearchIntent| {
        let outcome = session.write().dispatch(intent);
        if let Ok(Some(fetch)) = outcome {
            run_fetch(fetch);
        }
    });

    let open_profile = use_callback(move |profile_id: ProfileId| {
        let snapshot = session.peek().snapshot(*scroll_y.peek());
        let nav = navigator();
        // the snapshot carries every loaded profile, so its URL grows with each page
        match snapshot.to_url_string() {
            Ok(encoded) => {
                tracing::debug!("saving browse session in history ({} bytes) before opening {}", encoded.len(), profile_id);
                nav.replace(Route::browse_page_from_snapshot(snapshot));
            }
            Err(e) => tracing::warn!("browse session not saved, going back will start a new search: {e}"),
        }
        nav.push(Route::ProfilePage { profile_id: profile_id.0 });
    });

    BrowseSessionState {
        session: session.into(),
        dispatch,
        scroll_y,
        pending_scroll,
        open_profile,
    }
}
