//! Scrolling list of loaded profiles with incremental loading.

use dioxus::{logger::tracing, prelude::*};

use common::{search_const::{LOAD_MORE_SCROLL_THRESHOLD_PX, SEARCH_FAILED_MESSAGE}, search_session::SearchIntent};
use crate::{components::{error_boundary::ComponentErrorDisplay, search_components::profile_result_card::ProfileResultCard, suspend_boundary::LoadingIndicator}, data_definitions::browse_session_state::BrowseSessionState};

const RESULTS_SCROLLER_ID: &str = "x-browse-results-scroller";

fn results_scroller() -> Option<web_sys::Element> {
    web_sys::window()?.document()?.get_element_by_id(RESULTS_SCROLLER_ID)
}

/// True once the visible bottom of the list is within the load-more threshold.
fn near_bottom(scroll_top: i32, scroll_height: i32, client_height: i32) -> bool {
    scroll_height - client_height - scroll_top <= LOAD_MORE_SCROLL_THRESHOLD_PX
}

#[component]
pub fn SearchResultList() -> Element {
    let browse_state = use_context::<BrowseSessionState>();
    let session = browse_state.session;
    let dispatch = browse_state.dispatch;
    let mut scroll_y = browse_state.scroll_y;
    let mut pending_scroll = browse_state.pending_scroll;

    let results = use_memo(move || session.read().results().map(|r| r.to_vec()));
    let loading = use_memo(move || session.read().loading());
    let error = use_memo(move || session.read().error().map(|e| e.to_string()));
    let can_load_more = use_memo(move || session.read().can_load_more());
    let has_more = use_memo(move || session.read().has_more());

    let onscroll = move |_e: Event<ScrollData>| {
        let Some(scroller) = results_scroller() else {
            return;
        };
        let scroll_top = scroller.scroll_top();
        scroll_y.set(scroll_top as f64);
        if near_bottom(scroll_top, scroller.scroll_height(), scroller.client_height()) && can_load_more() {
            dispatch(SearchIntent::LoadMore);
        }
    };
    let onmounted = move |_e: Event<MountedData>| {
        // back navigation puts the reader where they left the list
        let Some(offset) = pending_scroll.take() else {
            return;
        };
        match results_scroller() {
            Some(scroller) => scroller.set_scroll_top(offset as i32),
            None => tracing::warn!("result list is mounted but its scroller was not found"),
        }
    };

    rsx! {
        div {
            id: RESULTS_SCROLLER_ID,
            style: "
                width: 100%;
                height: 100%;
                overflow-y: auto;
            ",
            onscroll: onscroll,
            onmounted: onmounted,

            if let Some(results) = results() {
                if results.is_empty() && !loading() && error().is_none() {
                    div {
                        style: "font-size: 20px; color: rgb(75, 87, 112); padding: 20px;",
                        "No profiles match this search."
                    }
                }
                ul {
                    id: "x-browse-results-wrapper",
                    for profile in results.iter() {
                        li {
                            key: "{profile.id}",
                            ProfileResultCard { profile: profile.clone() }
                        }
                    }
                }
            }

            if let Some(detail) = error() {
                div {
                    title: "{detail}",
                    ComponentErrorDisplay { error_txt: SEARCH_FAILED_MESSAGE.to_string() }
                }
            }

            if loading() {
                div {
                    style: "display: flex; justify-content: center;",
                    LoadingIndicator { label: "Loading profiles...".to_string() }
                }
            } else if can_load_more() {
                div {
                    style: "display: flex; justify-content: center; padding: 10px;",
                    button {
                        class: "weave-button-link",
                        style: "border: none; cursor: pointer;",
                        onclick: move |_| {
                            dispatch(SearchIntent::LoadMore);
                        },
                        "Load more"
                    }
                }
            } else if !has_more() && error().is_none() && results().is_some_and(|r| !r.is_empty()) {
                div {
                    style: "font-size: 14px; color: rgba(0,0,0,0.5); text-align: center; padding: 10px;",
                    "All matching profiles are shown."
                }
            }
        }
    }
}
