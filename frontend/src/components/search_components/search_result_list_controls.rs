//! Controls above the result list: hit count, clear search and sort order.

use common::{search_query::{SORT_OPTIONS, SortOption}, search_session::{SearchIntent, SearchSession}};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_content_icons::MdClear};

use crate::data_definitions::browse_session_state::BrowseSessionState;

#[component]
pub fn SearchResultListControls() -> Element {
    let session = use_context::<BrowseSessionState>().session;
    let queried = use_memo(move || session.read().queried());

    rsx! {
        div {
            id: "x-browse-results-title-row",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 6px;
                padding: 7px;
                margin: 1px;
                height: 56px;
                width: 100%;
                flex-shrink: 0;
            ",
            h1 {
                style: "font-size: 20px; font-weight: 300; color:rgb(75, 87, 112);  border-bottom: 1px solid rgb(75, 87, 112);",
                SearchResultsHitCountString { }
            }
            if queried() {
                ClearSearchButton {}
            }
            // empty space
            div {
                style: "
                flex-grow: 1;"
            }
            SortSelector {}
        }
    }
}

fn hit_count_text(session: &SearchSession) -> String {
    match session.results() {
        Some(_) => format!("{} profiles found", session.total_count()),
        None => "...".to_string(),
    }
}

#[component]
fn SearchResultsHitCountString() -> Element {
    let session = use_context::<BrowseSessionState>().session;
    let text = use_memo(move || hit_count_text(&session.read()));
    rsx! { "{text}" }
}

#[component]
fn ClearSearchButton() -> Element {
    let dispatch = use_context::<BrowseSessionState>().dispatch;
    rsx! {
        button {
            title: "Clear search",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 4px;
                background: white;
                border: none;
                border-radius: 8px;
                padding: 4px 10px;
                margin-left: 12px;
                box-shadow: 0 2px 4px 0 rgba(0, 0, 0, 0.16);
                cursor: pointer;
                font-size: 15px;
            ",
            onclick: move |_| {
                dispatch(SearchIntent::Reset);
            },
            Icon { icon: MdClear, style: "width: 18px; height: 18px; color: rgba(0,0,0,0.8);" }
            "Clear search"
        }
    }
}

#[component]
fn SortSelector() -> Element {
    let browse_state = use_context::<BrowseSessionState>();
    let session = browse_state.session;
    let dispatch = browse_state.dispatch;
    let selected_index = use_memo(move || {
        let session = session.read();
        let facets = session.facets();
        SortOption::find(facets.sort_key, facets.sort_ascending).unwrap_or(0)
    });

    rsx! {
        label {
            style: "font-size: 15px; color: rgb(75, 87, 112); margin-right: 8px;",
            r#for: "x-browse-sort-select",
            "Sort by"
        }
        select {
            id: "x-browse-sort-select",
            style: "
                font-size: 15px;
                padding: 4px 8px;
                border-radius: 8px;
                border: 1px solid rgba(0,0,0,0.3);
                background: white;
            ",
            onchange: move |event: Event<FormData>| {
                let Some(option) = event.value().parse::<usize>().ok().and_then(|i| SORT_OPTIONS.get(i).copied()) else {
                    return;
                };
                dispatch(SearchIntent::SetSort { key: option.key, ascending: option.ascending });
            },
            for (index, sort_option) in SORT_OPTIONS.iter().enumerate() {
                option {
                    key: "{index}",
                    value: "{index}",
                    selected: index == selected_index(),
                    "{sort_option.label}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use common::{profile::Profile, search_result::ProfileSearchResponse};

    use super::*;

    #[test]
    fn hit_count_waits_for_first_results() {
        let mut session = SearchSession::new();
        let fetch = session.begin();
        assert_eq!(hit_count_text(&session), "...");

        let response = ProfileSearchResponse { profiles: vec![Profile::default()], profile_count: 42 };
        session.apply_fetch_result(&fetch, Ok(response));
        assert_eq!(hit_count_text(&session), "42 profiles found");
    }
}
