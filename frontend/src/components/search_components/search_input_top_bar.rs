use dioxus::prelude::*;
use common::{search_const::MAX_FREE_TEXT_LEN, search_session::SearchIntent};
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdSearch, md_navigation_icons::MdClose}};
use crate::{components::search_components::search_facets::FacetButtonStrip, data_definitions::browse_session_state::BrowseSessionState};

/// Keys that turn the typed text into a search term.
const TERM_SEPARATOR_KEYS: [&str; 2] = [",", ";"];

#[component]
pub fn SearchInputTopBar() -> Element {
    let browse_state = use_context::<BrowseSessionState>();
    let session = browse_state.session;
    let dispatch = browse_state.dispatch;

    let free_text = use_memo(move || session.read().facets().free_text.clone());
    let has_free_text = use_memo(move || !free_text.read().trim().is_empty());
    let search_button_color = use_memo(move || if has_free_text() { "blue" } else { "#6B7280" });

    let commit_term = move || {
        let text = free_text.peek().clone();
        if session.peek().facets().contains_term(&text) {
            // the term is already there, just drop the typed copy
            dispatch(SearchIntent::SetFreeText(String::new()));
        } else {
            dispatch(SearchIntent::CommitTerm);
        }
    };
    let search_oninput = move |event: Event<FormData>| {
        dispatch(SearchIntent::SetFreeText(event.value()));
    };
    let search_onkeydown = move |event: Event<KeyboardData>| {
        match event.key() {
            Key::Enter => dispatch(SearchIntent::Submit),
            Key::Character(c) if TERM_SEPARATOR_KEYS.contains(&c.as_str()) => {
                event.prevent_default();
                commit_term();
            }
            _ => {}
        }
    };
    rsx! {
        div {
            id: "x-search-input-search-box",
            style: "
                display:flex;
                align-items:center;
                gap: 16px;
                background-color: white;
                border-radius: 9999px;
                padding: 10px 14px;
                height: 44px;
                color: #111827;
                border: 1px solid rgba(101, 101, 101, 0.8);
                width: 500px;
                margin-left: 16px;
                flex-shrink: 0;
            ",

            button {
                style: "
                    border: none;
                    background: none;
                    cursor: pointer;
                ",
                onclick: move |_| {
                    dispatch(SearchIntent::Submit)
                },
                Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:{search_button_color()};" }
            }
            input {
                r#type: "text",
                placeholder: "Search by name, specialty or interest",
                maxlength: "{MAX_FREE_TEXT_LEN}",
                style: "
                    flex:1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 20px;
                    font-weight: 400;
                    font-family: Roboto, sans-serif;
                ",
                value: "{free_text}",
                oninput: search_oninput,
                onkeydown: search_onkeydown,
            }
        }
        SearchTermChips {}
        FacetButtonStrip {}
    }
}

#[component]
fn SearchTermChips() -> Element {
    let session = use_context::<BrowseSessionState>().session;
    let terms = use_memo(move || session.read().facets().terms.clone());

    rsx! {
        div {
            id: "x-search-input-term-chips",
            style: "
                display: flex;
                flex-direction: row;
                flex-wrap: wrap;
                gap: 8px;
                margin-left: 16px;
                align-items: center;
            ",
            for term in terms() {
                TermChip { key: "{term}", term }
            }
        }
    }
}

#[component]
fn TermChip(term: String) -> Element {
    let browse_state = use_context::<BrowseSessionState>();
    let session = browse_state.session;
    let dispatch = browse_state.dispatch;
    let removed = term.clone();

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 4px;
                background-color: #E0E7FF;
                border: 1px solid rgba(29, 78, 216, 0.4);
                border-radius: 1000px;
                padding: 4px 6px 4px 12px;
                font-size: 15px;
                white-space: nowrap;
            ",
            "{term}"
            button {
                title: "Remove {term}",
                style: "
                    border: none;
                    background: none;
                    cursor: pointer;
                    display: flex;
                    padding: 0px;
                ",
                onclick: move |_| {
                    let remaining = session.peek().facets().terms.iter().filter(|t| **t != removed).cloned().collect();
                    dispatch(SearchIntent::RemoveTerms(remaining));
                },
                Icon { icon: MdClose, style: "width: 16px; height: 16px; color: rgba(0,0,0,0.7);" }
            }
        }
    }
}
