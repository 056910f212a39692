use dioxus::prelude::*;

use common::{session_snapshot::SessionSnapshot, tag_vocabulary::TagVocabulary};
use crate::{
    api::profiles_api::get_tag_vocabulary,
    components::{search_components::{search_input_top_bar::SearchInputTopBar, search_result_list::SearchResultList, search_result_list_controls::SearchResultListControls}, suspend_boundary::SuspendWrapper},
    data_definitions::{browse_session_state::{FacetVocabulary, use_browse_session}, url_param::UrlParam},
};


/// Browse page
#[component]
pub fn BrowsePage(snapshot: UrlParam<Option<SessionSnapshot>>) -> Element {
    rsx! {
        Title { "Weave - Browse" }
        BrowsePageRootComponent { initial_snapshot: snapshot.0.clone() }
    }
}

#[component]
fn BrowsePageRootComponent(initial_snapshot: Option<SessionSnapshot>) -> Element {
    // later snapshots arrive through route replacement and must not reset the session
    let browse_state = use_browse_session(initial_snapshot);
    use_context_provider(move || browse_state);

    let vocabulary_resource = use_resource(|| get_tag_vocabulary());
    let vocabulary = use_memo(move || match &*vocabulary_resource.read() {
        Some(Ok(vocabulary)) => vocabulary.clone(),
        _ => TagVocabulary::default(),
    });
    use_context_provider(move || FacetVocabulary { vocabulary });

    rsx! {
        div {
            id: "x-browse-page-root-component",
            style: r#"
                height: 100%;
                width: 100%;
                display: flex;
                flex-direction: column;
            "#,
            div {
                id: "x-search-input-top-bar",
                style: "
                    border-bottom: 1px solid rgb(164, 164, 164);
                    background-color: #F8FCFF;
                    flex-shrink: 0;
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    min-height: 76px;
                    width: 100%;
                ",

                SearchInputTopBar {}
            }

            div {
                id: "x-browse-results-space",
                style: r#"
                    width: 100%;
                    display: flex;
                    flex-direction: column;
                    flex-grow: 1;
                    min-height: 0;
                    background-color: #ECEEF2;
                    padding: 7px;
                    padding-top: 0px;
                "#,
                SearchResultListControls {}
                div {
                    style: "
                        flex-grow: 1;
                        width: 100%;
                        min-height: 0;
                    ",
                    SuspendWrapper {
                        SearchResultList {}
                    }
                }
            }
        }
    }
}
