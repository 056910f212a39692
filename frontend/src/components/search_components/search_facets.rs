//! Dropdown filter buttons for the tag categories a search can narrow on.

use std::collections::{BTreeMap, BTreeSet};

use dioxus::prelude::*;
use common::{search_session::{SearchIntent, SearchSession}, tag_vocabulary::TagCategory};
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdAccountBalance, md_navigation_icons::MdArrowDropDown, md_social_icons::MdSchool, md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank}}};

use crate::data_definitions::browse_session_state::{BrowseSessionState, FacetVocabulary};

type FilterSelection = BTreeMap<TagCategory, BTreeSet<String>>;

#[derive(Clone, Copy)]
struct FacetContext {
    pending_filters: Signal<FilterSelection>,
    expanded_facet: Signal<Option<TagCategory>>,
    set_expanded_facet: Callback<Option<TagCategory>>,
}

fn committed_filters(session: &SearchSession) -> FilterSelection {
    let facets = session.facets();
    BTreeMap::from([
        (TagCategory::Degrees, facets.degree_filters.clone()),
        (TagCategory::Affiliations, facets.affiliation_filters.clone()),
    ])
}

fn filter_intent(category: TagCategory, values: BTreeSet<String>) -> Option<SearchIntent> {
    match category {
        TagCategory::Degrees => Some(SearchIntent::SetDegreeFilters(values)),
        TagCategory::Affiliations => Some(SearchIntent::SetAffiliationFilters(values)),
        _ => None,
    }
}

#[component]
pub fn FacetButtonStrip() -> Element {
    let browse_state = use_context::<BrowseSessionState>();
    let session = browse_state.session;
    let dispatch = browse_state.dispatch;

    let committed = use_memo(move || committed_filters(&session.read()));
    let mut pending_filters = use_signal(|| committed.peek().clone());
    // reset and history restore change the committed filters under us
    use_effect(move || {
        pending_filters.set(committed());
    });

    let mut expanded_facet = use_signal(|| None::<TagCategory>);
    let set_expanded_facet: Callback<Option<TagCategory>> = Callback::new(move |facet: Option<TagCategory>| {
        expanded_facet.set(facet);

        if facet.is_none() {
            // selections are only submitted once the dropdown closes
            let pending = pending_filters.peek().clone();
            let committed = committed.peek().clone();
            for (category, values) in pending {
                if committed.get(&category) != Some(&values) {
                    if let Some(intent) = filter_intent(category, values) {
                        dispatch(intent);
                    }
                }
            }
        }
    });
    use_context_provider(|| FacetContext {
        pending_filters,
        expanded_facet,
        set_expanded_facet,
    });

    rsx! {
        div {
            id: "x-search-input-facet-chips-wrapper",
            style: "
                height: 100%;
                margin: 10px;
                display: flex;
                flex-direction:row;
                padding: 10px;
                align-items: center;
            ",

            FacetButton {
                category: TagCategory::Degrees,
                facet_icon: MdSchool,
            }
            FacetButton {
                category: TagCategory::Affiliations,
                facet_icon: MdAccountBalance,
            }
        }
    }
}

#[component]
fn FacetButton<I: dioxus_free_icons::IconShape+'static+Clone+PartialEq>(
    category: TagCategory,
    facet_icon: I,
) -> Element {
    let facet_context = use_context::<FacetContext>();
    let expanded_facet = facet_context.expanded_facet;
    let set_expanded_facet = facet_context.set_expanded_facet;
    let pending_filters = facet_context.pending_filters;

    let is_expanded = use_memo(move || *expanded_facet.read() == Some(category));
    let button_z_level = use_memo(move || if is_expanded() { 1000 } else { 888 });
    let selected_count = use_memo(move || pending_filters.read().get(&category).map(|v| v.len()).unwrap_or(0));
    let border_color = use_memo(move || if selected_count() > 0 { "rgba(0,0,255,0.9)" } else { "rgba(0,0,0,0.5)" });
    let facet_display_name = category.display_name();

    rsx! {
        if is_expanded() {
            div {
                style: "position: relative; width: 0px; height: 0px; top: 0px; left: 0px;",
                div {
                    style: "
                        position: absolute;
                        top: 12px;
                        left: -60px;
                        background: white;
                        min-width: 300px;
                        max-width: 500px;
                        max-height: calc(100vh - 100px);
                        overflow-y: auto;
                        border: 1px solid rgba(0,0,0,0.5);
                        border-radius: 10px;
                        margin: 10px;
                        padding: 10px;
                        box-shadow: 0 0 10px 0 rgba(0, 0, 0, 0.1);
                        z-index: 1000;
                    ",
                    FacetSelectorList { category }
                }
            }
            div {
                style: "
                position: fixed;
                top: 0px;
                left: 0px;
                z-index: 999;
                background-color: rgba(0,0,0,0.1);
                width: 100vw;
                height: 100vh;
                ",
                onclick: move |_| {
                    set_expanded_facet(None);
                },
            }
        }

        button {
            onclick: move |_| {
                if is_expanded() {
                    set_expanded_facet(None);
                } else {
                    set_expanded_facet(Some(category));
                }
            },
            style: "
                cursor: pointer;
                display: flex;
                align-items: center;
                justify-content: center;
                gap: 6px;
                flex-direction:row;
                border: 2px solid {border_color()};
                border-radius: 1000px;
                background-color: white;
                box-shadow: 0 0 10px 0 rgba(0, 0, 0, 0.1);
                position: relative;
                height: 28px;
                padding: 20px 10px;
                font-size: 15px;
                line-height: 24px;
                font-weight: 400;
                z-index: {button_z_level()};
                margin-right: 16px;
                white-space: nowrap;
                flex-shrink: 0;
            ",
            Icon { icon: facet_icon, style: "width: 20px; height: 20px; color:rgba(0,0,0,0.9);" }
            "{facet_display_name}"
            if selected_count() > 0 {
                span {
                    style: "color: rgba(0,0,255,0.9); font-weight: 500;",
                    "({selected_count()})"
                }
            }
            Icon { icon: MdArrowDropDown, style: "width: 20px; height: 20px; color:rgba(0,0,0,0.9);" }
        }
    }
}

#[component]
fn FacetSelectorList(category: TagCategory) -> Element {
    let facet_vocabulary = use_context::<FacetVocabulary>();
    let facet_context = use_context::<FacetContext>();
    let options = use_memo(move || {
        let selected = facet_context.pending_filters.read().get(&category).cloned().unwrap_or_default();
        facet_vocabulary.vocabulary.read().options_with_selected(category, &selected)
    });

    rsx! {
        ul {
            for value in options() {
                li {
                    key: "{value}",
                    FacetCheckbox { category, facet_value: value.clone() }
                }
            }
        }
    }
}

#[component]
fn FacetCheckbox(category: TagCategory, facet_value: ReadSignal<String>) -> Element {
    let mut pending_filters = use_context::<FacetContext>().pending_filters;
    let is_checked = use_memo(move || {
        pending_filters.read().get(&category).is_some_and(|values| values.contains(&*facet_value.read()))
    });
    rsx! {
        div {
            class: "x-facet-list-item",
            style: "
                display: flex;
                flex-direction: row;
                gap: 10px;
                cursor: pointer;
                padding: 4px;
                margin: 4px;
                align-items: center;
            ",
            onclick: move |_e| {
                let should_add = !is_checked();
                let facet_value = facet_value.read().clone();
                let mut pending = pending_filters.write();
                let entry = pending.entry(category).or_default();
                if should_add {
                    entry.insert(facet_value);
                } else {
                    entry.remove(&facet_value);
                }
            },

            if is_checked() {
                Icon { icon: MdCheckBox, style: "width: 26px; height: 26px; color: rgb(28, 33, 45); flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 26px; height: 26px; color: black; flex-shrink: 0;" }
            }
            div {
                style: "
                    font-size: 18px;
                    line-height: 26px;
                    font-weight: 400;
                    color: rgb(0, 0, 0);
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                    min-width: 0;
                ",
                "{facet_value}"
            }
        }
    }
}
