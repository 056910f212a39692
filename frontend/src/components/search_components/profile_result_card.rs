//! Profile card shown in the browse result list.

use dioxus::prelude::*;
use common::profile::Profile;
use dioxus_free_icons::{Icon, icons::md_social_icons::MdPerson};

use crate::data_definitions::browse_session_state::BrowseSessionState;

/// Tags shown on a card before the rest are summarized.
const MAX_CARD_TAGS: usize = 6;

#[component]
pub fn ProfileResultCard(profile: ReadSignal<Profile>) -> Element {
    let open_profile = use_context::<BrowseSessionState>().open_profile;
    let Profile { id, name, image_url, affiliations, degrees, .. } = profile.read().clone();
    let tags = profile.read().display_tags().cloned().collect::<Vec<_>>();
    let hidden_tag_count = tags.len().saturating_sub(MAX_CARD_TAGS);
    let degrees = degrees.join(", ");
    let affiliations = affiliations.join(", ");

    rsx! {
        div {
            class: "weave-hover-shadow-background",
            style: "
                display: flex;
                flex-direction: row;
                align-items: flex-start;
                gap: 16px;
                background: white;
                border: 3px solid #AAAAAA33;
                border-radius: 8px;
                padding: 12px 16px;
                margin: 8px 8px;
                width: calc(100% - 16px);
                box-sizing: border-box;
                cursor: pointer;
            ",
            onclick: move |_| {
                open_profile(id.clone());
            },
            ProfilePortrait { image_url, name: name.clone() }
            div {
                style: "
                    display: flex;
                    flex-direction: column;
                    gap: 6px;
                    flex: 1;
                    min-width: 0;
                ",
                div {
                    style: "font-size: 22px; font-weight: 500; color: #111827;",
                    "{name}"
                    if !degrees.is_empty() {
                        span {
                            style: "font-size: 16px; font-weight: 300; color: rgba(0,0,0,0.6); margin-left: 8px;",
                            "{degrees}"
                        }
                    }
                }
                if !affiliations.is_empty() {
                    div {
                        style: "
                            font-size: 16px;
                            color: rgb(75, 87, 112);
                            overflow: hidden;
                            text-overflow: ellipsis;
                            white-space: nowrap;
                        ",
                        "{affiliations}"
                    }
                }
                div {
                    style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 6px;",
                    for tag in tags.iter().take(MAX_CARD_TAGS) {
                        span {
                            key: "{tag}",
                            style: "
                                font-size: 13px;
                                background-color: #ECEEF2;
                                border-radius: 1000px;
                                padding: 2px 10px;
                                white-space: nowrap;
                            ",
                            "{tag}"
                        }
                    }
                    if hidden_tag_count > 0 {
                        span {
                            style: "font-size: 13px; color: rgba(0,0,0,0.5); padding: 2px 4px;",
                            "+{hidden_tag_count} more"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ProfilePortrait(image_url: Option<String>, name: String, #[props(default = 72)] size: u32) -> Element {
    rsx! {
        div {
            style: "
                width: {size}px;
                height: {size}px;
                border-radius: 50%;
                overflow: hidden;
                flex-shrink: 0;
                display: flex;
                align-items: center;
                justify-content: center;
                background-color: #D1D5DB;
            ",
            if let Some(src) = image_url.filter(|src| !src.is_empty()) {
                img { src: "{src}", alt: "{name}", style: "width: 100%; height: 100%; object-fit: cover;" }
            } else {
                Icon { icon: MdPerson, style: "width: 70%; height: 70%; color: white;" }
            }
        }
    }
}
