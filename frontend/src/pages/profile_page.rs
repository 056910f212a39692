use dioxus::prelude::*;
use dioxus_free_icons::icons::md_navigation_icons::MdArrowBack;
use dioxus_free_icons::Icon;

use common::profile::{Profile, ProfileId};
use crate::{
    api::profiles_api::get_profile,
    components::{error_boundary::ComponentErrorDisplay, search_components::profile_result_card::ProfilePortrait, suspend_boundary::SuspendWrapper},
    data_definitions::api_credential::ApiCredential,
    routes::Route,
};


/// Profile detail page
#[component]
pub fn ProfilePage(profile_id: String) -> Element {
    rsx! {
        Title { "Weave - Profile" }
        div {
            id: "x-profile-page-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 24px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
                overflow: auto;
            ",
            BackToListButton {}
            SuspendWrapper {
                loading_label: "Loading profile...".to_string(),
                ProfileDetails { profile_id }
            }
        }
    }
}

#[component]
fn BackToListButton() -> Element {
    rsx! {
        button {
            class: "weave-button-link",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 8px;
                border: none;
                cursor: pointer;
                width: fit-content;
            ",
            onclick: move |_| {
                // the browse entry in history carries the saved session
                let nav = navigator();
                if nav.can_go_back() {
                    nav.go_back();
                } else {
                    nav.push(Route::browse_page());
                }
            },
            Icon { icon: MdArrowBack, style: "width: 20px; height: 20px;" }
            "Back to list"
        }
    }
}

#[component]
fn ProfileDetails(profile_id: ReadSignal<String>) -> Element {
    let credential = use_context::<ApiCredential>();
    let profile = use_resource(move || {
        let profile_id = ProfileId(profile_id.read().clone());
        get_profile(profile_id, credential.current())
    }).suspend()?.cloned();
    let profile = match profile {
        Err(e) => return rsx! {ComponentErrorDisplay { error_txt: format!("Unable to load this profile: {e}") }},
        Ok(p) => p,
    };
    let Profile { name, image_url, contact_email, additional_information, .. } = profile.clone();
    let willing_labels = profile.willing_labels();
    let cadence = profile.cadence_label().to_string();

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 16px;
                background: white;
                border-radius: 8px;
                padding: 24px;
                box-shadow: 0 2px 4px 0 rgba(0, 0, 0, 0.16);
                max-width: 900px;
            ",
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 24px;",
                ProfilePortrait { image_url, name: name.clone(), size: 120 }
                div {
                    h1 { style: "font-size: 32px; font-weight: 500; color: #111827;", "{name}" }
                    if !contact_email.is_empty() {
                        a {
                            href: "mailto:{contact_email}",
                            style: "font-size: 16px; color: #1D4ED8;",
                            "{contact_email}"
                        }
                    }
                }
            }

            TagSection { title: "Degrees", tags: profile.degrees.clone() }
            TagSection { title: "Affiliations", tags: profile.affiliations.clone() }
            TagSection { title: "Clinical Specialties", tags: profile.clinical_specialties.clone() }
            TagSection { title: "Professional Interests", tags: profile.professional_interests.clone() }
            TagSection { title: "Parts of Me", tags: profile.parts_of_me.clone() }
            TagSection { title: "Activities I Enjoy", tags: profile.activities.clone() }
            TagSection { title: "Willing to help with", tags: willing_labels.iter().map(|l| l.to_string()).collect::<Vec<_>>() }

            if !cadence.is_empty() {
                DetailSection { title: "Preferred cadence", "{cadence}" }
            }
            if !additional_information.is_empty() {
                DetailSection {
                    title: "Additional information",
                    p { style: "white-space: pre-wrap;", "{additional_information}" }
                }
            }
        }
    }
}

#[component]
fn DetailSection(title: String, children: Element) -> Element {
    rsx! {
        div {
            h2 {
                style: "font-size: 18px; font-weight: 500; color: rgb(75, 87, 112); margin-bottom: 6px;",
                "{title}"
            }
            div { style: "font-size: 16px; color: #111827;", {children} }
        }
    }
}

#[component]
fn TagSection(title: String, tags: Vec<String>) -> Element {
    if tags.is_empty() {
        return rsx! {};
    }
    rsx! {
        DetailSection {
            title,
            div {
                style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 6px;",
                for tag in tags.iter() {
                    span {
                        key: "{tag}",
                        style: "
                            font-size: 14px;
                            background-color: #ECEEF2;
                            border-radius: 1000px;
                            padding: 2px 12px;
                        ",
                        "{tag}"
                    }
                }
            }
        }
    }
}
