use dioxus::prelude::*;
use dioxus_free_icons::icons::md_social_icons::MdPeople;
use dioxus_free_icons::Icon;

use crate::routes::Route;


/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "Weave - Home" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
                overflow: auto;
            ",

            MainTitle {}
            SubText {}

            div {
                style: "
                    display:flex;
                    flex-direction: row;
                    gap: 20px;
                    flex-wrap: wrap;
                    align-items: stretch;
                    margin-top: 10px;
                ",
                BrowseCard {}
            }
        }
    }
}


#[component]
fn MainTitle() -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                align-items: center;
                gap: 8px;
                color: #0F172A;
                font-size: 46px;
                font-weight: 500;
                letter-spacing: -0.02em;
            ",
            span { "Welcome to" }
            span { style: "color:#4F46E5;", "Weave!" }
        }
    }
}

#[component]
fn SubText() -> Element {
    rsx! {
        div {
            style: "
                color: #111827;
                font-size: 30px;
                line-height: 1.6;
                max-width: 620px;
                font-weight: 500;
            ",
            "Find faculty mentors and students who share your specialties, interests and the parts of you that matter."
        }
    }
}

#[component]
fn BrowseCard() -> Element {
    rsx! {
        div {
            id: "x-card-browse",
            style: "
                display:flex;
                flex-direction: column;
                gap: 14px;
                width: 520px;
                min-height: 220px;
                border-radius: 22px;
                padding: 22px 22px 26px 22px;
                background: linear-gradient(135deg, #2D208A 0%, #5B3DF5 100%);
                color: white;
                box-shadow: 0 8px 24px rgba(0,0,0,0.12);
            ",

            div {
                style: "
                    display:flex;
                    align-items: center;
                    gap: 10px;
                    font-size: 30px;
                    font-weight: 500;
                ",
                Icon { icon: MdPeople, style: "width: 30px; height: 30px;" }
                "Browse Profiles"
            }

            div {
                style: "
                    font-size: 20px;
                    font-weight: 500;
                    line-height: 1.5;
                    color: rgba(255,255,255,0.92);
                ",
                "Search the directory by name, specialty or interest, then narrow it down by degree and hospital affiliation."
            }

            div { style: "height: 8px; padding-top: 7px; margin-top:7px; border-top: 1px solid white; width: 100%; " }

            div {
                style: "display:flex; flex-direction:row;",
                Link {
                    to: Route::browse_page(),
                    class: "weave-button-link",
                    "Start browsing"
                }
            }
        }
    }
}
