use dioxus::prelude::*;

use common::session_snapshot::SessionSnapshot;

use crate::components::navbar::Navbar;
use crate::data_definitions::url_param::UrlParam;
use crate::pages::browse_page::BrowsePage;
use crate::pages::home_page::HomePage;
use crate::pages::profile_page::ProfilePage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/browse/:snapshot")]
    BrowsePage {
        snapshot: UrlParam<Option<SessionSnapshot>>,
    },


    #[route("/profile/:profile_id")]
    ProfilePage { profile_id: String },

}

impl Route {
    /// Browse view starting from a fresh session.
    pub fn browse_page() -> Self {
        Self::BrowsePage { snapshot: UrlParam::from(None) }
    }

    pub fn browse_page_from_snapshot(snapshot: SessionSnapshot) -> Self {
        Self::BrowsePage { snapshot: UrlParam::from(Some(snapshot)) }
    }
}
