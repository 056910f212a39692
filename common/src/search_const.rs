//! Limits shared by the browse view and the search transport.

/// Longest free text accepted by the search input.
pub const MAX_FREE_TEXT_LEN: usize = 50;

/// Distance from the bottom of the result list, in pixels, that triggers loading the next page.
pub const LOAD_MORE_SCROLL_THRESHOLD_PX: i32 = 200;

/// Message shown to the user whenever a profile search fails.
pub const SEARCH_FAILED_MESSAGE: &str = "Unable to load profiles. Try again later.";
