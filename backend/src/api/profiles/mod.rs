//! Profile API route handlers and module exports.

mod search_profiles;
pub use search_profiles::search_profiles;

mod get_profile;
pub use get_profile::get_profile;
