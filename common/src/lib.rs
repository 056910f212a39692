//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod search_const;
pub mod profile;
pub mod search_query;
pub mod search_result;
pub mod search_session;
pub mod session_snapshot;
pub mod tag_vocabulary;
pub mod url_codec;
