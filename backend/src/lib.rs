//! Server side access to the remote Weave API.

pub mod api;
pub mod config;
pub mod weave_api_utils;
