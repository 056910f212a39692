pub mod api_credential;
pub mod browse_session_state;
pub mod url_param;
