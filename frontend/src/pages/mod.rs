pub mod home_page;
pub mod browse_page;
pub mod profile_page;
