pub mod profiles_api;
