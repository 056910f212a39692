pub mod profiles;
pub mod tag_vocabulary;
