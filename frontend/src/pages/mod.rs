pub mod home;
pub mod not_found;
pub mod tag_detail;
pub mod user_profile;
