// Reusable components live here.

pub mod loading_spinner;
pub mod notification_banner;
pub mod right_side_panel;
pub mod show_more_button;
pub mod tags_section;
pub mod users_section;
