pub mod loading_spinner {
    pub const LOADING: &str = "Loading...";
}

pub mod notification_banner {
    pub const TITLE_SUCCESS: &str = "Done";
    pub const TITLE_INFO: &str = "Notice";
    pub const TITLE_WARNING: &str = "Warning";
    pub const TITLE_ERROR: &str = "Something went wrong";
    pub const CLOSE_ARIA: &str = "Dismiss notification";
}

pub mod show_more_button {
    pub const SHOW_MORE: &str = "Show More";
    pub const SHOW_LESS: &str = "Show Less";
}

pub mod tags_section {
    pub const TITLE: &str = "🔖 Top Tags";
    pub const ARIA_LIST: &str = "Top tags";
}

pub mod users_section {
    pub const TITLE: &str = "🏆 Leaderboard";
    pub const ARIA_LIST: &str = "Top users";
}

pub mod pages {
    pub const HOME_TITLE: &str = "All Questions";
    pub const HOME_EMPTY: &str = "Questions will appear here.";
    pub const TAG_DETAIL_TEMPLATE: &str = "Questions tagged [{}]";
    pub const USER_PROFILE_TEMPLATE: &str = "Profile of {}";
    pub const NOT_FOUND_TITLE: &str = "404 - Page not found";
    pub const NOT_FOUND_BODY: &str = "Sorry, the page you are looking for does not exist.";
}
