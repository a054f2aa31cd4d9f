//! Display rules of the right side panel: how many items show, how tags are
//! labelled, how leaderboard ranks and avatars are rendered.

use std::borrow::Cow;

use crate::User;

/// Items shown per section while collapsed.
pub const MAX_VISIBLE_ITEMS: usize = 3;

/// Characters of a tag name kept before the label is cut.
pub const TAG_LABEL_MAX_CHARS: usize = 13;

/// Suffix appended to a cut tag label.
pub const ELLIPSIS: &str = "...";

/// `limit` variable of the leaderboard query.
pub const TOP_USERS_LIMIT: i32 = 10;

/// Medals of the first three leaderboard places.
pub const RANK_ICONS: [&str; 3] = ["🥇", "🥈", "🥉"];

/// Image used when a user has no avatar.
pub const DEFAULT_AVATAR: &str = "/default-avatar.png";

/// Smallest viewport width, in CSS pixels, at which the panel is shown.
pub const DESKTOP_MIN_WIDTH_PX: f64 = 960.0;

/// The prefix of `items` a section renders.
pub fn visible_items<T>(items: &[T], expanded: bool) -> &[T] {
    if expanded {
        items
    } else {
        &items[..items.len().min(MAX_VISIBLE_ITEMS)]
    }
}

/// Whether a section with `total` items gets a Show More / Show Less button.
pub fn needs_toggle(total: usize) -> bool {
    total > MAX_VISIBLE_ITEMS
}

/// Chip label of a tag. Counts characters, not bytes.
pub fn tag_label(name: &str) -> Cow<'_, str> {
    match name.char_indices().nth(TAG_LABEL_MAX_CHARS) {
        Some((cut, _)) => Cow::Owned(format!("{}{ELLIPSIS}", &name[..cut])),
        None => Cow::Borrowed(name),
    }
}

/// Text printed after a tag chip.
pub fn usage_suffix(usage_count: u64) -> String {
    format!(" × {usage_count}")
}

/// Medal for the first three places, `#n` below them. `index` is zero based.
pub fn rank_marker(index: usize) -> Cow<'static, str> {
    match RANK_ICONS.get(index).copied() {
        Some(icon) => Cow::Borrowed(icon),
        None => Cow::Owned(format!("#{}", index + 1)),
    }
}

/// Podium rows get highlighted.
pub fn is_top_rank(index: usize) -> bool {
    index < RANK_ICONS.len()
}

/// Avatar URL of `user`, falling back to [`DEFAULT_AVATAR`].
pub fn avatar_src(user: &User) -> &str {
    match user.avatar_url.as_deref() {
        Some(url) if !url.is_empty() => url,
        _ => DEFAULT_AVATAR,
    }
}

/// Reputation, questions and answers of a leaderboard row.
pub fn stats_line(user: &User) -> String {
    format!(
        "⭐ {} | ❓ {} | 💬 {}",
        user.reputation, user.total_questions, user.total_answers
    )
}

/// The panel is dropped entirely on anything narrower than a desktop.
pub fn is_hidden_at(viewport_width: f64) -> bool {
    viewport_width < DESKTOP_MIN_WIDTH_PX
}

/// One of the two expandable sections of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Top tags grid.
    Tags,
    /// Leaderboard.
    Users,
}

/// Show More / Show Less flags of one panel instance. Both start collapsed
/// and live only as long as the panel is mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelState {
    /// Tags section shows every tag.
    pub tags_expanded: bool,
    /// Leaderboard shows every user.
    pub users_expanded: bool,
}

impl PanelState {
    /// The state after clicking the toggle of `section`. The other section
    /// keeps its flag.
    pub fn toggled(self, section: Section) -> Self {
        match section {
            Section::Tags => Self {
                tags_expanded: !self.tags_expanded,
                ..self
            },
            Section::Users => Self {
                users_expanded: !self.users_expanded,
                ..self
            },
        }
    }

    /// Whether `section` is currently expanded.
    pub fn is_expanded(self, section: Section) -> bool {
        match section {
            Section::Tags => self.tags_expanded,
            Section::Users => self.users_expanded,
        }
    }
}
