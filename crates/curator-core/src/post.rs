use jiff::civil::DateTime;
use serde::Deserialize;

/// Items fetched per page. The backend pages with this fixed size.
pub const PAGE_SIZE: u32 = 5;

/// A certification post as the admin API serves it. Field names follow the
/// wire format.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "certificationId")]
    pub id: i64,
    #[serde(default)]
    pub place_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub photo_url: String,
    #[serde(default)]
    pub comment_count: u32,
    pub user_id: i64,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub user_profile: String,
    #[serde(default)]
    pub like_count: u32,
    /// Registration timestamp in the backend's `YYYY.MM.DD/HH:mm/weekday`
    /// format.
    #[serde(default)]
    pub regist_dt: String,
}

impl Post {
    /// The `YYYY.MM.DD` part of the registration timestamp, as the list
    /// displays it.
    pub fn short_date(&self) -> &str {
        self.regist_dt.split('/').next().unwrap_or("")
    }

    /// Parses the registration timestamp, ignoring the trailing weekday
    /// label. Returns `None` when the backend sent something unparseable.
    pub fn registered_at(&self) -> Option<DateTime> {
        let mut parts = self.regist_dt.splitn(3, '/');
        let date = parts.next()?;
        let time = parts.next()?;
        DateTime::strptime("%Y.%m.%d %H:%M", format!("{date} {time}")).ok()
    }
}

/// One page of the paginated listing.
#[derive(Debug, Clone)]
pub struct PostPage {
    pub items: Vec<Post>,
    /// Backend-reported terminal-page indicator.
    pub last: bool,
}
