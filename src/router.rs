//! Client-side route table shared by the CLI and the web front end.

use std::fmt;
use url::Url;

pub mod paths {
    pub const LOGIN: &str = "/login";
    pub const DASHBOARD: &str = "/dashboard";
    pub const USER_DETAIL_PREFIX: &str = "/UserDetail";

    /// Path of the detail view for `uid`, percent-encoded as a single segment.
    #[must_use]
    pub fn user_detail(uid: &str) -> String {
        let encoded: String = url::form_urlencoded::byte_serialize(uid.as_bytes())
            .collect::<String>()
            .replace('+', "%20");
        format!("{USER_DETAIL_PREFIX}/{encoded}")
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Dashboard,
    UserDetail(String),
}

impl Route {
    /// Maps a location path to a route. A single trailing slash is tolerated;
    /// query strings and fragments are ignored.
    #[must_use]
    pub fn parse(location: &str) -> Option<Self> {
        let url = Url::parse("http://route.invalid").ok()?.join(location).ok()?;
        let mut segments: Vec<&str> = url.path_segments()?.collect();
        if segments.len() > 1 && segments.last() == Some(&"") {
            segments.pop();
        }

        match segments.as_slice() {
            ["login"] => Some(Self::Login),
            ["dashboard"] => Some(Self::Dashboard),
            ["UserDetail", uid] => {
                let uid = percent_decode(uid)?;
                (!uid.trim().is_empty()).then_some(Self::UserDetail(uid))
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Login => paths::LOGIN.to_string(),
            Self::Dashboard => paths::DASHBOARD.to_string(),
            Self::UserDetail(uid) => paths::user_detail(uid),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.path())
    }
}

fn percent_decode(segment: &str) -> Option<String> {
    // `+` is literal in a path; protect it from the form decoder.
    let protected = segment.replace('+', "%2B");
    let decoded: String = url::form_urlencoded::parse(format!("v={protected}").as_bytes())
        .next()
        .map(|(_, value)| value.into_owned())?;
    Some(decoded)
}

#[cfg(test)]
mod tests {
    use super::{paths, Route};

    #[test]
    fn parses_the_three_routes() {
        assert_eq!(Route::parse("/login"), Some(Route::Login));
        assert_eq!(Route::parse("/dashboard/"), Some(Route::Dashboard));
        assert_eq!(
            Route::parse("/UserDetail/6f0c2f5e"),
            Some(Route::UserDetail("6f0c2f5e".to_string()))
        );
    }

    #[test]
    fn rejects_unknown_and_incomplete_paths() {
        assert_eq!(Route::parse("/"), None);
        assert_eq!(Route::parse("/users"), None);
        assert_eq!(Route::parse("/UserDetail"), None);
        assert_eq!(Route::parse("/UserDetail/"), None);
        assert_eq!(Route::parse("/UserDetail/a/b"), None);
    }

    #[test]
    fn ignores_query_and_fragment() {
        assert_eq!(Route::parse("/dashboard?page=2#top"), Some(Route::Dashboard));
    }

    #[test]
    fn detail_path_round_trips_awkward_uids() {
        for uid in ["plain", "with space", "slash/inside", "a+b", "ünïcode"] {
            let route = Route::UserDetail(uid.to_string());
            assert_eq!(Route::parse(&route.path()), Some(route.clone()), "{uid}");
        }
    }

    #[test]
    fn detail_path_is_prefixed() {
        assert_eq!(paths::user_detail("abc"), "/UserDetail/abc");
        assert_eq!(Route::Dashboard.to_string(), paths::DASHBOARD);
    }
}
