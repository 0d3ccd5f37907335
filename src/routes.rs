use std::fmt;
use std::path::PathBuf;

/// Identifier handed to the blog detail view by the navigation layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PostRef {
    Id(u64),
    Slug(String),
}

impl PostRef {
    /// All-digit segments are remote post ids; anything else is an article slug.
    pub fn parse(segment: &str) -> Option<Self> {
        let s = segment.trim();
        if s.is_empty() || s.contains('/') {
            return None;
        }
        if s.bytes().all(|b| b.is_ascii_digit()) {
            return s.parse().ok().map(PostRef::Id);
        }
        Some(PostRef::Slug(s.to_string()))
    }
}

impl fmt::Display for PostRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostRef::Id(id) => write!(f, "{id}"),
            PostRef::Slug(slug) => f.write_str(slug),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Portfolio,
    Blog,
    BlogPost(PostRef),
    Contact,
}

impl Route {
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let segs: Vec<&str> = path
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();
        match segs.as_slice() {
            [] => Some(Route::Home),
            ["portfolio"] => Some(Route::Portfolio),
            ["blog"] => Some(Route::Blog),
            ["blog", segment] => PostRef::parse(segment).map(Route::BlogPost),
            ["contact"] => Some(Route::Contact),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Portfolio => "/portfolio".to_string(),
            Route::Blog => "/blog".to_string(),
            Route::BlogPost(post) => format!("/blog/{post}"),
            Route::Contact => "/contact".to_string(),
        }
    }

    /// Output file relative to the site root, e.g. `blog/7/index.html`.
    pub fn output_file(&self) -> PathBuf {
        let mut p = PathBuf::new();
        for seg in self.path().split('/').filter(|s| !s.is_empty()) {
            p.push(seg);
        }
        p.push("index.html");
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_routes() {
        assert_eq!(Route::parse("/"), Some(Route::Home));
        assert_eq!(Route::parse("/portfolio/"), Some(Route::Portfolio));
        assert_eq!(Route::parse("/blog?q=rust"), Some(Route::Blog));
        assert_eq!(
            Route::parse("/blog/12"),
            Some(Route::BlogPost(PostRef::Id(12)))
        );
        assert_eq!(
            Route::parse("/blog/getting-started-with-typescript"),
            Some(Route::BlogPost(PostRef::Slug(
                "getting-started-with-typescript".to_string()
            )))
        );
        assert_eq!(Route::parse("/contact#form"), Some(Route::Contact));
        assert_eq!(Route::parse("/blog/1/comments"), None);
        assert_eq!(Route::parse("/about"), None);
    }

    #[test]
    fn path_round_trips_and_maps_to_index_files() {
        for route in [
            Route::Home,
            Route::Portfolio,
            Route::Blog,
            Route::BlogPost(PostRef::Id(3)),
            Route::Contact,
        ] {
            assert_eq!(Route::parse(&route.path()), Some(route.clone()));
        }
        assert_eq!(Route::Home.output_file(), PathBuf::from("index.html"));
        assert_eq!(
            Route::BlogPost(PostRef::Id(3)).output_file(),
            PathBuf::from("blog/3/index.html")
        );
    }

    #[test]
    fn oversized_numeric_segment_is_rejected() {
        assert_eq!(PostRef::parse("99999999999999999999999"), None);
    }
}
