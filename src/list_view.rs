use std::collections::HashMap;

use maud::{Markup, html};

use crate::api::ApiClient;
use crate::components::{badge, button_link};
use crate::error::FetchResult;
use crate::model::{Post, User};
use crate::routes::{PostRef, Route};
use crate::session::ViewSession;

/// Cards shown while the post list is outstanding.
pub const PLACEHOLDER_CARDS: usize = 6;

/// Author shown when a post's user is not among the loaded users.
pub const ANONYMOUS: &str = "Anonymous";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Loadable<T> {
    Pending,
    Ready(T),
    Failed(String),
}

pub enum ListEvent {
    Posts(FetchResult<Vec<Post>>),
    Users(FetchResult<Vec<User>>),
}

/// State of the blog index: the fetched posts, the users known for
/// attribution, and the current search text.
#[derive(Debug, Clone)]
pub struct BlogListView {
    posts: Loadable<Vec<Post>>,
    users: HashMap<u64, User>,
    query: String,
}

impl Default for BlogListView {
    fn default() -> Self {
        Self::new()
    }
}

impl BlogListView {
    pub fn new() -> Self {
        Self {
            posts: Loadable::Pending,
            users: HashMap::new(),
            query: String::new(),
        }
    }

    pub fn with_data(posts: Vec<Post>, users: Vec<User>) -> Self {
        let mut view = Self::new();
        view.posts = Loadable::Ready(posts);
        view.set_users(users);
        view
    }

    pub fn posts(&self) -> &Loadable<Vec<Post>> {
        &self.posts
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    fn set_users(&mut self, users: Vec<User>) {
        self.users = users.into_iter().map(|u| (u.id, u)).collect();
    }

    /// Folds one completed request into the view. Either request may land first.
    pub fn apply(&mut self, event: ListEvent) {
        match event {
            ListEvent::Posts(Ok(posts)) => {
                tracing::info!(count = posts.len(), "posts loaded");
                self.posts = Loadable::Ready(posts);
            }
            ListEvent::Posts(Err(e)) => {
                tracing::warn!(error = %e, "posts failed to load");
                self.posts = Loadable::Failed(e.to_string());
            }
            ListEvent::Users(Ok(users)) => {
                tracing::info!(count = users.len(), "users loaded");
                self.set_users(users);
            }
            ListEvent::Users(Err(e)) => {
                // Authors fall back to the placeholder name.
                tracing::warn!(error = %e, "users failed to load");
            }
        }
    }

    /// Posts matching the query, in fetch order. Empty until posts are loaded.
    pub fn visible_posts(&self) -> Vec<&Post> {
        match &self.posts {
            Loadable::Ready(posts) => posts
                .iter()
                .filter(|p| matches_query(p, &self.query))
                .collect(),
            _ => Vec::new(),
        }
    }

    pub fn author_name(&self, post: &Post) -> &str {
        self.users
            .get(&post.user_id)
            .map(|u| u.name.as_str())
            .unwrap_or(ANONYMOUS)
    }

    /// Renders the post grid; every card links to its detail page.
    ///
    /// Every loaded post is written out so the in-page search can bring it
    /// back; cards the current query rejects are `hidden`.
    pub fn render(&self) -> Markup {
        self.render_with(|post| Some(Route::BlogPost(PostRef::Id(post.id)).path()))
    }

    /// Renders the post grid; `href` decides which cards get a detail link.
    pub fn render_with(&self, href: impl Fn(&Post) -> Option<String>) -> Markup {
        html! {
            div id="post-grid" class="grid" {
                @match &self.posts {
                    Loadable::Pending => {
                        @for _ in 0..PLACEHOLDER_CARDS {
                            (placeholder_card())
                        }
                    }
                    Loadable::Failed(reason) => {
                        div class="load-error" role="alert" {
                            p { "Could not load posts." }
                            p class="muted" { (reason) }
                            (button_link(&Route::Blog.path(), "Try again", "outline"))
                        }
                    }
                    Loadable::Ready(posts) => {
                        @for post in posts {
                            (self.post_card(post, href(post).as_deref()))
                        }
                    }
                }
            }
            @if matches!(self.posts, Loadable::Ready(_)) {
                p id="post-empty" class="muted" hidden[!self.visible_posts().is_empty()] {
                    "No posts match your search."
                }
            }
        }
    }

    fn post_card(&self, post: &Post, href: Option<&str>) -> Markup {
        let header = html! {
            h3 class="card-title" { (post.title) }
            p class="card-description" { (post.body) }
        };
        html! {
            article
                class="card post-card"
                data-search=(search_text(&post.title, &post.body))
                hidden[!matches_query(post, &self.query)]
            {
                @if let Some(href) = href {
                    a class="card-link" href=(href) { (header) }
                } @else {
                    (header)
                }
                footer class="card-meta" {
                    (badge(&format!("#{}", post.id), "secondary"))
                    span class="author" { (self.author_name(post)) }
                }
            }
        }
    }
}

/// Case-insensitive substring match against title or body.
pub fn matches_query(post: &Post, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let q = query.to_lowercase();
    post.title.to_lowercase().contains(&q) || post.body.to_lowercase().contains(&q)
}

/// Lowercased text the in-page search script filters against.
pub fn search_text(title: &str, body: &str) -> String {
    format!("{}\n{}", title.to_lowercase(), body.to_lowercase())
}

fn placeholder_card() -> Markup {
    html! {
        div class="card card-placeholder" aria-hidden="true" {
            div class="placeholder-line wide" {}
            div class="placeholder-line" {}
            div class="placeholder-line short" {}
        }
    }
}

/// Starts the posts and users requests independently of each other.
pub fn mount(client: &ApiClient) -> ViewSession<ListEvent> {
    let mut session = ViewSession::new();
    let c = client.clone();
    session.spawn(async move { ListEvent::Posts(c.fetch_posts().await) });
    let c = client.clone();
    session.spawn(async move { ListEvent::Users(c.fetch_users().await) });
    session
}

/// Mounts a fresh view and drains its requests.
pub async fn load(client: &ApiClient) -> BlogListView {
    let mut view = BlogListView::new();
    let mut session = mount(client);
    while let Some(event) = session.next_event().await {
        view.apply(event);
    }
    view
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: u64, user_id: u64, title: &str, body: &str) -> Post {
        Post {
            id,
            user_id,
            title: title.to_string(),
            body: body.to_string(),
        }
    }

    fn user(id: u64, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
            ..User::default()
        }
    }

    fn hello() -> Vec<Post> {
        vec![post(1, 5, "Hello World", "intro text")]
    }

    fn card_count(html: &str) -> usize {
        html.matches("class=\"card post-card\"").count()
    }

    // Cards whose opening tag does not carry `hidden`.
    fn visible_card_count(html: &str) -> usize {
        html.split("<article class=\"card post-card\"")
            .skip(1)
            .filter(|rest| !rest[..rest.find('>').unwrap_or(rest.len())].contains(" hidden"))
            .count()
    }

    fn placeholder_count(html: &str) -> usize {
        html.matches("class=\"card card-placeholder\"").count()
    }

    #[test]
    fn no_users_renders_anonymous() {
        let view = BlogListView::with_data(hello(), vec![]);
        let html = view.render().into_string();
        assert_eq!(card_count(&html), 1);
        assert!(html.contains("<span class=\"author\">Anonymous</span>"));
    }

    #[test]
    fn known_user_and_matching_query() {
        let mut view = BlogListView::with_data(hello(), vec![user(5, "Ada")]);
        view.set_query("hello");
        let html = view.render().into_string();
        assert_eq!(visible_card_count(&html), 1);
        assert!(html.contains("<span class=\"author\">Ada</span>"));
    }

    #[test]
    fn non_matching_query_renders_nothing() {
        let mut view = BlogListView::with_data(hello(), vec![]);
        view.set_query("zzz");
        let html = view.render().into_string();
        assert_eq!(visible_card_count(&html), 0);
        assert_eq!(card_count(&html), 1);
        assert!(html.contains("<p id=\"post-empty\" class=\"muted\">No posts match"));
    }

    #[test]
    fn pending_renders_six_placeholders() {
        let view = BlogListView::new();
        let html = view.render().into_string();
        assert_eq!(placeholder_count(&html), PLACEHOLDER_CARDS);
        assert_eq!(card_count(&html), 0);
        assert!(!html.contains("post-empty"));
    }

    #[test]
    fn failed_posts_render_retry() {
        let mut view = BlogListView::new();
        view.posts = Loadable::Failed("GET /posts failed with status 500".to_string());
        let html = view.render().into_string();
        assert_eq!(placeholder_count(&html), 0);
        assert!(html.contains("role=\"alert\""));
        assert!(html.contains("href=\"/blog\""));
    }

    #[test]
    fn predicate_checks_title_or_body_case_insensitively() {
        let p = post(1, 1, "Rust Ownership", "Borrowing EXPLAINED");
        assert!(matches_query(&p, ""));
        assert!(matches_query(&p, "rust"));
        assert!(matches_query(&p, "explained"));
        assert!(matches_query(&p, "OWNER"));
        assert!(!matches_query(&p, "lifetimes"));
        // Title and body are matched separately, not as one string.
        assert!(!matches_query(&p, "ownershipborrowing"));
    }

    #[test]
    fn keeps_fetch_order() {
        let posts = vec![
            post(3, 1, "c alpha", ""),
            post(1, 1, "a alpha", ""),
            post(2, 1, "b beta", ""),
        ];
        let mut view = BlogListView::with_data(posts, vec![]);
        view.set_query("ALPHA");
        let ids: Vec<u64> = view.visible_posts().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn rendering_is_idempotent() {
        let mut view = BlogListView::with_data(
            vec![post(1, 5, "Hello", "a"), post(2, 9, "World", "b")],
            vec![user(5, "Ada")],
        );
        view.set_query("o");
        assert_eq!(view.render().into_string(), view.render().into_string());
    }

    #[test]
    fn events_apply_in_either_order() {
        let posts = || ListEvent::Posts(Ok(hello()));
        let users = || ListEvent::Users(Ok(vec![user(5, "Ada")]));

        let mut a = BlogListView::new();
        a.apply(posts());
        a.apply(users());
        let mut b = BlogListView::new();
        b.apply(users());
        b.apply(posts());

        assert_eq!(a.render().into_string(), b.render().into_string());
        assert!(a.render().into_string().contains("Ada"));
    }

    #[test]
    fn rejected_cards_stay_in_the_page_hidden() {
        let mut view = BlogListView::with_data(
            vec![post(1, 5, "Hello World", "a"), post(2, 9, "Another Post", "b")],
            vec![],
        );
        view.set_query("hello");
        let html = view.render().into_string();
        assert_eq!(card_count(&html), 2);
        assert_eq!(visible_card_count(&html), 1);
        assert!(html.contains("Another Post"));
        assert!(html.contains("hidden"));

        view.set_query("");
        assert_eq!(visible_card_count(&view.render().into_string()), 2);
    }

    #[test]
    fn search_attribute_carries_the_filtered_text() {
        use kuchiki::traits::TendrilSink as _;

        let p = post(4, 1, "Rust Ownership", "Borrowing\nEXPLAINED");
        let view = BlogListView::with_data(vec![p.clone()], vec![]);
        let doc = kuchiki::parse_html().one(view.render().into_string());
        let card = doc.select_first("#post-grid [data-search]").unwrap();
        let attrs = card.attributes.borrow();
        let text = attrs.get("data-search").unwrap();

        assert_eq!(text, search_text(&p.title, &p.body));
        // The in-page script matches the query against each line of this text.
        for q in ["rust", "OWNER", "explained", "lifetimes"] {
            let lowered = q.to_lowercase();
            let script_hit = text.split('\n').any(|f| f.contains(&lowered));
            assert_eq!(script_hit, matches_query(&p, q), "query {q}");
        }
        assert!(crate::builtin::SEARCH_JS.contains("#post-grid [data-search]"));
        assert!(crate::builtin::SEARCH_JS.contains("\"post-empty\""));
    }

    #[test]
    fn unlinked_cards_have_no_anchor() {
        let view = BlogListView::with_data(hello(), vec![]);
        let html = view.render_with(|_| None).into_string();
        assert_eq!(card_count(&html), 1);
        assert!(!html.contains("card-link"));
    }
}
