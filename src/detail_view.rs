use maud::{Markup, html};

use crate::api::ApiClient;
use crate::components::{badge, button_link};
use crate::content::{Article, ContentBlock, slugify};
use crate::error::FetchResult;
use crate::list_view::ANONYMOUS;
use crate::model::{Comment, Post};
use crate::routes::Route;

pub fn render_block(block: &ContentBlock) -> Markup {
    match block {
        ContentBlock::Paragraph { text } => html! { p { (text) } },
        ContentBlock::Heading { text } => html! { h2 id=(slugify(text)) { (text) } },
        ContentBlock::List {
            items,
            ordered: false,
        } => html! {
            ul { @for item in items { li { (item) } } }
        },
        ContentBlock::List {
            items,
            ordered: true,
        } => html! {
            ol { @for item in items { li { (item) } } }
        },
        ContentBlock::Code { language, text } => {
            let class = if language.is_empty() {
                "language-plaintext".to_string()
            } else {
                format!("language-{language}")
            };
            html! {
                pre data-language=(language) { code class=(class) { (text) } }
            }
        }
        ContentBlock::Unknown => html! {},
    }
}

/// Renders blocks in sequence; each block's output depends only on itself.
pub fn render_blocks(blocks: &[ContentBlock]) -> Markup {
    html! {
        @for block in blocks {
            (render_block(block))
        }
    }
}

pub fn render_article(article: &Article, avatar_src: &str) -> Markup {
    html! {
        article class="post" {
            (button_link(&Route::Blog.path(), "← Back to Blog", "ghost"))
            div class="post-author" {
                img class="avatar" src=(avatar_src) alt=(article.author) width="48" height="48";
                div {
                    div class="author-name" { (article.author) }
                    div class="muted" {
                        (article.date)
                        @if !article.read_time.is_empty() {
                            " • " (article.read_time)
                        }
                    }
                }
            }
            header class="post-header" {
                h1 { (article.title) }
                div class="badges" {
                    (badge(&article.category, "secondary"))
                    @for tag in &article.tags {
                        (badge(tag, "outline"))
                    }
                }
            }
            div class="prose" {
                (render_blocks(&article.blocks))
            }
        }
    }
}

pub fn render_comments(comments: &[Comment]) -> Markup {
    html! {
        section class="comments" {
            h2 { "Comments (" (comments.len()) ")" }
            @if comments.is_empty() {
                p class="muted" { "No comments yet." }
            }
            @for c in comments {
                article class="comment" id=(format!("comment-{}", c.id)) {
                    header {
                        strong { (c.name) }
                        " "
                        span class="muted" { (c.email) }
                    }
                    @for line in c.body.lines().filter(|l| !l.trim().is_empty()) {
                        p { (line) }
                    }
                }
            }
        }
    }
}

/// A remote post with everything its detail page shows.
#[derive(Debug, Clone)]
pub struct FetchedPost {
    pub post: Post,
    pub author: String,
    pub comments: Vec<Comment>,
}

impl FetchedPost {
    pub fn to_article(&self) -> Article {
        Article {
            slug: self.post.id.to_string(),
            title: self.post.title.clone(),
            excerpt: String::new(),
            date: format!("Post #{}", self.post.id),
            read_time: String::new(),
            category: "Community".to_string(),
            tags: Vec::new(),
            author: self.author.clone(),
            blocks: body_blocks(&self.post.body),
        }
    }
}

/// Each non-empty body line becomes a paragraph.
pub fn body_blocks(body: &str) -> Vec<ContentBlock> {
    body.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|l| ContentBlock::Paragraph {
            text: l.to_string(),
        })
        .collect()
}

/// Fetches a post with its comments, then resolves its author.
///
/// Only the post itself is required; a missing author or failed comments
/// request degrades to the placeholder name or an empty thread.
pub async fn load_post(client: &ApiClient, id: u64) -> FetchResult<FetchedPost> {
    let (post, comments) = tokio::join!(client.fetch_post(id), client.fetch_post_comments(id));
    let post = post?;

    let comments = comments.unwrap_or_else(|e| {
        tracing::warn!(post = id, error = %e, "comments failed to load");
        Vec::new()
    });

    let author = match client.fetch_user(post.user_id).await {
        Ok(user) => user.name,
        Err(e) => {
            if !e.is_not_found() {
                tracing::warn!(post = id, user = post.user_id, error = %e, "author failed to load");
            }
            ANONYMOUS.to_string()
        }
    };

    Ok(FetchedPost {
        post,
        author,
        comments,
    })
}

#[cfg(test)]
mod tests {
    use kuchiki::iter::NodeIterator as _;
    use kuchiki::traits::TendrilSink as _;

    use super::*;

    fn text(s: &str) -> String {
        s.to_string()
    }

    #[test]
    fn heading_paragraph_list_render_in_order() {
        let blocks = vec![
            ContentBlock::Heading { text: text("Intro") },
            ContentBlock::Paragraph { text: text("text") },
            ContentBlock::List {
                items: vec![text("a"), text("b")],
                ordered: false,
            },
        ];
        let html = render_blocks(&blocks).into_string();
        let doc = kuchiki::parse_html().one(html.as_str());
        let body = doc.select_first("body").unwrap();

        let tags: Vec<String> = body
            .as_node()
            .children()
            .elements()
            .map(|e| e.name.local.to_string())
            .collect();
        assert_eq!(tags, vec!["h2", "p", "ul"]);

        assert_eq!(doc.select("h2").unwrap().count(), 1);
        assert_eq!(doc.select("p").unwrap().count(), 1);
        assert_eq!(doc.select("ul").unwrap().count(), 1);
        let items: Vec<String> = doc
            .select("ul > li")
            .unwrap()
            .map(|li| li.text_contents())
            .collect();
        assert_eq!(items, vec!["a", "b"]);
    }

    #[test]
    fn unknown_block_renders_nothing() {
        let blocks = vec![
            ContentBlock::Paragraph { text: text("before") },
            ContentBlock::Unknown,
            ContentBlock::Paragraph { text: text("after") },
        ];
        assert_eq!(
            render_blocks(&blocks).into_string(),
            "<p>before</p><p>after</p>"
        );
    }

    #[test]
    fn code_is_verbatim_with_language_class() {
        let html = render_block(&ContentBlock::Code {
            language: text("typescript"),
            text: text("let a: number[] = [1];\nif (a < b) {}"),
        })
        .into_string();
        assert_eq!(
            html,
            "<pre data-language=\"typescript\"><code class=\"language-typescript\">let a: number[] = [1];\nif (a &lt; b) {}</code></pre>"
        );
    }

    #[test]
    fn ordered_list_uses_ol() {
        let html = render_block(&ContentBlock::List {
            items: vec![text("one")],
            ordered: true,
        })
        .into_string();
        assert_eq!(html, "<ol><li>one</li></ol>");
    }

    #[test]
    fn each_block_renders_independently_of_its_neighbours() {
        let blocks = vec![
            ContentBlock::Heading { text: text("A") },
            ContentBlock::Code {
                language: text(""),
                text: text("x"),
            },
            ContentBlock::Paragraph { text: text("p") },
        ];
        let joined: String = blocks
            .iter()
            .map(|b| render_block(b).into_string())
            .collect();
        assert_eq!(render_blocks(&blocks).into_string(), joined);
    }

    #[test]
    fn body_lines_become_paragraphs() {
        assert_eq!(
            body_blocks("quia et suscipit\n\nsuscipit recusandae\n"),
            vec![
                ContentBlock::Paragraph {
                    text: text("quia et suscipit")
                },
                ContentBlock::Paragraph {
                    text: text("suscipit recusandae")
                },
            ]
        );
    }
}
