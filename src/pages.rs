use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::builtin;
use crate::catalog::Project;
use crate::components::{
    article_card, article_matches, button_link, project_card, section_header,
};
use crate::content::Article;
use crate::detail_view::{render_article, render_comments};
use crate::model::Comment;
use crate::routes::Route;

/// Shared chrome for every page.
pub struct Layout<'a> {
    pub site_title: &'a str,
    pub css_href: &'a str,
    pub placeholder_src: &'a str,
}

const NAV: [(&str, Route); 4] = [
    ("Home", Route::Home),
    ("Portfolio", Route::Portfolio),
    ("Blog", Route::Blog),
    ("Contact", Route::Contact),
];

impl Layout<'_> {
    pub fn page(&self, title: &str, current: &Route, main: Markup, search: bool) -> String {
        let full_title = if title.is_empty() {
            self.site_title.to_string()
        } else {
            format!("{title} | {}", self.site_title)
        };
        let markup = html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    meta name="color-scheme" content="light dark";
                    title { (full_title) }
                    link rel="stylesheet" href=(self.css_href);
                }
                body {
                    (self.navbar(current))
                    main { (main) }
                    (self.footer())
                    script { (PreEscaped(builtin::THEME_TOGGLE_JS)) }
                    @if search {
                        script { (PreEscaped(builtin::SEARCH_JS)) }
                    }
                }
            }
        };
        markup.into_string()
    }

    fn navbar(&self, current: &Route) -> Markup {
        html! {
            nav class="navbar" {
                div class="container navbar-inner" {
                    a class="brand" href=(Route::Home.path()) { (self.site_title) }
                    div class="nav-links" {
                        @for (label, route) in &NAV {
                            @let active = is_section(current, route);
                            a href=(route.path()) aria-current=[active.then_some("page")] { (label) }
                        }
                        button type="button" id="theme-toggle" class="btn btn-ghost" { "Theme" }
                    }
                }
            }
        }
    }

    fn footer(&self) -> Markup {
        html! {
            footer class="footer" {
                div class="container" {
                    div class="footer-grid" {
                        div {
                            h3 { (self.site_title) }
                            p class="muted" {
                                "A showcase of my work and thoughts on development, design, and technology."
                            }
                        }
                        div {
                            h3 { "Navigation" }
                            ul {
                                @for (label, route) in &NAV {
                                    li { a href=(route.path()) { (label) } }
                                }
                            }
                        }
                        div {
                            h3 { "Connect" }
                            ul {
                                @for name in ["GitHub", "Twitter", "LinkedIn", "Email"] {
                                    li { a href="#" { (name) } }
                                }
                            }
                        }
                        div {
                            h3 { "Newsletter" }
                            p class="muted" { "Subscribe to my newsletter for updates and new blog posts." }
                            form class="newsletter" onsubmit="return false" {
                                label class="sr-only" for="newsletter-email" { "Email" }
                                input id="newsletter-email" type="email" placeholder="Enter your email";
                                button type="submit" class="btn btn-primary" { "Subscribe" }
                            }
                        }
                    }
                    div class="footer-bottom" {
                        p { "© Your Name. All rights reserved." }
                    }
                }
            }
        }
    }
}

// `/blog/7` keeps the Blog nav entry highlighted.
fn is_section(current: &Route, entry: &Route) -> bool {
    match (current, entry) {
        (Route::BlogPost(_), Route::Blog) => true,
        _ => current == entry,
    }
}

pub fn home(layout: &Layout<'_>, featured: &[Project], recent: &[Article]) -> Markup {
    html! {
        section class="hero fade-in" {
            div class="container" {
                h1 { "Creative Developer &" span { "Digital Creator" } }
                p class="muted" {
                    "Welcome to my digital space where I showcase my work in development, "
                    "design, and share my thoughts through my blog."
                }
                div class="hero-actions" {
                    (button_link("#portfolio", "View My Work →", "primary"))
                    (button_link(&Route::Blog.path(), "Read My Blog", "outline"))
                }
            }
        }
        section id="portfolio" class="section section-muted" {
            div class="container" {
                (section_header("Featured Projects", "A selection of my favorite works across web development and design."))
                div class="grid" {
                    @for p in featured {
                        (project_card(p, layout.placeholder_src))
                    }
                }
            }
        }
        section class="section" {
            div class="container" {
                (section_header("Latest Blog Posts", "Thoughts, tutorials and insights about web development and design."))
                div class="grid" {
                    @for a in recent {
                        (article_card(a, false, false))
                    }
                }
                div class="section-footer" {
                    (button_link(&Route::Blog.path(), "View All Posts →", "primary"))
                }
            }
        }
    }
}

pub fn portfolio(layout: &Layout<'_>, projects: &[Project]) -> Markup {
    html! {
        section class="section fade-in" {
            div class="container" {
                div class="section-header" {
                    h1 { "My Portfolio" }
                    p class="muted" { "A collection of my best work in web development and design." }
                }
                div class="grid" {
                    @for p in projects {
                        (project_card(p, layout.placeholder_src))
                    }
                }
            }
        }
    }
}

/// Blog index: the search box, the fetched post grid and the authored articles.
pub fn blog(query: &str, post_grid: Markup, articles: &[Article]) -> Markup {
    html! {
        section class="section fade-in" {
            div class="container" {
                div class="section-header" {
                    h1 { "Blog" }
                    p class="muted" { "Thoughts, tutorials and insights about web development and design." }
                    label class="sr-only" for="post-search" { "Search posts" }
                    input id="post-search" class="search" type="search" placeholder="Search posts..." value=(query);
                }
                (post_grid)
            }
        }
        section class="section section-muted" {
            div class="container" {
                (section_header("Articles", "Longer pieces written for this site."))
                div id="article-grid" class="grid" {
                    @for a in articles {
                        (article_card(a, true, !article_matches(a, query)))
                    }
                }
            }
        }
    }
}

pub fn post(layout: &Layout<'_>, article: &Article, comments: Option<&[Comment]>) -> Markup {
    html! {
        (render_article(article, layout.placeholder_src))
        @if let Some(comments) = comments {
            (render_comments(comments))
        }
    }
}

pub fn contact() -> Markup {
    html! {
        section class="section fade-in" {
            div class="container" {
                div class="section-header" {
                    h1 { "Contact" }
                    p class="muted" { "Have a project in mind or just want to say hello? Send a message." }
                }
                form class="contact-form" onsubmit="return false" {
                    label for="contact-name" { "Name" }
                    input id="contact-name" type="text" name="name";
                    label for="contact-email" { "Email" }
                    input id="contact-email" type="email" name="email";
                    label for="contact-message" { "Message" }
                    textarea id="contact-message" name="message" rows="5" {}
                    button type="submit" class="btn btn-primary" { "Send" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::PostRef;

    fn layout() -> Layout<'static> {
        Layout {
            site_title: "Portfolio",
            css_href: "/assets/css/site.css",
            placeholder_src: "/assets/img/placeholder.svg",
        }
    }

    #[test]
    fn blog_post_highlights_blog_nav() {
        let html = layout().page(
            "Post",
            &Route::BlogPost(PostRef::Id(1)),
            html! {},
            false,
        );
        assert!(html.contains(r#"<a href="/blog" aria-current="page">Blog</a>"#));
        assert!(html.contains("<title>Post | Portfolio</title>"));
        assert!(!html.contains("post-search"));
    }

    #[test]
    fn blog_page_filters_articles_by_query() {
        let articles = crate::catalog::articles();
        let html = blog("tailwind", html! {}, &articles).into_string();
        assert_eq!(
            html.matches("class=\"card article-card\"").count(),
            articles.len()
        );
        let shown = html
            .split("<article class=\"card article-card\"")
            .skip(1)
            .filter(|rest| !rest[..rest.find('>').unwrap_or(rest.len())].contains(" hidden"))
            .count();
        assert_eq!(shown, 1);
        assert!(html.contains("value=\"tailwind\""));
    }
}
