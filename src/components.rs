//! Small presentational building blocks shared by the pages.

use maud::{Markup, html};

use crate::catalog::Project;
use crate::content::Article;
use crate::routes::{PostRef, Route};

pub fn badge(text: &str, variant: &str) -> Markup {
    html! {
        span class=(format!("badge badge-{variant}")) { (text) }
    }
}

pub fn button_link(href: &str, label: &str, variant: &str) -> Markup {
    html! {
        a class=(format!("btn btn-{variant}")) href=(href) { (label) }
    }
}

pub fn section_header(title: &str, lead: &str) -> Markup {
    html! {
        div class="section-header" {
            h2 { (title) }
            p class="muted" { (lead) }
        }
    }
}

pub fn project_card(project: &Project, image_src: &str) -> Markup {
    html! {
        article class="card project-card" {
            a class="card-link" href=(project.link) {
                div class="card-media" {
                    img src=(image_src) alt=(project.title) loading="lazy";
                }
                div class="card-body" {
                    @if let Some(category) = &project.category {
                        (badge(category, "secondary"))
                    }
                    h3 class="card-title" { (project.title) }
                    p class="card-description" { (project.description) }
                    div class="badges" {
                        @for tag in &project.tags {
                            (badge(tag, if project.category.is_some() { "outline" } else { "secondary" }))
                        }
                    }
                }
            }
        }
    }
}

/// Article card used on the home page and the blog index.
///
/// `with_tags` switches between the compact home-page teaser and the fuller
/// blog index card with category and tag badges. `hidden` cards stay in the
/// page for the in-page search to reveal.
pub fn article_card(article: &Article, with_tags: bool, hidden: bool) -> Markup {
    let href = Route::BlogPost(PostRef::Slug(article.slug.clone())).path();
    html! {
        article class="card article-card" data-search=(article_search_text(article)) hidden[hidden] {
            a class="card-link" href=(href) {
                div class="card-meta" {
                    @if with_tags {
                        (badge(&article.category, "secondary"))
                        span { "•" }
                    }
                    span { (article.date) }
                    span { "•" }
                    span { (article.read_time) }
                }
                h3 class="card-title" { (article.title) }
                p class="card-description" { (article.excerpt) }
                @if with_tags {
                    div class="badges" {
                        @for tag in &article.tags {
                            (badge(tag, "outline"))
                        }
                    }
                } @else {
                    span class="read-more" { "Read more →" }
                }
            }
        }
    }
}

/// Case-insensitive match against an article's title, excerpt or tags.
pub fn article_matches(article: &Article, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let q = query.to_lowercase();
    article.title.to_lowercase().contains(&q)
        || article.excerpt.to_lowercase().contains(&q)
        || article.tags.iter().any(|t| t.to_lowercase().contains(&q))
}

fn article_search_text(article: &Article) -> String {
    let mut parts = vec![article.title.to_lowercase(), article.excerpt.to_lowercase()];
    parts.extend(article.tags.iter().map(|t| t.to_lowercase()));
    parts.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn article_query_matches_tags() {
        let articles = catalog::articles();
        let hits: Vec<_> = articles
            .iter()
            .filter(|a| article_matches(a, "devops"))
            .map(|a| a.slug.as_str())
            .collect();
        assert_eq!(hits, vec!["mastering-git-workflows"]);
    }

    #[test]
    fn badge_escapes_text() {
        let html = badge("<b>", "outline").into_string();
        assert_eq!(html, "<span class=\"badge badge-outline\">&lt;b&gt;</span>");
    }
}
