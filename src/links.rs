use std::collections::BTreeSet;

use kuchiki::traits::TendrilSink as _;

/// Checks that a rendered page only points at things the site contains.
///
/// Root-relative `<a href>` targets must be a generated page or asset.
/// Auto-loading elements (`img`, `script`, `link`, `source`) must be local
/// and must name a written asset. External anchors are left alone.
pub fn assert_links_resolve(
    page: &str,
    html: &str,
    pages: &BTreeSet<String>,
    assets: &BTreeSet<String>,
) -> anyhow::Result<()> {
    let doc = kuchiki::parse_html().one(html);

    if let Ok(nodes) = doc.select("a[href]") {
        for node in nodes {
            let href = node.attributes.borrow().get("href").unwrap_or("").to_string();
            if !is_root_relative(&href) {
                continue;
            }
            let target = strip_query_and_fragment(&href);
            if !pages.contains(&normalize_page_path(target)) && !assets.contains(target) {
                anyhow::bail!("link check failed on {page}: <a href=\"{href}\"> has no page");
            }
        }
    }

    for selector in ["img[src]", "script[src]", "source[src]", "link[href]"] {
        if let Ok(nodes) = doc.select(selector) {
            for node in nodes {
                let attrs = node.attributes.borrow();
                for attr in ["src", "href"] {
                    let Some(v) = attrs.get(attr) else { continue };
                    let v = v.trim();
                    if v.is_empty() || v.starts_with("data:") {
                        continue;
                    }
                    if is_remote(v) {
                        anyhow::bail!(
                            "link check failed on {page}: <{} {attr}=\"{v}\"> is not local",
                            node.name.local.as_ref(),
                        );
                    }
                    if !assets.contains(strip_query_and_fragment(v)) {
                        anyhow::bail!(
                            "link check failed on {page}: <{} {attr}=\"{v}\"> was never written",
                            node.name.local.as_ref(),
                        );
                    }
                }
            }
        }
    }

    Ok(())
}

fn is_remote(v: &str) -> bool {
    let s = v.trim().to_ascii_lowercase();
    s.starts_with("http://") || s.starts_with("https://") || s.starts_with("//")
}

fn is_root_relative(v: &str) -> bool {
    let s = v.trim();
    s.starts_with('/') && !s.starts_with("//")
}

fn strip_query_and_fragment(v: &str) -> &str {
    v.trim().split(['?', '#']).next().unwrap_or("")
}

/// `/blog/` and `/blog` name the same page.
pub fn normalize_page_path(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn accepts_known_pages_assets_and_external_links() {
        let html = r##"<a href="/">home</a><a href="/blog/">blog</a><a href="/blog/1#comments">p</a>
<a href="https://example.com">ext</a><a href="#portfolio">frag</a><a href="mailto:a@b.c">m</a>
<img src="/assets/img/abc.svg"><link rel="stylesheet" href="/assets/css/def.css">"##;
        let pages = set(&["/", "/blog", "/blog/1"]);
        let assets = set(&["/assets/img/abc.svg", "/assets/css/def.css"]);
        assert_links_resolve("/", html, &pages, &assets).unwrap();
    }

    #[test]
    fn rejects_missing_page() {
        let err = assert_links_resolve(
            "/",
            r#"<a href="/blog/99">x</a>"#,
            &set(&["/", "/blog"]),
            &set(&[]),
        )
        .unwrap_err();
        assert!(err.to_string().contains("/blog/99"));
    }

    #[test]
    fn rejects_remote_autoload_and_unwritten_asset() {
        let pages = set(&["/"]);
        let assets = set(&["/assets/css/a.css"]);
        assert!(
            assert_links_resolve("/", r#"<img src="https://cdn.example.com/x.png">"#, &pages, &assets)
                .is_err()
        );
        assert!(
            assert_links_resolve("/", r#"<img src="/placeholder.svg">"#, &pages, &assets).is_err()
        );
    }
}
