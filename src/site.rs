use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::Arc;

use anyhow::Context as _;

use crate::api::ApiClient;
use crate::assets::{AssetKind, AssetStore};
use crate::builtin;
use crate::catalog;
use crate::cli::Args;
use crate::detail_view::{self, FetchedPost};
use crate::error::FetchResult;
use crate::links;
use crate::list_view::{self, Loadable};
use crate::pages::{self, Layout};
use crate::progress::Progress;
use crate::routes::{PostRef, Route};
use crate::session::ViewSession;

/// Summary of one site build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteReport {
    pub pages: usize,
    pub posts: usize,
    pub detail_pages: usize,
    pub posts_failed: bool,
}

struct RenderedPage {
    route: Route,
    html: String,
}

pub async fn build(
    args: &Args,
    client: &ApiClient,
    progress: Arc<Progress>,
) -> anyhow::Result<SiteReport> {
    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("create {}", args.out.display()))?;

    progress.set_stage("writing assets");
    let store = AssetStore::new(args.out.clone(), args.assets_dir_name.clone());
    let css_href = store.put(AssetKind::Stylesheet, builtin::BUILTIN_CSS.as_bytes(), "css")?;
    let placeholder_src = store.put(AssetKind::Image, builtin::PLACEHOLDER_SVG.as_bytes(), "svg")?;
    let layout = Layout {
        site_title: &args.site_title,
        css_href: &css_href,
        placeholder_src: &placeholder_src,
    };

    progress.set_stage("loading posts");
    let mut list = list_view::load(client).await;
    list.set_query(args.query.as_str());

    let (post_count, detail_ids, posts_failed) = match list.posts() {
        Loadable::Ready(posts) => (
            posts.len(),
            posts.iter().take(args.post_pages).map(|p| p.id).collect(),
            false,
        ),
        Loadable::Failed(_) => (0, Vec::new(), true),
        Loadable::Pending => (0, Vec::new(), false),
    };

    progress.set_stage("loading post details");
    let fetched = load_details(client, &detail_ids).await;
    tracing::info!(
        requested = detail_ids.len(),
        loaded = fetched.len(),
        "post details loaded"
    );

    progress.set_stage("rendering pages");
    let articles = catalog::articles();
    let recent = &articles[..articles.len().min(3)];
    let mut rendered = Vec::new();

    rendered.push(RenderedPage {
        route: Route::Home,
        html: layout.page(
            "",
            &Route::Home,
            pages::home(&layout, &catalog::featured_projects(), recent),
            false,
        ),
    });
    rendered.push(RenderedPage {
        route: Route::Portfolio,
        html: layout.page(
            "Portfolio",
            &Route::Portfolio,
            pages::portfolio(&layout, &catalog::projects()),
            false,
        ),
    });

    let grid = list.render_with(|post| {
        fetched
            .contains_key(&post.id)
            .then(|| Route::BlogPost(PostRef::Id(post.id)).path())
    });
    rendered.push(RenderedPage {
        route: Route::Blog,
        html: layout.page(
            "Blog",
            &Route::Blog,
            pages::blog(list.query(), grid, &articles),
            true,
        ),
    });

    for article in &articles {
        let route = Route::BlogPost(PostRef::Slug(article.slug.clone()));
        let html = layout.page(&article.title, &route, pages::post(&layout, article, None), false);
        rendered.push(RenderedPage { route, html });
    }

    for post in fetched.values() {
        let route = Route::BlogPost(PostRef::Id(post.post.id));
        let article = post.to_article();
        let html = layout.page(
            &article.title,
            &route,
            pages::post(&layout, &article, Some(&post.comments)),
            false,
        );
        rendered.push(RenderedPage { route, html });
    }

    rendered.push(RenderedPage {
        route: Route::Contact,
        html: layout.page("Contact", &Route::Contact, pages::contact(), false),
    });

    progress.set_stage("checking links");
    let page_paths: BTreeSet<String> = rendered.iter().map(|p| p.route.path()).collect();
    let asset_paths = store.site_paths();
    for page in &rendered {
        links::assert_links_resolve(&page.route.path(), &page.html, &page_paths, &asset_paths)?;
    }

    progress.set_stage("writing pages");
    progress.set_pages_total(rendered.len());
    for page in &rendered {
        write_page(&args.out, page)?;
        progress.page_done(&page.route.path());
    }

    tracing::info!(
        pages = rendered.len(),
        out = %args.out.display(),
        "site written"
    );
    Ok(SiteReport {
        pages: rendered.len(),
        posts: post_count,
        detail_pages: fetched.len(),
        posts_failed,
    })
}

/// Loads every requested post detail; failures are logged and skipped.
async fn load_details(client: &ApiClient, ids: &[u64]) -> BTreeMap<u64, FetchedPost> {
    let mut session: ViewSession<(u64, FetchResult<FetchedPost>)> = ViewSession::new();
    for &id in ids {
        let c = client.clone();
        session.spawn(async move { (id, detail_view::load_post(&c, id).await) });
    }

    let mut out = BTreeMap::new();
    while let Some((id, res)) = session.next_event().await {
        match res {
            Ok(post) => {
                out.insert(id, post);
            }
            Err(e) => tracing::warn!(post = id, error = %e, "skipping post detail page"),
        }
    }
    out
}

fn write_page(out_dir: &Path, page: &RenderedPage) -> anyhow::Result<()> {
    let path = out_dir.join(page.route.output_file());
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    std::fs::write(&path, &page.html).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
