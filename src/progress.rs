use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use indicatif::{
    HumanBytes, HumanDuration, MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle,
};
use reqwest::Method;
use url::Url;

#[derive(Debug, Default)]
struct MethodCounters {
    get: AtomicU64,
    post: AtomicU64,
    put: AtomicU64,
    delete: AtomicU64,
    other: AtomicU64,
}

impl MethodCounters {
    fn inc(&self, method: &Method) {
        let counter = if method == Method::GET {
            &self.get
        } else if method == Method::POST {
            &self.post
        } else if method == Method::PUT {
            &self.put
        } else if method == Method::DELETE {
            &self.delete
        } else {
            &self.other
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    fn snapshot(&self) -> (u64, u64, u64, u64, u64) {
        (
            self.get.load(Ordering::Relaxed),
            self.post.load(Ordering::Relaxed),
            self.put.load(Ordering::Relaxed),
            self.delete.load(Ordering::Relaxed),
            self.other.load(Ordering::Relaxed),
        )
    }
}

pub struct Progress {
    enabled: bool,
    start: Instant,
    max_concurrency: usize,

    // UI
    mp: Option<MultiProgress>,
    stage: ProgressBar,
    pages: ProgressBar,
    requests: ProgressBar,

    // Counters
    pages_total: AtomicU64,
    pages_done: AtomicU64,

    http_in_flight: AtomicU64,
    http_done: AtomicU64,
    http_failed: AtomicU64,
    http_bytes: AtomicU64,

    done_by_method: MethodCounters,
    last_http_label: Mutex<String>,
}

impl Progress {
    pub fn new(enabled: bool, max_concurrency: usize) -> Arc<Self> {
        let (mp, stage, pages, requests) = if enabled {
            let mp = MultiProgress::with_draw_target(ProgressDrawTarget::stderr());
            let stage = mp.add(ProgressBar::new_spinner());
            stage.set_style(spinner_style());
            stage.enable_steady_tick(Duration::from_millis(80));
            stage.set_message("starting");

            let pages = mp.add(ProgressBar::new(0));
            pages.set_style(bar_style());
            pages.set_message("pages");

            let requests = mp.add(ProgressBar::new_spinner());
            requests.set_style(spinner_style());
            requests.enable_steady_tick(Duration::from_millis(120));
            requests.set_message("requests");
            (Some(mp), stage, pages, requests)
        } else {
            (
                None,
                ProgressBar::hidden(),
                ProgressBar::hidden(),
                ProgressBar::hidden(),
            )
        };

        Arc::new(Self {
            enabled,
            start: Instant::now(),
            max_concurrency: max_concurrency.max(1),
            mp,
            stage,
            pages,
            requests,
            pages_total: AtomicU64::new(0),
            pages_done: AtomicU64::new(0),
            http_in_flight: AtomicU64::new(0),
            http_done: AtomicU64::new(0),
            http_failed: AtomicU64::new(0),
            http_bytes: AtomicU64::new(0),
            done_by_method: MethodCounters::default(),
            last_http_label: Mutex::new(String::new()),
        })
    }

    pub fn set_stage(&self, msg: impl Into<String>) {
        if !self.enabled {
            return;
        }
        self.stage.set_message(msg.into());
    }

    pub fn set_pages_total(&self, total: usize) {
        self.pages_total.store(total as u64, Ordering::Relaxed);
        if self.enabled {
            self.pages.set_length(total as u64);
        }
    }

    pub fn page_done(&self, route: &str) {
        self.pages_done.fetch_add(1, Ordering::Relaxed);
        if self.enabled {
            self.pages.inc(1);
            self.pages.set_message(route.to_string());
        }
    }

    pub fn http_start(&self, method: &Method, url: &Url) {
        self.http_in_flight.fetch_add(1, Ordering::Relaxed);
        if self.enabled {
            self.set_last_label(format!("{method} {url}"));
            self.refresh_requests();
        }
    }

    pub fn http_ok(&self, method: &Method, url: &Url, bytes: usize) {
        self.http_in_flight.fetch_sub(1, Ordering::Relaxed);
        self.http_done.fetch_add(1, Ordering::Relaxed);
        self.http_bytes.fetch_add(bytes as u64, Ordering::Relaxed);
        self.done_by_method.inc(method);

        if self.enabled {
            self.set_last_label(format!("{method} {url} ok {bytes}B"));
            self.refresh_requests();
        }
    }

    pub fn http_err(&self, method: &Method, url: &Url) {
        self.http_in_flight.fetch_sub(1, Ordering::Relaxed);
        self.http_failed.fetch_add(1, Ordering::Relaxed);
        if self.enabled {
            self.set_last_label(format!("{method} {url} failed"));
            self.refresh_requests();
        }
    }

    pub fn finish(&self) {
        if !self.enabled {
            return;
        }
        self.refresh_requests();
        self.stage.finish_with_message("done");
        self.pages.finish_and_clear();
        self.requests.finish_and_clear();
        if let Some(mp) = &self.mp {
            // Nothing to do if the terminal went away.
            let _ = mp.println(format!("Done in {}", HumanDuration(self.start.elapsed())));
        }
    }

    fn set_last_label(&self, label: String) {
        if let Ok(mut last) = self.last_http_label.lock() {
            *last = label;
        }
    }

    fn refresh_requests(&self) {
        if !self.enabled {
            return;
        }

        let in_flight = self.http_in_flight.load(Ordering::Relaxed);
        let done = self.http_done.load(Ordering::Relaxed);
        let failed = self.http_failed.load(Ordering::Relaxed);
        let bytes = self.http_bytes.load(Ordering::Relaxed);
        let (get, post, put, delete, other) = self.done_by_method.snapshot();

        let last = self
            .last_http_label
            .lock()
            .map(|s| s.clone())
            .unwrap_or_default();
        self.requests.set_message(format!(
            "HTTP: done {done} | failed {failed} | in-flight {in_flight}/{max} | bytes {bytes} | GET {get} POST {post} PUT {put} DELETE {delete} other {other} | {last}",
            max = self.max_concurrency,
            bytes = HumanBytes(bytes),
        ));
    }
}

fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner} {msg}  [{elapsed_precise}]")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

fn bar_style() -> ProgressStyle {
    ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
        .map(|s| s.progress_chars("##-"))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
}
