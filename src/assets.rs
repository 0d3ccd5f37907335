use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context as _;

#[derive(Debug, Clone, Copy)]
pub enum AssetKind {
    Stylesheet,
    Image,
}

impl AssetKind {
    fn subdir(self) -> &'static str {
        match self {
            AssetKind::Stylesheet => "css",
            AssetKind::Image => "img",
        }
    }
}

/// Writes static assets under `<out>/<assets>/<kind>/<blake3>.<ext>` and
/// remembers the site paths it handed out.
pub struct AssetStore {
    out_dir: PathBuf,
    assets_dir_name: String,
    written: Mutex<BTreeSet<String>>,
}

impl AssetStore {
    pub fn new(out_dir: PathBuf, assets_dir_name: String) -> Self {
        Self {
            out_dir,
            assets_dir_name,
            written: Mutex::new(BTreeSet::new()),
        }
    }

    /// Stores `bytes` and returns its root-relative URL path.
    pub fn put(&self, kind: AssetKind, bytes: &[u8], ext: &str) -> anyhow::Result<String> {
        let rel = write_asset_file(&self.out_dir, &self.assets_dir_name, kind, bytes, ext)?;
        let site_path = format!("/{rel}");
        if let Ok(mut written) = self.written.lock() {
            written.insert(site_path.clone());
        }
        tracing::debug!(path = %site_path, bytes = bytes.len(), "asset written");
        Ok(site_path)
    }

    /// Every site path returned by [`AssetStore::put`] so far.
    pub fn site_paths(&self) -> BTreeSet<String> {
        self.written
            .lock()
            .map(|w| w.clone())
            .unwrap_or_default()
    }
}

fn write_asset_file(
    out_dir: &Path,
    assets_dir_name: &str,
    kind: AssetKind,
    bytes: &[u8],
    ext: &str,
) -> anyhow::Result<String> {
    let hash = blake3::hash(bytes).to_hex().to_string();
    let rel = format!("{}/{}/{}.{}", assets_dir_name, kind.subdir(), &hash[..16], ext);
    let abs = out_dir.join(&rel);
    if let Some(parent) = abs.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    if !abs.exists() {
        std::fs::write(&abs, bytes).with_context(|| format!("write {}", abs.display()))?;
    }
    Ok(rel)
}
