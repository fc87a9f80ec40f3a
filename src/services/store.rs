use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use log::debug;

use crate::error::{LarderError, Result};
use crate::types::Recipe;

/// Durable key-value persistence for recipes, keyed by filename.
pub trait RecipeStore: Send + Sync {
    fn save(&self, filename: &str, recipe: &Recipe) -> Result<PathBuf>;
}

/// Filename for a recipe URL: the site origin stripped, path
/// separators removed, `.json` appended. Two URLs that collapse to the
/// same slug silently share a file; the later write wins.
pub fn recipe_filename(origin: &str, url: &str) -> String {
    let slug = url.strip_prefix(origin).unwrap_or(url).replace('/', "");
    format!("{slug}.json")
}

/// One pretty-printed JSON file per recipe under `<root>/<site>/`.
pub struct FsRecipeStore {
    dir: PathBuf,
}

impl FsRecipeStore {
    pub fn new(output_root: &Path, site_name: &str) -> Self {
        Self {
            dir: output_root.join(site_name),
        }
    }

    /// Platform data directory used when no output root is given.
    pub fn default_root() -> Result<PathBuf> {
        let proj = ProjectDirs::from("io", "larder", "larder")
            .ok_or_else(|| LarderError::Storage("could not resolve a data directory".into()))?;
        Ok(proj.data_local_dir().join("recipes"))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl RecipeStore for FsRecipeStore {
    fn save(&self, filename: &str, recipe: &Recipe) -> Result<PathBuf> {
        // The site directory is created on first write; the output
        // root itself must already exist.
        if !self.dir.exists() {
            fs::create_dir(&self.dir)?;
        }
        let path = self.dir.join(filename);
        // Serialize fully before touching the file so a failure never
        // leaves a partial record behind.
        let json = serde_json::to_string_pretty(recipe)?;
        fs::write(&path, json)?;
        debug!("wrote {}", path.display());
        Ok(path)
    }
}
