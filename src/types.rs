use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{LarderError, Result};

/// A fully extracted recipe, ready to be archived. Only ever built
/// complete: extraction either yields all fields or no record at all.
///
/// Field order here is the field order in the serialized JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub title: String,
    pub ingredient_groups: Vec<IngredientGroup>,
    pub instruction_groups: Vec<InstructionGroup>,
    pub url: String,
    pub scraped: DateTime<Utc>,
}

/// A named or unnamed cluster of ingredient entries. `name` is `None`
/// when no heading precedes the list in the source markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientGroup {
    pub name: Option<String>,
    pub ingredients: Vec<String>,
}

/// A named or unnamed cluster of instruction entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstructionGroup {
    pub name: Option<String>,
    pub instructions: Vec<String>,
}

/// What extraction pulls out of the page before the source URL and
/// timestamp are stamped on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeContent {
    pub title: String,
    pub ingredient_groups: Vec<IngredientGroup>,
    pub instruction_groups: Vec<InstructionGroup>,
}

impl RecipeContent {
    pub fn into_recipe(self, url: impl Into<String>, scraped: DateTime<Utc>) -> Recipe {
        Recipe {
            title: self.title,
            ingredient_groups: self.ingredient_groups,
            instruction_groups: self.instruction_groups,
            url: url.into(),
            scraped,
        }
    }
}

/// The recipe-card layouts this crawler knows how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeStyle {
    /// WP Recipe Maker: nested `wprm-*` group containers.
    Wprm,
    /// Tasty Recipes: flat heading/list siblings under `tasty-recipes-*`.
    Tasty,
}

impl RecipeStyle {
    pub fn name(&self) -> &'static str {
        match self {
            RecipeStyle::Wprm => "wprm",
            RecipeStyle::Tasty => "tasty",
        }
    }
}

/// The one piece of configuration a crawl needs: which listing to walk.
/// Everything else (origin, per-site directory, page URLs) derives
/// from it.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    list_url: Url,
    host: String,
}

impl SiteConfig {
    pub fn new(list_url: Url) -> Result<Self> {
        let host = list_url
            .host_str()
            .ok_or_else(|| LarderError::InvalidUrl(list_url.to_string()))?
            .to_string();
        Ok(Self { list_url, host })
    }

    pub fn list_url(&self) -> &str {
        self.list_url.as_str()
    }

    /// `scheme://host[:port]`, the prefix stripped from recipe URLs to
    /// derive filenames.
    pub fn origin(&self) -> String {
        self.list_url.origin().ascii_serialization()
    }

    /// Host name, used as the per-site directory under the output root.
    pub fn site_name(&self) -> &str {
        &self.host
    }

    /// Address of the n-th listing page.
    pub fn page_url(&self, page: u32) -> String {
        format!(
            "{}/page/{}",
            self.list_url.as_str().trim_end_matches('/'),
            page
        )
    }
}

/// Summary of one crawl run. `saved` keeps filenames in write order.
#[derive(Debug, Clone, Serialize)]
pub struct CrawlReport {
    pub pages: u32,
    pub discovered: usize,
    pub saved: Vec<String>,
    pub failures: Vec<CrawlFailure>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CrawlFailure {
    pub url: String,
    pub reason: String,
}
