//! Shared Selectors
//!
//! Every structural marker the crawler relies on, parsed once. The
//! class names are the ones the site's two recipe-card plugins and its
//! Genesis theme actually render.

use once_cell::sync::Lazy;
use scraper::Selector;

/// Marker for the WP Recipe Maker card.
pub static WPRM_CONTAINER: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".wprm-recipe-container").expect("valid wprm container selector"));

/// Recipe title inside a WPRM card.
pub static WPRM_NAME: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".wprm-recipe-name").expect("valid wprm name selector"));

/// Ingredients section of a WPRM card.
pub static WPRM_INGREDIENTS: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(".wprm-recipe-ingredients-container").expect("valid wprm ingredients selector")
});

/// One explicit ingredient group within the WPRM ingredients section.
pub static WPRM_INGREDIENT_GROUP: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(".wprm-recipe-ingredient-group").expect("valid wprm ingredient group selector")
});

/// Instructions section of a WPRM card.
pub static WPRM_INSTRUCTIONS: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(".wprm-recipe-instructions-container")
        .expect("valid wprm instructions selector")
});

/// One explicit instruction group within the WPRM instructions section.
pub static WPRM_INSTRUCTION_GROUP: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(".wprm-recipe-instruction-group")
        .expect("valid wprm instruction group selector")
});

/// Marker for the Tasty Recipes card.
pub static TASTY_CONTAINER: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(".tasty-recipes-entry-content").expect("valid tasty container selector")
});

/// Recipe title inside a Tasty card.
pub static TASTY_TITLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".tasty-recipes-title").expect("valid tasty title selector"));

/// Ingredients section of a Tasty card (flat heading/list siblings).
pub static TASTY_INGREDIENTS: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(".tasty-recipes-ingredients").expect("valid tasty ingredients selector")
});

/// Instructions section of a Tasty card (flat heading/list siblings).
pub static TASTY_INSTRUCTIONS: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(".tasty-recipes-instructions").expect("valid tasty instructions selector")
});

/// Group heading element in either card layout.
pub static GROUP_HEADING: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h4").expect("valid group heading selector"));

/// Entries of an explicit group container.
pub static GROUP_LIST_ITEMS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("ul li").expect("valid group list items selector"));

/// Entries of a single list element.
pub static LIST_ITEM: Lazy<Selector> =
    Lazy::new(|| Selector::parse("li").expect("valid list item selector"));

/// Pagination control of the listing archive.
pub static PAGINATION: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(".archive-pagination.pagination ul").expect("valid pagination selector")
});

/// The next-page control; the element before it is the last numbered
/// page link.
pub static PAGINATION_NEXT: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".pagination-next").expect("valid pagination next selector"));

/// One article entry on a listing page.
pub static ARTICLE: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(".site-container .site-inner .content-sidebar-wrap article")
        .expect("valid article selector")
});

/// Anchor elements with hrefs.
pub static LINK: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("valid link selector"));

/// Any anchor element, href or not.
pub static PAGE_LINK: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a").expect("valid page link selector"));
