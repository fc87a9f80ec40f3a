//! Recipe-card detection and extraction.
//!
//! Two card layouts are supported. WPRM encodes grouping structurally:
//! every group is an explicit container holding a heading and a list.
//! Tasty encodes grouping sequentially: the section is a flat run of
//! sibling headings and lists, and a heading names whatever lists
//! follow it. Extraction is total: once a document is classified it
//! always yields a `RecipeContent`, with empty fields where the markup
//! has none.

use scraper::{ElementRef, Html, Selector};

use crate::selectors::*;
use crate::types::{IngredientGroup, InstructionGroup, RecipeContent, RecipeStyle};

/// Classify a recipe page by its card markup, WPRM first. Pages with
/// neither card are unrecognized; there is no fallback guessing.
pub fn detect_style(doc: &Html) -> Option<RecipeStyle> {
    if doc.select(&WPRM_CONTAINER).next().is_some() {
        return Some(RecipeStyle::Wprm);
    }
    if doc.select(&TASTY_CONTAINER).next().is_some() {
        return Some(RecipeStyle::Tasty);
    }
    None
}

/// Extract the recipe from a classified document.
pub fn extract_recipe(doc: &Html, style: RecipeStyle) -> RecipeContent {
    match style {
        RecipeStyle::Wprm => extract_wprm(doc),
        RecipeStyle::Tasty => extract_tasty(doc),
    }
}

fn extract_wprm(doc: &Html) -> RecipeContent {
    RecipeContent {
        title: first_text(doc, &WPRM_NAME),
        ingredient_groups: nested_groups(doc, &WPRM_INGREDIENTS, &WPRM_INGREDIENT_GROUP)
            .into_iter()
            .map(|(name, items)| IngredientGroup {
                name,
                ingredients: items,
            })
            .collect(),
        instruction_groups: nested_groups(doc, &WPRM_INSTRUCTIONS, &WPRM_INSTRUCTION_GROUP)
            .into_iter()
            .map(|(name, items)| InstructionGroup {
                name,
                instructions: items,
            })
            .collect(),
    }
}

fn extract_tasty(doc: &Html) -> RecipeContent {
    RecipeContent {
        title: first_text(doc, &TASTY_TITLE),
        // Tasty renders ingredients as unordered lists and
        // instructions as ordered lists.
        ingredient_groups: sibling_groups(doc, &TASTY_INGREDIENTS, "ul")
            .into_iter()
            .map(|(name, items)| IngredientGroup {
                name,
                ingredients: items,
            })
            .collect(),
        instruction_groups: sibling_groups(doc, &TASTY_INSTRUCTIONS, "ol")
            .into_iter()
            .map(|(name, items)| InstructionGroup {
                name,
                instructions: items,
            })
            .collect(),
    }
}

/// Groups from a section with explicit group containers: one group per
/// container, in document order, named by its heading when present.
fn nested_groups(
    doc: &Html,
    section: &Selector,
    group: &Selector,
) -> Vec<(Option<String>, Vec<String>)> {
    let section = match doc.select(section).next() {
        Some(s) => s,
        None => return Vec::new(),
    };
    section
        .select(group)
        .map(|g| {
            let name = g.select(&GROUP_HEADING).next().map(|h| text_of(&h));
            let items = g.select(&GROUP_LIST_ITEMS).map(|li| text_of(&li)).collect();
            (name, items)
        })
        .collect()
}

/// Groups from a section without containers: fold over the section's
/// child elements in document order, carrying the current heading. A
/// heading renames what follows; each list emits its own group, so two
/// lists under one heading stay separate, and a list before any
/// heading gets no name.
fn sibling_groups(
    doc: &Html,
    section: &Selector,
    list_tag: &str,
) -> Vec<(Option<String>, Vec<String>)> {
    let section = match doc.select(section).next() {
        Some(s) => s,
        None => return Vec::new(),
    };
    let (_, groups) = section.children().filter_map(ElementRef::wrap).fold(
        (None::<String>, Vec::new()),
        |(current, mut groups), child| match child.value().name() {
            "h4" => (Some(text_of(&child)), groups),
            tag if tag == list_tag => {
                let items = child.select(&LIST_ITEM).map(|li| text_of(&li)).collect();
                groups.push((current.clone(), items));
                (current, groups)
            }
            _ => (current, groups),
        },
    );
    groups
}

/// Text content of the first match, trimmed; empty when absent.
fn first_text(doc: &Html, selector: &Selector) -> String {
    doc.select(selector)
        .next()
        .map(|el| text_of(&el))
        .unwrap_or_default()
}

fn text_of(el: &ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wprm_doc() -> Html {
        Html::parse_document(
            r#"
            <html><body>
            <div class="wprm-recipe-container">
              <h2 class="wprm-recipe-name"> Crockpot Chicken Chili </h2>
              <div class="wprm-recipe-ingredients-container">
                <div class="wprm-recipe-ingredient-group">
                  <h4 class="wprm-recipe-group-name">Chili</h4>
                  <ul>
                    <li>1 lb. boneless chicken breast</li>
                    <li>2 cans black beans</li>
                  </ul>
                </div>
                <div class="wprm-recipe-ingredient-group">
                  <h4 class="wprm-recipe-group-name">Toppings</h4>
                  <ul><li>shredded cheddar</li></ul>
                </div>
              </div>
              <div class="wprm-recipe-instructions-container">
                <div class="wprm-recipe-instruction-group">
                  <h4>Chili</h4>
                  <ul>
                    <li>Place everything in the crockpot.</li>
                    <li>Cook on low for 6 hours.</li>
                  </ul>
                </div>
              </div>
            </div>
            </body></html>
            "#,
        )
    }

    fn tasty_doc() -> Html {
        Html::parse_document(
            r#"
            <html><body>
            <div class="tasty-recipes-entry-content">
              <h2 class="tasty-recipes-title">Banana Bread</h2>
              <div class="tasty-recipes-ingredients">
                <ul><li>3 ripe bananas</li></ul>
                <h4>Dry Ingredients</h4>
                <ul>
                  <li>2 cups flour</li>
                  <li>1 tsp baking soda</li>
                </ul>
                <ul><li>pinch of salt</li></ul>
              </div>
              <div class="tasty-recipes-instructions">
                <h4>Bake</h4>
                <ol>
                  <li>Mash the bananas.</li>
                  <li>Bake for 50 minutes.</li>
                </ol>
              </div>
            </div>
            </body></html>
            "#,
        )
    }

    #[test]
    fn detects_wprm_card() {
        assert_eq!(detect_style(&wprm_doc()), Some(RecipeStyle::Wprm));
    }

    #[test]
    fn detects_tasty_card() {
        assert_eq!(detect_style(&tasty_doc()), Some(RecipeStyle::Tasty));
    }

    #[test]
    fn detection_prefers_wprm_when_both_cards_present() {
        let doc = Html::parse_document(
            r#"<div class="wprm-recipe-container"></div>
               <div class="tasty-recipes-entry-content"></div>"#,
        );
        assert_eq!(detect_style(&doc), Some(RecipeStyle::Wprm));
    }

    #[test]
    fn plain_pages_are_unrecognized() {
        let doc = Html::parse_document("<html><body><p>Just a blog post.</p></body></html>");
        assert_eq!(detect_style(&doc), None);
    }

    #[test]
    fn wprm_yields_one_group_per_container_in_document_order() {
        let content = extract_recipe(&wprm_doc(), RecipeStyle::Wprm);
        assert_eq!(content.title, "Crockpot Chicken Chili");

        let names: Vec<_> = content
            .ingredient_groups
            .iter()
            .map(|g| g.name.as_deref())
            .collect();
        assert_eq!(names, vec![Some("Chili"), Some("Toppings")]);
        assert_eq!(
            content.ingredient_groups[0].ingredients,
            vec!["1 lb. boneless chicken breast", "2 cans black beans"]
        );
        assert_eq!(
            content.ingredient_groups[1].ingredients,
            vec!["shredded cheddar"]
        );

        assert_eq!(content.instruction_groups.len(), 1);
        assert_eq!(content.instruction_groups[0].name.as_deref(), Some("Chili"));
        assert_eq!(
            content.instruction_groups[0].instructions,
            vec![
                "Place everything in the crockpot.",
                "Cook on low for 6 hours."
            ]
        );
    }

    #[test]
    fn wprm_group_without_heading_has_no_name() {
        let doc = Html::parse_document(
            r#"<div class="wprm-recipe-container">
                 <div class="wprm-recipe-ingredients-container">
                   <div class="wprm-recipe-ingredient-group">
                     <ul><li>1 egg</li></ul>
                   </div>
                 </div>
               </div>"#,
        );
        let content = extract_recipe(&doc, RecipeStyle::Wprm);
        assert_eq!(content.ingredient_groups.len(), 1);
        assert_eq!(content.ingredient_groups[0].name, None);
        assert_eq!(content.ingredient_groups[0].ingredients, vec!["1 egg"]);
    }

    #[test]
    fn tasty_list_before_any_heading_gets_no_name() {
        let content = extract_recipe(&tasty_doc(), RecipeStyle::Tasty);
        assert_eq!(content.ingredient_groups[0].name, None);
        assert_eq!(
            content.ingredient_groups[0].ingredients,
            vec!["3 ripe bananas"]
        );
    }

    #[test]
    fn tasty_consecutive_lists_share_the_heading_but_stay_separate() {
        let content = extract_recipe(&tasty_doc(), RecipeStyle::Tasty);
        assert_eq!(content.ingredient_groups.len(), 3);
        assert_eq!(
            content.ingredient_groups[1].name.as_deref(),
            Some("Dry Ingredients")
        );
        assert_eq!(
            content.ingredient_groups[2].name.as_deref(),
            Some("Dry Ingredients")
        );
        assert_eq!(
            content.ingredient_groups[1].ingredients,
            vec!["2 cups flour", "1 tsp baking soda"]
        );
        assert_eq!(content.ingredient_groups[2].ingredients, vec!["pinch of salt"]);
    }

    #[test]
    fn tasty_instructions_come_from_ordered_lists() {
        let content = extract_recipe(&tasty_doc(), RecipeStyle::Tasty);
        assert_eq!(content.title, "Banana Bread");
        assert_eq!(content.instruction_groups.len(), 1);
        assert_eq!(content.instruction_groups[0].name.as_deref(), Some("Bake"));
        assert_eq!(
            content.instruction_groups[0].instructions,
            vec!["Mash the bananas.", "Bake for 50 minutes."]
        );
    }

    #[test]
    fn tasty_unordered_list_in_instructions_is_ignored() {
        let doc = Html::parse_document(
            r#"<div class="tasty-recipes-entry-content">
                 <div class="tasty-recipes-instructions">
                   <ul><li>not a step</li></ul>
                   <ol><li>a real step</li></ol>
                 </div>
               </div>"#,
        );
        let content = extract_recipe(&doc, RecipeStyle::Tasty);
        assert_eq!(content.instruction_groups.len(), 1);
        assert_eq!(
            content.instruction_groups[0].instructions,
            vec!["a real step"]
        );
    }

    #[test]
    fn extraction_is_total_on_sparse_documents() {
        let doc = Html::parse_document(r#"<div class="wprm-recipe-container"></div>"#);
        let content = extract_recipe(&doc, RecipeStyle::Wprm);
        assert_eq!(content.title, "");
        assert!(content.ingredient_groups.is_empty());
        assert!(content.instruction_groups.is_empty());

        let doc = Html::parse_document(r#"<div class="tasty-recipes-entry-content"></div>"#);
        let content = extract_recipe(&doc, RecipeStyle::Tasty);
        assert_eq!(content.title, "");
        assert!(content.ingredient_groups.is_empty());
        assert!(content.instruction_groups.is_empty());
    }
}
