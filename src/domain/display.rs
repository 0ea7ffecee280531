/// Display lookups for habit categories
///
/// The category enum is a semantic tag; which glyph or accent a surface draws
/// for it is a presentation decision, so those mappings live here instead of
/// on the type itself.

use crate::domain::Category;

/// Get the Material Symbols glyph name for a category
pub fn category_icon(category: Category) -> &'static str {
    match category {
        Category::Fitness => "fitness_center",
        Category::Reading => "menu_book",
        Category::Hydration => "water_drop",
        Category::Meditation => "self_improvement",
        Category::Sleep => "bedtime",
    }
}

/// Get the default accent token for a category
///
/// Used when an authoring surface wants a sensible starting color; the habit
/// still stores whatever color the user ends up picking.
pub fn category_accent(category: Category) -> &'static str {
    match category {
        Category::Fitness => "orange",
        Category::Reading => "blue",
        Category::Hydration => "indigo",
        Category::Meditation => "purple",
        Category::Sleep => "yellow",
    }
}
