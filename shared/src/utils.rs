use crate::types::Recipe;
use chrono::{DateTime, Utc};

/// Text encoded into a recipe's QR code: the name, an `Ingredients:` line,
/// then one ingredient per line in catalog order.
pub fn recipe_text(recipe: &Recipe) -> String {
    format!(
        "{}\nIngredients:\n{}",
        recipe.name,
        recipe.ingredients.join("\n")
    )
}

/// File name under which a recipe's QR image is stored.
pub fn image_file_name(recipe_name: &str) -> String {
    format!("{}.png", recipe_name.replace(' ', "_"))
}

/// Longest file name, in bytes, common filesystems accept.
pub const MAX_FILE_NAME_LEN: usize = 255;

/// Whether a client-supplied name stays inside the image directory once
/// turned into a file name, and that file name fits the filesystem limit.
pub fn is_safe_key(recipe_name: &str) -> bool {
    !recipe_name.is_empty()
        && recipe_name != "."
        && recipe_name != ".."
        && !recipe_name.contains(['/', '\\', '\0'])
        && image_file_name(recipe_name).len() <= MAX_FILE_NAME_LEN
}

// 时间工具函数
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}
