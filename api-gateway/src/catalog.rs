use rand::seq::SliceRandom;
use rand::Rng;
use recipe_qr_shared::{Recipe, RecipeQrError};

/// Read-only list of recipes served by `/recipe_qr`.
#[derive(Debug, Clone)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
}

impl RecipeCatalog {
    pub fn new(recipes: Vec<Recipe>) -> Result<Self, RecipeQrError> {
        if recipes.is_empty() {
            return Err(RecipeQrError::EmptyCatalog);
        }
        Ok(Self { recipes })
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Uniform pick, independent of previous calls.
    pub fn pick_random(&self) -> &Recipe {
        self.pick_with(&mut rand::thread_rng())
    }

    pub fn pick_with<R: Rng + ?Sized>(&self, rng: &mut R) -> &Recipe {
        // new() guarantees at least one entry
        self.recipes
            .choose(rng)
            .unwrap_or(&self.recipes[0])
    }
}
