use recipe_qr_shared::RecipeQrError;
use std::collections::HashSet;

/// Fixed allow-list of API keys, loaded once at startup.
#[derive(Debug, Clone)]
pub struct KeyValidator {
    keys: HashSet<String>,
}

impl KeyValidator {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Exact, case-sensitive membership. No trimming.
    pub fn validate(&self, candidate: &str) -> bool {
        self.keys.contains(candidate)
    }

    pub fn check(&self, candidate: Option<&str>) -> Result<(), RecipeQrError> {
        match candidate {
            None => Err(RecipeQrError::MissingApiKey),
            Some(key) if self.validate(key) => Ok(()),
            Some(_) => Err(RecipeQrError::InvalidApiKey),
        }
    }
}
