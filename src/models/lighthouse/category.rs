use serde::{Deserialize, Serialize};

// pub struct for each category score
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Category {
    #[serde(default)]
    pub score: Option<f64>,
}

// pub struct for Lighthouse categories as sent by runPagespeed
#[derive(Debug, Deserialize, Default)]
pub struct Categories {
    pub performance: Option<Category>,
    pub accessibility: Option<Category>,
    #[serde(rename = "best-practices")]
    pub best_practices: Option<Category>,
    pub seo: Option<Category>,
}

/// Normalized category scores in `[0, 1]`, `None` when the category was not returned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CategoryScores {
    pub performance: Option<f64>,
    pub accessibility: Option<f64>,
    pub best_practices: Option<f64>,
    pub seo: Option<f64>,
}

impl From<Categories> for CategoryScores {
    fn from(categories: Categories) -> Self {
        let score = |c: Option<Category>| c.and_then(|c| c.score);
        CategoryScores {
            performance: score(categories.performance),
            accessibility: score(categories.accessibility),
            best_practices: score(categories.best_practices),
            seo: score(categories.seo),
        }
    }
}
