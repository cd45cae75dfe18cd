use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub category_id: i32,
    pub name: String,
    pub slug: String,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl Category {
    /// Path of the product listing filtered by this category.
    pub fn absolute_url(&self) -> String {
        format!("/products/category/{}/", self.slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_url_uses_slug() {
        let category = Category {
            category_id: 1,
            name: "Programming".to_string(),
            slug: "programming".to_string(),
            created_at: None,
            updated_at: None,
        };

        assert_eq!(category.absolute_url(), "/products/category/programming/");
    }
}
