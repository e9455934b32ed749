// src/model/editorial.rs
//
// News, collaborations and creative-director histories.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Brand,
    Channel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FashionNews {
    pub id: i64,
    pub entity_type: EntityType,
    pub entity_id: i64,
    pub entity_name: Option<String>,
    pub title: String,
    pub url: String,
    pub summary: Option<String>,
    pub published_at: Option<String>,
    pub source: String,
    pub crawled_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollabItem {
    pub id: i64,
    pub brand_a_id: i64,
    pub brand_b_id: i64,
    pub collab_name: String,
    pub collab_category: Option<String>,
    pub release_year: Option<i32>,
    pub hype_score: i64,
    pub source_url: Option<String>,
    pub notes: Option<String>,
    pub created_at: String,
}

/// One row of `/collabs/hype-by-category`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollabHype {
    pub category: String,
    pub count: u64,
    pub avg_hype: f64,
    pub max_hype: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandDirector {
    pub id: i64,
    pub brand_id: i64,
    pub brand_name: Option<String>,
    pub brand_slug: Option<String>,
    pub name: String,
    pub role: String,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub note: Option<String>,
    pub created_at: String,
}

impl BrandDirector {
    /// Tenure, open-ended when `end_year` is missing: "2018 ~ 현재".
    pub fn tenure(&self) -> String {
        crate::format::year_range(self.start_year, self.end_year)
    }

    pub fn is_current(&self) -> bool {
        self.end_year.is_none()
    }

    /// Text searched by the directors page filter.
    pub fn haystack(&self) -> String {
        format!(
            "{} {} {} {}",
            self.name,
            self.brand_name.as_deref().unwrap_or(""),
            self.brand_slug.as_deref().unwrap_or(""),
            self.role
        )
        .to_lowercase()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectorsByBrand {
    pub brand_slug: String,
    pub brand_name: String,
    #[serde(default)]
    pub current_directors: Vec<BrandDirector>,
    #[serde(default)]
    pub past_directors: Vec<BrandDirector>,
}

impl DirectorsByBrand {
    /// Split a flat director list for one brand into current and past.
    pub fn split(brand_slug: &str, brand_name: &str, directors: Vec<BrandDirector>) -> Self {
        let (current_directors, past_directors) = directors.into_iter().partition(|d| d.is_current());
        Self { brand_slug: s!(brand_slug), brand_name: s!(brand_name), current_directors, past_directors }
    }
}
