pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, ArticleSummary, FaqEntry, Product, SlugEntry};
pub use repository::{ArticleFilter, ArticleReadRepository};
pub use value_objects::{ArticleId, ArticleSlug, ArticleTitle, Difficulty};
