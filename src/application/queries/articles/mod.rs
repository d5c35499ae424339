mod categories;
mod get_by_slug;
mod list;
mod service;
mod slugs;

#[cfg(test)]
pub(crate) mod test_support;

pub use get_by_slug::GetArticleBySlugQuery;
pub use list::ListArticlesQuery;
pub use service::ArticleQueryService;
