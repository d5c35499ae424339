//! GROQ queries. Projections return exactly the shapes decoded in
//! `documents`; references are joined here so rendering never needs a second
//! lookup.

pub const ARTICLE_BY_SLUG: &str = r#"*[_type == "post" && slug.current == $slug][0]{
  _id,
  title,
  "slug": slug.current,
  quickAnswer,
  problemIntro,
  publishedAt,
  "authorName": author->name,
  "category": category->{title, "slug": slug.current},
  "categories": categories[]->title,
  difficulty,
  estimatedTime,
  tools,
  products[]{name, url, notes},
  faq[]{question, answer},
  body[]{..., _type == "image" => {"url": asset->url, alt}},
  steps[]{..., _type == "image" => {"url": asset->url, alt}}
}"#;

pub const ARTICLES: &str = r#"*[_type == "post" && defined(slug.current) && (
  !defined($category)
  || $category in categories[]->title
  || category->title == $category
  || category->slug.current == $category
)] | order(publishedAt desc) {
  _id,
  title,
  "slug": slug.current,
  publishedAt,
  quickAnswer,
  "authorName": author->name,
  "categoryTitle": category->title,
  "categories": categories[]->title
}"#;

pub const SLUGS: &str = r#"*[_type == "post" && defined(slug.current)]{
  "slug": slug.current,
  publishedAt
}"#;

pub const CATEGORIES: &str = r#"*[_type == "category" && defined(title)] | order(title asc) {
  title,
  "slug": slug.current
}"#;

pub const SUBSCRIBER_TYPE: &str = "subscriber";
