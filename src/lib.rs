pub mod cli;
pub mod config;
pub mod models;
pub mod services;


pub use config::Config;
pub use services::seo::SeoAnalyzer;
pub use services::slug::{generate_slug, validate_slug, SlugSync};
