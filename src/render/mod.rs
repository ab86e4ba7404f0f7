pub mod card;
pub mod document;

pub use card::render_card;
pub use document::Document;

/// Errors from the markup pipeline.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("template rendering failed: {0}")]
    Template(#[from] askama::Error),
    #[error("page shell has no element with id \"{0}\"")]
    MissingContainer(String),
}
