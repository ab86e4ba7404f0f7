use askama::Template;

use super::RenderError;
use crate::models::ImageRecord;

/// Markup for one picture entry. Rendering is pure: the same record always
/// produces the same string, and nothing is written anywhere.
#[derive(Template)]
#[template(path = "apod.html")]
pub struct ImageCard<'a> {
    pub record: &'a ImageRecord,
}

pub fn render_card(record: &ImageRecord) -> Result<String, RenderError> {
    let card = ImageCard { record };
    Ok(card.render()?)
}
