//! View Rendering
//!
//! Tera templates embedded at compile time. A view is rendered from its
//! template name plus a serializable view-model.

use std::sync::Arc;

use axum::response::Html;
use serde::Serialize;
use tera::{Context, Tera};

use crate::application::dto::View;
use crate::shared::error::AppError;

const TEMPLATES: [(&str, &str); 4] = [
    ("base.html", include_str!("../../templates/base.html")),
    ("home.html", include_str!("../../templates/home.html")),
    ("catalog.html", include_str!("../../templates/catalog.html")),
    ("add_product.html", include_str!("../../templates/add_product.html")),
];

/// Template renderer shared across handlers.
#[derive(Clone)]
pub struct Views {
    tera: Arc<Tera>,
}

impl Views {
    /// Build the renderer from the embedded templates.
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES)?;
        Ok(Self {
            tera: Arc::new(tera),
        })
    }

    /// Render `view` with `model` as its context.
    pub fn render<T: Serialize>(&self, view: View, model: &T) -> Result<Html<String>, AppError> {
        let context = Context::from_serialize(model)?;
        let html = self.tera.render(view.template_name(), &context)?;
        Ok(Html(html))
    }
}
