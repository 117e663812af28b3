//! Row projection of destinations for the landing page template.

use crate::api::models::Destination;
use crate::error::RenderError;
use minijinja::Value;
use std::collections::BTreeMap;

pub const IMAGE_SIZE_QUERY: &str = "?w=240&h=160";

/// HTML that is emitted verbatim by the template.
///
/// Destination descriptions are authored in Guide and trusted as-is; wrapping
/// them here keeps that decision visible wherever rows are built.
#[derive(Debug, Clone, PartialEq)]
pub struct TrustedHtml(String);

impl TrustedHtml {
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_value(&self) -> Value {
        Value::from_safe_string(self.0.clone())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub name: String,
    pub description: TrustedHtml,
    pub image_url: String,
}

impl Row {
    /// Template-facing value with the `Name`, `Description`, `ImageURL` fields.
    pub fn to_value(&self) -> Value {
        let mut fields = BTreeMap::new();
        fields.insert("Name".to_string(), Value::from(self.name.as_str()));
        fields.insert("Description".to_string(), self.description.to_value());
        fields.insert("ImageURL".to_string(), Value::from(self.image_url.as_str()));
        Value::from(fields)
    }
}

pub fn image_url(image_host: &str, path: &str) -> String {
    format!("{}{}{}", image_host, path, IMAGE_SIZE_QUERY)
}

/// Check a destination can be rendered and return its banner path.
pub fn validate_destination(destination: &Destination) -> Result<&str, RenderError> {
    destination
        .banner_images
        .first()
        .map(String::as_str)
        .ok_or_else(|| RenderError::MissingBannerImage {
            id: destination.id,
            name: destination.name.clone(),
        })
}

/// Build one row per destination, in order. Fails on the first destination
/// without a banner image.
pub fn build_rows(destinations: &[Destination], image_host: &str) -> Result<Vec<Row>, RenderError> {
    let mut rows = Vec::with_capacity(destinations.len());

    for destination in destinations {
        let banner = match validate_destination(destination) {
            Ok(banner) => banner,
            Err(e) => {
                log::error!("destination {}: {}", destination.id, e);
                return Err(e);
            }
        };

        rows.push(Row {
            name: destination.name.clone(),
            description: TrustedHtml::new(destination.description.as_str()),
            image_url: image_url(image_host, banner),
        });
        log::debug!("destination {} ok", destination.id);
    }

    Ok(rows)
}
