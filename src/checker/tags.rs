use serde::Serialize;

use super::annotations::{brace_tags, starts_with_ignore_case, tag_content};
use super::result::DiagnosticKind;
use super::tables::EDITION_PREFIX;

/// External metadata agent an ID tag refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetadataSource {
    Imdb,
    Tmdb,
    Tvdb,
}

impl MetadataSource {
    fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix.to_ascii_lowercase().as_str() {
            "imdb-" => Some(Self::Imdb),
            "tmdb-" => Some(Self::Tmdb),
            "tvdb-" => Some(Self::Tvdb),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalId {
    pub source: MetadataSource,
    pub id: String,
}

/// Values carried by the recognised brace tags of a name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagValues {
    pub edition: Option<String>,
    pub external_id: Option<ExternalId>,
}

/// Check every `{...}` tag of `name` against `allowed_prefixes`.
///
/// The first unrecognised tag is returned as an `InvalidTag` diagnostic. When
/// a name repeats a tag kind the first occurrence wins.
///
/// # Errors
/// Returns the `InvalidTag` diagnostic for the first unrecognised tag.
pub fn validate_tags(name: &str, allowed_prefixes: &[&str]) -> Result<TagValues, DiagnosticKind> {
    let mut values = TagValues::default();

    for tag in brace_tags(name) {
        let content = tag_content(tag);
        let Some(prefix) = allowed_prefixes
            .iter()
            .find(|prefix| starts_with_ignore_case(content, prefix))
        else {
            return Err(DiagnosticKind::InvalidTag {
                tag: tag.to_string(),
                allowed_prefixes: allowed_prefixes.iter().map(ToString::to_string).collect(),
            });
        };

        let value = content[prefix.len()..].trim();
        if prefix.eq_ignore_ascii_case(EDITION_PREFIX) {
            values.edition.get_or_insert_with(|| value.to_string());
        } else if let Some(source) = MetadataSource::from_prefix(prefix) {
            values.external_id.get_or_insert_with(|| ExternalId {
                source,
                id: value.to_string(),
            });
        }
    }

    Ok(values)
}

#[cfg(test)]
#[path = "tags_tests.rs"]
mod tests;
