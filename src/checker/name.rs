//! Decomposition of a movie file name into title, year, tags and split suffix.

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use super::annotations::{strip_brace_tags, strip_brackets};
use super::media_path::MediaPath;
use super::result::DiagnosticKind;
use super::tables::split_token_alternation;
use super::tags::{ExternalId, MetadataSource, TagValues};
use crate::error::{Result, ShelfGuardError};

/// How brace tags are treated when matching the core name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameGrammar {
    /// Strip every `{...}` and `[...]` annotation, then match `Title (YYYY)[ - split]`.
    #[default]
    Stripped,
    /// Strip only `[...]`; ID and edition tags must sit between the year and
    /// the split suffix, and the name must end in a media extension.
    Embedded,
}

impl std::fmt::Display for NameGrammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stripped => f.write_str("stripped"),
            Self::Embedded => f.write_str("embedded"),
        }
    }
}

impl std::str::FromStr for NameGrammar {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stripped" => Ok(Self::Stripped),
            "embedded" => Ok(Self::Embedded),
            _ => Err(format!("Unknown naming grammar: {s}")),
        }
    }
}

/// Multi-part marker such as `cd1` or `part2`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitSuffix {
    /// Token as written, lowercased (`cd`, `disc`, ...).
    pub token: String,
    /// Part number; `None` when it does not fit in a `u32`.
    pub index: Option<u32>,
    /// Suffix exactly as it appeared in the name.
    pub raw: String,
}

impl SplitSuffix {
    fn from_captures(caps: &Captures<'_>) -> Option<Self> {
        let raw = caps.name("split")?.as_str();
        let token = caps.name("split_token").map_or("", |m| m.as_str());
        let index = caps
            .name("split_index")
            .and_then(|m| m.as_str().parse().ok());
        Some(Self {
            token: token.to_ascii_lowercase(),
            index,
            raw: raw.to_string(),
        })
    }
}

/// Parsed parts of a movie file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameComponents {
    pub title: String,
    /// Four digits exactly as captured; see [`NameComponents::year_value`].
    pub year: String,
    pub edition: Option<String>,
    pub external_id: Option<ExternalId>,
    pub split: Option<SplitSuffix>,
}

impl NameComponents {
    /// The captured year as an integer, if it parses.
    #[must_use]
    pub fn year_value(&self) -> Option<i32> {
        self.year.parse().ok()
    }

    /// Folder name this file is expected to live in:
    /// `Title (YYYY)` followed by ` {edition-...}` when an edition is present.
    #[must_use]
    pub fn expected_folder_name(&self) -> String {
        let mut name = format!("{} ({})", self.title, self.year);
        if let Some(edition) = &self.edition {
            name.push_str(" {edition-");
            name.push_str(edition);
            name.push('}');
        }
        name
    }
}

/// Anchored, case-insensitive matcher for one [`NameGrammar`].
#[derive(Debug, Clone)]
pub struct NameParser {
    grammar: NameGrammar,
    pattern: Regex,
}

impl NameParser {
    /// Build a parser. `extensions` is only consulted by the embedded grammar.
    ///
    /// # Errors
    /// Returns an error if the generated pattern fails to compile.
    pub fn new(grammar: NameGrammar, extensions: &[String]) -> Result<Self> {
        let pattern_str = match grammar {
            NameGrammar::Stripped => stripped_pattern(),
            NameGrammar::Embedded => embedded_pattern(extensions),
        };
        let pattern = Regex::new(&pattern_str).map_err(|source| ShelfGuardError::InvalidRegex {
            pattern: pattern_str.clone(),
            source,
        })?;
        Ok(Self { grammar, pattern })
    }

    #[must_use]
    pub const fn grammar(&self) -> NameGrammar {
        self.grammar
    }

    /// Match the file name of `media`. Tag values already validated by the
    /// tag rule fill in edition and ID when the grammar does not capture them.
    ///
    /// # Errors
    /// Returns `StructuralMismatch` when the name does not fit the grammar.
    pub fn parse(
        &self,
        media: &MediaPath<'_>,
        tags: &TagValues,
    ) -> std::result::Result<NameComponents, DiagnosticKind> {
        let subject = match self.grammar {
            NameGrammar::Stripped => strip_brace_tags(&strip_brackets(media.stem))
                .trim()
                .to_string(),
            NameGrammar::Embedded => strip_brackets(media.file_name),
        };

        let Some(caps) = self.pattern.captures(&subject) else {
            return Err(DiagnosticKind::StructuralMismatch { name: subject });
        };

        Ok(components_from(&caps, tags))
    }
}

fn components_from(caps: &Captures<'_>, tags: &TagValues) -> NameComponents {
    let group = |name: &str| caps.name(name).map(|m| m.as_str());

    let external_id = group("id")
        .and_then(parse_external_id)
        .or_else(|| tags.external_id.clone());
    let edition = group("edition")
        .map(|e| e.trim().to_string())
        .or_else(|| tags.edition.clone());

    NameComponents {
        title: group("title").unwrap_or_default().trim().to_string(),
        year: group("year").unwrap_or_default().to_string(),
        edition,
        external_id,
        split: SplitSuffix::from_captures(caps),
    }
}

fn parse_external_id(content: &str) -> Option<ExternalId> {
    let (source, id) = content.split_once('-')?;
    let source = match source.to_ascii_lowercase().as_str() {
        "imdb" => MetadataSource::Imdb,
        "tmdb" => MetadataSource::Tmdb,
        _ => return None,
    };
    Some(ExternalId {
        source,
        id: id.trim().to_string(),
    })
}

fn stripped_pattern() -> String {
    format!(
        r"(?i)^(?<title>.+) \((?<year>\d{{4}})\)\s*(?: - (?<split>(?<split_token>{})(?<split_index>[0-9]+)))?$",
        split_token_alternation()
    )
}

fn embedded_pattern(extensions: &[String]) -> String {
    let extension = if extensions.is_empty() {
        r"[^./\\]+".to_string()
    } else {
        extensions
            .iter()
            .map(|ext| regex::escape(ext.trim_start_matches('.')))
            .collect::<Vec<_>>()
            .join("|")
    };
    format!(
        r"(?i)^(?<title>[^{{}}]+) \((?<year>\d{{4}})\)(?:\s*\{{(?<id>(?:imdb|tmdb)-[^}}]*)\}})?(?:\s*\{{edition-(?<edition>[^}}]*)\}})?\s*(?: - (?<split>(?<split_token>{})(?<split_index>[0-9]+)))?\.(?:{extension})$",
        split_token_alternation()
    )
}

#[cfg(test)]
#[path = "name_tests.rs"]
mod tests;
