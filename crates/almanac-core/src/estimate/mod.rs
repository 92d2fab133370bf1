pub mod command;

use crate::error::AlmanacError;
use crate::model::InventionRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Entity categories the estimator asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityLabel {
    Place,
    Person,
}

impl EntityLabel {
    /// Tag used by the recognizer for this category.
    pub fn tag(&self) -> &'static str {
        match self {
            EntityLabel::Place => "GPE",
            EntityLabel::Person => "PERSON",
        }
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityLabel::Place => write!(f, "place"),
            EntityLabel::Person => write!(f, "person"),
        }
    }
}

/// One top-level node of a named-entity chunk tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chunk {
    /// A labeled entity subtree and its tokens.
    Entity { label: String, tokens: Vec<String> },
    /// A token outside any entity.
    Token(String),
}

impl Chunk {
    pub fn entity(label: &str, tokens: &[&str]) -> Chunk {
        Chunk::Entity {
            label: label.to_string(),
            tokens: tokens.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Trait for named-entity recognition backends.
pub trait EntityTagger {
    /// Tokenize, tag and chunk `text` into a flat sequence of top-level chunks.
    fn chunk(&self, text: &str) -> Result<Vec<Chunk>, AlmanacError>;

    /// Name of this backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Collect maximal runs of `tag` entities as phrases.
///
/// Adjacent matching entities merge into one phrase; any other chunk ends the
/// run. Phrases are deduplicated by exact text, keeping first-seen order.
pub fn continuous_chunks(chunks: &[Chunk], tag: &str) -> Vec<String> {
    let mut phrases: Vec<String> = Vec::new();
    let mut current: Vec<String> = Vec::new();

    let mut flush = |current: &mut Vec<String>| {
        if current.is_empty() {
            return;
        }
        let phrase = current.join(" ");
        current.clear();
        if !phrases.contains(&phrase) {
            phrases.push(phrase);
        }
    };

    for chunk in chunks {
        match chunk {
            Chunk::Entity { label, tokens } if label == tag => current.push(tokens.join(" ")),
            _ => flush(&mut current),
        }
    }
    flush(&mut current);

    phrases
}

/// Distinct phrases of one category found in `text`.
pub fn extract(
    tagger: &dyn EntityTagger,
    text: &str,
    label: EntityLabel,
) -> Result<Vec<String>, AlmanacError> {
    let chunks = tagger.chunk(text)?;
    Ok(continuous_chunks(&chunks, label.tag()))
}

/// Fill a record's location and inventor estimates from its description.
pub fn estimate_record(
    tagger: &dyn EntityTagger,
    record: &mut InventionRecord,
) -> Result<(), AlmanacError> {
    let chunks = tagger.chunk(&record.description)?;
    record.estimate.location_estimates = continuous_chunks(&chunks, EntityLabel::Place.tag());
    record.estimate.inventor_estimates = continuous_chunks(&chunks, EntityLabel::Person.tag());
    tracing::debug!(
        title = %record.title,
        backend = tagger.backend_name(),
        locations = record.estimate.location_estimates.len(),
        inventors = record.estimate.inventor_estimates.len(),
        "estimated record"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(t: &str) -> Chunk {
        Chunk::Token(t.to_string())
    }

    #[test]
    fn test_adjacent_entities_merge() {
        let chunks = vec![
            Chunk::entity("PERSON", &["Karl"]),
            Chunk::entity("PERSON", &["Benz"]),
            tok("built"),
        ];
        assert_eq!(continuous_chunks(&chunks, "PERSON"), vec!["Karl Benz"]);
    }

    #[test]
    fn test_multi_token_entity_joined() {
        let chunks = vec![tok("in"), Chunk::entity("GPE", &["New", "York"]), tok(".")];
        assert_eq!(continuous_chunks(&chunks, "GPE"), vec!["New York"]);
    }

    #[test]
    fn test_duplicates_kept_once_at_first_position() {
        let chunks = vec![
            Chunk::entity("GPE", &["China"]),
            tok("and"),
            Chunk::entity("GPE", &["Korea"]),
            tok("then"),
            Chunk::entity("GPE", &["China"]),
            tok("again"),
            Chunk::entity("GPE", &["Japan"]),
        ];
        assert_eq!(
            continuous_chunks(&chunks, "GPE"),
            vec!["China", "Korea", "Japan"]
        );
    }

    #[test]
    fn test_other_labels_break_runs() {
        let chunks = vec![
            Chunk::entity("PERSON", &["Edison"]),
            Chunk::entity("GPE", &["Menlo"]),
            Chunk::entity("PERSON", &["Tesla"]),
        ];
        assert_eq!(
            continuous_chunks(&chunks, "PERSON"),
            vec!["Edison", "Tesla"]
        );
        assert_eq!(continuous_chunks(&chunks, "GPE"), vec!["Menlo"]);
    }

    #[test]
    fn test_no_entities() {
        assert!(continuous_chunks(&[tok("nothing")], "GPE").is_empty());
        assert!(continuous_chunks(&[], "GPE").is_empty());
    }

    struct FixedTagger(Vec<Chunk>);

    impl EntityTagger for FixedTagger {
        fn chunk(&self, _text: &str) -> Result<Vec<Chunk>, AlmanacError> {
            Ok(self.0.clone())
        }

        fn backend_name(&self) -> &str {
            "fixed"
        }
    }

    #[test]
    fn test_estimate_record_fills_both_lists() {
        let tagger = FixedTagger(vec![
            Chunk::entity("PERSON", &["Gutenberg"]),
            tok("of"),
            Chunk::entity("GPE", &["Mainz"]),
        ]);
        let mut record = InventionRecord::new("Printing", "Gutenberg of Mainz.\n\n", 1450);
        estimate_record(&tagger, &mut record).unwrap();
        assert_eq!(record.estimate.inventor_estimates, vec!["Gutenberg"]);
        assert_eq!(record.estimate.location_estimates, vec!["Mainz"]);
    }

    #[test]
    fn test_extract_uses_label_tag() {
        let tagger = FixedTagger(vec![Chunk::entity("PERSON", &["Hero"])]);
        assert_eq!(
            extract(&tagger, "Hero", EntityLabel::Person).unwrap(),
            vec!["Hero"]
        );
        assert!(extract(&tagger, "Hero", EntityLabel::Place)
            .unwrap()
            .is_empty());
    }
}
