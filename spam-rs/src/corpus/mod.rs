//! Labeled training corpus
//!
//! The training pipeline takes a [`Corpus`] as input; the built-in Turkish
//! e-mail set is only the default source.

mod builtin;
pub mod types;

pub use types::{Label, Sample};

use std::path::Path;
use tracing::info;

use crate::error::{Result, SpamError};

/// Ordered sequence of labeled samples
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Corpus {
    samples: Vec<Sample>,
}

impl Corpus {
    /// Build a corpus, rejecting samples whose text is blank
    pub fn new(samples: Vec<Sample>) -> Result<Self> {
        if let Some(pos) = samples.iter().position(|s| s.text.trim().is_empty()) {
            return Err(SpamError::Validation(format!(
                "Corpus sample {} has empty text",
                pos
            )));
        }
        Ok(Self { samples })
    }

    /// The built-in labeled e-mail set
    pub fn builtin() -> Self {
        Self {
            samples: builtin::SAMPLES
                .iter()
                .map(|(text, label)| Sample::new(*text, *label))
                .collect(),
        }
    }

    /// Load a corpus from a JSON array of `{"text", "label"}` objects
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let samples: Vec<Sample> = serde_json::from_str(&content)?;
        let corpus = Self::new(samples)?;

        info!("Loaded {} samples from {}", corpus.len(), path.display());
        Ok(corpus)
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample count per class, indexed by [`Label::index`]
    pub fn label_counts(&self) -> [usize; 2] {
        let mut counts = [0; 2];
        for sample in &self.samples {
            counts[sample.label.index()] += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_corpus() {
        let corpus = Corpus::builtin();
        assert_eq!(corpus.len(), 107);
        assert_eq!(corpus.label_counts(), [55, 52]);
        assert!(corpus.samples().iter().all(|s| !s.text.trim().is_empty()));
    }

    #[test]
    fn test_rejects_blank_text() {
        let samples = vec![
            Sample::new("Bedava ödül kazan!", Label::Spam),
            Sample::new("   ", Label::Normal),
        ];
        assert!(matches!(Corpus::new(samples), Err(SpamError::Validation(_))));
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.json");
        std::fs::write(
            &path,
            r#"[{"text": "Bedava ödül kazan!", "label": "SPAM"},
                {"text": "Toplantı saat 10'da", "label": "NORMAL"}]"#,
        )
        .unwrap();

        let corpus = Corpus::from_json_file(&path).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.samples()[0].label, Label::Spam);
        assert_eq!(corpus.label_counts(), [1, 1]);
    }

    #[test]
    fn test_label_index_roundtrip() {
        for label in Label::ALL {
            assert_eq!(Label::from_index(label.index()), Some(label));
        }
        assert_eq!(Label::from_index(2), None);
        assert_eq!(Label::Spam.to_string(), "SPAM");
    }
}
