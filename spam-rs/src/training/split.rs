//! Seeded stratified train/test split

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::corpus::{Corpus, Label, Sample};
use crate::error::{Result, SpamError};

/// Train and test partitions, each in original corpus order
#[derive(Debug, Clone, PartialEq)]
pub struct Split {
    pub train: Vec<Sample>,
    pub test: Vec<Sample>,
}

impl Split {
    pub fn train_texts(&self) -> Vec<&str> {
        self.train.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn train_labels(&self) -> Vec<Label> {
        self.train.iter().map(|s| s.label).collect()
    }

    pub fn test_texts(&self) -> Vec<&str> {
        self.test.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn test_labels(&self) -> Vec<Label> {
        self.test.iter().map(|s| s.label).collect()
    }
}

/// Number of samples of a class of size `class_size` that go to the test set.
/// Rounded to nearest, but every class keeps at least one sample on each side.
fn test_count(class_size: usize, test_ratio: f64) -> usize {
    let wanted = (class_size as f64 * test_ratio).round() as usize;
    wanted.clamp(1, class_size - 1)
}

/// Partition `corpus` so each class contributes `test_ratio` of its samples to
/// the test set. Classes are shuffled in label order (NORMAL, then SPAM) with
/// one generator seeded from `seed`, so the result only depends on the corpus
/// and the two parameters.
pub fn stratified_split(corpus: &Corpus, test_ratio: f64, seed: u64) -> Result<Split> {
    if !(test_ratio > 0.0 && test_ratio < 1.0) {
        return Err(SpamError::Training(format!(
            "test ratio must be in (0, 1), got {}",
            test_ratio
        )));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut test_indices = Vec::new();
    let mut train_indices = Vec::new();

    for label in Label::ALL {
        let mut indices: Vec<usize> = corpus
            .samples()
            .iter()
            .enumerate()
            .filter(|(_, s)| s.label == label)
            .map(|(i, _)| i)
            .collect();

        if indices.len() < 2 {
            return Err(SpamError::Training(format!(
                "Class {} has {} samples, at least 2 are needed to split",
                label,
                indices.len()
            )));
        }

        indices.shuffle(&mut rng);
        let n_test = test_count(indices.len(), test_ratio);
        test_indices.extend_from_slice(&indices[..n_test]);
        train_indices.extend_from_slice(&indices[n_test..]);
    }

    test_indices.sort_unstable();
    train_indices.sort_unstable();

    let pick = |indices: &[usize]| -> Vec<Sample> {
        indices.iter().map(|&i| corpus.samples()[i].clone()).collect()
    };

    Ok(Split {
        train: pick(&train_indices),
        test: pick(&test_indices),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(spam: usize, normal: usize) -> Corpus {
        let mut samples = Vec::new();
        for i in 0..spam {
            samples.push(Sample::new(format!("bedava ödül {}", i), Label::Spam));
        }
        for i in 0..normal {
            samples.push(Sample::new(format!("toplantı saat {}", i), Label::Normal));
        }
        Corpus::new(samples).unwrap()
    }

    #[test]
    fn test_split_preserves_class_balance() {
        let split = stratified_split(&corpus(50, 50), 0.2, 42).unwrap();
        assert_eq!(split.test.len(), 20);
        assert_eq!(split.train.len(), 80);

        let spam_test = split.test_labels().iter().filter(|l| **l == Label::Spam).count();
        assert_eq!(spam_test, 10);
    }

    #[test]
    fn test_split_rounds_per_class() {
        // 52 * 0.2 = 10.4 -> 10, 55 * 0.2 = 11
        let split = stratified_split(&Corpus::builtin(), 0.2, 42).unwrap();
        let labels = split.test_labels();
        assert_eq!(labels.iter().filter(|l| **l == Label::Spam).count(), 10);
        assert_eq!(labels.iter().filter(|l| **l == Label::Normal).count(), 11);
        assert_eq!(split.train.len(), 86);
    }

    #[test]
    fn test_split_is_deterministic() {
        let c = corpus(30, 25);
        assert_eq!(stratified_split(&c, 0.2, 7).unwrap(), stratified_split(&c, 0.2, 7).unwrap());
    }

    #[test]
    fn test_split_is_disjoint_and_complete() {
        let c = corpus(12, 9);
        let split = stratified_split(&c, 0.3, 1).unwrap();
        assert_eq!(split.train.len() + split.test.len(), c.len());
        for sample in &split.test {
            assert!(!split.train.contains(sample));
        }
    }

    #[test]
    fn test_tiny_class_keeps_one_on_each_side() {
        let split = stratified_split(&corpus(2, 2), 0.2, 42).unwrap();
        assert_eq!(split.test.len(), 2);
        assert_eq!(split.train.len(), 2);
    }

    #[test]
    fn test_single_sample_class_fails() {
        assert!(stratified_split(&corpus(1, 5), 0.2, 42).is_err());
    }
}
