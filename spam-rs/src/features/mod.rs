//! Text feature extraction
//!
//! Converts raw text into L2-normalized TF-IDF vectors over word n-grams.

pub mod sparse;
pub mod tfidf;
pub mod tokenizer;

pub use sparse::SparseVector;
pub use tfidf::{TfidfModel, TfidfVectorizer};
