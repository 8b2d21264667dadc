//! Statistics structures derived from tokenized documents. Each one is
//! rebuilt from scratch for every scoring run.

pub mod doc_lengths;
pub mod term_index;
pub mod vector;
pub mod vocabulary;

pub use doc_lengths::DocLengths;
pub use term_index::{FrequencySummary, FrequencyTable};
pub use vector::{cosine_similarity, dot, l2_norm};
pub use vocabulary::{Vocabulary, VocabularyScope};
