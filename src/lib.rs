pub mod configuration;
pub mod error;
/// Greedy bipartite peak matching
pub mod matching;
pub mod scoring_result;
/// Cosine family spectrum similarity
pub mod similarity;
// Spectrum representation and the neutral loss transform
pub mod spectrum;
