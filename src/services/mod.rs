pub mod quiz_builder;
pub mod relevance_scorer;
pub mod sentence_segmenter;
pub mod topic_synthesizer;

pub use quiz_builder::QuizBuilder;
pub use relevance_scorer::{Candidate, RelevanceScorer, ScoredSentence};
pub use sentence_segmenter::SentenceSegmenter;
pub use topic_synthesizer::TopicSynthesizer;
