//! 句子相关性打分服务 - 业务能力层
//!
//! 综合分 = 关键词数 × 2 + (含公式标记 ? 3 : 0) + max(0, 2 - 句子位置)
//!
//! 打分完全确定：不依赖随机数，也不调用外部服务

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::error::AppResult;
use crate::models::ScoringPolicy;

/// 打过分的句子
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredSentence {
    pub sentence: String,
    pub keyword_score: usize,
    pub has_formula_marker: bool,
    pub composite_score: usize,
    /// 在分句结果中的原始位置
    #[serde(skip)]
    pub position: usize,
}

/// 候选句子
///
/// 正常路径来自打分结果；兜底路径直接取原句，不带分数
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    Scored(ScoredSentence),
    Raw(String),
}

impl Candidate {
    pub fn sentence(&self) -> &str {
        match self {
            Candidate::Scored(scored) => &scored.sentence,
            Candidate::Raw(sentence) => sentence,
        }
    }

    pub fn has_formula_marker(&self) -> bool {
        match self {
            Candidate::Scored(scored) => scored.has_formula_marker,
            Candidate::Raw(_) => false,
        }
    }
}

/// 相关性打分器
pub struct RelevanceScorer {
    /// 小写、去重后的关键词
    keywords: Vec<String>,
    formula: Regex,
}

impl RelevanceScorer {
    /// 根据打分策略创建打分器
    pub fn new(policy: &ScoringPolicy) -> AppResult<Self> {
        let mut keywords: Vec<String> = Vec::with_capacity(policy.keywords.len());
        for keyword in &policy.keywords {
            let keyword = keyword.trim().to_lowercase();
            if !keyword.is_empty() && !keywords.contains(&keyword) {
                keywords.push(keyword);
            }
        }

        Ok(Self {
            keywords,
            formula: policy.formula_regex()?,
        })
    }

    /// 句子中出现的关键词个数（每个关键词最多计一次）
    pub fn keyword_score(&self, sentence: &str) -> usize {
        let lower = sentence.to_lowercase();
        self.keywords
            .iter()
            .filter(|keyword| lower.contains(keyword.as_str()))
            .count()
    }

    /// 是否包含公式标记
    pub fn has_formula_marker(&self, sentence: &str) -> bool {
        self.formula.is_match(sentence)
    }

    /// 给所有句子打分，只保留命中关键词或公式的句子，按综合分降序（稳定排序）
    pub fn score(&self, sentences: &[String]) -> Vec<ScoredSentence> {
        let mut ranked: Vec<ScoredSentence> = sentences
            .iter()
            .enumerate()
            .map(|(position, sentence)| {
                let keyword_score = self.keyword_score(sentence);
                let has_formula_marker = self.has_formula_marker(sentence);
                let composite_score = keyword_score * 2
                    + if has_formula_marker { 3 } else { 0 }
                    + 2usize.saturating_sub(position);

                ScoredSentence {
                    sentence: sentence.clone(),
                    keyword_score,
                    has_formula_marker,
                    composite_score,
                    position,
                }
            })
            .filter(|entry| entry.keyword_score > 0 || entry.has_formula_marker)
            .collect();

        // sort_by 是稳定排序，同分时保持原顺序
        ranked.sort_by(|a, b| b.composite_score.cmp(&a.composite_score));

        debug!(
            "打分完成: {} 个句子中有 {} 个命中",
            sentences.len(),
            ranked.len()
        );

        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> RelevanceScorer {
        RelevanceScorer::new(&ScoringPolicy::default()).unwrap()
    }

    fn sentences(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_keyword_score_counts_each_keyword_once() {
        let scorer = scorer();
        assert_eq!(scorer.keyword_score("The Markov chain is a Markov CHAIN."), 2);
        // "state space" 和 "stationary" 都命中，"rate" 不在句中
        assert_eq!(scorer.keyword_score("A stationary law on the state space."), 2);
        assert_eq!(scorer.keyword_score("Nothing relevant here at all."), 0);
    }

    #[test]
    fn test_formula_markers() {
        let scorer = scorer();
        assert!(scorer.has_formula_marker("x = y"));
        assert!(scorer.has_formula_marker("p ∝ q"));
        assert!(scorer.has_formula_marker("a ≈ b"));
        assert!(scorer.has_formula_marker(r"use \frac{a}{b} here"));
        assert!(scorer.has_formula_marker(r"the \Lambda operator"));
        assert!(!scorer.has_formula_marker("lambda without a backslash"));
        assert!(!scorer.has_formula_marker("plain prose only"));
    }

    #[test]
    fn test_composite_score_and_filtering() {
        let scorer = scorer();
        let input = sentences(&[
            "An introduction without any domain words at all.",
            "The transition matrix holds each probability.",
            "We write P = Q for the generator in this case.",
        ]);

        let ranked = scorer.score(&input);
        assert_eq!(ranked.len(), 2);

        // 位置 1：3 个关键词 × 2 + 0 + 1 = 7
        // 位置 2：1 个关键词 × 2 + 3 + 0 = 5
        assert_eq!(ranked[0].position, 1);
        assert_eq!(ranked[0].keyword_score, 3);
        assert_eq!(ranked[0].composite_score, 7);
        assert_eq!(ranked[1].position, 2);
        assert!(ranked[1].has_formula_marker);
        assert_eq!(ranked[1].composite_score, 5);
    }

    #[test]
    fn test_ties_keep_original_order() {
        let scorer = scorer();
        let input = sentences(&[
            "Filler sentence number one goes here.",
            "Filler sentence number two goes here.",
            "First drift sentence in this text.",
            "Second drift sentence in this text.",
        ]);

        let ranked = scorer.score(&input);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].composite_score, ranked[1].composite_score);
        assert_eq!(ranked[0].position, 2);
        assert_eq!(ranked[1].position, 3);
    }

    #[test]
    fn test_custom_keywords_are_normalized() {
        let policy = ScoringPolicy {
            keywords: sentences(&["Entropy", "entropy ", "Bayes"]),
            ..ScoringPolicy::default()
        };
        let scorer = RelevanceScorer::new(&policy).unwrap();
        assert_eq!(scorer.keyword_score("entropy and bayes"), 2);
        assert_eq!(scorer.keyword_score("markov chain"), 0);
    }

    #[test]
    fn test_candidate_accessors() {
        let raw = Candidate::Raw("Plain sentence.".to_string());
        assert_eq!(raw.sentence(), "Plain sentence.");
        assert!(!raw.has_formula_marker());
    }
}
