//! 知识点抽取服务 - 业务能力层
//!
//! 流程：分句 → 打分 → 取前若干句 → 生成知识点
//!
//! 兜底顺序：
//! 1. 没有句子命中关键词或公式时，直接取分句结果的前几句
//! 2. 仍然没有句子时，生成一个 "<标题> overview" 概览知识点

use tracing::debug;

use crate::error::AppResult;
use crate::models::{Material, ScoringPolicy, Topic};
use crate::services::relevance_scorer::{Candidate, RelevanceScorer};
use crate::services::sentence_segmenter::SentenceSegmenter;
use crate::utils::IdSequence;

/// 概览知识点的理由说明
pub const OVERVIEW_RATIONALE: &str = "High-level summary of the uploaded material.";
/// 候选句子为空时的理由说明
pub const DEFAULT_RATIONALE: &str = "Core step from the material.";

/// 一份资料选出的候选句子，以及它们所在的分句序列（用于截取高亮窗口）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub chosen: Vec<Candidate>,
    pub sentences: Vec<String>,
}

/// 知识点抽取器
pub struct TopicSynthesizer {
    segmenter: SentenceSegmenter,
    scorer: RelevanceScorer,
    max_topics: usize,
    fallback_sentences: usize,
}

impl TopicSynthesizer {
    /// 根据打分策略创建抽取器
    pub fn new(policy: &ScoringPolicy) -> AppResult<Self> {
        Ok(Self {
            segmenter: SentenceSegmenter::new(policy.salience_min_chars),
            scorer: RelevanceScorer::new(policy)?,
            max_topics: policy.max_topics_per_material,
            fallback_sentences: policy.fallback_sentences,
        })
    }

    /// 选出候选句子
    pub fn select(&self, text: &str) -> Selection {
        let sentences = self.segmenter.segment(text);
        let ranked = self.scorer.score(&sentences);

        if !ranked.is_empty() {
            let chosen = ranked
                .into_iter()
                .take(self.max_topics)
                .map(Candidate::Scored)
                .collect();
            return Selection { chosen, sentences };
        }

        // 没有句子命中，退回到同一分句结果的前几句
        let chosen = sentences
            .iter()
            .take(self.fallback_sentences)
            .cloned()
            .map(Candidate::Raw)
            .collect();
        Selection { chosen, sentences }
    }

    /// 从单份资料生成知识点
    pub fn derive_from_material(&self, material: &Material, ids: &mut IdSequence) -> Vec<Topic> {
        let Selection { chosen, sentences } = self.select(&material.text);

        if chosen.is_empty() {
            debug!("资料 {} 没有可用句子，生成概览知识点", material.id);
            return vec![Topic {
                id: ids.next_id(),
                title: format!("{} overview", material.title),
                rationale: OVERVIEW_RATIONALE.to_string(),
                source_title: material.title.clone(),
                highlights: Vec::new(),
                has_formula_marker: false,
            }];
        }

        chosen
            .iter()
            .enumerate()
            .map(|(index, candidate)| {
                let rationale = match candidate.sentence() {
                    "" => DEFAULT_RATIONALE.to_string(),
                    sentence => sentence.to_string(),
                };
                let window_end = (index + 2).min(sentences.len());
                let highlights = sentences
                    .get(index..window_end)
                    .map(<[String]>::to_vec)
                    .unwrap_or_default();

                Topic {
                    id: ids.next_id(),
                    title: format!("{} – Concept {}", material.title, index + 1),
                    rationale,
                    source_title: material.title.clone(),
                    highlights,
                    has_formula_marker: candidate.has_formula_marker(),
                }
            })
            .collect()
    }

    /// 按资料插入顺序生成完整的知识点集合，ID 从 `topic-1` 开始编号
    pub fn derive_all(&self, materials: &[Material]) -> Vec<Topic> {
        let mut ids = IdSequence::new("topic");
        materials
            .iter()
            .flat_map(|material| self.derive_from_material(material, &mut ids))
            .collect()
    }
}
