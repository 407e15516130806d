//! 出题服务 - 业务能力层
//!
//! 每个知识点固定生成三道题：
//! 1. 概念题（concept）
//! 2. 机制/公式题（equation）
//! 3. 前置知识关联题（link）

use crate::models::{Difficulty, Question, Quiz, Topic};

/// 理由或高亮缺失时使用的答案
pub const FALLBACK_ANSWER: &str =
    "Summarize the governing idea and show how it applies to a concrete step.";

const EQUATION_PROMPT: &str = "Write the key equation or transition rule and explain each term.";
const FLOW_PROMPT: &str = "Describe the update rule or probability flow that defines the process.";
const EQUATION_LEAD_IN: &str = "Use the expression mentioned in the notes:";
const LINK_PROMPT: &str = "Connect this topic to a prerequisite (e.g., Markov property, normalization, or steady-state condition).";
const LINK_ANSWER: &str = "Relate the transition probabilities to conservation of probability and the Markov memoryless property.";

/// 测验生成器
#[derive(Debug, Clone, Copy, Default)]
pub struct QuizBuilder;

impl QuizBuilder {
    pub fn new() -> Self {
        Self
    }

    /// 为知识点生成测验，三道题都带上请求的难度
    pub fn build(&self, topic: &Topic, difficulty: Difficulty) -> Quiz {
        let rationale = topic.rationale().unwrap_or(FALLBACK_ANSWER);
        let highlight = topic.first_highlight().unwrap_or(FALLBACK_ANSWER);

        let (mechanism_prompt, mechanism_answer) = if topic.has_formula_marker {
            (
                EQUATION_PROMPT,
                format!("{} {}", EQUATION_LEAD_IN, highlight),
            )
        } else {
            (FLOW_PROMPT, highlight.to_string())
        };

        let questions = vec![
            Question {
                id: format!("q-{}-concept", topic.id),
                prompt: format!(
                    "State the core idea of “{}” in your own words. Why does it matter?",
                    topic.title
                ),
                answer: rationale.to_string(),
                difficulty,
            },
            Question {
                id: format!("q-{}-equation", topic.id),
                prompt: mechanism_prompt.to_string(),
                answer: mechanism_answer,
                difficulty,
            },
            Question {
                id: format!("q-{}-link", topic.id),
                prompt: LINK_PROMPT.to_string(),
                answer: LINK_ANSWER.to_string(),
                difficulty,
            },
        ];

        Quiz {
            topic_id: topic.id.clone(),
            difficulty,
            questions,
        }
    }
}
