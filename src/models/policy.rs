//! 打分策略
//!
//! 关键词表、公式标记正则以及各类阈值集中在这里，
//! 默认值编译进程序，也可以由 TOML 文件覆盖

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// 默认领域关键词（随机过程 + 微积分）
pub const DEFAULT_KEYWORDS: [&str; 18] = [
    "markov",
    "transition",
    "probability",
    "rate",
    "matrix",
    "generator",
    "master equation",
    "steady state",
    "stationary",
    "chain",
    "state space",
    "stochastic",
    "derivative",
    "differential",
    "ode",
    "expectation",
    "variance",
    "drift",
];

/// 默认公式标记：运算符号，或反斜杠开头的数学记号
pub const DEFAULT_FORMULA_PATTERN: &str =
    r"[=∝≈]|\\(frac|sum|int|partial|nabla|pi|lambda|mu|sigma|theta)";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringPolicy {
    /// 关键词表，按子串大小写不敏感匹配
    pub keywords: Vec<String>,
    /// 公式标记正则，匹配时忽略大小写
    pub formula_pattern: String,
    /// 参与打分的句子最少字符数（严格大于）
    pub salience_min_chars: usize,
    /// 每份资料最多选出的知识点数量
    pub max_topics_per_material: usize,
    /// 兜底时取前几句
    pub fallback_sentences: usize,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            formula_pattern: DEFAULT_FORMULA_PATTERN.to_string(),
            salience_min_chars: 30,
            max_topics_per_material: 4,
            fallback_sentences: 3,
        }
    }
}

impl ScoringPolicy {
    /// 编译公式标记正则
    pub fn formula_regex(&self) -> AppResult<Regex> {
        RegexBuilder::new(&self.formula_pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| AppError::InvalidPolicy {
                reason: format!("formula_pattern 无法编译: {}", e),
            })
    }

    /// 校验策略是否可用
    pub fn validate(&self) -> AppResult<()> {
        self.formula_regex()?;
        if self.keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(AppError::InvalidPolicy {
                reason: "keywords 中不能包含空字符串".to_string(),
            });
        }
        Ok(())
    }
}
