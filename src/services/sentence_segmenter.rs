//! 分句服务 - 业务能力层
//!
//! 只负责把原始文本切成句子，不关心打分

use regex::Regex;
use std::sync::LazyLock;

/// 句末标点后跟空白即视为句子边界
static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("sentence boundary pattern is valid"));

/// 分句器
///
/// 保留去除首尾空白后字符数严格大于 `min_chars` 的句子
#[derive(Debug, Clone, Copy)]
pub struct SentenceSegmenter {
    min_chars: usize,
}

impl SentenceSegmenter {
    pub fn new(min_chars: usize) -> Self {
        Self { min_chars }
    }

    /// 切分文本并按长度过滤
    pub fn segment(&self, text: &str) -> Vec<String> {
        split_sentences(text)
            .into_iter()
            .filter(|s| s.chars().count() > self.min_chars)
            .map(str::to_string)
            .collect()
    }
}

/// 在句末标点之后的空白处切分，返回去除首尾空白的片段（可能为空串）
fn split_sentences(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;

    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        // 标点均为单字节 ASCII，句子保留标点
        pieces.push(text[start..boundary.start() + 1].trim());
        start = boundary.end();
    }
    pieces.push(text[start..].trim());

    pieces
}
