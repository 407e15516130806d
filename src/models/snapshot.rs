use serde::Serialize;

use crate::models::{Material, Quiz, Topic};

/// 会话状态快照
///
/// 每个操作都会返回完整快照，供上层渲染
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    /// 状态标签，例如 "Material captured"
    pub message: String,
    pub materials: Vec<Material>,
    pub topics: Vec<Topic>,
    pub quiz: Option<Quiz>,
}

/// 单次工具调用的结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolOutcome {
    /// 展示给用户的一行文字
    pub text: String,
    pub structured: SessionSnapshot,
}

impl ToolOutcome {
    pub fn message(&self) -> &str {
        &self.structured.message
    }
}
