use serde::{Deserialize, Serialize};

/// 从资料中抽取出的知识点
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: String,
    pub title: String,
    pub rationale: String,
    /// 来源资料的标题
    pub source_title: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub has_formula_marker: bool,
}

impl Topic {
    /// 第一条高亮句子
    pub fn first_highlight(&self) -> Option<&str> {
        self.highlights
            .first()
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }

    /// 非空的理由说明
    pub fn rationale(&self) -> Option<&str> {
        Some(self.rationale.as_str()).filter(|s| !s.is_empty())
    }
}
