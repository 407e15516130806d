use serde::{Deserialize, Serialize};

/// 学习资料
///
/// 入库后不可变，由会话按插入顺序持有
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: String,
    pub title: String,
    pub text: String,
    /// 文本字符数（按 Unicode 字符计）
    pub character_count: usize,
}

impl Material {
    /// 创建新的资料，`text` 应当已经去除首尾空白
    pub fn new(id: impl Into<String>, title: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            id: id.into(),
            title: title.into(),
            character_count: text.chars().count(),
            text,
        }
    }
}
