use phf::phf_map;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 难度等级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Difficulty {
    /// 入门
    #[default]
    Intro,
    /// 进阶
    Intermediate,
    /// 高阶
    Advanced,
}

static DIFFICULTY_NAMES: phf::Map<&'static str, Difficulty> = phf_map! {
    "intro" => Difficulty::Intro,
    "intermediate" => Difficulty::Intermediate,
    "advanced" => Difficulty::Advanced,
};

impl Difficulty {
    /// 获取标准名称
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Intro => "intro",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }

    /// 按名称解析（大小写不敏感，忽略首尾空白）
    pub fn parse(s: &str) -> Option<Self> {
        DIFFICULTY_NAMES
            .get(s.trim().to_ascii_lowercase().as_str())
            .copied()
    }

    pub fn all() -> [Difficulty; 3] {
        [
            Difficulty::Intro,
            Difficulty::Intermediate,
            Difficulty::Advanced,
        ]
    }
}

impl TryFrom<String> for Difficulty {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| {
            format!(
                "invalid difficulty '{}', expected one of: intro, intermediate, advanced",
                value
            )
        })
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 测验题目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub answer: String,
    pub difficulty: Difficulty,
}

/// 针对单个知识点的测验
///
/// 固定包含三道题：概念题、机制题、关联题
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub topic_id: String,
    pub difficulty: Difficulty,
    pub questions: Vec<Question>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_parse() {
        assert_eq!(Difficulty::parse("intro"), Some(Difficulty::Intro));
        assert_eq!(Difficulty::parse(" Advanced "), Some(Difficulty::Advanced));
        assert_eq!(Difficulty::parse("expert"), None);
        assert_eq!(Difficulty::default(), Difficulty::Intro);
    }

    #[test]
    fn test_difficulty_serde() {
        let json = serde_json::to_string(&Difficulty::Intermediate).unwrap();
        assert_eq!(json, "\"intermediate\"");

        let parsed: Difficulty = serde_json::from_str("\"advanced\"").unwrap();
        assert_eq!(parsed, Difficulty::Advanced);

        assert!(serde_json::from_str::<Difficulty>("\"hard\"").is_err());
    }
}
