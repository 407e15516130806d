//! 会话状态 - 流程层
//!
//! 持有一个会话内的资料、知识点和当前测验，只通过三个入口修改：
//! 1. `ingest`：追加资料
//! 2. `extract_topics`：整体重算知识点，测验所依据的知识点变化或消失时作废测验
//! 3. `generate_quiz`：为指定知识点生成测验，替换旧测验
//!
//! 每个入口都返回一行文字和完整快照，预期内的失败也以消息形式返回

use tracing::{debug, info, warn};

use crate::error::AppResult;
use crate::models::{Difficulty, Material, Quiz, ScoringPolicy, SessionSnapshot, Topic, ToolOutcome};
use crate::services::{QuizBuilder, TopicSynthesizer};
use crate::utils::IdSequence;

/// 单个会话的内存状态
///
/// 由上层为每个连接单独创建，不在连接之间共享
pub struct SessionStore {
    materials: Vec<Material>,
    topics: Vec<Topic>,
    quiz: Option<Quiz>,
    /// 生成当前测验时的知识点内容
    quiz_topic: Option<Topic>,
    material_ids: IdSequence,
    synthesizer: TopicSynthesizer,
    quiz_builder: QuizBuilder,
}

impl SessionStore {
    /// 使用内置打分策略创建会话
    pub fn new() -> AppResult<Self> {
        Self::with_policy(&ScoringPolicy::default())
    }

    /// 使用指定打分策略创建会话
    pub fn with_policy(policy: &ScoringPolicy) -> AppResult<Self> {
        Ok(Self {
            materials: Vec::new(),
            topics: Vec::new(),
            quiz: None,
            quiz_topic: None,
            material_ids: IdSequence::new("material"),
            synthesizer: TopicSynthesizer::new(policy)?,
            quiz_builder: QuizBuilder::new(),
        })
    }

    /// 替换打分策略，下一次抽取时生效
    pub fn set_policy(&mut self, policy: &ScoringPolicy) -> AppResult<()> {
        self.synthesizer = TopicSynthesizer::new(policy)?;
        info!("📋 打分策略已更新 ({} 个关键词)", policy.keywords.len());
        Ok(())
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn quiz(&self) -> Option<&Quiz> {
        self.quiz.as_ref()
    }

    /// 生成当前状态快照
    pub fn snapshot(&self, message: impl Into<String>) -> SessionSnapshot {
        SessionSnapshot {
            message: message.into(),
            materials: self.materials.clone(),
            topics: self.topics.clone(),
            quiz: self.quiz.clone(),
        }
    }

    fn outcome(&self, text: impl Into<String>, message: &str) -> ToolOutcome {
        ToolOutcome {
            text: text.into(),
            structured: self.snapshot(message),
        }
    }

    /// 录入学习资料
    ///
    /// 标题为空时使用 `Material <n>` 自动编号
    pub fn ingest(&mut self, title: Option<&str>, text: &str) -> ToolOutcome {
        let text = text.trim();
        if text.is_empty() {
            warn!("⚠️ 录入资料失败: 文本为空");
            return self.outcome(
                "Missing text. Provide notes or ask ChatGPT to pass the PDF extract.",
                "Missing text input",
            );
        }

        let title = match title.map(str::trim) {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => format!("Material {}", self.materials.len() + 1),
        };

        let material = Material::new(self.material_ids.next_id(), title, text);
        info!(
            "✓ 已录入资料 {} 「{}」 ({} 个字符)",
            material.id, material.title, material.character_count
        );
        let text = format!("Stored “{}”.", material.title);
        self.materials.push(material);

        self.outcome(text, "Material captured")
    }

    /// 从全部资料重新抽取知识点
    ///
    /// 抽取不是增量的：整个知识点集合会被替换。
    /// 如果当前测验引用的知识点不再存在或内容已变，测验被作废
    pub fn extract_topics(&mut self) -> ToolOutcome {
        self.topics = self.synthesizer.derive_all(&self.materials);
        info!(
            "✓ 从 {} 份资料中抽取出 {} 个知识点",
            self.materials.len(),
            self.topics.len()
        );

        self.reset_quiz_if_topic_changed();

        self.outcome(
            format!("Generated {} topic(s).", self.topics.len()),
            "Topics generated",
        )
    }

    /// 为指定知识点生成测验
    pub fn generate_quiz(&mut self, topic_id: &str, difficulty: Difficulty) -> ToolOutcome {
        let Some(topic) = self.topics.iter().find(|t| t.id == topic_id) else {
            warn!("⚠️ 未找到知识点: {}", topic_id);
            return self.outcome("Topic not found. Generate topics first.", "Topic missing");
        };

        let quiz = self.quiz_builder.build(topic, difficulty);
        let text = format!("Quiz prepared for {}.", topic.title);
        info!("✓ 已为 {} 生成 {} 难度测验", topic.id, difficulty);
        self.quiz_topic = Some(topic.clone());
        self.quiz = Some(quiz);

        self.outcome(text, "Quiz ready")
    }

    fn reset_quiz_if_topic_changed(&mut self) {
        let Some(built_from) = &self.quiz_topic else {
            return;
        };

        // 编号按位置分配，同一编号可能对应不同内容，因此按内容比较
        let still_valid = self.topics.iter().any(|t| t == built_from);
        if !still_valid {
            debug!("测验所依据的知识点 {} 已不存在或内容已变，测验作废", built_from.id);
            self.quiz = None;
            self.quiz_topic = None;
        }
    }
}
