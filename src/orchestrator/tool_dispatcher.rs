//! 工具分发器 - 编排层
//!
//! ## 职责
//!
//! 1. **参数校验**：按工具的输入约定解析并校验参数
//! 2. **请求路由**：把工具名映射到会话的三个入口
//! 3. **工具目录**：提供每个工具的标题、说明和调用提示文案
//!
//! 校验失败的请求不会到达会话，会话状态保持不变

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tracing::{debug, info};

use crate::error::{AppError, AppResult};
use crate::models::{Difficulty, ToolOutcome};
use crate::utils::logging::truncate_text;
use crate::workflow::SessionStore;

pub const INGEST_MATERIAL: &str = "ingest_material";
pub const EXTRACT_TOPICS: &str = "extract_topics";
pub const GENERATE_QUIZ: &str = "generate_quiz";

/// 工具描述
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// 调用中的提示文案
    pub invoking: &'static str,
    /// 调用完成的提示文案
    pub invoked: &'static str,
}

static TOOLS: [ToolDescriptor; 3] = [
    ToolDescriptor {
        name: INGEST_MATERIAL,
        title: "Add study material",
        description: "Store pasted lecture text or extracted PDF content.",
        invoking: "Uploading material",
        invoked: "Material uploaded",
    },
    ToolDescriptor {
        name: EXTRACT_TOPICS,
        title: "Extract topics",
        description: "Break materials into ordered topics for practice.",
        invoking: "Extracting topics",
        invoked: "Topics ready",
    },
    ToolDescriptor {
        name: GENERATE_QUIZ,
        title: "Generate quiz",
        description: "Create quiz questions for a topic id.",
        invoking: "Assembling quiz",
        invoked: "Quiz ready",
    },
];

/// ingest_material 参数
#[derive(Debug, Deserialize)]
struct IngestArgs {
    #[serde(default)]
    title: Option<String>,
    text: String,
}

/// generate_quiz 参数
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateQuizArgs {
    topic_id: String,
    #[serde(default)]
    difficulty: Difficulty,
}

/// 工具分发器，持有一个会话
pub struct ToolDispatcher {
    session: SessionStore,
    min_material_chars: usize,
    log_preview_chars: usize,
}

impl ToolDispatcher {
    pub fn new(session: SessionStore, min_material_chars: usize, log_preview_chars: usize) -> Self {
        Self {
            session,
            min_material_chars,
            log_preview_chars,
        }
    }

    /// 工具目录
    pub fn tools() -> &'static [ToolDescriptor] {
        &TOOLS
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// 校验参数并调用对应的会话入口
    pub fn dispatch(&mut self, tool: &str, arguments: JsonValue) -> AppResult<ToolOutcome> {
        debug!("收到工具调用: {}", tool);

        match tool {
            INGEST_MATERIAL => {
                let args: IngestArgs = parse_args(tool, arguments)?;
                if args.text.chars().count() < self.min_material_chars {
                    return Err(AppError::invalid_arguments(
                        tool,
                        format!(
                            "text must contain at least {} characters. Please provide at least a few sentences",
                            self.min_material_chars
                        ),
                    ));
                }
                info!(
                    "📥 录入资料: {}",
                    truncate_text(args.text.trim(), self.log_preview_chars)
                );
                Ok(self.session.ingest(args.title.as_deref(), &args.text))
            }
            EXTRACT_TOPICS => Ok(self.session.extract_topics()),
            GENERATE_QUIZ => {
                let args: GenerateQuizArgs = parse_args(tool, arguments)?;
                if args.topic_id.is_empty() {
                    return Err(AppError::invalid_arguments(tool, "Topic id is required"));
                }
                Ok(self.session.generate_quiz(&args.topic_id, args.difficulty))
            }
            other => Err(AppError::UnknownTool {
                name: other.to_string(),
            }),
        }
    }
}

fn parse_args<T: serde::de::DeserializeOwned>(tool: &str, arguments: JsonValue) -> AppResult<T> {
    serde_json::from_value(arguments).map_err(|e| AppError::invalid_arguments(tool, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dispatcher() -> ToolDispatcher {
        ToolDispatcher::new(SessionStore::new().unwrap(), 40, 80)
    }

    #[test]
    fn test_tool_catalogue() {
        let names: Vec<&str> = ToolDispatcher::tools().iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["ingest_material", "extract_topics", "generate_quiz"]);
        assert_eq!(ToolDispatcher::tools()[2].invoked, "Quiz ready");
    }

    #[test]
    fn test_ingest_requires_minimum_length() {
        let mut dispatcher = dispatcher();
        let err = dispatcher
            .dispatch(INGEST_MATERIAL, json!({ "text": "too short" }))
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidArguments { .. }));
        assert!(dispatcher.session().materials().is_empty());
    }

    #[test]
    fn test_ingest_missing_text_field() {
        let mut dispatcher = dispatcher();
        let err = dispatcher
            .dispatch(INGEST_MATERIAL, json!({ "title": "No body" }))
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidArguments { .. }));
    }

    #[test]
    fn test_ingest_blank_text_passes_schema_but_not_session() {
        let mut dispatcher = dispatcher();
        let outcome = dispatcher
            .dispatch(INGEST_MATERIAL, json!({ "text": " ".repeat(45) }))
            .unwrap();
        assert_eq!(outcome.message(), "Missing text input");
        assert!(dispatcher.session().materials().is_empty());
    }

    #[test]
    fn test_generate_quiz_defaults_to_intro() {
        let mut dispatcher = dispatcher();
        dispatcher
            .dispatch(
                INGEST_MATERIAL,
                json!({ "title": "Rates", "text": "The generator matrix Q holds every transition rate." }),
            )
            .unwrap();
        dispatcher.dispatch(EXTRACT_TOPICS, JsonValue::Null).unwrap();

        let outcome = dispatcher
            .dispatch(GENERATE_QUIZ, json!({ "topicId": "topic-1" }))
            .unwrap();
        let quiz = outcome.structured.quiz.unwrap();
        assert_eq!(quiz.difficulty, Difficulty::Intro);
    }

    #[test]
    fn test_generate_quiz_rejects_bad_arguments() {
        let mut dispatcher = dispatcher();

        let err = dispatcher
            .dispatch(GENERATE_QUIZ, json!({ "topicId": "" }))
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidArguments { .. }));

        let err = dispatcher
            .dispatch(GENERATE_QUIZ, json!({ "topicId": "topic-1", "difficulty": "expert" }))
            .unwrap_err();
        assert!(err.to_string().contains("invalid difficulty"));
    }

    #[test]
    fn test_unknown_tool() {
        let err = dispatcher().dispatch("delete_everything", json!({})).unwrap_err();
        assert!(matches!(err, AppError::UnknownTool { name } if name == "delete_everything"));
    }
}
