//! # Tutorion
//!
//! 把学习资料拆成知识点并按知识点生成测验的有状态后端
//!
//! ## 架构设计
//!
//! 本系统采用四层架构：
//!
//! ### ① 数据层（Models）
//! - `models/` - 资料、知识点、测验、快照以及打分策略
//! - `loaders` - 从 TOML 文件加载打分策略
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 纯函数式的处理能力，不持有会话状态
//! - `SentenceSegmenter` - 分句
//! - `RelevanceScorer` - 关键词 + 公式标记打分
//! - `TopicSynthesizer` - 从高分句子生成知识点
//! - `QuizBuilder` - 按模板生成三道题
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - `SessionStore` 持有一个会话的资料、知识点和测验
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/tool_dispatcher` - 参数校验与工具路由
//! - `orchestrator/app` - JSON 行协议循环，一条输入流一个会话
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Difficulty, Material, Question, Quiz, ScoringPolicy, SessionSnapshot, ToolOutcome, Topic};
pub use orchestrator::{App, ToolDispatcher};
pub use workflow::SessionStore;
