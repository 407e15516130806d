//! 应用入口 - 编排层
//!
//! ## 职责
//!
//! 1. **应用初始化**：加载打分策略，创建会话和工具分发器
//! 2. **请求循环**：逐行读取 JSON 请求，依次处理，逐行写出 JSON 响应
//! 3. **会话隔离**：一个连接（一条输入流）对应一个会话，请求串行处理
//!
//! ## 协议
//!
//! ```text
//! 请求: {"id": 1, "tool": "ingest_material", "arguments": {"title": "...", "text": "..."}}
//! 成功: {"id": 1, "content": [{"type": "text", "text": "..."}], "structuredContent": {...}}
//! 失败: {"id": 1, "error": "..."}
//! 目录: {"id": 2, "tool": "list_tools"} -> {"id": 2, "tools": [...]}
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::{json, Value as JsonValue};
use std::path::Path;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{info, warn};

use crate::config::Config;
use crate::models::{load_scoring_policy, ScoringPolicy, ToolOutcome};
use crate::orchestrator::tool_dispatcher::ToolDispatcher;
use crate::utils::logging::{log_session_summary, log_startup};
use crate::workflow::SessionStore;

pub const LIST_TOOLS: &str = "list_tools";

/// 单行请求
#[derive(Debug, Deserialize)]
struct ToolRequest {
    #[serde(default)]
    id: JsonValue,
    tool: String,
    #[serde(default)]
    arguments: JsonValue,
}

/// 请求处理统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RequestStats {
    pub handled: usize,
    pub rejected: usize,
}

/// 应用主结构
pub struct App {
    config: Config,
    policy: ScoringPolicy,
    stats: RequestStats,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        let policy = match &config.policy_file {
            Some(path) => load_scoring_policy(Path::new(path))
                .await
                .with_context(|| format!("无法加载打分策略: {}", path))?,
            None => ScoringPolicy::default(),
        };

        Ok(Self::with_policy(config, policy))
    }

    /// 使用已有策略创建应用
    pub fn with_policy(config: Config, policy: ScoringPolicy) -> Self {
        Self {
            config,
            policy,
            stats: RequestStats::default(),
        }
    }

    pub fn stats(&self) -> RequestStats {
        self.stats
    }

    /// 在标准输入输出上运行一个会话
    pub async fn run(&mut self) -> Result<()> {
        let stdin = BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        self.serve(stdin, stdout).await
    }

    /// 在给定的输入输出流上运行一个会话，流结束时会话随之销毁
    pub async fn serve<R, W>(&mut self, reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let session = SessionStore::with_policy(&self.policy).context("无法创建会话")?;
        let mut dispatcher = ToolDispatcher::new(
            session,
            self.config.min_material_chars,
            self.config.log_preview_chars,
        );
        info!("🔌 新会话已建立");

        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await.context("读取请求失败")? {
            if line.trim().is_empty() {
                continue;
            }

            let response = self.handle_line(&mut dispatcher, &line);
            let mut encoded = serde_json::to_string(&response)?;
            encoded.push('\n');
            writer
                .write_all(encoded.as_bytes())
                .await
                .context("写出响应失败")?;
            writer.flush().await?;
        }

        log_session_summary(self.stats.handled, self.stats.rejected);
        Ok(())
    }

    /// 处理一行请求，总是返回一个 JSON 响应
    fn handle_line(&mut self, dispatcher: &mut ToolDispatcher, line: &str) -> JsonValue {
        let request: ToolRequest = match serde_json::from_str(line) {
            Ok(request) => request,
            Err(e) => {
                warn!("⚠️ 无法解析请求: {}", e);
                self.stats.rejected += 1;
                return json!({ "id": JsonValue::Null, "error": format!("malformed request: {}", e) });
            }
        };

        if request.tool == LIST_TOOLS {
            self.stats.handled += 1;
            return json!({ "id": request.id, "tools": ToolDispatcher::tools() });
        }

        match dispatcher.dispatch(&request.tool, request.arguments) {
            Ok(outcome) => {
                self.stats.handled += 1;
                render_outcome(request.id, &outcome)
            }
            Err(e) => {
                warn!("⚠️ 工具调用被拒绝: {}", e);
                self.stats.rejected += 1;
                json!({ "id": request.id, "error": e.to_string() })
            }
        }
    }
}

/// 把工具结果渲染成响应
pub fn render_outcome(id: JsonValue, outcome: &ToolOutcome) -> JsonValue {
    json!({
        "id": id,
        "content": [{ "type": "text", "text": outcome.text }],
        "structuredContent": outcome.structured,
    })
}
