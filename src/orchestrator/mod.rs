//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `app` - 应用入口
//! - 加载打分策略
//! - 每条输入流创建一个会话
//! - 逐行读写 JSON，串行处理请求
//!
//! ### `tool_dispatcher` - 工具分发器
//! - 校验工具参数
//! - 把工具名路由到会话入口
//! - 提供工具目录
//!
//! ## 层次关系
//!
//! ```text
//! app (处理输入流)
//!     ↓
//! tool_dispatcher (处理单个工具调用)
//!     ↓
//! workflow::SessionStore (会话状态)
//!     ↓
//! services (能力层：分句 / 打分 / 抽取 / 出题)
//! ```

pub mod app;
pub mod tool_dispatcher;

pub use app::{render_outcome, App, RequestStats};
pub use tool_dispatcher::{ToolDescriptor, ToolDispatcher};
