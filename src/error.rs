use thiserror::Error;

/// 应用程序错误类型
///
/// 核心流程（入库、抽取、出题）本身不会失败，预期内的失败都以消息形式返回；
/// 这里只覆盖启动配置、策略加载和工具调用参数校验等外围错误
#[derive(Debug, Error)]
pub enum AppError {
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// 打分策略 TOML 解析失败
    #[error("打分策略解析失败 ({path}): {source}")]
    PolicyParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// 打分策略内容不合法
    #[error("打分策略不合法: {reason}")]
    InvalidPolicy { reason: String },

    /// 工具参数校验失败
    #[error("工具 {tool} 参数错误: {reason}")]
    InvalidArguments { tool: String, reason: String },

    /// 未知工具
    #[error("未知工具: {name}")]
    UnknownTool { name: String },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::FileRead {
            path: path.into(),
            source,
        }
    }

    /// 创建参数校验错误
    pub fn invalid_arguments(tool: impl Into<String>, reason: impl Into<String>) -> Self {
        AppError::InvalidArguments {
            tool: tool.into(),
            reason: reason.into(),
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
