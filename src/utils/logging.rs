/// 日志工具模块
///
/// 提供日志初始化和输出的辅助函数。
/// 标准输出是协议通道，日志一律写到标准错误
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// 初始化 tracing 日志
///
/// 优先使用 `RUST_LOG`，否则根据 `verbose` 选择 debug 或 info 级别。
/// 重复调用是安全的（测试中会多次调用）
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!(
        "🚀 Tutorion 启动 - {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    match &config.policy_file {
        Some(path) => info!("📋 打分策略文件: {}", path),
        None => info!("📋 使用内置打分策略"),
    }
    info!("📏 资料最少字符数: {}", config.min_material_chars);
    info!("{}", "=".repeat(60));
}

/// 记录会话结束信息
pub fn log_session_summary(handled: usize, rejected: usize) {
    info!("\n{}", "─".repeat(60));
    info!("📊 会话结束: 处理请求 {} 个，拒绝 {} 个", handled, rejected);
    info!("{}", "─".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大字符数
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("abcdefghij", 4), "abcd...");
        assert_eq!(truncate_text("∝≈∝≈", 2), "∝≈...");
    }
}
