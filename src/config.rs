/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 打分策略 TOML 文件路径，不设置则使用内置策略
    pub policy_file: Option<String>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// ingest_material 要求的最少字符数
    pub min_material_chars: usize,
    /// 日志中文本预览的最大字符数
    pub log_preview_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            policy_file: None,
            verbose_logging: false,
            min_material_chars: 40,
            log_preview_chars: 80,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            policy_file: std::env::var("TUTORION_POLICY_FILE").ok().filter(|v| !v.trim().is_empty()).or(default.policy_file),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            min_material_chars: std::env::var("MIN_MATERIAL_CHARS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.min_material_chars),
            log_preview_chars: std::env::var("LOG_PREVIEW_CHARS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.log_preview_chars),
        }
    }
}
