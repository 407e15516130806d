use crate::error::{AppError, AppResult};
use crate::models::ScoringPolicy;
use std::path::Path;
use tokio::fs;

/// 从 TOML 文本解析打分策略，未出现的字段使用默认值
pub fn parse_scoring_policy(content: &str, origin: &str) -> AppResult<ScoringPolicy> {
    let policy: ScoringPolicy = toml::from_str(content).map_err(|e| AppError::PolicyParse {
        path: origin.to_string(),
        source: e,
    })?;
    policy.validate()?;
    Ok(policy)
}

/// 从 TOML 文件加载打分策略
pub async fn load_scoring_policy(policy_path: &Path) -> AppResult<ScoringPolicy> {
    let content = fs::read_to_string(policy_path)
        .await
        .map_err(|e| AppError::file_read_failed(policy_path.display().to_string(), e))?;

    let policy = parse_scoring_policy(&content, &policy_path.display().to_string())?;

    tracing::info!(
        "成功加载打分策略: {} ({} 个关键词)",
        policy_path.display(),
        policy.keywords.len()
    );

    Ok(policy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_partial_policy_keeps_defaults() {
        let policy = parse_scoring_policy(
            r#"
            keywords = ["entropy", "bayes"]
            max_topics_per_material = 2
            "#,
            "inline",
        )
        .unwrap();

        assert_eq!(policy.keywords, vec!["entropy", "bayes"]);
        assert_eq!(policy.max_topics_per_material, 2);
        assert_eq!(policy.salience_min_chars, 30);
        assert_eq!(policy.fallback_sentences, 3);
    }

    #[test]
    fn test_parse_rejects_bad_pattern() {
        let err = parse_scoring_policy(r#"formula_pattern = "(unclosed""#, "inline").unwrap_err();
        assert!(matches!(err, AppError::InvalidPolicy { .. }));
    }

    #[test]
    fn test_parse_rejects_bad_toml() {
        let err = parse_scoring_policy("keywords = [", "inline").unwrap_err();
        assert!(matches!(err, AppError::PolicyParse { .. }));
    }

    #[tokio::test]
    async fn test_load_policy_from_file() {
        let path = std::env::temp_dir().join(format!("tutorion-policy-{}.toml", std::process::id()));
        tokio::fs::write(&path, "salience_min_chars = 10\n").await.unwrap();

        let policy = load_scoring_policy(&path).await.unwrap();
        assert_eq!(policy.salience_min_chars, 10);
        assert_eq!(policy.keywords.len(), 18);

        let _ = tokio::fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let result = load_scoring_policy(Path::new("/definitely/not/here.toml")).await;
        assert!(matches!(result, Err(AppError::FileRead { .. })));
    }
}
