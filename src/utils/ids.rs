/// 带前缀的自增 ID 生成器，例如 `material-1`、`material-2`
#[derive(Debug, Clone)]
pub struct IdSequence {
    prefix: &'static str,
    next: usize,
}

impl IdSequence {
    pub fn new(prefix: &'static str) -> Self {
        Self { prefix, next: 1 }
    }

    /// 生成下一个 ID
    pub fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_monotonic() {
        let mut ids = IdSequence::new("topic");
        assert_eq!(ids.next_id(), "topic-1");
        assert_eq!(ids.next_id(), "topic-2");
        assert_eq!(ids.next_id(), "topic-3");
    }
}
