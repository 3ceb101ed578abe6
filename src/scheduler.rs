//! 周期刷新调度模块
//!
//! 用 (注册表大小, 激活签名) 这对廉价指纹决定是否重建查找结构。
//! 指纹不是内容哈希：词典记录本身不可变，变化只可能来自新注册或激活集合翻转。

use std::collections::BTreeSet;

use crate::config::constants;

/// 刷新指纹状态
#[derive(Debug, Clone, Default)]
pub struct RefreshScheduler {
    last_store_size: usize,
    last_signature: String,
}

impl RefreshScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// 由激活词典名集合计算确定性签名（有序集合按分隔符连接）
    pub fn signature(active: &BTreeSet<String>) -> String {
        active
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(constants::SIGNATURE_SEPARATOR)
    }

    /// 指纹有变化则记录新指纹并返回 true
    pub fn needs_rebuild(&mut self, store_size: usize, signature: &str) -> bool {
        if store_size != self.last_store_size || signature != self.last_signature {
            self.last_store_size = store_size;
            self.last_signature = signature.to_string();
            return true;
        }
        false
    }

    /// 上次观察到的激活签名
    pub fn last_signature(&self) -> &str {
        &self.last_signature
    }

    pub fn last_store_size(&self) -> usize {
        self.last_store_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> BTreeSet<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_signature_is_sorted_and_joined() {
        assert_eq!(RefreshScheduler::signature(&names(&["b", "a"])), "a|b");
        assert_eq!(RefreshScheduler::signature(&BTreeSet::new()), "");
    }

    #[test]
    fn test_rebuild_only_on_fingerprint_change() {
        let mut scheduler = RefreshScheduler::new();

        assert!(scheduler.needs_rebuild(1, "a"));
        assert!(!scheduler.needs_rebuild(1, "a"));

        // 注册表增长触发重建
        assert!(scheduler.needs_rebuild(2, "a"));
        // 激活集合翻转触发重建
        assert!(scheduler.needs_rebuild(2, "a|b"));
        assert!(!scheduler.needs_rebuild(2, "a|b"));
    }

    #[test]
    fn test_initial_empty_store_is_a_noop() {
        let mut scheduler = RefreshScheduler::new();
        // 初始状态就是 (0, "")，空页面上的第一次检查不触发重建
        assert!(!scheduler.needs_rebuild(0, ""));
    }
}
