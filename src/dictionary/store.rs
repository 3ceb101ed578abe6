//! 词典注册表模块
//!
//! 外部加载器把各扩展的词典数据注册进来；核心只读，注册表只增不删

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// 单条正则规则的原始形态
///
/// `flags` 沿用 JS 风格的标志字符串（`g`、`i`、`m` 等），编译阶段再做映射。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RegexRuleSpec {
    pub pattern: String,
    pub flags: String,
    pub replace: String,
}

impl RegexRuleSpec {
    pub fn new(
        pattern: impl Into<String>,
        flags: impl Into<String>,
        replace: impl Into<String>,
    ) -> Self {
        Self {
            pattern: pattern.into(),
            flags: flags.into(),
            replace: replace.into(),
        }
    }
}

/// 一个扩展词典的完整记录
///
/// 条目保持 `[[源串, 译文], ...]` 的原始形态。长度不足或为空的条目在构建阶段
/// 静默丢弃，而不是在解析阶段报错，宽容接收外部数据。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DictionaryRecord {
    pub exact_entries: Vec<Vec<String>>,
    pub override_entries: Vec<Vec<String>>,
    pub regex_rules: Vec<RegexRuleSpec>,
}

impl DictionaryRecord {
    /// 记录是否不含任何条目
    pub fn is_empty(&self) -> bool {
        self.exact_entries.is_empty()
            && self.override_entries.is_empty()
            && self.regex_rules.is_empty()
    }
}

/// 追加式词典注册表，保持注册顺序
///
/// 注册顺序决定同名源串的覆盖关系（后写赢）和正则规则的应用顺序，
/// 因此底层用有序向量而不是散列表。
#[derive(Debug, Default)]
pub struct DictionaryStore {
    records: Vec<(String, DictionaryRecord)>,
}

impl DictionaryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册一个词典；重复注册同名词典时就地替换，保持原顺位
    pub fn register(&mut self, name: impl Into<String>, record: DictionaryRecord) {
        let name = name.into();
        if let Some(slot) = self.records.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = record;
        } else {
            self.records.push((name, record));
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.iter().any(|(n, _)| n == name)
    }

    pub fn get(&self, name: &str) -> Option<&DictionaryRecord> {
        self.records
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, record)| record)
    }

    /// 按注册顺序迭代
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DictionaryRecord)> {
        self.records
            .iter()
            .map(|(name, record)| (name.as_str(), record))
    }

    /// 按注册顺序列出词典名
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|(name, _)| name.as_str())
    }
}

/// 注入核心的共享注册表
///
/// DOM 侧基于 `Rc`，整个系统运行在单一执行上下文里，
/// 因此共享用 `Rc<RefCell<_>>` 而不是跨线程锁。
pub type SharedStore = Rc<RefCell<DictionaryStore>>;

/// 创建一个空的共享注册表
pub fn shared_store() -> SharedStore {
    Rc::new(RefCell::new(DictionaryStore::new()))
}
