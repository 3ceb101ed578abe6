//! 变更通知契约模块
//!
//! 把浏览器式的 DOM 变更批次建模为显式枚举，观察来源（真实观察器或
//! 测试里的合成批次）与扫描逻辑由此解耦。

use markup5ever_rcdom::Handle;

use crate::config::constants;

/// 单条 DOM 变更通知
#[derive(Clone)]
pub enum MutationRecord {
    /// 结构变化：新增了若干节点
    ChildList { added: Vec<Handle> },
    /// 文本内容变化
    CharacterData { target: Handle },
    /// 属性变化
    Attributes { target: Handle, attr_name: String },
}

/// 属性是否在关注列表里，等价于观察器注册时的 attributeFilter
pub fn is_watched_attr(attr_name: &str) -> bool {
    constants::WATCHED_ATTRS.contains(&attr_name)
}
