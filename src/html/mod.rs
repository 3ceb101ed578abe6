//! HTML 解析与 DOM 处理模块
//!
//! - `dom`: 基础 DOM 操作
//! - `eligibility`: 翻译许可策略
//! - `scanner`: 子树扫描与就地替换
//! - `mutation`: 变更通知契约
//! - `serializer`: 序列化

pub mod dom;
pub mod eligibility;
pub mod mutation;
pub mod scanner;
pub mod serializer;

// 重新导出主要的公共 API
pub use dom::{
    find_element_by_class, find_element_by_id, get_node_attr, get_node_name, get_parent_node,
    has_class, html_to_dom, set_node_attr,
};
pub use eligibility::{has_chinese, TranslationPolicy};
pub use mutation::{is_watched_attr, MutationRecord};
pub use scanner::DomScanner;
pub use serializer::serialize_document;
