//! # Ko-Localizer 库
//!
//! 对第三方页面渲染出的中文界面文本做就地韩化：分层词典（覆盖 > 精确 > 正则兜底）
//! 负责单条字符串的解析，DOM 扫描器负责文本节点与属性的就地替换，
//! 变更通知与周期刷新共同维持翻译在动态页面上的持续生效。
//!
//! ## 模块组织
//!
//! - `core` - 核心入口与装配逻辑
//! - `config` - 运行选项与固定替换策略常量
//! - `dictionary` - 词典注册、激活过滤、合并构建与加载
//! - `html` - DOM 解析、许可策略、扫描与变更处理
//! - `scheduler` - 刷新指纹与调度状态

pub mod config;
pub mod core;
pub mod dictionary;
pub mod html;
pub mod scheduler;

// Re-export commonly used items for convenience
pub use crate::config::LocalizerOptions;
pub use crate::core::Localizer;
pub use crate::dictionary::{
    active_names, shared_store, DetectorRegistry, DictionaryRecord, DictionarySource,
    DictionaryStore, LocalizerError, LocalizerResult, RegexRuleSpec, ResolvedDictionary,
    SharedStore, StaticSource,
};
pub use crate::html::{
    has_chinese, html_to_dom, serialize_document, DomScanner, MutationRecord, TranslationPolicy,
};
pub use crate::scheduler::RefreshScheduler;
