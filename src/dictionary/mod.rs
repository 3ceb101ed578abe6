//! 词典子系统
//!
//! - `store`: 追加式注册表与记录形态
//! - `activation`: 按宿主功能存在与否的激活过滤
//! - `resolver`: 合并构建与查表翻译
//! - `loader`: 并发加载外部词典负载
//! - `error`: 统一错误类型

pub mod activation;
pub mod error;
pub mod loader;
pub mod resolver;
pub mod store;

// 重新导出主要的公共 API
pub use activation::{active_names, DetectorFn, DetectorRegistry};
pub use error::{LocalizerError, LocalizerResult};
pub use loader::{load_dictionaries, parse_dictionary, DictionarySource, StaticSource};
pub use resolver::{compile_rule, CompiledRule, ResolvedDictionary};
pub use store::{shared_store, DictionaryRecord, DictionaryStore, RegexRuleSpec, SharedStore};
