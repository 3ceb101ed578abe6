//! 词典加载模块
//!
//! 并发拉取外部词典负载并注册进共享注册表。部分失败只告警，不致命：
//! 加载失败的来源什么也不贡献，系统带着已加载的部分继续工作。

use futures::future::{join_all, LocalBoxFuture};

use super::error::{LocalizerError, LocalizerResult};
use super::store::{DictionaryRecord, SharedStore};

/// 外部词典来源
///
/// 负载是注册契约的 JSON 形态：
/// `{ "exactEntries": [["源","译"], ...], "overrideEntries": [...], "regexRules": [{...}] }`。
/// 从哪里取（文件、网络、内嵌资源）由调用方实现，核心不做任何 IO。
pub trait DictionarySource {
    /// 词典注册名
    fn name(&self) -> &str;

    /// 拉取 JSON 负载
    fn fetch(&self) -> LocalBoxFuture<'_, LocalizerResult<String>>;
}

/// 内存中的静态词典来源，测试与内嵌词典用
pub struct StaticSource {
    name: String,
    payload: String,
}

impl StaticSource {
    pub fn new(name: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            payload: payload.into(),
        }
    }
}

impl DictionarySource for StaticSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch(&self) -> LocalBoxFuture<'_, LocalizerResult<String>> {
        Box::pin(async move { Ok(self.payload.clone()) })
    }
}

/// 解析一个词典负载
pub fn parse_dictionary(payload: &str) -> LocalizerResult<DictionaryRecord> {
    serde_json::from_str(payload).map_err(|e| LocalizerError::InvalidDictionary(e.to_string()))
}

/// 并发加载所有词典来源，返回成功注册的数量
///
/// 所有来源一起等待，完成顺序无关紧要；已注册过的名字跳过，
/// 单个来源失败只记录告警，其余照常注册。
pub async fn load_dictionaries(store: &SharedStore, sources: &[Box<dyn DictionarySource>]) -> usize {
    let fetches = sources.iter().map(|source| async move {
        let payload = source.fetch().await?;
        let record = parse_dictionary(&payload)?;
        Ok::<_, LocalizerError>(record)
    });

    let mut loaded = 0;
    for (source, result) in sources.iter().zip(join_all(fetches).await) {
        match result {
            Ok(record) => {
                let mut store = store.borrow_mut();
                if store.contains(source.name()) {
                    continue;
                }
                store.register(source.name(), record);
                loaded += 1;
            }
            Err(e) => {
                tracing::warn!("词典来源加载失败: {}: {}", source.name(), e);
            }
        }
    }

    loaded
}
