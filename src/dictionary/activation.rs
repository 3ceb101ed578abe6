//! 词典激活过滤模块
//!
//! 按宿主功能是否出现在 DOM 中决定词典是否生效。
//! 没注册检测器的词典无条件激活；检测器出错按未激活处理，绝不向外传播。

use std::collections::{BTreeSet, HashMap};

use markup5ever_rcdom::Handle;

use super::error::LocalizerResult;
use super::store::DictionaryStore;
use crate::html::dom::{find_element_by_class, find_element_by_id};

/// 激活检测器：对文档根做零参检查，回答该词典对应的宿主功能是否存在
pub type DetectorFn = Box<dyn Fn(&Handle) -> LocalizerResult<bool>>;

/// 词典名到检测器的映射
#[derive(Default)]
pub struct DetectorRegistry {
    detectors: HashMap<String, DetectorFn>,
}

impl DetectorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册一个检测器
    pub fn register<F>(&mut self, name: impl Into<String>, detector: F)
    where
        F: Fn(&Handle) -> LocalizerResult<bool> + 'static,
    {
        self.detectors.insert(name.into(), Box::new(detector));
    }

    /// 便捷注册：任一 id 命中即视为激活
    pub fn register_id_probe(&mut self, name: impl Into<String>, ids: &[&str]) {
        let ids: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
        self.register(name, move |root| {
            Ok(ids.iter().any(|id| find_element_by_id(root, id).is_some()))
        });
    }

    /// 便捷注册：任一 class 命中即视为激活
    pub fn register_class_probe(&mut self, name: impl Into<String>, classes: &[&str]) {
        let classes: Vec<String> = classes.iter().map(|class| class.to_string()).collect();
        self.register(name, move |root| {
            Ok(classes
                .iter()
                .any(|class| find_element_by_class(root, class).is_some()))
        });
    }

    pub fn get(&self, name: &str) -> Option<&DetectorFn> {
        self.detectors.get(name)
    }

    pub fn len(&self) -> usize {
        self.detectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detectors.is_empty()
    }
}

/// 计算当前激活的词典名集合
///
/// 返回有序集合，激活签名直接由它连接而成。
pub fn active_names(
    store: &DictionaryStore,
    detectors: &DetectorRegistry,
    root: &Handle,
) -> BTreeSet<String> {
    let mut active = BTreeSet::new();

    for name in store.names() {
        match detectors.get(name) {
            None => {
                active.insert(name.to_string());
            }
            Some(detector) => match detector(root) {
                Ok(true) => {
                    active.insert(name.to_string());
                }
                Ok(false) => {}
                Err(e) => {
                    tracing::debug!("检测器执行失败，按未激活处理: {}: {}", name, e);
                }
            },
        }
    }

    active
}
