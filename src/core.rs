//! 核心入口模块
//!
//! `Localizer` 把注入的注册表、激活检测器、查找结构和 DOM 扫描器装配在一起，
//! 驱动三条工作来源：启动引导、变更通知、周期刷新。

use std::borrow::Cow;

use markup5ever_rcdom::Handle;

use crate::config::LocalizerOptions;
use crate::dictionary::activation::{active_names, DetectorRegistry};
use crate::dictionary::loader::{load_dictionaries, DictionarySource};
use crate::dictionary::resolver::ResolvedDictionary;
use crate::dictionary::store::SharedStore;
use crate::html::mutation::{is_watched_attr, MutationRecord};
use crate::html::scanner::DomScanner;
use crate::scheduler::RefreshScheduler;

/// 就地本地化器
///
/// 注册表与检测器由外部注入，核心对注册表只读；
/// 查找结构在指纹变化时整体重建、整体发布。
pub struct Localizer {
    store: SharedStore,
    detectors: DetectorRegistry,
    scanner: DomScanner,
    scheduler: RefreshScheduler,
    resolved: ResolvedDictionary,
    options: LocalizerOptions,
}

impl Localizer {
    /// 用注入的注册表和检测器创建本地化器
    pub fn new(store: SharedStore, detectors: DetectorRegistry, options: LocalizerOptions) -> Self {
        Self {
            store,
            detectors,
            scanner: DomScanner::new(),
            scheduler: RefreshScheduler::new(),
            resolved: ResolvedDictionary::default(),
            options,
        }
    }

    /// 启动引导：并发加载词典来源，做首次构建并全量扫描
    pub async fn init(&mut self, sources: &[Box<dyn DictionarySource>], root: &Handle) {
        load_dictionaries(&self.store, sources).await;

        if self.store.borrow().is_empty() {
            tracing::warn!("没有加载到任何词典，页面将保持原文");
        }

        self.refresh_if_needed(root);
        self.scan(root);

        tracing::debug!(
            "本地化器就绪, dictionaries={}, active={}",
            self.store.borrow().len(),
            if self.scheduler.last_signature().is_empty() {
                "(无)"
            } else {
                self.scheduler.last_signature()
            },
        );
    }

    /// 重新计算激活集合与指纹；有变化则重建查找结构并整体换表
    pub fn refresh_if_needed(&mut self, root: &Handle) -> bool {
        let store = self.store.borrow();
        let active = active_names(&store, &self.detectors, root);
        let signature = RefreshScheduler::signature(&active);

        if !self.scheduler.needs_rebuild(store.len(), &signature) {
            return false;
        }

        // 先完整构建再发布，任何读者都看不到半成品
        let rebuilt = ResolvedDictionary::build(&store, &active);
        drop(store);
        self.resolved = rebuilt;
        true
    }

    /// 扫描一棵子树并就地翻译
    pub fn scan(&self, node: &Handle) {
        self.scanner.scan(node, &self.resolved);
    }

    /// 处理一批 DOM 变更通知
    pub fn on_mutation(&self, batch: &[MutationRecord]) {
        for record in batch {
            match record {
                MutationRecord::ChildList { added } => {
                    for node in added {
                        self.scanner.scan(node, &self.resolved);
                    }
                }
                MutationRecord::CharacterData { target } => {
                    self.scanner.scan(target, &self.resolved);
                }
                MutationRecord::Attributes { target, attr_name } => {
                    if is_watched_attr(attr_name) {
                        self.scanner.translate_attributes(target, &self.resolved);
                    }
                }
            }
        }
    }

    /// 用当前查找结构翻译一条字符串
    pub fn translate<'a>(&self, input: &'a str) -> Cow<'a, str> {
        self.resolved.translate(input)
    }

    /// 当前查找结构（诊断与测试用）
    pub fn resolved(&self) -> &ResolvedDictionary {
        &self.resolved
    }

    pub fn options(&self) -> &LocalizerOptions {
        &self.options
    }

    /// 单次调度刷新：指纹变了就重建并全量重扫
    pub fn tick(&mut self, root: &Handle) {
        if self.refresh_if_needed(root) {
            self.scan(root);
        }
    }

    /// 周期刷新循环，按固定间隔运行到文档生命周期结束
    ///
    /// 单次刷新的问题在各自边界消化（检测器失败、坏规则都只是跳过），
    /// 循环本身永不停止。
    pub async fn run(&mut self, root: &Handle) {
        let mut ticker = tokio::time::interval(self.options.refresh_interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            self.tick(root);
        }
    }
}
