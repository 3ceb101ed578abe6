//! DOM 扫描与就地替换模块
//!
//! 深度优先遍历子树，对文本节点与固定属性集做就地翻译。
//! 重复扫描是无害的：译文不再含中文，也不会再命中词条。

use markup5ever_rcdom::{Handle, NodeData};

use super::dom::{get_node_attr, get_node_name, get_parent_node, set_node_attr, set_text_content};
use super::eligibility::{has_chinese, TranslationPolicy};
use crate::config::constants;
use crate::dictionary::resolver::ResolvedDictionary;

/// DOM 扫描器
///
/// 遍历本身不持有词典状态，查找结构由调用方传入，
/// 刷新调度器换表之后无需重建扫描器。
#[derive(Debug, Clone, Copy, Default)]
pub struct DomScanner {
    policy: TranslationPolicy,
}

impl DomScanner {
    pub fn new() -> Self {
        Self {
            policy: TranslationPolicy::new(),
        }
    }

    pub fn policy(&self) -> &TranslationPolicy {
        &self.policy
    }

    /// 扫描一棵子树；根可以是文档、元素或文本节点
    pub fn scan(&self, node: &Handle, resolved: &ResolvedDictionary) {
        match node.data {
            NodeData::Document => {
                self.scan_children(node, resolved);
            }
            NodeData::Element { .. } => {
                self.translate_attributes(node, resolved);
                self.scan_children(node, resolved);
            }
            NodeData::Text { .. } => {
                self.translate_text_node(node, resolved);
            }
            // 注释、doctype 等节点不参与翻译
            _ => {}
        }
    }

    fn scan_children(&self, node: &Handle, resolved: &ResolvedDictionary) {
        for child_node in node.children.borrow().iter() {
            self.scan(child_node, resolved);
        }
    }

    /// 翻译单个文本节点；父元素不许可时跳过
    pub fn translate_text_node(&self, node: &Handle, resolved: &ResolvedDictionary) {
        let NodeData::Text { contents } = &node.data else {
            return;
        };

        let Some(parent) = get_parent_node(node) else {
            return;
        };
        if !self.policy.text_eligible(&parent) {
            return;
        }

        let before = contents.borrow().to_string();
        // 帮助弹窗里可能有预渲染的混合内容，不过中文检测门槛
        if before.is_empty() || (!has_chinese(&before) && !self.policy.in_help_popup(&parent)) {
            return;
        }

        let after = resolved.translate(&before);
        if after != before.as_str() {
            set_text_content(node, &after);
        }
    }

    /// 翻译元素的固定属性集；按钮类 input 还包括 value
    pub fn translate_attributes(&self, element: &Handle, resolved: &ResolvedDictionary) {
        if !matches!(element.data, NodeData::Element { .. }) {
            return;
        }
        if !self.policy.attr_eligible(element) {
            return;
        }

        for attr_name in constants::TRANSLATABLE_ATTRS {
            self.translate_attribute(element, attr_name, resolved);
        }

        if is_button_like_input(element) {
            self.translate_attribute(element, "value", resolved);
        }
    }

    fn translate_attribute(
        &self,
        element: &Handle,
        attr_name: &str,
        resolved: &ResolvedDictionary,
    ) {
        let Some(before) = get_node_attr(element, attr_name) else {
            return;
        };
        if before.is_empty() || !has_chinese(&before) {
            return;
        }

        let after = resolved.translate(&before);
        if after != before.as_str() {
            set_node_attr(element, attr_name, Some(after.into_owned()));
        }
    }
}

/// 是否为按钮类 input 元素
fn is_button_like_input(element: &Handle) -> bool {
    if get_node_name(element) != Some("input") {
        return false;
    }
    get_node_attr(element, "type")
        .map(|t| constants::BUTTON_INPUT_TYPES.contains(&t.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}
