//! 翻译许可策略模块
//!
//! 按祖先链判定元素是否允许翻译，以及文本的中文检测门槛。
//! 排除名单是固定策略：代码/样式容器、可编辑区域、聊天消息区、滑动控件。

use markup5ever_rcdom::Handle;

use super::dom::{
    ancestor_or_self_matches, class_contains, get_node_attr, get_node_id, get_node_name, has_class,
};
use crate::config::constants;

/// 固定的翻译许可策略
///
/// 豁免规则先于排除规则：帮助弹窗和特性面板内部永远允许翻译，
/// 即使它们位于聊天区域等被排除的容器之内。
#[derive(Debug, Clone, Copy, Default)]
pub struct TranslationPolicy;

impl TranslationPolicy {
    pub fn new() -> Self {
        Self
    }

    /// 元素是否位于帮助弹窗内（自身或祖先带标记 class）
    ///
    /// 弹窗里可能混有预渲染文本，文本翻译对它强制生效，连 code/pre 也不例外。
    pub fn in_help_popup(&self, element: &Handle) -> bool {
        ancestor_or_self_matches(element, |el| has_class(el, constants::HELP_POPUP_CLASS))
    }

    /// 元素是否位于特性面板内（id 前缀或 class 子串命中）
    pub fn in_feature_panel(&self, element: &Handle) -> bool {
        ancestor_or_self_matches(element, |el| {
            get_node_id(el)
                .map(|id| id.starts_with(constants::FEATURE_PANEL_ID_PREFIX))
                .unwrap_or(false)
                || class_contains(el, constants::FEATURE_PANEL_CLASS_HINT)
        })
    }

    /// 该元素下的文本节点是否允许翻译
    pub fn text_eligible(&self, element: &Handle) -> bool {
        if self.in_help_popup(element) || self.in_feature_panel(element) {
            return true;
        }
        !ancestor_or_self_matches(element, |el| self.matches_skip(el, true))
    }

    /// 该元素的属性是否允许翻译（排除名单不含可编辑区域）
    pub fn attr_eligible(&self, element: &Handle) -> bool {
        if self.in_help_popup(element) || self.in_feature_panel(element) {
            return true;
        }
        !ancestor_or_self_matches(element, |el| self.matches_skip(el, false))
    }

    fn matches_skip(&self, element: &Handle, include_editable: bool) -> bool {
        if let Some(name) = get_node_name(element) {
            let skip_elements = if include_editable {
                constants::SKIP_TEXT_ELEMENTS
            } else {
                constants::SKIP_ATTR_ELEMENTS
            };
            if skip_elements.contains(&name) {
                return true;
            }
        }

        if include_editable
            && get_node_attr(element, "contenteditable").as_deref() == Some("true")
        {
            return true;
        }

        if constants::SKIP_CLASSES
            .iter()
            .any(|class| has_class(element, class))
        {
            return true;
        }

        if let Some(id) = get_node_id(element) {
            if constants::SKIP_IDS.contains(&id.as_str()) {
                return true;
            }
        }

        false
    }
}

/// 文本是否含有中文字符（U+3400..=U+9FFF）
pub fn has_chinese(text: &str) -> bool {
    text.chars()
        .any(|c| (constants::CHINESE_RANGE_START..=constants::CHINESE_RANGE_END).contains(&c))
}
