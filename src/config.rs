//! 本地化配置模块
//!
//! 提供运行期选项与固定替换策略常量

use std::time::Duration;

/// 配置常量
pub mod constants {
    use std::time::Duration;

    // 可翻译属性
    pub const TRANSLATABLE_ATTRS: &[&str] = &["title", "placeholder", "aria-label"];

    // 变更通知里关注的属性（含按钮类 input 的 value）
    pub const WATCHED_ATTRS: &[&str] = &["title", "placeholder", "aria-label", "value"];

    // 文本节点翻译跳过的容器元素
    pub const SKIP_TEXT_ELEMENTS: &[&str] = &["script", "style", "code", "pre", "textarea"];

    // 属性翻译跳过的容器元素（不含可编辑区域）
    pub const SKIP_ATTR_ELEMENTS: &[&str] = &["script", "style", "code", "pre"];

    // 聊天区域与滑动控件
    pub const SKIP_CLASSES: &[&str] = &["mes", "mes_text", "mes_block", "swipe_right", "swipe_left"];
    pub const SKIP_IDS: &[&str] = &["chat"];

    // 豁免区域标记
    pub const HELP_POPUP_CLASS: &str = "backup_help_popup";
    pub const FEATURE_PANEL_ID_PREFIX: &str = "horae-";
    pub const FEATURE_PANEL_CLASS_HINT: &str = "horae";

    // 中文检测的码位范围
    pub const CHINESE_RANGE_START: char = '\u{3400}';
    pub const CHINESE_RANGE_END: char = '\u{9FFF}';

    // 按钮类 input 的 type 取值
    pub const BUTTON_INPUT_TYPES: &[&str] = &["button", "submit", "reset"];

    // 激活签名的分隔符
    pub const SIGNATURE_SEPARATOR: &str = "|";

    // 周期刷新间隔
    pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_millis(2000);
}

/// 本地化运行选项
#[derive(Clone, Debug)]
pub struct LocalizerOptions {
    /// 周期刷新间隔
    pub refresh_interval: Duration,
}

impl Default for LocalizerOptions {
    fn default() -> Self {
        Self {
            refresh_interval: constants::DEFAULT_REFRESH_INTERVAL,
        }
    }
}
