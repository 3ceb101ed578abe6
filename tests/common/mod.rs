// 集成测试公共模块
//
// 提供 HTML 夹具、词典夹具与文本读取辅助

use markup5ever_rcdom::{Handle, NodeData, RcDom};

use ko_localizer::html::dom::{find_element_by_id, get_text_content, html_to_dom};
use ko_localizer::{shared_store, DictionaryRecord, SharedStore};

/// HTML 测试辅助
pub struct HtmlTestHelper;

impl HtmlTestHelper {
    pub fn create_test_dom(html: &str) -> RcDom {
        html_to_dom(html.as_bytes(), "utf-8")
    }

    /// 模拟宿主页面：普通设置面板、聊天区域、帮助弹窗、按钮
    pub fn create_host_page() -> String {
        r#"<html><body>
            <div id="settings_panel">
                <h4 id="panel_title">设置</h4>
                <label id="plain_label" title="高级选项">高级</label>
                <input id="send_button" type="submit" value="发送">
                <input id="name_field" type="text" placeholder="输入名称">
            </div>
            <div id="chat">
                <div class="mes">
                    <div class="mes_text"><p id="chat_line">你好，这是聊天内容</p></div>
                </div>
                <div class="horae-message-panel"><span id="panel_line">记忆面板</span></div>
            </div>
            <div class="backup_help_popup">
                <p id="popup_line">使用说明</p>
                <pre id="popup_code">备份路径</pre>
            </div>
            <div id="late_panel"><span id="late_line">稍后出现的文本</span></div>
        </body></html>"#
            .to_string()
    }
}

/// 词典夹具
pub struct DictFixtures;

impl DictFixtures {
    pub fn record(exact: &[(&str, &str)], overrides: &[(&str, &str)]) -> DictionaryRecord {
        DictionaryRecord {
            exact_entries: exact
                .iter()
                .map(|(s, t)| vec![s.to_string(), t.to_string()])
                .collect(),
            override_entries: overrides
                .iter()
                .map(|(s, t)| vec![s.to_string(), t.to_string()])
                .collect(),
            ..Default::default()
        }
    }

    /// 宿主页面夹具配套的基础词典
    pub fn basic_store() -> SharedStore {
        let store = shared_store();
        store.borrow_mut().register(
            "base",
            Self::record(
                &[
                    ("设置", "설정"),
                    ("高级", "고급"),
                    ("高级选项", "고급 옵션"),
                    ("发送", "전송"),
                    ("输入名称", "이름 입력"),
                    ("你好，这是聊天内容", "안녕, 채팅 내용"),
                    ("记忆面板", "기억 패널"),
                    ("使用说明", "사용 설명"),
                    ("备份路径", "백업 경로"),
                    ("稍后出现的文本", "나중에 나타난 텍스트"),
                ],
                &[],
            ),
        );
        store
    }
}

/// 元素直接子文本节点拼接后的内容
pub fn element_text(dom: &RcDom, id: &str) -> String {
    let el = find_element_by_id(&dom.document, id)
        .unwrap_or_else(|| panic!("missing element #{id}"));
    let text = el
        .children
        .borrow()
        .iter()
        .filter(|child| matches!(child.data, NodeData::Text { .. }))
        .filter_map(get_text_content)
        .collect();
    text
}

/// 元素的第一个子文本节点
pub fn first_text_node(dom: &RcDom, id: &str) -> Handle {
    let el = find_element_by_id(&dom.document, id)
        .unwrap_or_else(|| panic!("missing element #{id}"));
    let node = el
        .children
        .borrow()
        .iter()
        .find(|child| matches!(child.data, NodeData::Text { .. }))
        .cloned();
    node.unwrap_or_else(|| panic!("element #{id} has no text child"))
}
