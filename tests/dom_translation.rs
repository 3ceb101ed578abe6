//! DOM 翻译集成测试
//!
//! 覆盖扫描许可策略、属性翻译、变更通知与激活翻转后的重建重扫

use std::cell::Cell;
use std::rc::Rc;

use ko_localizer::html::dom::{
    find_element_by_id, get_node_attr, set_node_attr, set_text_content,
};
use ko_localizer::{
    serialize_document, DetectorRegistry, Localizer, LocalizerOptions, MutationRecord,
};

mod common {
    include!("common/mod.rs");
}

use common::{element_text, first_text_node, DictFixtures, HtmlTestHelper};

fn host_localizer() -> (markup5ever_rcdom::RcDom, Localizer) {
    let dom = HtmlTestHelper::create_test_dom(&HtmlTestHelper::create_host_page());
    let mut localizer = Localizer::new(
        DictFixtures::basic_store(),
        DetectorRegistry::new(),
        LocalizerOptions::default(),
    );
    localizer.tick(&dom.document);
    (dom, localizer)
}

#[test]
fn test_full_scan_respects_exclusion_policy() {
    let (dom, _localizer) = host_localizer();

    // 普通面板翻译
    assert_eq!(element_text(&dom, "panel_title"), "설정");
    assert_eq!(element_text(&dom, "plain_label"), "고급");

    // 聊天消息区排除
    assert_eq!(element_text(&dom, "chat_line"), "你好，这是聊天内容");

    // 聊天区域内的特性面板豁免
    assert_eq!(element_text(&dom, "panel_line"), "기억 패널");

    // 帮助弹窗豁免，pre 里的文本照样翻译
    assert_eq!(element_text(&dom, "popup_line"), "사용 설명");
    assert_eq!(element_text(&dom, "popup_code"), "백업 경로");
}

#[test]
fn test_attributes_and_button_value_are_translated() {
    let (dom, _localizer) = host_localizer();

    let label = find_element_by_id(&dom.document, "plain_label").unwrap();
    assert_eq!(get_node_attr(&label, "title").as_deref(), Some("고급 옵션"));

    let button = find_element_by_id(&dom.document, "send_button").unwrap();
    assert_eq!(get_node_attr(&button, "value").as_deref(), Some("전송"));

    let field = find_element_by_id(&dom.document, "name_field").unwrap();
    assert_eq!(
        get_node_attr(&field, "placeholder").as_deref(),
        Some("이름 입력")
    );
    // 文本输入框的 value 不在按钮类范围内
    assert_eq!(get_node_attr(&field, "value"), None);
}

#[test]
fn test_serialized_output_contains_translations() {
    let (dom, _localizer) = host_localizer();

    let output = String::from_utf8(serialize_document(&dom, "utf-8")).unwrap();
    assert!(output.contains("설정"));
    // 聊天区域被排除，原文保留在序列化结果里
    assert!(!output.contains("안녕"));
    assert!(output.contains("你好，这是聊天内容"));
}

#[test]
fn test_character_data_mutation_retranslates_node() {
    let (dom, localizer) = host_localizer();
    let text = first_text_node(&dom, "panel_title");

    // 宿主把文本改回中文，观察器上报 characterData
    set_text_content(&text, "设置");
    localizer.on_mutation(&[MutationRecord::CharacterData {
        target: text.clone(),
    }]);

    assert_eq!(element_text(&dom, "panel_title"), "설정");
}

#[test]
fn test_child_list_mutation_scans_added_subtree() {
    let dom = HtmlTestHelper::create_test_dom(&HtmlTestHelper::create_host_page());
    let mut localizer = Localizer::new(
        DictFixtures::basic_store(),
        DetectorRegistry::new(),
        LocalizerOptions::default(),
    );
    // 只构建查找结构，不做全量扫描
    localizer.refresh_if_needed(&dom.document);

    let late_panel = find_element_by_id(&dom.document, "late_panel").unwrap();
    localizer.on_mutation(&[MutationRecord::ChildList {
        added: vec![late_panel],
    }]);

    // 上报的子树翻译了，其余文档保持原样
    assert_eq!(element_text(&dom, "late_line"), "나중에 나타난 텍스트");
    assert_eq!(element_text(&dom, "panel_title"), "设置");
}

#[test]
fn test_attribute_mutation_honors_watched_filter() {
    let (dom, localizer) = host_localizer();
    let label = find_element_by_id(&dom.document, "plain_label").unwrap();

    set_node_attr(&label, "title", Some("高级选项".to_string()));

    // 未关注属性的变更不触发翻译
    localizer.on_mutation(&[MutationRecord::Attributes {
        target: label.clone(),
        attr_name: "style".to_string(),
    }]);
    assert_eq!(get_node_attr(&label, "title").as_deref(), Some("高级选项"));

    localizer.on_mutation(&[MutationRecord::Attributes {
        target: label.clone(),
        attr_name: "title".to_string(),
    }]);
    assert_eq!(get_node_attr(&label, "title").as_deref(), Some("고급 옵션"));
}

#[test]
fn test_detector_toggle_rebuilds_and_rescans() {
    let dom = HtmlTestHelper::create_test_dom(
        r#"<html><body><p id="a">设置</p><p id="b">设置</p></body></html>"#,
    );
    let store = ko_localizer::shared_store();
    store
        .borrow_mut()
        .register("gated", DictFixtures::record(&[("设置", "설정")], &[]));

    let enabled = Rc::new(Cell::new(true));
    let probe = enabled.clone();
    let mut detectors = DetectorRegistry::new();
    detectors.register("gated", move |_| Ok(probe.get()));

    let mut localizer = Localizer::new(store, detectors, LocalizerOptions::default());
    localizer.tick(&dom.document);
    assert_eq!(element_text(&dom, "a"), "설정");
    assert_eq!(element_text(&dom, "b"), "설정");

    // 宿主功能下线：签名变化，下一个 tick 重建为空表并重扫
    enabled.set(false);
    set_text_content(&first_text_node(&dom, "b"), "设置");
    localizer.tick(&dom.document);

    // 重扫后重新出现的原文不再被翻译；已翻译的文本没有反向映射，保持译文
    assert_eq!(element_text(&dom, "b"), "设置");
    assert_eq!(element_text(&dom, "a"), "설정");
    assert_eq!(localizer.translate("设置"), "设置");
}

#[test]
fn test_rescan_is_idempotent_over_whole_page() {
    let (dom, mut localizer) = host_localizer();

    let before = serialize_document(&dom, "utf-8");
    // 指纹没变时 tick 是空操作；强制再扫一遍也不能改变任何内容
    localizer.tick(&dom.document);
    localizer.scan(&dom.document);
    let after = serialize_document(&dom, "utf-8");

    assert_eq!(before, after);
}
