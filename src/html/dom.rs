//! 基础 DOM 操作模块

use encoding_rs::Encoding;
use html5ever::interface::{Attribute, QualName};
use html5ever::parse_document;
use html5ever::tendril::{format_tendril, TendrilSink};
use html5ever::{namespace_url, ns, LocalName};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// 将 HTML 字节转换为 DOM
pub fn html_to_dom(data: &[u8], document_encoding: &str) -> RcDom {
    let s: String;

    if let Some(encoding) = Encoding::for_label(document_encoding.as_bytes()) {
        let (string, _, _) = encoding.decode(data);
        s = string.to_string();
    } else {
        s = String::from_utf8_lossy(data).to_string();
    }

    parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut s.as_bytes())
        .unwrap()
}

/// 获取节点属性值
pub fn get_node_attr(node: &Handle, attr_name: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|attr| &*attr.name.local == attr_name)
            .map(|attr| attr.value.to_string()),
        _ => None,
    }
}

/// 设置节点属性；值为 None 时整个移除该属性
pub fn set_node_attr(node: &Handle, attr_name: &str, attr_value: Option<String>) {
    if let NodeData::Element { attrs, .. } = &node.data {
        let attrs_mut = &mut attrs.borrow_mut();

        if let Some(position) = attrs_mut
            .iter()
            .position(|attr| &*attr.name.local == attr_name)
        {
            match attr_value {
                Some(value) => {
                    attrs_mut[position].value.clear();
                    attrs_mut[position].value.push_slice(&value);
                }
                None => {
                    attrs_mut.remove(position);
                }
            }
            return;
        }

        // Add new attribute (since originally the target node didn't have it)
        if let Some(value) = attr_value {
            attrs_mut.push(Attribute {
                name: QualName::new(None, ns!(), LocalName::from(attr_name)),
                value: format_tendril!("{}", value),
            });
        }
    }
}

/// 获取元素标签名
pub fn get_node_name(node: &Handle) -> Option<&'_ str> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.local.as_ref()),
        _ => None,
    }
}

/// 获取元素 id
pub fn get_node_id(node: &Handle) -> Option<String> {
    get_node_attr(node, "id")
}

/// 获取父节点；根节点返回 None
pub fn get_parent_node(child: &Handle) -> Option<Handle> {
    let weak = child.parent.take();
    let parent = weak.as_ref().and_then(|node| node.upgrade());
    child.parent.set(weak);
    parent
}

/// 元素是否带有指定 class（按空白分词精确匹配）
pub fn has_class(node: &Handle, class_name: &str) -> bool {
    get_node_attr(node, "class")
        .map(|value| value.split_whitespace().any(|token| token == class_name))
        .unwrap_or(false)
}

/// class 属性是否包含指定子串，对应 CSS 的 `[class*=...]`
pub fn class_contains(node: &Handle, fragment: &str) -> bool {
    get_node_attr(node, "class")
        .map(|value| value.contains(fragment))
        .unwrap_or(false)
}

/// 自底向上检查自身与各级祖先元素，任一命中即返回 true
pub fn ancestor_or_self_matches<F>(node: &Handle, predicate: F) -> bool
where
    F: Fn(&Handle) -> bool,
{
    let mut current = Some(node.clone());
    while let Some(handle) = current {
        if matches!(handle.data, NodeData::Element { .. }) && predicate(&handle) {
            return true;
        }
        current = get_parent_node(&handle);
    }
    false
}

/// 深度优先查找指定 id 的元素
pub fn find_element_by_id(root: &Handle, id: &str) -> Option<Handle> {
    if matches!(root.data, NodeData::Element { .. })
        && get_node_attr(root, "id").as_deref() == Some(id)
    {
        return Some(root.clone());
    }

    for child_node in root.children.borrow().iter() {
        if let Some(found) = find_element_by_id(child_node, id) {
            return Some(found);
        }
    }

    None
}

/// 深度优先查找带指定 class 的元素
pub fn find_element_by_class(root: &Handle, class_name: &str) -> Option<Handle> {
    if has_class(root, class_name) {
        return Some(root.clone());
    }

    for child_node in root.children.borrow().iter() {
        if let Some(found) = find_element_by_class(child_node, class_name) {
            return Some(found);
        }
    }

    None
}

/// 读取文本节点内容
pub fn get_text_content(node: &Handle) -> Option<String> {
    match &node.data {
        NodeData::Text { contents } => Some(contents.borrow().to_string()),
        _ => None,
    }
}

/// 覆写文本节点内容
pub fn set_text_content(node: &Handle, text: &str) {
    if let NodeData::Text { contents } = &node.data {
        let contents_mut = &mut contents.borrow_mut();
        contents_mut.clear();
        contents_mut.push_slice(text);
    }
}
