//! 词典解析与查表翻译模块
//!
//! 把所有激活词典合并为三个查找结构（覆盖表、精确表、正则规则序列），
//! 并提供单条字符串的优先级查表翻译。

use std::borrow::Cow;
use std::collections::{BTreeSet, HashMap};
use std::sync::OnceLock;

use regex::{Regex, RegexBuilder};

use super::error::{LocalizerError, LocalizerResult};
use super::store::{DictionaryStore, RegexRuleSpec};

// 版本升级提示的三个标记，全部出现才走固定模板
const VERSION_CURRENT_MARKER: &str = "当前版本";
const VERSION_LATEST_MARKER: &str = "最新版本";
const VERSION_PROMPT_MARKER: &str = "是否现在更新";

/// 编译后的正则替换规则
#[derive(Debug, Clone)]
pub struct CompiledRule {
    regex: Regex,
    replace: String,
    /// JS 的 `g` 标志：替换全部出现而不是第一次出现
    global: bool,
}

/// 把一条原始规则编译为可应用的规则
///
/// JS 风格标志映射：`i`/`m`/`s`/`x` 对应 `RegexBuilder` 选项，`u` 是空操作
/// （本引擎天然 Unicode 语义），`g` 决定替换范围；其余标志视为编译失败。
pub fn compile_rule(spec: &RegexRuleSpec) -> LocalizerResult<CompiledRule> {
    let mut builder = RegexBuilder::new(&spec.pattern);
    let mut global = false;

    for flag in spec.flags.chars() {
        match flag {
            'g' => global = true,
            'i' => {
                builder.case_insensitive(true);
            }
            'm' => {
                builder.multi_line(true);
            }
            's' => {
                builder.dot_matches_new_line(true);
            }
            'x' => {
                builder.ignore_whitespace(true);
            }
            'u' => {}
            other => {
                return Err(LocalizerError::InvalidRegexRule(format!(
                    "不支持的标志 '{}': {}",
                    other, spec.pattern
                )));
            }
        }
    }

    let regex = builder
        .build()
        .map_err(|e| LocalizerError::InvalidRegexRule(format!("{}: {}", spec.pattern, e)))?;

    Ok(CompiledRule {
        regex,
        replace: normalize_replacement(&spec.replace),
        global,
    })
}

/// 把 JS 风格的整串引用 `$&` 规整为本引擎的 `${0}`；`$1` 等分组引用语法两边一致
fn normalize_replacement(replace: &str) -> String {
    replace.replace("$&", "${0}")
}

/// 宽容接收一个条目：至少两个元素且前两个非空，否则丢弃
fn accept_pair(entry: &[String]) -> Option<(&str, &str)> {
    match entry {
        [source, target, ..] if !source.is_empty() && !target.is_empty() => {
            Some((source.as_str(), target.as_str()))
        }
        _ => None,
    }
}

/// 激活词典合并后的查找结构
///
/// 整体重建、整体发布：构建期间旧表照常服务，换表是一次完整赋值。
#[derive(Debug, Clone, Default)]
pub struct ResolvedDictionary {
    override_map: HashMap<String, String>,
    exact_map: HashMap<String, String>,
    regex_rules: Vec<CompiledRule>,
}

impl ResolvedDictionary {
    /// 按注册顺序合并所有激活词典
    ///
    /// 同名源串后写覆盖先写；正则规则保持跨词典的注册顺序，
    /// 编译失败的规则告警后跳过，绝不影响其余规则。
    pub fn build(store: &DictionaryStore, active: &BTreeSet<String>) -> ResolvedDictionary {
        let mut resolved = ResolvedDictionary::default();

        for (name, record) in store.iter() {
            if !active.contains(name) {
                continue;
            }

            for entry in &record.exact_entries {
                if let Some((source, target)) = accept_pair(entry) {
                    resolved
                        .exact_map
                        .insert(source.to_string(), target.to_string());
                }
            }

            for entry in &record.override_entries {
                if let Some((source, target)) = accept_pair(entry) {
                    resolved
                        .override_map
                        .insert(source.to_string(), target.to_string());
                }
            }

            for spec in &record.regex_rules {
                if spec.pattern.is_empty() || spec.replace.is_empty() {
                    continue;
                }
                match compile_rule(spec) {
                    Ok(rule) => resolved.regex_rules.push(rule),
                    Err(e) => {
                        tracing::warn!("忽略无效的正则规则: {}: {}", name, e);
                    }
                }
            }
        }

        resolved
    }

    pub fn is_empty(&self) -> bool {
        self.override_map.is_empty() && self.exact_map.is_empty() && self.regex_rules.is_empty()
    }

    pub fn exact_len(&self) -> usize {
        self.exact_map.len()
    }

    pub fn override_len(&self) -> usize {
        self.override_map.len()
    }

    pub fn rule_count(&self) -> usize {
        self.regex_rules.len()
    }

    /// 翻译单条字符串；没有命中时原样返回
    ///
    /// 优先级：固定版本提示模板 > 覆盖表 > 精确表 > 正则兜底（首条命中即止）。
    /// 精确查表保留输入的首尾空白。
    pub fn translate<'a>(&self, input: &'a str) -> Cow<'a, str> {
        if input.is_empty() {
            return Cow::Borrowed(input);
        }

        if is_version_notice(input) {
            return Cow::Owned(apply_version_notice(input));
        }

        let (leading, core, trailing) = split_whitespace_frame(input);
        let core_trimmed = core.trim();
        let hit = self
            .override_map
            .get(core)
            .or_else(|| self.override_map.get(core_trimmed))
            .or_else(|| self.exact_map.get(core))
            .or_else(|| self.exact_map.get(core_trimmed));
        if let Some(target) = hit {
            return Cow::Owned(format!("{leading}{target}{trailing}"));
        }

        for rule in &self.regex_rules {
            if rule.regex.is_match(input) {
                let replaced = if rule.global {
                    rule.regex.replace_all(input, rule.replace.as_str())
                } else {
                    rule.regex.replace(input, rule.replace.as_str())
                };
                return Cow::Owned(replaced.into_owned());
            }
        }

        Cow::Borrowed(input)
    }
}

/// 按首尾空白拆分输入，内部空白保持不动
fn split_whitespace_frame(input: &str) -> (&str, &str, &str) {
    let after_leading = input.trim_start();
    let leading = &input[..input.len() - after_leading.len()];
    let core = after_leading.trim_end();
    let trailing = &after_leading[core.len()..];
    (leading, core, trailing)
}

fn is_version_notice(input: &str) -> bool {
    input.contains(VERSION_CURRENT_MARKER)
        && input.contains(VERSION_LATEST_MARKER)
        && input.contains(VERSION_PROMPT_MARKER)
}

/// 固定的多段版本升级提示模板
///
/// 这是一条已知的复合通知串，通用的精确/正则路径表达不了，走三次定点替换。
fn apply_version_notice(input: &str) -> String {
    static CURRENT_RE: OnceLock<Regex> = OnceLock::new();
    static LATEST_RE: OnceLock<Regex> = OnceLock::new();
    static PROMPT_RE: OnceLock<Regex> = OnceLock::new();

    let current = CURRENT_RE.get_or_init(|| Regex::new(r"当前版本[:：]\s*").unwrap());
    let latest = LATEST_RE.get_or_init(|| Regex::new(r"最新版本[:：]\s*").unwrap());
    let prompt = PROMPT_RE.get_or_init(|| Regex::new(r"是否现在更新[？?]?").unwrap());

    let output = current.replace_all(input, "현재 버전: ");
    let output = latest.replace_all(&output, "최신 버전: ");
    let output = prompt.replace_all(&output, "지금 업데이트하시겠습니까?");
    output.into_owned()
}
