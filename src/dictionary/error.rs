//! 词典子系统统一错误处理
//!
//! 所有错误都在各自边界就地消化（跳过 + 日志），不会中断翻译循环

use thiserror::Error;

/// 本地化错误类型
#[derive(Error, Debug, Clone)]
pub enum LocalizerError {
    /// 正则规则无效（模式编译失败或标志不支持）
    #[error("正则规则无效: {0}")]
    InvalidRegexRule(String),

    /// 激活检测器执行失败
    #[error("激活检测器执行失败: {0}")]
    DetectorFailure(String),

    /// 词典来源加载失败
    #[error("词典加载失败: {0}")]
    LoadFailure(String),

    /// 词典负载无法解析
    #[error("词典数据无效: {0}")]
    InvalidDictionary(String),
}

/// 本地化操作的结果类型
pub type LocalizerResult<T> = Result<T, LocalizerError>;
