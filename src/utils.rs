//! 通用辅助函数：
//! - 环境变量读取与解析
//! - 文本到枚举的解析工具
//! - 路径片段校验

use std::env;

use crate::config::{IdScope, SizeOrder};

/// 判断字符串能否作为单级目录或文件名使用：
/// 拒绝空串、`.`、`..` 以及包含路径分隔符或 NUL 的片段。
pub(crate) fn safe_segment(s: &str) -> bool {
    !s.is_empty() && s != "." && s != ".." && !s.contains(['/', '\\', '\0'])
}

/// 可选读取 String 环境变量。
pub(crate) fn env_opt_string(key: &str) -> Option<String> {
    env::var(key).ok().map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// 布尔取值的真值判断（1/true/on/yes/y）。
pub(crate) fn parse_truthy(v: &str) -> bool {
    matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "on" | "yes" | "y")
}

/// 将字符串解析为 SizeOrder。
pub(crate) fn parse_size_order(s: String) -> Option<SizeOrder> {
    match s.to_ascii_lowercase().as_str() {
        "lexical" => Some(SizeOrder::Lexical),
        "numeric" => Some(SizeOrder::Numeric),
        _ => None,
    }
}

/// 将字符串解析为 IdScope。
pub(crate) fn parse_id_scope(s: String) -> Option<IdScope> {
    match s.to_ascii_lowercase().as_str() {
        "instance" => Some(IdScope::Instance),
        "static" => Some(IdScope::Static),
        _ => None,
    }
}
