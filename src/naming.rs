//! 图标命名解析：
//! - `<base>-<size>-<style>` 拆分为三段
//! - 基础名转 PascalCase 组件名

/// 从图标名中拆出的三段
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParsedName {
    pub(crate) base: String,
    pub(crate) size: String,
    pub(crate) style: String,
}

/// 按 `-` 从右侧拆分图标名，例如 `file-add-20-filled` => (`file-add`, `20`, `filled`)。
///
/// 少于 3 段返回 None。不校验 size 是否为数字、style 是否为已知取值，
/// 图标集本身遵循该命名约定。
pub(crate) fn parse_icon_name(name: &str) -> Option<ParsedName> {
    let mut parts: Vec<&str> = name.split('-').collect();
    if parts.len() < 3 {
        return None;
    }
    let style = parts.pop()?.to_string();
    let size = parts.pop()?.to_string();
    Some(ParsedName { base: parts.join("-"), size, style })
}

/// 以 `-` / `_` / 空白分词，每段首字母大写后直接拼接。
pub(crate) fn to_pascal_case(name: &str) -> String {
    name.split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_from_the_right() {
        let p = parse_icon_name("file-add-20-filled").unwrap();
        assert_eq!(p.base, "file-add");
        assert_eq!(p.size, "20");
        assert_eq!(p.style, "filled");
    }

    #[test]
    fn keeps_inner_hyphens_in_base() {
        let p = parse_icon_name("arrow-circle-down-right-24-regular").unwrap();
        assert_eq!(p.base, "arrow-circle-down-right");
        assert_eq!(p.size, "24");
        assert_eq!(p.style, "regular");
    }

    #[test]
    fn minimal_three_segments() {
        let p = parse_icon_name("a-b-c").unwrap();
        assert_eq!(p, ParsedName { base: "a".into(), size: "b".into(), style: "c".into() });
    }

    #[test]
    fn trailing_tokens_are_not_validated() {
        let p = parse_icon_name("home-large-color").unwrap();
        assert_eq!(p.size, "large");
        assert_eq!(p.style, "color");
    }

    #[test]
    fn rejects_short_names() {
        assert_eq!(parse_icon_name("home"), None);
        assert_eq!(parse_icon_name("home-24"), None);
        assert_eq!(parse_icon_name(""), None);
    }

    #[test]
    fn pascal_case() {
        assert_eq!(to_pascal_case("file-add"), "FileAdd");
        assert_eq!(to_pascal_case("a_b c"), "ABC");
        assert_eq!(to_pascal_case("20-filled"), "20Filled");
        assert_eq!(to_pascal_case("--double__sep  here"), "DoubleSepHere");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn pascal_case_keeps_rest_of_token() {
        assert_eq!(to_pascal_case("iOS-app"), "IOSApp");
        assert_eq!(to_pascal_case("xCircle"), "XCircle");
    }
}
