//! SVG 生成：
//! - 应用翻转/旋转变换，计算 width/height/viewBox（高度自动）
//! - 重写内部 id，避免同页多实例冲突
//! - 拼装最终 `<svg>` 标签

use regex::Regex;
use std::sync::LazyLock;

use crate::iconify::FullIcon;

static ID_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\sid="(\S+)""#).expect("valid id regex"));

// 替换过程中临时附在新 id 后面，防止被后续 id 的规则再次命中
const ID_MARK: &str = "\u{1}";

/// `icon_to_svg` 的结果
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SvgRender {
    /// 有序属性：width、height、viewBox
    pub(crate) attributes: Vec<(String, String)>,
    pub(crate) body: String,
}

/// 生成 SVG 属性与内容。高度取 viewBox 高度，宽度按比例推导。
pub(crate) fn icon_to_svg(icon: &FullIcon) -> SvgRender {
    let (mut left, mut top, mut width, mut height) = (icon.left, icon.top, icon.width, icon.height);
    let mut body = icon.body.clone();
    let mut transforms: Vec<String> = Vec::new();
    let mut rotation = icon.rotate;

    if icon.h_flip {
        if icon.v_flip {
            rotation += 2;
        } else {
            transforms.push(format!("translate({} {})", fmt_num(width + left), fmt_num(0.0 - top)));
            transforms.push("scale(-1 1)".to_string());
            left = 0.0;
            top = 0.0;
        }
    } else if icon.v_flip {
        transforms.push(format!("translate({} {})", fmt_num(0.0 - left), fmt_num(height + top)));
        transforms.push("scale(1 -1)".to_string());
        left = 0.0;
        top = 0.0;
    }

    rotation = rotation.rem_euclid(4);
    match rotation {
        1 => {
            let c = fmt_num(height / 2.0 + top);
            transforms.insert(0, format!("rotate(90 {} {})", c, c));
        }
        2 => {
            transforms.insert(
                0,
                format!("rotate(180 {} {})", fmt_num(width / 2.0 + left), fmt_num(height / 2.0 + top)),
            );
        }
        3 => {
            let c = fmt_num(width / 2.0 + left);
            transforms.insert(0, format!("rotate(-90 {} {})", c, c));
        }
        _ => {}
    }
    if rotation % 2 == 1 {
        std::mem::swap(&mut left, &mut top);
        std::mem::swap(&mut width, &mut height);
    }

    if !transforms.is_empty() {
        body = wrap_svg_content(&body, &format!("<g transform=\"{}\">", transforms.join(" ")), "</g>");
    }

    let out_height = height;
    let out_width = calculate_size(out_height, width / height);
    let attributes = vec![
        ("width".to_string(), fmt_num(out_width)),
        ("height".to_string(), fmt_num(out_height)),
        (
            "viewBox".to_string(),
            [left, top, width, height].iter().map(|v| fmt_num(*v)).collect::<Vec<_>>().join(" "),
        ),
    ];
    SvgRender { attributes, body }
}

/// 按比例换算尺寸，保留两位小数（向上取整）
fn calculate_size(size: f64, ratio: f64) -> f64 {
    if ratio == 1.0 {
        return size;
    }
    (size * ratio * 100.0).ceil() / 100.0
}

/// 数字格式：整数不带小数点，避免输出 `-0`
pub(crate) fn fmt_num(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    format!("{}", v)
}

/// 拆出 `<defs>` 内容，其余部分用于包裹
fn split_svg_defs(content: &str) -> (String, String) {
    let mut defs = String::new();
    let mut content = content.to_string();
    while let Some(index) = content.find("<defs") {
        let Some(start) = content[index..].find('>').map(|i| index + i) else { break };
        let Some(end) = content.find("</defs") else { break };
        let Some(end_end) = content[end..].find('>').map(|i| end + i) else { break };
        if end < start {
            break;
        }
        defs.push_str(content[start + 1..end].trim());
        content = format!("{}{}", content[..index].trim(), &content[end_end + 1..]);
    }
    (defs, content)
}

/// 用 start/end 包裹内容，`<defs>` 提到外层保持引用有效
fn wrap_svg_content(body: &str, start: &str, end: &str) -> String {
    let (defs, content) = split_svg_defs(body);
    let wrapped = format!("{}{}{}", start, content, end);
    if defs.is_empty() {
        wrapped
    } else {
        format!("<defs>{}</defs>{}", defs, wrapped)
    }
}

/// 将 body 中每个 `id="…"` 重命名为 `<prefix><n>`，并改写 `#id`/`;id`/`"id` 引用。
///
/// 计数从 0 开始，结果可重复。返回新 body 与改写的 id 个数。
pub(crate) fn replace_ids(body: &str, prefix: &str) -> (String, usize) {
    let ids: Vec<String> = ID_ATTR.captures_iter(body).map(|c| c[1].to_string()).collect();
    if ids.is_empty() {
        return (body.to_string(), 0);
    }

    let mut out = body.to_string();
    for (counter, id) in ids.iter().enumerate() {
        let new_id = format!("{}{}", prefix, counter);
        let pattern = format!(r#"([#;"])({})([")]|\.[a-z])"#, regex::escape(id));
        let Ok(re) = Regex::new(&pattern) else { continue };
        out = re
            .replace_all(&out, |caps: &regex::Captures| {
                format!("{}{}{}{}", &caps[1], new_id, ID_MARK, &caps[3])
            })
            .into_owned();
    }
    (out.replace(ID_MARK, ""), ids.len())
}

/// 拼装 `<svg>`：命名空间、有序属性、可选的原样属性（如 Svelte 的 `{...rest}`）
pub(crate) fn icon_to_html(body: &str, attributes: &[(String, String)], raw_attr: Option<&str>) -> String {
    let mut attrs = String::new();
    if body.contains("xlink:") {
        attrs.push_str(" xmlns:xlink=\"http://www.w3.org/1999/xlink\"");
    }
    for (k, v) in attributes {
        attrs.push_str(&format!(" {}=\"{}\"", k, v));
    }
    if let Some(raw) = raw_attr {
        attrs.push(' ');
        attrs.push_str(raw);
    }
    format!("<svg xmlns=\"http://www.w3.org/2000/svg\"{}>{}</svg>", attrs, body)
}
