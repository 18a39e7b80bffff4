//! 索引（barrel）生成模块：
//! - `GroupingIndex`：size -> style -> 组件名，随生成循环累积
//! - 三层索引文件：style 级、size 级、根级

use anyhow::Result;
use std::{
    cmp::Ordering,
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use crate::{
    config::{Settings, SizeOrder},
    naming::to_pascal_case,
    writer::{ensure_dir, write_text},
};

/// 按尺寸、样式分组的组件名
#[derive(Debug, Default)]
pub(crate) struct GroupingIndex {
    buckets: BTreeMap<String, BTreeMap<String, Vec<String>>>,
}

impl GroupingIndex {
    /// 记录一个组件；同一 (size, style) 下已存在同名组件时返回 false 且不重复记录
    pub(crate) fn insert(&mut self, size: &str, style: &str, component: &str) -> bool {
        let names = self
            .buckets
            .entry(size.to_string())
            .or_default()
            .entry(style.to_string())
            .or_default();
        if names.iter().any(|n| n == component) {
            return false;
        }
        names.push(component.to_string());
        true
    }

    /// 组件总数
    pub(crate) fn len(&self) -> usize {
        self.buckets.values().flat_map(|s| s.values()).map(Vec::len).sum()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// 尺寸列表，按指定方式排序
    pub(crate) fn sizes(&self, order: SizeOrder) -> Vec<&str> {
        let mut sizes: Vec<&str> = self.buckets.keys().map(String::as_str).collect();
        sizes.sort_by(|a, b| compare_sizes(order, a, b));
        sizes
    }

    /// 某尺寸下的样式，字符串排序
    pub(crate) fn styles(&self, size: &str) -> Vec<&str> {
        self.buckets
            .get(size)
            .map(|s| s.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// 某 bucket 内的组件名，按字母排序
    pub(crate) fn components(&self, size: &str, style: &str) -> Vec<String> {
        let mut names = self
            .buckets
            .get(size)
            .and_then(|s| s.get(style))
            .cloned()
            .unwrap_or_default();
        names.sort();
        names
    }
}

fn compare_sizes(order: SizeOrder, a: &str, b: &str) -> Ordering {
    match order {
        SizeOrder::Lexical => a.cmp(b),
        SizeOrder::Numeric => match (a.parse::<u64>(), b.parse::<u64>()) {
            (Ok(x), Ok(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
            (Ok(_), Err(_)) => Ordering::Less,
            (Err(_), Ok(_)) => Ordering::Greater,
            (Err(_), Err(_)) => a.cmp(b),
        },
    }
}

/// style 级索引：每个组件导出两次（`<Name><Size><Style>` 与 `...Icon`）
pub(crate) fn style_index(size: &str, style: &str, components: &[String], component_ext: &str) -> String {
    let suffix = to_pascal_case(&format!("{}-{}", size, style));
    let lines: Vec<String> = components
        .iter()
        .map(|name| {
            format!(
                "export {{ default as {name}{suffix} }} from './{name}.{ext}';\n\
                 export {{ default as {name}{suffix}Icon }} from './{name}.{ext}';",
                name = name,
                suffix = suffix,
                ext = component_ext
            )
        })
        .collect();
    format!("{}\n", lines.join("\n"))
}

/// size 级索引：重新导出各 style 的索引
pub(crate) fn size_index(styles: &[&str], import_ext: &str) -> String {
    let lines: Vec<String> = styles
        .iter()
        .map(|s| format!("export * from './{}/index.{}';", s, import_ext))
        .collect();
    format!("{}\n", lines.join("\n"))
}

/// 根索引：首行导出共享类型，其后每个尺寸一行
pub(crate) fn root_index(types_module: &str, sizes: &[&str], import_ext: &str) -> String {
    let lines: Vec<String> = sizes
        .iter()
        .map(|s| format!("export * from './{}/index.{}';", s, import_ext))
        .collect();
    format!("export * from '{}';\n{}\n", types_module, lines.join("\n"))
}

/// 按累积结果写出全部索引文件，返回写出的路径
pub(crate) fn write_indexes(root: &Path, index: &GroupingIndex, settings: &Settings) -> Result<Vec<PathBuf>> {
    let index_file = format!("index.{}", settings.index_ext);
    let sizes = index.sizes(settings.size_order);
    let mut written = Vec::new();

    for size in &sizes {
        let styles = index.styles(size);
        for style in &styles {
            let dir = root.join(size).join(style);
            ensure_dir(&dir)?;
            let path = dir.join(&index_file);
            let components = index.components(size, style);
            write_text(&path, &style_index(size, style, &components, &settings.component_ext))?;
            written.push(path);
        }
        let path = root.join(size).join(&index_file);
        write_text(&path, &size_index(&styles, &settings.import_ext))?;
        written.push(path);
    }

    ensure_dir(root)?;
    let path = root.join(&index_file);
    write_text(&path, &root_index(&settings.types_module, &sizes, &settings.import_ext))?;
    written.push(path);
    Ok(written)
}
