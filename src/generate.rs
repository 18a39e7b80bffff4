//! 生成流程：
//! - 逐个图标：解析名称 -> 渲染 -> 写出组件，并累积分组
//! - 循环结束后写出三层索引
//! - 名称不合法或数据缺失时告警并跳过；文件系统错误直接终止
//! - 开启 clean 时，生成结束后删除未再生成的旧组件与索引

use anyhow::{Context, Result};
use std::{collections::HashSet, env, path::PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    config::Settings,
    iconify::IconSet,
    index::{write_indexes, GroupingIndex},
    naming::{parse_icon_name, to_pascal_case},
    render::Renderer,
    utils::safe_segment,
    writer::{guard_clean_root, prune_stale, write_component},
};

/// 可恢复的跳过原因
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub(crate) enum SkipReason {
    #[error("图标名 \"{0}\" 不符合 <name>-<size>-<style> 格式或无法用作路径，已跳过")]
    InvalidName(String),
    #[error("图标 \"{0}\" 数据缺失，已跳过")]
    Missing(String),
}

/// 一次生成的统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Summary {
    pub(crate) components: usize,
    pub(crate) skipped: Vec<SkipReason>,
    /// 同一 bucket 内组件名重复、后者覆盖前者的图标名
    pub(crate) collisions: Vec<String>,
    pub(crate) index_files: usize,
    /// clean 模式下删除的旧文件数
    pub(crate) removed: usize,
}

/// 读取图标集并执行生成
pub(crate) fn generate(settings: &Settings) -> Result<Summary> {
    let set = IconSet::load(&settings.source)?;
    generate_from_set(&set, settings)
}

/// 对内存中的图标集执行生成
pub(crate) fn generate_from_set(set: &IconSet, settings: &Settings) -> Result<Summary> {
    let renderer = Renderer::new(settings)?;
    let root = settings.out_dir.as_path();

    if settings.clean {
        let cwd = env::current_dir().with_context(|| "无法获取当前目录")?;
        guard_clean_root(root, &cwd)?;
    }

    println!(
        "⬇️ 导出图标集 {}: {} 个 -> {}",
        if set.prefix.is_empty() { "<unnamed>" } else { set.prefix.as_str() },
        set.icons.len(),
        root.display()
    );

    let mut index = GroupingIndex::default();
    let mut summary = Summary::default();
    let mut produced: HashSet<PathBuf> = HashSet::new();

    for name in set.names() {
        let Some((parsed, component)) = parse_icon_name(name)
            .map(|p| {
                let component = to_pascal_case(&p.base);
                (p, component)
            })
            .filter(|(p, c)| safe_segment(&p.size) && safe_segment(&p.style) && safe_segment(c))
        else {
            let reason = SkipReason::InvalidName(name.to_string());
            warn!("{}", reason);
            summary.skipped.push(reason);
            continue;
        };
        let Some(icon) = set.icon_data(name) else {
            let reason = SkipReason::Missing(name.to_string());
            warn!("{}", reason);
            summary.skipped.push(reason);
            continue;
        };

        let content = renderer.component(name, &component, &icon)?;
        let path = write_component(
            root,
            &parsed.size,
            &parsed.style,
            &component,
            &settings.component_ext,
            &content,
        )?;
        debug!("写入: {}", path.display());
        produced.insert(path);

        if !index.insert(&parsed.size, &parsed.style, &component) {
            // 同名组件：文件已被覆盖，索引只保留一条
            warn!(
                "组件名冲突: \"{}\" 覆盖了 {}/{}/{}",
                name, parsed.size, parsed.style, component
            );
            summary.collisions.push(name.to_string());
        }
    }

    if index.is_empty() {
        warn!("没有可生成的图标，仅写出根索引");
    }
    summary.components = index.len();
    let indexes = write_indexes(root, &index, settings)?;
    summary.index_files = indexes.len();
    produced.extend(indexes);

    if settings.clean {
        let index_file = format!("index.{}", settings.index_ext);
        summary.removed = prune_stale(root, &produced, &settings.component_ext, &index_file)?;
        if summary.removed > 0 {
            println!("🧹 已删除 {} 个旧文件", summary.removed);
        }
    }
    Ok(summary)
}
