//! 文件写出：
//! - `<root>/<size>/<style>/` 目录的幂等创建
//! - 组件文件写出（同名直接覆盖）
//! - 可选的旧文件清理：只删除本次未生成的组件与索引，其余文件保留

use anyhow::{Context, Result};
use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

/// 递归创建目录，已存在时不报错
pub(crate) fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("创建目录失败: {}", dir.display()))
}

/// 写出文本文件（父目录需已存在）
pub(crate) fn write_text(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content.as_bytes()).with_context(|| format!("写入文件失败: {}", path.display()))
}

/// 写出单个组件文件，返回其路径
pub(crate) fn write_component(
    root: &Path,
    size: &str,
    style: &str,
    component: &str,
    ext: &str,
    content: &str,
) -> Result<PathBuf> {
    let dir = root.join(size).join(style);
    ensure_dir(&dir)?;
    let path = dir.join(format!("{}.{}", component, ext));
    write_text(&path, content)?;
    Ok(path)
}

/// 清理前检查：输出目录不能是当前目录或其上级
pub(crate) fn guard_clean_root(root: &Path, cwd: &Path) -> Result<()> {
    if !root.exists() {
        return Ok(());
    }
    if !root.is_dir() {
        anyhow::bail!("{} 不是目录", root.display());
    }
    let root_abs = root
        .canonicalize()
        .with_context(|| format!("无法解析输出目录: {}", root.display()))?;
    let cwd_abs = cwd
        .canonicalize()
        .with_context(|| format!("无法解析当前目录: {}", cwd.display()))?;
    if cwd_abs.starts_with(&root_abs) {
        anyhow::bail!("拒绝清理 {}：它是当前目录或其上级", root.display());
    }
    Ok(())
}

/// 删除本次生成之外的旧文件：
/// - `<root>/<size>/index.<ext>`
/// - `<root>/<size>/<style>/` 下的组件文件与索引
///
/// 其它文件（根目录下的文件、其它扩展名、更深的子目录）一律保留；
/// 清空后的 style / size 目录随之删除。返回删除的文件数。
pub(crate) fn prune_stale(
    root: &Path,
    produced: &HashSet<PathBuf>,
    component_ext: &str,
    index_file: &str,
) -> Result<usize> {
    let mut removed = 0;
    for size_dir in sub_dirs(root)? {
        let index = size_dir.join(index_file);
        if index.is_file() && !produced.contains(&index) {
            remove_file(&index)?;
            removed += 1;
        }
        for style_dir in sub_dirs(&size_dir)? {
            for entry in read_dir(&style_dir)? {
                let path = entry.path();
                if !path.is_file() || produced.contains(&path) {
                    continue;
                }
                let is_component = path.extension().is_some_and(|e| e == component_ext);
                let is_index = path.file_name().is_some_and(|n| n == index_file);
                if is_component || is_index {
                    remove_file(&path)?;
                    removed += 1;
                }
            }
            remove_if_empty(&style_dir)?;
        }
        remove_if_empty(&size_dir)?;
    }
    Ok(removed)
}

fn read_dir(dir: &Path) -> Result<Vec<fs::DirEntry>> {
    let entries = fs::read_dir(dir).with_context(|| format!("读取目录失败: {}", dir.display()))?;
    let mut out = Vec::new();
    for entry in entries {
        out.push(entry.with_context(|| format!("读取目录失败: {}", dir.display()))?);
    }
    Ok(out)
}

fn sub_dirs(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    Ok(read_dir(dir)?.into_iter().map(|e| e.path()).filter(|p| p.is_dir()).collect())
}

fn remove_file(path: &Path) -> Result<()> {
    fs::remove_file(path).with_context(|| format!("删除旧文件失败: {}", path.display()))
}

fn remove_if_empty(dir: &Path) -> Result<()> {
    if read_dir(dir)?.is_empty() {
        fs::remove_dir(dir).with_context(|| format!("删除空目录失败: {}", dir.display()))?;
    }
    Ok(())
}
