//! 初始化脚手架模块
//! - `icongen init` 写出示例配置、默认组件模板与共享 props 类型

use anyhow::{Context, Result};
use include_dir::{include_dir, Dir};
use std::{fs, path::Path};

// 内置脚手架：icongen.yaml、templates/、types/
static SCAFFOLD_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/scaffold");

/// 将内置脚手架写到目标目录；已存在的文件在未指定 force 时跳过
pub(crate) fn init_scaffold(dir: &Path, force: bool) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir).with_context(|| format!("创建目录失败: {}", dir.display()))?;
    }
    let written = write_scaffold(&SCAFFOLD_DIR, dir, force)?;
    println!("✅ 初始化完成（写入 {} 个文件），在根目录运行: icongen generate", written);
    Ok(())
}

fn write_scaffold(src: &Dir, target: &Path, force: bool) -> Result<usize> {
    let mut written = 0;
    for f in src.files() {
        let out_path = target.join(f.path());
        if out_path.exists() && !force {
            eprintln!("跳过: {} 已存在，使用 --force 可覆盖", out_path.display());
            continue;
        }
        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&out_path, f.contents())
            .with_context(|| format!("写出脚手架文件失败: {}", out_path.display()))?;
        println!("写入: {}", out_path.display());
        written += 1;
    }
    for d in src.dirs() {
        written += write_scaffold(d, target, force)?;
    }
    Ok(written)
}
