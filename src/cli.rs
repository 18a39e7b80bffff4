//! CLI 定义模块：仅负责命令行参数结构体与解析
//! 将 clap 的声明与业务逻辑解耦，便于在其它模块中复用参数。

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{IdScope, SizeOrder};

/// 顶层 CLI 入口
#[derive(Parser, Debug)]
#[command(name = "icongen", about = "由 Iconify 图标集生成 Svelte 图标组件与索引", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
}

/// 子命令定义
#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// 生成图标组件与索引文件
    Generate {
        /// 配置文件路径，默认：icongen.yaml / icongen.yml（不存在则使用内置默认）
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
        /// Iconify JSON 图标集，默认：node_modules/@iconify-json/fluent/icons.json
        #[arg(short, long, value_name = "FILE")]
        source: Option<PathBuf>,
        /// 输出根目录，默认：src/lib/icon
        #[arg(short, long, value_name = "DIR")]
        out: Option<PathBuf>,
        /// 自定义组件模板（Tera）
        #[arg(long, value_name = "FILE")]
        template: Option<PathBuf>,
        /// 索引中尺寸目录的排序方式
        #[arg(long, value_enum, value_name = "ORDER")]
        size_order: Option<SizeOrder>,
        /// 内部 id 的作用域
        #[arg(long, value_enum, value_name = "SCOPE")]
        id_scope: Option<IdScope>,
        /// 生成前清空输出根目录（清除旧图标留下的文件）
        #[arg(long)]
        clean: bool,
    },
    /// 初始化示例配置、组件模板与共享类型
    Init {
        /// 强制覆盖已存在文件
        #[arg(long)]
        force: bool,
        /// 目标目录（默认当前目录）
        #[arg(value_name = "DIR")]
        dir: Option<PathBuf>,
    },
}
