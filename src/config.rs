//! 配置与加载模块：
//! - 定义 `icongen.yaml` 的结构（全部字段可选）
//! - 提供 `load_config`：显式路径 > 自动发现 > 内置默认
//! - `Settings` 为合并 CLI/环境变量/配置文件后的有效参数

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// 默认图标集位置（npm 包 `@iconify-json/fluent`）
pub(crate) const DEFAULT_SOURCE: &str = "node_modules/@iconify-json/fluent/icons.json";
/// 默认输出根目录
pub(crate) const DEFAULT_OUT_DIR: &str = "src/lib/icon";

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Config {
    /// Iconify JSON 图标集路径
    pub(crate) source: Option<PathBuf>,
    /// 输出根目录
    #[serde(alias = "root")]
    pub(crate) out_dir: Option<PathBuf>,
    /// 自定义组件模板（Tera）
    pub(crate) template: Option<PathBuf>,
    /// 组件文件扩展名，默认 `svelte`
    pub(crate) component_ext: Option<String>,
    /// 索引文件扩展名，默认 `ts`
    pub(crate) index_ext: Option<String>,
    /// 索引之间互相引用时使用的扩展名，默认 `js`
    pub(crate) import_ext: Option<String>,
    /// 组件 props 类型名
    pub(crate) props_type: Option<String>,
    /// 组件内导入 props 类型的模块路径
    pub(crate) props_import: Option<String>,
    /// 根索引首行重新导出的类型模块（相对输出根目录）
    pub(crate) types_module: Option<String>,
    pub(crate) size_order: Option<SizeOrder>,
    pub(crate) id_scope: Option<IdScope>,
    /// 生成后删除本次未生成的旧组件与索引
    pub(crate) clean: Option<bool>,
}

/// 尺寸目录在索引中的排序方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub(crate) enum SizeOrder {
    /// 纯字符串排序（"20" 排在 "9" 前）
    Lexical,
    /// 数字尺寸按数值升序，非数字排在其后按字符串排序
    Numeric,
}

/// 内部 id 的作用域
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub(crate) enum IdScope {
    /// 每个组件实例唯一（Svelte `$props.id()`）
    Instance,
    /// 按图标名生成的固定前缀
    Static,
}

/// 配置来源（用于打印和调试）
#[derive(Debug, Clone)]
pub(crate) enum ConfigSource {
    LocalExplicit(String),
    LocalAuto(String),
    Defaults,
}

/// 加载后的配置及其来源
#[derive(Debug)]
pub(crate) struct LoadedConfig {
    pub(crate) config: Config,
    pub(crate) source: ConfigSource,
}

/// 人类可读的来源描述
pub(crate) fn describe_source(src: &ConfigSource) -> String {
    match src {
        ConfigSource::LocalExplicit(p) => format!("本地文件: {}", p),
        ConfigSource::LocalAuto(p) => format!("本地文件(自动发现): {}", p),
        ConfigSource::Defaults => "内置默认".to_string(),
    }
}

// 自动发现：icongen.yaml / icongen.yml
fn resolve_local_config_path(dir: &Path) -> Option<PathBuf> {
    ["icongen.yaml", "icongen.yml"]
        .iter()
        .map(|cand| dir.join(cand))
        .find(|p| p.exists())
}

/// 加载配置。显式路径不存在时报错；未发现配置文件时使用内置默认。
pub(crate) fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<LoadedConfig> {
    if let Some(path) = explicit {
        if !path.exists() {
            bail!("配置文件不存在: {}", path.display());
        }
        let config = read_config(path)?;
        return Ok(LoadedConfig { config, source: ConfigSource::LocalExplicit(path.display().to_string()) });
    }
    if let Some(path) = resolve_local_config_path(cwd) {
        let config = read_config(&path)?;
        return Ok(LoadedConfig { config, source: ConfigSource::LocalAuto(path.display().to_string()) });
    }
    Ok(LoadedConfig { config: Config::default(), source: ConfigSource::Defaults })
}

fn read_config(path: &Path) -> Result<Config> {
    let text = fs::read_to_string(path).with_context(|| format!("读取配置失败: {}", path.display()))?;
    // 空文件视为全部默认
    if text.trim().is_empty() {
        return Ok(Config::default());
    }
    serde_yaml::from_str(&text).with_context(|| format!("解析 YAML 失败: {}", path.display()))
}

/// 生成时使用的有效参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    pub(crate) source: PathBuf,
    pub(crate) out_dir: PathBuf,
    pub(crate) template: Option<PathBuf>,
    pub(crate) component_ext: String,
    pub(crate) index_ext: String,
    pub(crate) import_ext: String,
    pub(crate) props_type: String,
    pub(crate) props_import: String,
    pub(crate) types_module: String,
    pub(crate) size_order: SizeOrder,
    pub(crate) id_scope: IdScope,
    pub(crate) clean: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            template: None,
            component_ext: "svelte".to_string(),
            index_ext: "ts".to_string(),
            import_ext: "js".to_string(),
            props_type: "IconProps".to_string(),
            props_import: "$lib/types/icon.js".to_string(),
            types_module: "../types/icon.js".to_string(),
            size_order: SizeOrder::Numeric,
            id_scope: IdScope::Instance,
            clean: false,
        }
    }
}

impl Settings {
    /// 以配置文件覆盖默认值（CLI/环境变量在调用方再覆盖一层）
    pub(crate) fn from_config(cfg: Config) -> Self {
        let d = Self::default();
        Self {
            source: cfg.source.unwrap_or(d.source),
            out_dir: cfg.out_dir.unwrap_or(d.out_dir),
            template: cfg.template.or(d.template),
            component_ext: cfg.component_ext.unwrap_or(d.component_ext),
            index_ext: cfg.index_ext.unwrap_or(d.index_ext),
            import_ext: cfg.import_ext.unwrap_or(d.import_ext),
            props_type: cfg.props_type.unwrap_or(d.props_type),
            props_import: cfg.props_import.unwrap_or(d.props_import),
            types_module: cfg.types_module.unwrap_or(d.types_module),
            size_order: cfg.size_order.unwrap_or(d.size_order),
            id_scope: cfg.id_scope.unwrap_or(d.id_scope),
            clean: cfg.clean.unwrap_or(d.clean),
        }
    }
}
