//! Iconify 图标集模块：
//! - 读取 Iconify JSON（如 `@iconify-json/fluent/icons.json`）
//! - 图标属性与图标集默认尺寸合并，得到完整的图标几何数据

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use std::{fs, path::Path};

/// 默认视图尺寸（与 Iconify 约定一致）
const DEFAULT_SIZE: f64 = 16.0;

/// 图标集文档。`aliases` 等其它字段不参与生成，解析时忽略。
#[derive(Debug, Deserialize)]
pub(crate) struct IconSet {
    #[serde(default)]
    pub(crate) prefix: String,
    /// 保持文件中的顺序，生成顺序与之一致
    pub(crate) icons: IndexMap<String, IconProps>,
    #[serde(default)]
    pub(crate) left: Option<f64>,
    #[serde(default)]
    pub(crate) top: Option<f64>,
    #[serde(default)]
    pub(crate) width: Option<f64>,
    #[serde(default)]
    pub(crate) height: Option<f64>,
}

/// 单个图标的属性，缺省字段表示“未设置”
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct IconProps {
    #[serde(default)]
    pub(crate) body: Option<String>,
    #[serde(default)]
    pub(crate) left: Option<f64>,
    #[serde(default)]
    pub(crate) top: Option<f64>,
    #[serde(default)]
    pub(crate) width: Option<f64>,
    #[serde(default)]
    pub(crate) height: Option<f64>,
    #[serde(default)]
    pub(crate) rotate: Option<i32>,
    #[serde(default)]
    pub(crate) h_flip: Option<bool>,
    #[serde(default)]
    pub(crate) v_flip: Option<bool>,
}

/// 默认值全部就位的图标
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FullIcon {
    pub(crate) body: String,
    pub(crate) left: f64,
    pub(crate) top: f64,
    pub(crate) width: f64,
    pub(crate) height: f64,
    pub(crate) rotate: i32,
    pub(crate) h_flip: bool,
    pub(crate) v_flip: bool,
}

impl IconSet {
    /// 从本地 JSON 文件加载图标集
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("读取图标集失败: {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("解析图标集失败: {}", path.display()))
    }

    pub(crate) fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// 图标名，按文件顺序
    pub(crate) fn names(&self) -> impl Iterator<Item = &str> {
        self.icons.keys().map(String::as_str)
    }

    /// 图标的完整数据：图标自身属性 > 图标集默认 > 固定默认。
    /// 图标不存在或缺少 body 时返回 None。
    pub(crate) fn icon_data(&self, name: &str) -> Option<FullIcon> {
        let icon = self.icons.get(name)?;
        Some(FullIcon {
            body: icon.body.clone()?,
            left: icon.left.or(self.left).unwrap_or(0.0),
            top: icon.top.or(self.top).unwrap_or(0.0),
            width: icon.width.or(self.width).unwrap_or(DEFAULT_SIZE),
            height: icon.height.or(self.height).unwrap_or(DEFAULT_SIZE),
            rotate: icon.rotate.unwrap_or(0).rem_euclid(4),
            h_flip: icon.h_flip.unwrap_or(false),
            v_flip: icon.v_flip.unwrap_or(false),
        })
    }
}
