//! 组件渲染模块：
//! - 图标几何数据 -> SVG 标签（含 `pre` / `children` 两个插入点）
//! - 通过 Tera 模板生成组件源码

use anyhow::{Context, Result};
use std::fs;
use tera::{Context as TContext, Tera};

use crate::{
    config::{IdScope, Settings},
    iconify::FullIcon,
    svg::{icon_to_html, icon_to_svg, replace_ids},
};

const COMPONENT_TEMPLATE: &str = "component";
const DEFAULT_TEMPLATE: &str = include_str!("../scaffold/templates/component.svelte");

const PRE_SLOT: &str = "{@render pre?.()}";
const CHILDREN_SLOT: &str = "{@render children?.()}";
const REST_SPREAD: &str = "{...rest}";

/// 渲染后的 SVG 标签
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Markup {
    pub(crate) svg: String,
    /// body 中是否存在被改写的 id
    pub(crate) scoped_ids: bool,
}

pub(crate) struct Renderer {
    tera: Tera,
    props_type: String,
    props_import: String,
    id_scope: IdScope,
}

impl Renderer {
    /// 加载组件模板：`settings.template` 指定时读取文件，否则使用内置模板
    pub(crate) fn new(settings: &Settings) -> Result<Self> {
        let text = match &settings.template {
            Some(path) => fs::read_to_string(path)
                .with_context(|| format!("读取组件模板失败: {}", path.display()))?,
            None => DEFAULT_TEMPLATE.to_string(),
        };
        let mut tera = Tera::default();
        tera.add_raw_template(COMPONENT_TEMPLATE, &text)
            .with_context(|| "解析组件模板失败（Svelte 的 {#if}/{#each} 等块需放在 {% raw %}...{% endraw %} 中）")?;
        Ok(Self {
            tera,
            props_type: settings.props_type.clone(),
            props_import: settings.props_import.clone(),
            id_scope: settings.id_scope,
        })
    }

    /// 生成 `<svg>`：id 改写、插入点、尺寸属性与 `{...rest}`
    pub(crate) fn markup(&self, icon_name: &str, icon: &FullIcon) -> Markup {
        let rendered = icon_to_svg(icon);
        let prefix = match self.id_scope {
            IdScope::Instance => "{uid}-".to_string(),
            IdScope::Static => format!("{}-", icon_name),
        };
        let (body, replaced) = replace_ids(&rendered.body, &prefix);
        let body = format!("{}{}{}", PRE_SLOT, body, CHILDREN_SLOT);
        Markup {
            svg: icon_to_html(&body, &rendered.attributes, Some(REST_SPREAD)),
            scoped_ids: replaced > 0 && self.id_scope == IdScope::Instance,
        }
    }

    /// 组件文件完整内容，总以单个换行结尾
    pub(crate) fn component(&self, icon_name: &str, component_name: &str, icon: &FullIcon) -> Result<String> {
        let markup = self.markup(icon_name, icon);
        let mut ctx = TContext::new();
        ctx.insert("props_type", &self.props_type);
        ctx.insert("props_import", &self.props_import);
        ctx.insert("scoped_ids", &markup.scoped_ids);
        ctx.insert("svg", &markup.svg);
        ctx.insert("icon_name", icon_name);
        ctx.insert("component_name", component_name);
        let out = self
            .tera
            .render(COMPONENT_TEMPLATE, &ctx)
            .with_context(|| format!("渲染组件失败: {}", icon_name))?;
        Ok(format!("{}\n", out.trim_end()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icon(body: &str) -> FullIcon {
        FullIcon {
            body: body.to_string(),
            left: 0.0,
            top: 0.0,
            width: 20.0,
            height: 20.0,
            rotate: 0,
            h_flip: false,
            v_flip: false,
        }
    }

    #[test]
    fn default_component_layout() {
        let r = Renderer::new(&Settings::default()).unwrap();
        let out = r.component("file-add-20-filled", "FileAdd", &icon("<path d=\"M1 1\"/>")).unwrap();
        assert_eq!(
            out,
            "<script lang=\"ts\">\n\
             import type { IconProps } from '$lib/types/icon.js';\n\
             \n\
             let { pre, children, ...rest }: IconProps = $props();\n\
             </script>\n\
             \n\
             <svg xmlns=\"http://www.w3.org/2000/svg\" width=\"20\" height=\"20\" viewBox=\"0 0 20 20\" {...rest}>\
             {@render pre?.()}<path d=\"M1 1\"/>{@render children?.()}</svg>\n"
        );
    }

    #[test]
    fn instance_scope_uses_props_id() {
        let r = Renderer::new(&Settings::default()).unwrap();
        let body = r#"<clipPath id="c"/><path clip-path="url(#c)"/>"#;
        let m = r.markup("shape-20-color", &icon(body));
        assert!(m.scoped_ids);
        assert!(m.svg.contains(r#"<clipPath id="{uid}-0"/><path clip-path="url(#{uid}-0)"/>"#));

        let out = r.component("shape-20-color", "Shape", &icon(body)).unwrap();
        assert!(out.contains("$props();\nconst uid = $props.id();\n</script>\n"));
    }

    #[test]
    fn static_scope_uses_icon_name() {
        let settings = Settings { id_scope: IdScope::Static, ..Settings::default() };
        let r = Renderer::new(&settings).unwrap();
        let m = r.markup("shape-20-color", &icon(r#"<mask id="m"/><g mask="url(#m)"/>"#));
        assert!(!m.scoped_ids);
        assert!(m.svg.contains(r#"<mask id="shape-20-color-0"/><g mask="url(#shape-20-color-0)"/>"#));
        let out = r.component("shape-20-color", "Shape", &icon("<path/>")).unwrap();
        assert!(!out.contains("$props.id()"));
    }

    #[test]
    fn slots_wrap_body() {
        let r = Renderer::new(&Settings::default()).unwrap();
        let m = r.markup("a-20-filled", &icon("<path/>"));
        assert!(m.svg.ends_with("{...rest}>{@render pre?.()}<path/>{@render children?.()}</svg>"));
    }

    #[test]
    fn custom_template_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("c.svelte");
        fs::write(&path, "<!-- {{ icon_name }} / {{ component_name }} -->\n{{ svg }}\n\n\n").unwrap();
        let settings = Settings { template: Some(path), ..Settings::default() };
        let r = Renderer::new(&settings).unwrap();
        let out = r.component("a-b-20-filled", "AB", &icon("<path/>")).unwrap();
        assert!(out.starts_with("<!-- a-b-20-filled / AB -->\n<svg "));
        assert!(out.ends_with("</svg>\n"));
    }

    #[test]
    fn svelte_blocks_inside_raw_are_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("c.svelte");
        fs::write(
            &path,
            "{% raw %}{#if rest.title}<title>{rest.title}</title>{/if}{% endraw %}\n{{ svg }}\n",
        )
        .unwrap();
        let settings = Settings { template: Some(path), ..Settings::default() };
        let r = Renderer::new(&settings).unwrap();
        let out = r.component("a-20-filled", "A", &icon("<path/>")).unwrap();
        assert!(out.starts_with("{#if rest.title}<title>{rest.title}</title>{/if}\n<svg "));
    }

    #[test]
    fn bare_svelte_block_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("c.svelte");
        fs::write(&path, "{#if pre}x{/if}\n{{ svg }}\n").unwrap();
        let settings = Settings { template: Some(path), ..Settings::default() };
        let err = Renderer::new(&settings).err().unwrap();
        assert!(format!("{err}").contains("{% raw %}"));
    }

    #[test]
    fn broken_template_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.svelte");
        fs::write(&path, "{% if %}").unwrap();
        let settings = Settings { template: Some(path), ..Settings::default() };
        assert!(Renderer::new(&settings).is_err());
    }

    #[test]
    fn missing_template_is_error() {
        let settings = Settings { template: Some("/nonexistent/tpl.svelte".into()), ..Settings::default() };
        assert!(Renderer::new(&settings).is_err());
    }
}
