//! 命令调度模块：
//! - 接收解析好的 CLI 参数，计算“有效参数”（CLI > 环境变量 > 配置文件 > 默认）
//! - 调用生成、初始化等模块

use anyhow::{Context, Result};
use std::{env, path::PathBuf};
use tracing::warn;

use crate::{
    cli::{Cli, Command},
    config::{self, Config, Settings},
    generate::generate,
    init::init_scaffold,
    utils::{env_opt_string, parse_id_scope, parse_size_order, parse_truthy},
};

/// generate 子命令中会覆盖配置文件的参数
#[derive(Debug, Default)]
pub(crate) struct GenerateArgs {
    pub(crate) source: Option<PathBuf>,
    pub(crate) out: Option<PathBuf>,
    pub(crate) template: Option<PathBuf>,
    pub(crate) size_order: Option<config::SizeOrder>,
    pub(crate) id_scope: Option<config::IdScope>,
    pub(crate) clean: bool,
}

/// 运行指定的子命令
pub(crate) fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Generate { config: config_path, source, out, template, size_order, id_scope, clean } => {
            let cwd = env::current_dir().with_context(|| "无法获取当前目录")?;
            let effective_config = config_path.or_else(|| env_opt_string("ICONGEN_CONFIG").map(PathBuf::from));
            let loaded = config::load_config(effective_config.as_deref(), &cwd)?;
            println!("ℹ️ 本次使用的配置来源: {}", config::describe_source(&loaded.source));

            let args = GenerateArgs { source, out, template, size_order, id_scope, clean };
            let settings = effective_settings(args, loaded.config, env_opt_string);

            let summary = generate(&settings)?;
            if !summary.skipped.is_empty() {
                println!("⚠️ 跳过 {} 个图标", summary.skipped.len());
            }
            if !summary.collisions.is_empty() {
                println!("⚠️ {} 个组件名冲突（后者覆盖前者）", summary.collisions.len());
            }
            println!(
                "✅ 生成完成: {} 个组件，{} 个索引 -> {}",
                summary.components,
                summary.index_files,
                settings.out_dir.display()
            );
            Ok(())
        }
        Command::Init { force, dir } => {
            let dir = dir.unwrap_or_else(|| PathBuf::from("."));
            init_scaffold(&dir, force)
        }
    }
}

/// 合并出有效参数：CLI > 环境变量 > 配置文件 > 默认。
/// `env` 按键名返回去除首尾空白后的非空取值。
pub(crate) fn effective_settings(
    args: GenerateArgs,
    cfg: Config,
    env: impl Fn(&str) -> Option<String>,
) -> Settings {
    let env_path = |key: &str| env(key).map(PathBuf::from);
    let env_size_order = env_choice(&env, "ICONGEN_SIZE_ORDER", parse_size_order, "lexical / numeric");
    let env_id_scope = env_choice(&env, "ICONGEN_ID_SCOPE", parse_id_scope, "instance / static");

    let mut settings = Settings::from_config(cfg);
    if let Some(s) = args.source.or_else(|| env_path("ICONGEN_SOURCE")) {
        settings.source = s;
    }
    if let Some(o) = args.out.or_else(|| env_path("ICONGEN_OUT")) {
        settings.out_dir = o;
    }
    if let Some(t) = args.template.or_else(|| env_path("ICONGEN_TEMPLATE")) {
        settings.template = Some(t);
    }
    if let Some(o) = args.size_order.or(env_size_order) {
        settings.size_order = o;
    }
    if let Some(s) = args.id_scope.or(env_id_scope) {
        settings.id_scope = s;
    }
    if args.clean {
        settings.clean = true;
    } else if let Some(c) = env("ICONGEN_CLEAN") {
        settings.clean = parse_truthy(&c);
    }
    settings
}

/// 读取枚举型环境变量；取值无法识别时告警并忽略
fn env_choice<T>(
    env: &impl Fn(&str) -> Option<String>,
    key: &str,
    parse: fn(String) -> Option<T>,
    choices: &str,
) -> Option<T> {
    let raw = env(key)?;
    let parsed = parse(raw.clone());
    if parsed.is_none() {
        warn!("忽略无法识别的 {}={}（可选: {}）", key, raw, choices);
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{IdScope, SizeOrder};
    use std::{collections::HashMap, path::Path};

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| map.get(key).cloned()
    }

    fn yaml(text: &str) -> Config {
        serde_yaml::from_str(text).unwrap()
    }

    const YAML: &str = "source: yaml.json\nout_dir: yaml-out\nsize_order: lexical\nid_scope: static\nclean: true\n";

    #[test]
    fn yaml_used_when_nothing_overrides() {
        let s = effective_settings(GenerateArgs::default(), yaml(YAML), env_of(&[]));
        assert_eq!(s.source, Path::new("yaml.json"));
        assert_eq!(s.out_dir, Path::new("yaml-out"));
        assert_eq!(s.size_order, SizeOrder::Lexical);
        assert_eq!(s.id_scope, IdScope::Static);
        assert!(s.clean);
    }

    #[test]
    fn env_beats_yaml() {
        let env = env_of(&[
            ("ICONGEN_SOURCE", "env.json"),
            ("ICONGEN_SIZE_ORDER", "numeric"),
            ("ICONGEN_ID_SCOPE", "instance"),
            ("ICONGEN_CLEAN", "0"),
        ]);
        let s = effective_settings(GenerateArgs::default(), yaml(YAML), env);
        assert_eq!(s.source, Path::new("env.json"));
        assert_eq!(s.out_dir, Path::new("yaml-out"));
        assert_eq!(s.size_order, SizeOrder::Numeric);
        assert_eq!(s.id_scope, IdScope::Instance);
        assert!(!s.clean);
    }

    #[test]
    fn flags_beat_env() {
        let env = env_of(&[
            ("ICONGEN_SOURCE", "env.json"),
            ("ICONGEN_OUT", "env-out"),
            ("ICONGEN_SIZE_ORDER", "numeric"),
            ("ICONGEN_CLEAN", "0"),
        ]);
        let args = GenerateArgs {
            source: Some(PathBuf::from("cli.json")),
            size_order: Some(SizeOrder::Lexical),
            clean: true,
            ..GenerateArgs::default()
        };
        let s = effective_settings(args, Config::default(), env);
        assert_eq!(s.source, Path::new("cli.json"));
        assert_eq!(s.out_dir, Path::new("env-out"));
        assert_eq!(s.size_order, SizeOrder::Lexical);
        assert!(s.clean);
    }

    #[test]
    fn unrecognised_env_choice_keeps_yaml_value() {
        let env = env_of(&[("ICONGEN_SIZE_ORDER", "numerical"), ("ICONGEN_ID_SCOPE", "global")]);
        let s = effective_settings(GenerateArgs::default(), yaml(YAML), env);
        assert_eq!(s.size_order, SizeOrder::Lexical);
        assert_eq!(s.id_scope, IdScope::Static);
    }

    #[test]
    fn defaults_without_any_source() {
        let s = effective_settings(GenerateArgs::default(), Config::default(), env_of(&[]));
        assert_eq!(s, Settings::default());
    }
}
