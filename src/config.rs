//! 应用配置：从 config/default.toml 与环境变量加载
//!
//! 加载顺序：先读 TOML 文件，再用环境变量 `RISKSCAN__*` 覆盖
//! （双下划线表示嵌套，如 `RISKSCAN__API__BASE_URL=http://host:8080`）。

use std::path::PathBuf;

use serde::Deserialize;

/// 应用配置根（对应 config/default.toml 的顶层）
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSection,
    #[serde(default)]
    pub api: ApiSection,
}

/// [app] 段：应用名
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppSection {
    pub name: Option<String>,
}

/// [api] 段：远端分析服务的后端选择与基地址
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSection {
    /// 后端：http / mock（mock 返回预设结果，用于离线演示）
    #[serde(default = "default_provider")]
    pub provider: String,
    /// 分析服务基地址，/analysis 路径拼接在其后
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            base_url: default_base_url(),
        }
    }
}

fn default_provider() -> String {
    "http".to_string()
}

fn default_base_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

/// 从 config 目录加载配置，环境变量 RISKSCAN__* 可覆盖
///
/// 1. 按顺序查找 config/default.toml、../config/default.toml、default.toml，找到则作为第一源
/// 2. 若传入 config_path 且文件存在，则追加该文件（可覆盖前面的键）
/// 3. 最后叠加环境变量 RISKSCAN__*（双下划线表示嵌套键）
pub fn load_config(config_path: Option<PathBuf>) -> Result<AppConfig, config::ConfigError> {
    let mut builder = config::Config::builder();

    let default_names = ["config/default", "../config/default", "default"];
    for name in default_names {
        let path = format!("{}.toml", name);
        if std::path::Path::new(&path).exists() {
            builder = builder.add_source(config::File::with_name(name).required(false));
            break;
        }
    }

    if let Some(ref path) = config_path {
        if path.exists() {
            builder = builder.add_source(config::File::from(path.clone()).required(false));
        }
    }

    builder = builder.add_source(
        config::Environment::with_prefix("RISKSCAN")
            .separator("__")
            .try_parsing(true),
    );

    let c = builder.build()?;
    c.try_deserialize()
}
