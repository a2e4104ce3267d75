use crate::error::{AppError, AppResult, ConfigError};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// 默认配置文件名（位于工作目录）
pub const CONFIG_FILE_NAME: &str = "kyushi-docs.toml";

/// 程序配置
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 题目数据集目录（每个科目一个子目录）
    pub data_dir: PathBuf,
    /// 文档输出目录
    pub docs_dir: PathBuf,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("kyushi-ronbun"),
            docs_dir: PathBuf::from("docs"),
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 按 默认值 → 配置文件 → 环境变量 的顺序加载配置
    pub fn load() -> AppResult<Self> {
        let path = Path::new(CONFIG_FILE_NAME);
        let base = if path.exists() {
            Self::from_file(path)?
        } else {
            Self::default()
        };
        base.with_env()
    }

    /// 从 TOML 文件读取配置，缺省字段使用默认值
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::file_read_failed(path, e))?;
        toml::from_str(&content).map_err(|e| {
            AppError::Config(ConfigError::TomlParseFailed {
                path: path.display().to_string(),
                source: e,
            })
        })
    }

    /// 使用环境变量覆盖已有配置
    pub fn with_env(self) -> AppResult<Self> {
        let verbose_logging = match std::env::var("VERBOSE_LOGGING") {
            Ok(v) => v.parse().map_err(|_| {
                AppError::Config(ConfigError::EnvVarParseFailed {
                    var_name: "VERBOSE_LOGGING".to_string(),
                    value: v.clone(),
                    expected_type: "bool".to_string(),
                })
            })?,
            Err(_) => self.verbose_logging,
        };

        Ok(Self {
            data_dir: std::env::var_os("KYUSHI_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(self.data_dir),
            docs_dir: std::env::var_os("KYUSHI_DOCS_DIR")
                .map(PathBuf::from)
                .unwrap_or(self.docs_dir),
            verbose_logging,
        })
    }

    /// 数据集目录名，用于拼接题目的来源路径
    pub fn dataset_name(&self) -> String {
        self.data_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.data_dir.display().to_string())
    }
}
