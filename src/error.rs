use std::path::Path;
use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 数据解析错误
    #[error("解析错误: {0}")]
    Parse(#[from] ParseError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 数据集目录不存在
    #[error("数据集目录不存在: {path}")]
    DatasetNotFound { path: String },
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 创建目录失败
    #[error("创建目录失败 ({path}): {source}")]
    CreateDirFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// 数据解析错误
#[derive(Debug, Error)]
pub enum ParseError {
    /// 文件名不符合 kyushi_<科目>_<年>_<元号>_q<番号>.txt 格式
    #[error("文件名格式不正确: {name}")]
    UnexpectedFilename { name: String },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// 配置文件解析失败
    #[error("配置文件解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建数据集目录缺失错误
    pub fn dataset_not_found(path: &Path) -> Self {
        AppError::File(FileError::DatasetNotFound {
            path: path.display().to_string(),
        })
    }

    /// 创建文件读取错误
    pub fn file_read_failed(path: &Path, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.display().to_string(),
            source,
        })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(path: &Path, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.display().to_string(),
            source,
        })
    }

    /// 创建目录创建错误
    pub fn create_dir_failed(path: &Path, source: std::io::Error) -> Self {
        AppError::File(FileError::CreateDirFailed {
            path: path.display().to_string(),
            source,
        })
    }

    /// 创建文件名格式错误
    pub fn unexpected_filename(name: impl Into<String>) -> Self {
        AppError::Parse(ParseError::UnexpectedFilename { name: name.into() })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_filename() {
        let err = AppError::unexpected_filename("kyushi_kenpo_85_q1.txt");
        assert_eq!(
            err.to_string(),
            "解析错误: 文件名格式不正确: kyushi_kenpo_85_q1.txt"
        );
    }

    #[test]
    fn test_io_source_is_chained() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = AppError::file_write_failed(Path::new("docs/index.md"), io);
        let source = std::error::Error::source(&err).expect("file error");
        assert!(std::error::Error::source(source).is_some());
    }
}
