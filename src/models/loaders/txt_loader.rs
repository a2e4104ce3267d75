//! 从数据集的文本文件构建 `Question`
//!
//! 文件名格式固定为 `kyushi_<科目>_<年>_<元号>_q<番号>.txt`，
//! 不匹配时整个运行中止。

use crate::error::{AppError, AppResult};
use crate::models::question::Question;
use crate::models::subject::subject_label;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::debug;

static FILENAME_REGEX: OnceLock<Regex> = OnceLock::new();

fn filename_regex() -> &'static Regex {
    FILENAME_REGEX.get_or_init(|| {
        Regex::new(r"^kyushi_(?P<subject>[a-z]+)_(?P<year>\d{4})_(?P<era>[sh]\d{2})_q(?P<qnum>\d+)\.txt$")
            .expect("filename pattern is valid")
    })
}

/// 从文件名解析出的结构化字段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameInfo {
    pub subject: String,
    pub year: u32,
    pub era_code: String,
    pub qnum: u32,
}

impl FilenameInfo {
    pub fn slug(&self) -> String {
        Question::make_slug(self.year, &self.era_code, self.qnum)
    }
}

/// 解析文件名
///
/// # 参数
/// - `name`: 不含目录的文件名
///
/// # 返回
/// 文件名不符合格式时返回 `ParseError::UnexpectedFilename`
pub fn parse_filename(name: &str) -> AppResult<FilenameInfo> {
    let caps = filename_regex()
        .captures(name)
        .ok_or_else(|| AppError::unexpected_filename(name))?;

    // 正则已保证全为数字，溢出时同样按格式错误处理
    let year = caps["year"]
        .parse::<u32>()
        .map_err(|_| AppError::unexpected_filename(name))?;
    let qnum = caps["qnum"]
        .parse::<u32>()
        .map_err(|_| AppError::unexpected_filename(name))?;

    Ok(FilenameInfo {
        subject: caps["subject"].to_string(),
        year,
        era_code: caps["era"].to_string(),
        qnum,
    })
}

/// 统一换行符为 `\n`（`\r\n` 与单独的 `\r` 都会被替换）
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// 读取单个题目文件
///
/// # 参数
/// - `path`: 题目文件路径
/// - `dataset_name`: 数据集目录名，用于拼接来源路径
pub fn load_question(path: &Path, dataset_name: &str) -> AppResult<Question> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let info = parse_filename(&name)?;

    let content =
        std::fs::read_to_string(path).map_err(|e| AppError::file_read_failed(path, e))?;
    let content = normalize_newlines(&content);

    Ok(Question {
        subject_label: subject_label(&info.subject),
        slug: info.slug(),
        source: format!("{}/{}/{}", dataset_name, info.subject, name),
        text: content.trim_matches('\n').to_string(),
        subject: info.subject,
        year: info.year,
        era_code: info.era_code,
        qnum: info.qnum,
        tags: Vec::new(),
    })
}

/// 读取科目目录下所有 `kyushi_*.txt` 文件
///
/// 文件按名称排序，保证输出稳定；任一文件名格式错误即返回错误
pub fn load_subject_dir(dir: &Path, dataset_name: &str) -> AppResult<Vec<Question>> {
    let entries = std::fs::read_dir(dir).map_err(|e| AppError::file_read_failed(dir, e))?;

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| AppError::file_read_failed(dir, e))?.path();
        let is_candidate = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.starts_with("kyushi_") && n.ends_with(".txt"))
            .unwrap_or(false);
        if is_candidate && path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    let mut questions = Vec::with_capacity(files.len());
    for path in &files {
        let question = load_question(path, dataset_name)?;
        debug!("已解析: {} → {}", question.source, question.slug);
        questions.push(question);
    }

    Ok(questions)
}
