//! 前置元数据读取服务 - 业务能力层
//!
//! 从上一次生成的题目页面中恢复用户编辑过的标签和备忘，
//! 使重新生成不会覆盖用户内容。页面本身就是运行之间唯一的元数据存储。

use crate::error::{AppError, AppResult};
use regex::Regex;
use serde_yaml::Value;
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

/// 尚无备忘时写入的占位文本
pub const DEFAULT_MEMO: &str = "_ここにメモを書く_";

static MEMO_REGEX: OnceLock<Regex> = OnceLock::new();

fn memo_regex() -> &'static Regex {
    MEMO_REGEX.get_or_init(|| Regex::new(r"(?s)## メモ\s*\n(.*)").expect("memo pattern is valid"))
}

/// 从已有页面恢复的元数据
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub tags: Vec<String>,
    pub memo: String,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            tags: Vec::new(),
            memo: DEFAULT_MEMO.to_string(),
        }
    }
}

impl PageMeta {
    /// 备忘是否为用户填写的内容
    pub fn has_user_memo(&self) -> bool {
        self.memo != DEFAULT_MEMO
    }
}

/// 读取已有页面的标签和备忘
///
/// # 参数
/// - `path`: 之前生成的页面路径（可以不存在）
///
/// # 返回
/// 页面不存在时返回默认值；只有读取已存在文件失败时才返回错误
pub fn read_existing_tags_and_memo(path: &Path) -> AppResult<PageMeta> {
    if !path.exists() {
        return Ok(PageMeta::default());
    }

    let content =
        std::fs::read_to_string(path).map_err(|e| AppError::file_read_failed(path, e))?;
    Ok(parse_page_meta(&content))
}

/// 从页面内容中解析标签和备忘
pub fn parse_page_meta(content: &str) -> PageMeta {
    let tags = parse_tags(content);

    let memo = memo_regex()
        .captures(content)
        .map(|caps| caps[1].trim_end().to_string())
        .filter(|body| !body.is_empty())
        .unwrap_or_else(|| DEFAULT_MEMO.to_string());

    PageMeta { tags, memo }
}

/// 解析 `---` 包围的 YAML 块中的 `tags` 序列，任何异常都视为无标签
fn parse_tags(content: &str) -> Vec<String> {
    if !content.starts_with("---") {
        return Vec::new();
    }

    let parts: Vec<&str> = content.splitn(3, "---").collect();
    if parts.len() < 3 {
        return Vec::new();
    }

    let meta: Value = match serde_yaml::from_str(parts[1]) {
        Ok(v) => v,
        Err(e) => {
            debug!("前置元数据解析失败，忽略标签: {}", e);
            return Vec::new();
        }
    };

    match meta.get("tags") {
        Some(Value::Sequence(items)) => items.iter().filter_map(tag_to_text).collect(),
        _ => Vec::new(),
    }
}

/// 把单个标签条目转换为文本；空条目丢弃
pub(crate) fn tag_to_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => serde_yaml::to_string(other)
            .ok()
            .map(|s| s.trim_end().to_string()),
    }
}
