//! 题目页面写入服务 - 业务能力层
//!
//! 每道题生成一个 Markdown 页面：前置元数据（标题、标签）、题目引用块、备忘。

use crate::error::{AppError, AppResult};
use crate::models::Question;
use crate::services::front_matter::{read_existing_tags_and_memo, tag_to_text, PageMeta};
use std::path::Path;
use tracing::debug;

/// 把正文转换为 Markdown 引用块，空行保留为单独的 `>`
pub fn format_blockquote(text: &str) -> String {
    text.lines()
        .map(|line| {
            if line.trim().is_empty() {
                ">".to_string()
            } else {
                format!("> {}", line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim_end()
        .to_string()
}

/// 把标签渲染为 YAML 标量
///
/// 能原样读回的标签（包括 `123`、`true` 这类会被读成数字或布尔值的标签）不加引号；
/// 其余交给 serde_yaml 加引号
fn yaml_tag(tag: &str) -> String {
    use serde_yaml::Value;

    let single_line = tag.replace(['\r', '\n'], " ");
    let reads_back_plain = match serde_yaml::from_str::<Value>(&single_line) {
        Ok(v @ (Value::String(_) | Value::Number(_) | Value::Bool(_))) => {
            tag_to_text(&v).as_deref() == Some(single_line.as_str())
        }
        _ => false,
    };
    if reads_back_plain {
        return single_line;
    }
    match serde_yaml::to_string(&single_line) {
        Ok(s) => s.trim_end().to_string(),
        Err(_) => single_line,
    }
}

/// 渲染题目页面内容
pub fn render_question_page(question: &Question, meta: &PageMeta) -> String {
    let title = question.title();

    let mut lines = vec!["---".to_string(), format!("title: {}", title)];
    if meta.tags.is_empty() {
        lines.push("tags: []".to_string());
    } else {
        lines.push("tags:".to_string());
        lines.extend(meta.tags.iter().map(|t| format!("  - {}", yaml_tag(t))));
    }
    lines.push("---".to_string());

    lines.extend([
        String::new(),
        format!("# {}", title),
        String::new(),
        "## 問題".to_string(),
        String::new(),
        format_blockquote(&question.text),
        String::new(),
        "## メモ".to_string(),
        String::new(),
        meta.memo.clone(),
        String::new(),
    ]);

    lines.join("\n")
}

/// 写入单个题目页面
///
/// # 参数
/// - `target`: 页面路径，已存在时无条件覆盖
/// - `question`: 题目；恢复出的标签会写回 `question.tags`
///
/// # 返回
/// 返回从旧页面恢复的元数据
pub fn write_question_page(target: &Path, question: &mut Question) -> AppResult<PageMeta> {
    let meta = read_existing_tags_and_memo(target)?;
    question.tags = meta.tags.clone();

    let content = render_question_page(question, &meta);
    std::fs::write(target, content).map_err(|e| AppError::file_write_failed(target, e))?;

    debug!(
        "写入页面: {} | 标签: {} 个",
        target.display(),
        meta.tags.len()
    );

    Ok(meta)
}
