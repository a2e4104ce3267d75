//! 单个科目处理器 - 编排层
//!
//! 负责一个科目目录：读取全部题目，写入题目页面和科目索引。

use crate::error::{AppError, AppResult};
use crate::models::{load_subject_dir, Question};
use crate::services::{write_question_page, write_subject_index};
use crate::utils::logging::log_subject_loaded;
use std::path::{Path, PathBuf};
use tracing::info;

/// 一个科目的全部题目
#[derive(Debug, Clone)]
pub struct SubjectBatch {
    /// 科目目录名（即科目代码）
    pub code: String,
    /// 按文件名排序的题目
    pub questions: Vec<Question>,
}

/// 科目写入统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SubjectStats {
    pub pages: usize,
    pub with_tags: usize,
    pub with_memo: usize,
}

impl SubjectBatch {
    /// 读取科目目录，文件名格式错误时直接返回错误
    pub fn load(dir: &Path, dataset_name: &str) -> AppResult<Self> {
        let code = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let questions = load_subject_dir(dir, dataset_name)?;
        log_subject_loaded(&code, questions.len());
        Ok(Self { code, questions })
    }

    /// 输出目录 `{docs_dir}/{code}`
    pub fn output_dir(&self, docs_dir: &Path) -> PathBuf {
        docs_dir.join(&self.code)
    }

    /// 写入该科目的所有题目页面和索引
    ///
    /// 从旧页面恢复的标签会写回 `self.questions`，供首页使用
    pub fn write(&mut self, docs_dir: &Path) -> AppResult<SubjectStats> {
        let output_dir = self.output_dir(docs_dir);
        std::fs::create_dir_all(&output_dir)
            .map_err(|e| AppError::create_dir_failed(&output_dir, e))?;

        let mut stats = SubjectStats::default();
        for question in self.questions.iter_mut() {
            let target = output_dir.join(&question.slug);
            let meta = write_question_page(&target, question)?;
            stats.pages += 1;
            if !meta.tags.is_empty() {
                stats.with_tags += 1;
            }
            if meta.has_user_memo() {
                stats.with_memo += 1;
            }
        }

        write_subject_index(&output_dir, &self.code, &self.questions)?;
        info!(
            "📝 科目 {}: 写入 {} 个页面 (标签 {} / 备忘 {})",
            self.code, stats.pages, stats.with_tags, stats.with_memo
        );

        Ok(stats)
    }
}
