//! 站点生成器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责一次完整的生成过程。
//!
//! ## 核心流程
//!
//! 1. **校验**：数据集目录不存在时立即失败，不写任何文件
//! 2. **解析**：读取所有科目目录的全部题目；任一文件名格式错误则整体中止
//! 3. **写入**：逐科目写入题目页面和科目索引
//! 4. **首页**：用全部题目生成首页总表
//! 5. **统计**：输出本次运行的统计信息

use crate::config::Config;
use crate::error::AppError;
use crate::models::Question;
use crate::orchestrator::subject_processor::SubjectBatch;
use crate::services::write_home;
use crate::utils::logging::{log_startup, print_final_stats};
use crate::utils::RunStats;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{info, warn};

/// 应用主结构
pub struct App {
    config: Config,
}

impl App {
    /// 初始化应用
    ///
    /// 数据集目录不存在时返回错误
    pub fn initialize(config: Config) -> Result<Self> {
        if !config.data_dir.is_dir() {
            return Err(AppError::dataset_not_found(&config.data_dir).into());
        }

        log_startup(&config);

        Ok(Self { config })
    }

    /// 运行一次完整生成
    pub fn run(&self) -> Result<RunStats> {
        let mut subjects = self.load_subjects()?;

        if subjects.is_empty() {
            warn!("⚠️ 数据集中没有科目目录");
        }

        std::fs::create_dir_all(&self.config.docs_dir).with_context(|| {
            format!("无法创建输出目录: {}", self.config.docs_dir.display())
        })?;

        let mut stats = RunStats {
            subjects: subjects.len(),
            ..Default::default()
        };
        let mut all_questions: Vec<Question> = Vec::new();

        for subject in subjects.iter_mut() {
            let subject_stats = subject
                .write(&self.config.docs_dir)
                .with_context(|| format!("科目 {} 写入失败", subject.code))?;
            stats.questions += subject_stats.pages;
            stats.pages_with_tags += subject_stats.with_tags;
            stats.pages_with_memo += subject_stats.with_memo;
        }
        for subject in subjects {
            all_questions.extend(subject.questions);
        }

        write_home(&self.config.docs_dir, &all_questions).context("首页写入失败")?;
        info!("🏠 首页: {} 道题目", all_questions.len());

        print_final_stats(&stats, &self.config);

        Ok(stats)
    }

    /// 读取全部科目目录
    ///
    /// 所有文件都解析成功后才返回，保证文件名错误时不会写出任何页面
    fn load_subjects(&self) -> Result<Vec<SubjectBatch>> {
        info!("\n📁 正在扫描数据集...");
        let data_dir = &self.config.data_dir;
        let dataset_name = self.config.dataset_name();

        let entries = std::fs::read_dir(data_dir)
            .with_context(|| format!("无法读取数据集目录: {}", data_dir.display()))?;

        let mut dirs: Vec<PathBuf> = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.is_dir() {
                dirs.push(path);
            }
        }
        dirs.sort();

        let mut subjects = Vec::with_capacity(dirs.len());
        for dir in &dirs {
            subjects.push(SubjectBatch::load(dir, &dataset_name)?);
        }

        Ok(subjects)
    }
}
