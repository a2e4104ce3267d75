//! # Kyushi Docs
//!
//! 旧司法試験 论文式试题的静态文档生成器：读取数据集中的题目文本，
//! 生成 MkDocs 用的题目页面、科目索引和带筛选功能的首页。
//!
//! ## 架构设计
//!
//! ### ① 数据层（Models）
//! - `models/` - `Question`、`Subject`、`Era`
//! - `models/loaders` - 按固定文件名格式读取题目
//!
//! ### ② 业务能力层（Services）
//! - `front_matter` - 从旧页面恢复标签和备忘
//! - `page_writer` - 写题目页面
//! - `subject_index` - 写科目索引
//! - `home_page` - 写首页总表（筛选/排序脚本在浏览器端运行）
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/site_builder` - 一次完整的生成过程
//! - `orchestrator/subject_processor` - 单个科目的读取与写入
//!
//! 生成结果本身就是元数据存储：重新生成时保留用户在页面中编辑的标签和备忘。

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Question, Subject};
pub use orchestrator::App;
pub use utils::RunStats;
