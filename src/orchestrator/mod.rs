//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `site_builder` - 站点生成器
//! - 校验数据集目录
//! - 读取全部科目（先解析完，再写入）
//! - 写入首页，输出统计
//!
//! ### `subject_processor` - 单个科目处理器
//! - 读取一个科目目录的全部题目
//! - 写入题目页面和科目索引
//!
//! ## 层次关系
//!
//! ```text
//! site_builder (处理全部科目)
//!     ↓
//! subject_processor (处理一个科目的 Vec<Question>)
//!     ↓
//! services (能力层：front_matter / page_writer / subject_index / home_page)
//!     ↓
//! models (数据：Question / Subject / Era / loaders)
//! ```

pub mod site_builder;
pub mod subject_processor;

pub use site_builder::App;
pub use subject_processor::{SubjectBatch, SubjectStats};
