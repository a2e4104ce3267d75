//! 日志工具模块
//!
//! 提供日志初始化、格式化和输出的辅助函数

use crate::config::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 优先使用 `RUST_LOG`，未设置时按 `verbose` 选择 `debug` 或 `info`
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 开始生成文档");
    info!("📁 数据集目录: {}", config.data_dir.display());
    info!("📝 输出目录: {}", config.docs_dir.display());
    info!("{}", "=".repeat(60));
}

/// 记录科目加载信息
///
/// # 参数
/// - `subject`: 科目代码
/// - `count`: 题目数量
pub fn log_subject_loaded(subject: &str, count: usize) {
    info!("✓ 科目 {}: 找到 {} 道题目", subject, count);
}

/// 运行统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    /// 处理的科目数
    pub subjects: usize,
    /// 生成的题目页面数
    pub questions: usize,
    /// 保留了用户标签的页面数
    pub pages_with_tags: usize,
    /// 保留了用户备忘的页面数
    pub pages_with_memo: usize,
}

/// 打印最终统计信息
pub fn print_final_stats(stats: &RunStats, config: &Config) {
    info!("\n{}", "=".repeat(60));
    info!("📊 生成完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("📚 科目: {}", stats.subjects);
    info!("✅ 题目页面: {}", stats.questions);
    info!("🏷️ 保留标签: {}", stats.pages_with_tags);
    info!("🗒️ 保留备忘: {}", stats.pages_with_memo);
    info!("{}", "=".repeat(60));
    info!("\n首页已保存至: {}", config.docs_dir.join("index.md").display());
}

/// 截断长文本
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大字符数
/// - `marker`: 截断时追加的标记
///
/// # 返回
/// 返回截断后的文本，按字符而非字节计数
pub fn truncate_text(text: &str, max_len: usize, marker: &str) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + marker
    } else {
        text.to_string()
    }
}
