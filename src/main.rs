use anyhow::Result;
use kyushi_docs::utils::logging;
use kyushi_docs::{App, Config};
use tracing::error;

fn run() -> Result<()> {
    // 加载配置
    let config = Config::load()?;

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    App::initialize(config)?.run()?;

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        // 配置加载失败时日志尚未初始化
        logging::init(false);
        error!("❌ 生成中止: {:#}", e);
        std::process::exit(1);
    }
}
