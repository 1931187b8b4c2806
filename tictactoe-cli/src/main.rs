use std::io;

use anyhow::Result;
use tictactoe_cli::{remember_choice, run, Settings};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let settings = Settings::load();

    // 初始化日志
    let level = settings.log_level.as_directive();
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("tictactoe_cli={}", level).parse()?)
                .add_directive(format!("tictactoe_ai={}", level).parse()?),
        )
        .init();

    info!("井字棋启动中...");

    let summary = run(io::stdin().lock(), io::stdout().lock(), &settings)?;
    info!(
        "对局结束: {:?}，共 {} 回合，展开 {} 个节点",
        summary.outcome, summary.turns, summary.total.nodes_expanded
    );

    if let Some(path) = Settings::settings_path() {
        if let Err(e) = remember_choice(&settings, &summary, &path) {
            warn!("保存设置失败: {:#}", e);
        }
    }

    Ok(())
}
