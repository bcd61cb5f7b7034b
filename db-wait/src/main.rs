//! 数据库就绪门禁
//!
//! 在依赖的 MySQL 数据库可达之前阻塞启动流程，供容器入口脚本或 CI 步骤使用：
//! - 从环境变量读取连接参数
//! - 以固定间隔轮询，直到连接成功或超时
//! - 结束时输出一行机器可读的结果摘要

mod probe;
mod waiter;

use std::process::ExitCode;

use common::config::{load_dotenv, WaitConfig};
use common::models::{Outcome, WaitReport};
use probe::MySqlConnector;
use tokio::time::Instant;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use waiter::ReadinessWaiter;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load .env file (if present) before anything else
    load_dotenv();

    // 初始化日志追踪
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // 加载配置
    let config = WaitConfig::load();
    info!(
        target = %serde_json::to_string(&config.connection)?,
        timeout_secs = config.timeout_secs,
        interval_secs = config.interval_secs,
        "waiting for database"
    );

    let connector = MySqlConnector::new(config.connection.clone());
    let waiter = ReadinessWaiter::new(config.timeout(), config.interval())
        .fail_fast(config.fail_fast);

    let start = Instant::now();
    let outcome = waiter.wait_until_ready(&connector).await;
    let report = WaitReport::new(outcome, start.elapsed());
    let summary = serde_json::to_string(&report)?;

    match outcome {
        Outcome::Ready => info!(report = %summary, "database is ready"),
        Outcome::TimedOut => warn!(report = %summary, "gave up waiting for database"),
        Outcome::Aborted => warn!(report = %summary, "stopped on non-transient error"),
    }

    Ok(ExitCode::from(outcome.exit_code(config.strict_exit)))
}
