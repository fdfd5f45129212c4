use std::{
    sync::{
        Arc,
        atomic::{AtomicU32, Ordering},
    },
    time::Duration,
};

use tokio_util::sync::CancellationToken;
use tracing::info;

use retryd_core::{
    ExponentialBackoffStrategy, FixedDelayStrategy, RetryError, RetryStrategy, map::to_retrier,
    retry,
};
use retryd_model::RetrySpec;
use retryd_observe::{LoggerConfig, LoggerFormat, LoggerLevel, init_logger};

/// Spec equivalent of the exponential run below, with equal jitter on top.
const JITTERED_SPEC: &str = r#"{
    "label": "counting (from spec)",
    "attemptTimeoutMs": 2000,
    "jitter": "equal",
    "backoff": { "exponential": { "maxRetries": 5, "baseDelayMs": 100, "maxDelayMs": 1000 } }
}"#;

/// Fails with "temporary error" until it has been called `succeed_after` times.
#[derive(Clone)]
struct Counting {
    calls: Arc<AtomicU32>,
    succeed_after: u32,
}

impl Counting {
    fn new(succeed_after: u32) -> Self {
        Self {
            calls: Arc::new(AtomicU32::new(0)),
            succeed_after,
        }
    }

    async fn call(&self) -> Result<u32, std::io::Error> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if n < self.succeed_after {
            return Err(std::io::Error::other("temporary error"));
        }
        Ok(n)
    }

    fn reset(&self) {
        self.calls.store(0, Ordering::SeqCst);
    }
}

fn report(name: &str, out: Result<u32, RetryError<std::io::Error>>) {
    match out {
        Ok(calls) => println!("{name}: operation succeeded after {calls} calls"),
        Err(e) => println!("{name}: operation failed: {e}"),
    }
}

async fn run_with<S: RetryStrategy>(
    ctx: &CancellationToken,
    name: &str,
    op: &Counting,
    strategy: S,
) {
    op.reset();
    let out = retry(ctx, || op.call(), strategy, "counting").await;
    report(name, out);
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    // 1) logger
    let cfg = LoggerConfig {
        format: LoggerFormat::Json,
        level: LoggerLevel::new("info")?,
        buffer_size: 20,
        ..Default::default()
    };
    let logger = init_logger(&cfg)?;
    info!("logger initialized");

    // 2) ctrl-c cancels every retry loop
    let ctx = CancellationToken::new();
    let on_signal = ctx.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("interrupt received; cancelling");
            on_signal.cancel();
        }
    });

    let op = Counting::new(5);

    // 3) fixed delay
    let fixed = FixedDelayStrategy::new(5, Duration::from_millis(200));
    run_with(&ctx, "fixed delay", &op, fixed).await;

    // 4) exponential backoff
    let exponential = ExponentialBackoffStrategy::new(5, Duration::from_millis(100));
    run_with(&ctx, "exponential backoff", &op, exponential).await;

    // 5) too few retries: the raw last error comes back
    run_with(
        &ctx,
        "exhausted",
        &op,
        FixedDelayStrategy::new(2, Duration::from_millis(50)),
    )
    .await;

    // 6) declarative spec
    let spec: RetrySpec = serde_json::from_str(JITTERED_SPEC)?;
    let retrier = to_retrier(&spec)?;
    op.reset();
    let out = retrier.run(&ctx, &spec.label, || op.call()).await;
    report("from spec", out);

    logger.shutdown();
    Ok(())
}
