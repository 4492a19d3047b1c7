use serde_json::json;
use std::time::Instant;

use twiglet::init::{init_logger_with_config, LoggerConfig};
use twiglet::noop_sink::NoopSink;

fn main() -> twiglet::Result<()> {
    let logger = init_logger_with_config(LoggerConfig::new("load-test").sink(NoopSink))?;
    let request_log = logger.with(json!({"trace": {"id": "126bb6fa-28a2-470f-b013-eefbf9182b2d"}}))?;

    let n: u64 = 100_000;
    let start = Instant::now();

    for i in 0..n {
        request_log.error(json!({"message": "default load test error", "iteration": i}))?;
    }

    let elapsed = start.elapsed();
    println!(
        "default config: assembled {} records in {:?} (~{:.0} rec/s)",
        n,
        elapsed,
        n as f64 / elapsed.as_secs_f64()
    );
    Ok(())
}
