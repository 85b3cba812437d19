//! Unit tests for the report scheduler

use std::sync::Arc;
use std::time::Duration;

use marketbrief::config::Config;
use marketbrief::core::runtime::ReportRuntime;
use marketbrief::core::scheduler::ReportScheduler;
use marketbrief::error::RuntimeError;
use marketbrief::services::market_data::InMemoryMarketDataProvider;

fn runtime() -> Arc<ReportRuntime> {
    Arc::new(ReportRuntime::new(
        &Config::default(),
        Arc::new(InMemoryMarketDataProvider::new()),
    ))
}

#[test]
fn test_invalid_cron_is_rejected() {
    let err = ReportScheduler::new(runtime(), "every weekday at close").err().unwrap();
    assert!(matches!(err, RuntimeError::Schedule { ref expr, .. } if expr == "every weekday at close"));
}

#[test]
fn test_default_schedule_has_upcoming_run() {
    let scheduler = ReportScheduler::new(runtime(), &Config::default().schedule).unwrap();
    let next = scheduler.next_run().unwrap();
    assert!(next > chrono::Utc::now());
}

#[tokio::test]
async fn test_start_and_stop() {
    let scheduler = ReportScheduler::new(runtime(), &Config::default().schedule).unwrap();
    assert!(!scheduler.is_running().await);

    scheduler.start().await;
    assert!(scheduler.is_running().await);

    scheduler.stop().await;
    assert!(!scheduler.is_running().await);
}

#[tokio::test]
async fn test_second_start_does_not_leave_extra_loop() {
    let runtime = runtime();
    let scheduler = ReportScheduler::new(runtime.clone(), &Config::default().schedule).unwrap();

    scheduler.start().await;
    scheduler.start().await;
    scheduler.stop().await;
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert!(!scheduler.is_running().await);
    // this test and the scheduler hold the only references
    assert_eq!(Arc::strong_count(&runtime), 2);
}
