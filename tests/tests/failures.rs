use chipload::prelude::*;
use std::time::Duration;

#[tokio::test]
async fn server_errors_are_absorbed() -> anyhow::Result<()> {
    let recorder = chip_tests::mock_target().await?;
    recorder.set_status(503);

    let stats = chip_scenario::system()
        .vus(2)
        .duration(Duration::from_millis(300))
        .await;

    assert!(stats.iterations > 0);
    assert_eq!(stats.success, 0);
    assert_eq!(stats.error, stats.iterations);
    assert_eq!(recorder.count() as u64, stats.requests());

    // The action hands the failure back to its caller instead of panicking.
    assert!(chip_scenario::get_system().await.is_err());
    Ok(())
}
