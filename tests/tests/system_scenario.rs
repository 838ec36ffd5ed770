use chipload::prelude::*;
use std::time::Duration;

#[tokio::test]
async fn system_scenario_against_mock() -> anyhow::Result<()> {
    let recorder = chip_tests::mock_target().await?;

    // Without a duration the scenario runs a single iteration.
    let stats = chip_scenario::system().await;
    assert_eq!(stats.vus, 1);
    assert_eq!(stats.iterations, 1);
    assert_eq!(stats.success, 1);
    assert_eq!(recorder.count(), 1);

    let stats = chip_scenario::system()
        .vus(3)
        .duration(Duration::from_millis(500))
        .await;

    assert_eq!(stats.vus, 3);
    assert_eq!(stats.error, 0);
    assert!(stats.iterations >= 3);
    assert_eq!(stats.iterations, stats.requests());
    assert_eq!(recorder.count() as u64, stats.requests() + 1);

    let requests = recorder.requests();
    let first = &requests[0];
    assert!(requests.iter().all(|request| request == first));
    assert_eq!(first.method, "GET");
    assert_eq!(first.path, "/system");
    assert_eq!(first.header("host"), Some("chip.linuxtips.demo"));
    assert_eq!(first.header("content-type"), Some("application/json"));
    Ok(())
}
