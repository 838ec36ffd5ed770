use chip_scenario::RequestTemplate;
use chipload::prelude::*;
use std::num::NonZeroU32;
use std::time::Duration;

#[tokio::test]
async fn connection_errors_are_absorbed() -> anyhow::Result<()> {
    chip_tests::init_logging();

    // Grab a free port and release it so nothing is listening there.
    let addr = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await?
        .local_addr()?;
    let template = RequestTemplate::system().with_base_url(&format!("http://{addr}"))?;
    chip_scenario::configure(template)?;

    let stats = chip_scenario::system()
        .vus(1)
        .tps(NonZeroU32::new(50).unwrap())
        .duration(Duration::from_millis(200))
        .await;

    assert!(stats.error > 0);
    assert_eq!(stats.success, 0);
    assert_eq!(stats.iterations, stats.error);
    Ok(())
}
