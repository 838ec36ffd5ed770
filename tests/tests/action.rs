#[tokio::test]
async fn single_invocation_sends_one_request() -> anyhow::Result<()> {
    let recorder = chip_tests::mock_target().await?;

    let status = chip_scenario::get_system().await?;
    assert_eq!(status.as_u16(), 200);

    let requests = recorder.requests();
    assert_eq!(requests.len(), 1);

    let request = &requests[0];
    assert_eq!(request.method, "GET");
    assert_eq!(request.path, "/system");
    assert_eq!(request.header("Host"), Some("chip.linuxtips.demo"));
    assert_eq!(request.header("Content-Type"), Some("application/json"));
    Ok(())
}
