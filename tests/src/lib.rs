//! Shared setup for the end-to-end tests.
use chip_scenario::RequestTemplate;
use mock_service::Recorder;
use std::sync::OnceLock;
use tracing::error;
use tracing_subscriber::FmtSubscriber;

/// Install logging once per test binary.
pub fn init_logging() {
    static ONCE_LOCK: OnceLock<()> = OnceLock::new();

    ONCE_LOCK.get_or_init(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            default_panic(info);
            error!("Panic occurred: {info:?}");
        }));

        let _ = FmtSubscriber::builder()
            .with_env_filter("chipload=debug,chip_scenario=debug,mock_service=debug")
            .with_test_writer()
            .try_init();
    });
}

/// Start a mock ingress and point the scenario at it.
///
/// The scenario target is process-wide, so call this at most once per test binary.
pub async fn mock_target() -> anyhow::Result<Recorder> {
    init_logging();

    let (addr, recorder) = mock_service::spawn().await?;
    let template = RequestTemplate::system().with_base_url(&format!("http://{addr}"))?;
    chip_scenario::configure(template)?;

    Ok(recorder)
}
