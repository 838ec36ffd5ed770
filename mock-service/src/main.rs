use clap::Parser;
use mock_service::Recorder;
use std::net::SocketAddr;
use tracing_subscriber::FmtSubscriber;

/// Mock `/system` endpoint that records every request it receives.
#[derive(Parser, Debug)]
#[command(name = "mock-service", about, long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(default_value = "0.0.0.0:3002")]
    addr: SocketAddr,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_env_filter("mock_service=debug,tower_http=debug")
        .init();

    let args = Args::parse();

    tracing::info!("Mock service listening on {}", args.addr);
    mock_service::run(args.addr, Recorder::default()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_addr() {
        let args = Args::try_parse_from(["mock-service"]).unwrap();
        assert_eq!(args.addr, "0.0.0.0:3002".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_addr_argument() {
        let args = Args::try_parse_from(["mock-service", "127.0.0.1:4000"]).unwrap();
        assert_eq!(args.addr.port(), 4000);

        assert!(Args::try_parse_from(["mock-service", "not-an-addr"]).is_err());
    }
}
