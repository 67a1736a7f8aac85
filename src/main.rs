use minikit_tx_format::{guide::guide_lines, report::report};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    report()?;

    info!("Printing transaction guide");
    println!();
    for line in guide_lines() {
        println!("{line}");
    }

    Ok(())
}
