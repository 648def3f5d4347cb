use clap::Parser;
use dotenvy::dotenv;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use voip_delay::{config::Cli, delay_breakdown, end_to_end_delay_ms};

/// Result line, spaced like the two-argument print of the reference tool.
fn summary_line(delay_ms: f64) -> String {
    format!("\nend-to-end voip delay:  {delay_ms}")
}

fn main() -> voip_delay::Result<()> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=error", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let params = cli
        .parameters()
        .inspect_err(|e| error!(%e, "Invalid parameters"))?;

    if cli.breakdown {
        let breakdown = delay_breakdown(&params)?;
        println!("conversion delay:   {} s", breakdown.conversion_s);
        println!("transmission delay: {} s", breakdown.transmission_s);
        println!("propagation delay:  {} s", breakdown.propagation_s);
    }

    let result = end_to_end_delay_ms(&params)?;
    println!("{}", summary_line(result));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use voip_delay::{PropagationSpeed, VoipParameters};

    #[test_log::test]
    fn test_summary_line() {
        let speed = PropagationSpeed::new(2.5, 8).unwrap();
        let params = VoipParameters::new(65.0, 1.8, 65.0, 712.7, speed).unwrap();
        let delay_ms = end_to_end_delay_ms(&params).unwrap();

        assert_eq!(
            summary_line(delay_ms),
            "\nend-to-end voip delay:  11.13968888888889"
        );
        assert_eq!(summary_line(11.5), "\nend-to-end voip delay:  11.5");
    }
}
