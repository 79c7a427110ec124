use anyhow::Context;
use chrono::Local;
use colored::Colorize;
use design_patterns::Scenario;
use std::env;
use std::path::Path;
use tracing_subscriber::FmtSubscriber;

fn main() -> anyhow::Result<()> {
    let scenario = match env::args().nth(1) {
        Some(path) => Scenario::load(Path::new(&path))
            .with_context(|| format!("loading scenario from {path}"))?,
        None => Scenario::default(),
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(scenario.level()?)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("installing tracing subscriber")?;

    println!("{}", "Decorator / Adapter / Factory demo".bold());
    println!("{}", "==================================".bold());
    for line in scenario.run(Local::now().date_naive()) {
        if line.starts_with("Delivery failed") {
            println!("{}", line.red());
        } else {
            println!("{line}");
        }
    }

    Ok(())
}
