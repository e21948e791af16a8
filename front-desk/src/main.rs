use anyhow::Context;
use front_desk::{Console, ReservationManager, setup_environment};
use std::io;

fn main() -> anyhow::Result<()> {
    // 1. .env, config, logging
    let config = setup_environment();

    tracing::info!(
        hotel = %config.hotel_name,
        environment = %config.environment,
        "Front desk starting"
    );

    // 2. Menu loop on stdin/stdout
    let mut console = Console::new(
        io::stdin().lock(),
        io::stdout().lock(),
        ReservationManager::new(),
        config.hotel_name.clone(),
    );
    console.run().context("console session failed")?;

    tracing::info!(
        open_reservations = console.manager().reservation_count(),
        "Front desk stopped"
    );
    Ok(())
}
