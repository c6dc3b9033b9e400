//! Exchange driver: builds a bound pair of queues and alternately exchanges values
//! on either side, logging what comes back out.
//!
//! # Usage
//!
//! ```sh
//! RUST_LOG=debug fuseq-exchange --capacity 10 --first 2,3,4 --second 6,8,9
//! ```

use std::time::Duration;

use clap::Parser;
use fuseq::{Exchange, Pair, Side};

#[derive(Parser)]
#[command(name = "fuseq-exchange")]
#[command(about = "Exchange values through two queues fused at their windows")]
struct Cli {
    /// Capacity of both queues
    #[arg(long, default_value_t = 10)]
    capacity: usize,

    /// Window positions of the first queue
    #[arg(long, value_delimiter = ',', default_values_t = [2, 3, 4])]
    first: Vec<usize>,

    /// Window positions of the second queue
    #[arg(long, value_delimiter = ',', default_values_t = [6, 8, 9])]
    second: Vec<usize>,

    /// Value both queues are filled with
    #[arg(long, default_value_t = 0)]
    initial: i64,

    /// Number of exchanges
    #[arg(long, default_value_t = 59)]
    rounds: u32,

    /// Pause between exchanges in milliseconds
    #[arg(long, default_value_t = 500)]
    interval_ms: u64,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Cli::parse()) {
        log::error!("fuseq-exchange: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), fuseq::Error> {
    let mut pair = Pair::new(cli.capacity, cli.initial, cli.first, cli.second)?;
    let interval = Duration::from_millis(cli.interval_ms);

    for round in 1..=cli.rounds {
        // even rounds feed 1 into the first queue, odd rounds 2 into the second
        let (side, value) = if round % 2 == 0 {
            (Side::First, 1)
        } else {
            (Side::Second, 2)
        };

        match pair.exchange(side, value) {
            Exchange::Replaced(old) => log::info!("{side}: {value} in, {old} out"),
            Exchange::Inserted => log::info!("{side}: {value} in, nothing out"),
            Exchange::Returned(back) => log::info!("{side}: {value} refused, {back} popped back"),
            Exchange::Rejected => log::warn!("{side}: {value} refused, nothing popped back"),
        }

        if !interval.is_zero() {
            std::thread::sleep(interval);
        }
    }

    Ok(())
}
