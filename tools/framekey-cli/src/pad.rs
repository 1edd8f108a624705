//! Pad command - show live gamepad input as logical buttons

use anyhow::{Context, Result};
use clap::Args;
use std::time::{Duration, Instant};

use framekey_core::config;
use framekey_core::{ButtonCode, GamepadPoller, Input, PlatformState};

const FRAME: Duration = Duration::from_micros(16_667);

/// Arguments for the pad command
#[derive(Args)]
pub struct PadArgs {
    /// How long to watch, in seconds
    #[arg(short, long, default_value = "10")]
    pub seconds: u64,
}

/// Execute the pad command
pub fn execute(args: PadArgs) -> Result<()> {
    let config = config::load().context("Failed to load input configuration")?;
    let mut input = Input::new(&config);
    let mut platform = PlatformState::new();
    let mut poller = GamepadPoller::new();

    if !poller.is_connected() {
        println!("No gamepad connected yet; waiting for one...");
    }

    let deadline = Instant::now() + Duration::from_secs(args.seconds);
    let mut last = String::new();
    while Instant::now() < deadline {
        let started = Instant::now();

        poller.poll(&mut platform.joystick);
        input.update(&platform);

        let held: Vec<_> = ButtonCode::ALL
            .into_iter()
            .filter(|&b| input.state(b).pressed)
            .map(|b| b.name())
            .collect();
        let line = format!("dir8={} [{}]", input.dir8_value(), held.join(" "));
        if line != last {
            println!("{}", line);
            last = line;
        }

        if let Some(rest) = FRAME.checked_sub(started.elapsed()) {
            std::thread::sleep(rest);
        }
    }
    Ok(())
}
