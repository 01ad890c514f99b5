use bubbles_core::{
    AnimationDriver, Dice, FrameStatus, ManualClock, MemorySurface, RecordingSoundBank,
    SeededDice, SpawnPolicy, Surface,
};
use clap::Parser;

mod cli;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = cli::Args::parse();
    let cli::Timing {
        frame,
        total,
        click_every,
    } = args.timing()?;

    let config = args.config();
    let surface = MemorySurface::new(config.width, config.height);
    let bank = RecordingSoundBank::new(args.sounds);
    let clock = ManualClock::new();
    let dice = SeededDice::from_seed_option(config.seed);
    // pointer presses come from their own stream so they don't perturb spawns
    let mut pointer = SeededDice::from_seed_option(config.seed.map(|s| s ^ 0x9E37_79B9_7F4A_7C15));

    let policy = config.policy;
    let mut driver = AnimationDriver::new(config, surface, bank, &clock, dice)?;

    let mut next_click = click_every;
    let mut peak_live = 0usize;

    while clock.elapsed() < total {
        clock.advance(frame);
        if policy == SpawnPolicy::Interactive {
            if let (Some(at), Some(every)) = (next_click, click_every) {
                if clock.elapsed() >= at {
                    let size = driver.surface().size();
                    let x = pointer.unit() * size.x;
                    let y = pointer.unit() * size.y;
                    driver.click(x, y);
                    next_click = Some(at + every);
                }
            }
        }
        if driver.update() == FrameStatus::Halted {
            break;
        }
        peak_live = peak_live.max(driver.scheduler().live_count());
    }
    driver.stop();

    log::info!(
        "[summary] frames={} spawned={} live={} peak_live={} hue={:.3}",
        driver.frames(),
        driver.scheduler().spawned(),
        driver.scheduler().live_count(),
        peak_live,
        driver.background().hue()
    );
    log::info!("[summary] plays per note: {:?}", driver.bank().histogram());
    log::info!(
        "[summary] shapes created={} released={}",
        driver.surface().created_count(),
        driver.surface().released_count()
    );
    Ok(())
}
