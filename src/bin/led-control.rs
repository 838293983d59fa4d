use anyhow::Result;
use clap::parser::ValueSource;
use clap::{ArgAction, ArgGroup, ArgMatches, CommandFactory, FromArgMatches, Parser};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::StatefulOutputPin;
use log::debug;
use simple_logger::SimpleLogger;

use ledstrip_scenes::{PixelStrip, Scene, SceneLibrary, StdDelay, StripConfig};

/// Drive the LED strip and sun relay through a lighting scene
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(group(ArgGroup::new("scene").required(true).multiple(true)))]
struct Args {
    /// Sun off, strip full white
    #[arg(long, group = "scene")]
    dawn: bool,
    /// Fade from white through the day-light colors
    #[arg(long, group = "scene")]
    sunset: bool,
    /// Snap to day-light, fade to dim magenta, then off
    #[arg(long, group = "scene")]
    nightfall: bool,
    /// Sun off, strip fully off
    #[arg(long, group = "scene")]
    off: bool,
    /// Set every pixel to an explicit color
    #[arg(long, group = "scene", num_args = 4, value_names = ["R", "B", "G", "BRIGHTNESS"])]
    color: Option<Vec<u8>>,

    /// Number of LED pixels
    #[arg(long, default_value_t = StripConfig::DEFAULT.led_count)]
    led_count: u16,
    /// GPIO pin connected to the pixels
    #[arg(long, default_value_t = StripConfig::DEFAULT.led_pin)]
    led_pin: u8,
    /// GPIO pin driving the sun relay
    #[arg(long, default_value_t = StripConfig::DEFAULT.sun_pin)]
    sun_pin: u8,
    /// Driver-level brightness
    #[arg(long, default_value_t = StripConfig::DEFAULT.brightness)]
    brightness: u8,
    /// DMA channel used for the LED signal
    #[arg(long, default_value_t = StripConfig::DEFAULT.dma_channel)]
    dma: u8,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    /// Only log warnings and errors
    #[arg(short, long, default_value_t = false)]
    quiet: bool,
}

impl Args {
    fn config(&self) -> StripConfig {
        StripConfig {
            led_count: self.led_count,
            led_pin: self.led_pin,
            sun_pin: self.sun_pin,
            brightness: self.brightness,
            dma_channel: self.dma,
            ..StripConfig::DEFAULT
        }
    }

    /// Requested scenes in command-line order.
    fn scenes(&self, matches: &ArgMatches) -> Vec<Scene> {
        let mut requested = Vec::new();
        let mut request = |id: &str, scene: Scene| {
            if matches.value_source(id) == Some(ValueSource::CommandLine) {
                requested.push((matches.index_of(id).unwrap_or(usize::MAX), scene));
            }
        };

        if self.dawn {
            request("dawn", Scene::Dawn);
        }
        if self.sunset {
            request("sunset", Scene::Sunset);
        }
        if self.nightfall {
            request("nightfall", Scene::Nightfall);
        }
        if self.off {
            request("off", Scene::Night);
        }
        if let Some(&[red, blue, green, brightness]) = self.color.as_deref() {
            request(
                "color",
                Scene::Color {
                    red,
                    blue,
                    green,
                    brightness,
                },
            );
        }

        requested.sort_by_key(|(index, _)| *index);
        requested.into_iter().map(|(_, scene)| scene).collect()
    }
}

fn main() -> Result<()> {
    let matches = Args::command().get_matches();
    let args = Args::from_arg_matches(&matches).unwrap_or_else(|err| err.exit());

    let log_level = if args.quiet {
        log::LevelFilter::Warn
    } else {
        match args.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    };
    SimpleLogger::new()
        .with_level(log_level)
        .with_utc_timestamps()
        .init()?;

    let config = args.config();
    debug!("{config:?}");
    run(&config, &args.scenes(&matches))
}

fn play_all<S, P, D>(library: &mut SceneLibrary<S, P, D>, scenes: &[Scene]) -> Result<()>
where
    S: PixelStrip,
    P: StatefulOutputPin,
    D: DelayNs,
{
    for &scene in scenes {
        library.play(scene)?;
    }
    Ok(())
}

#[cfg(feature = "rpi")]
fn run(config: &StripConfig, scenes: &[Scene]) -> Result<()> {
    use anyhow::{Context, anyhow};
    use ledstrip_scenes::hardware::rpi;

    let strip = rpi::Ws281xStrip::new(config)
        .map_err(|err| anyhow!("failed to initialise LED strip: {err:?}"))?;
    let sun = rpi::sun_pin(config).context("failed to claim sun relay pin")?;

    let mut library = SceneLibrary::new(strip, sun, StdDelay)?;
    play_all(&mut library, scenes)
}

#[cfg(not(feature = "rpi"))]
fn run(config: &StripConfig, scenes: &[Scene]) -> Result<()> {
    use ledstrip_scenes::hardware::sim::{MemoryPin, MemoryStrip};
    use log::info;

    info!("built without the `rpi` feature, rendering to memory");
    let strip = MemoryStrip::from_config(config);
    let mut library = SceneLibrary::new(strip, MemoryPin::default(), StdDelay)?;
    play_all(&mut library, scenes)?;

    let frame: Vec<String> = library
        .strip()
        .pixels()
        .iter()
        .map(ToString::to_string)
        .collect();
    info!(
        "final frame after {} flushes: {}",
        library.strip().show_count(),
        frame.join(" ")
    );
    Ok(())
}
