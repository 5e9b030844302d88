//! `folio` command-line driver.
//!
//! Runs a scripted shelf session headlessly and logs every state change:
//! scroll to the bottom, open one book, open another, then scroll back up
//! part way and finally past the top of the pinned section.

use std::io::Write;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::{Parser, Subcommand};
use folio::assets::{self, ManifestLoader};
use folio::scene::{BookState, Coordination, ShelfScene};
use folio::scroll::{PinnedScroll, ScrollBounds, ScrollDriver};
use folio::util::frame_timing::FrameClock;
use folio::{FolioError, Options};
use glam::Vec2;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Drive a scroll-pinned 3D bookshelf headlessly", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Options TOML (defaults when omitted)
    #[arg(short, long, global = true)]
    options: Option<PathBuf>,

    /// Suppress progress output (only show errors)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the scripted session
    Run {
        /// Book manifest TOML (the built-in shelf when omitted)
        #[arg(short, long)]
        manifest: Option<PathBuf>,

        /// Book opened first
        #[arg(long, default_value = "2")]
        first: usize,

        /// Book opened second, closing the first
        #[arg(long, default_value = "0")]
        second: usize,

        /// Progress scrolled back to while a book is open
        #[arg(long, default_value = "0.3")]
        reverse_to: f32,

        /// Simulated frames per second
        #[arg(long, default_value = "60")]
        fps: u32,

        /// Pace frames against the wall clock instead of a fixed step
        #[arg(long)]
        realtime: bool,
    },
    /// Print the options JSON schema
    Schema,
    /// Print the default options as TOML
    Defaults,
}

const VIEWPORT: Vec2 = Vec2::new(1600.0, 900.0);
const SCROLL_SPAN: f32 = 3000.0;

/// Frame source for the session: fixed steps or the wall clock.
enum Pacing {
    Fixed(f32),
    Realtime(FrameClock, Duration),
}

impl Pacing {
    fn next_dt(&mut self) -> f32 {
        match self {
            Self::Fixed(dt) => *dt,
            Self::Realtime(clock, frame) => {
                std::thread::sleep(*frame);
                clock.tick()
            }
        }
    }
}

struct Session {
    scene: ShelfScene<PinnedScroll>,
    pacing: Pacing,
    elapsed: f32,
    states: Vec<Option<BookState>>,
    coordination: Coordination,
}

impl Session {
    fn new(options: Options, pacing: Pacing) -> Self {
        let scroll = PinnedScroll::new(ScrollBounds::new(0.0, SCROLL_SPAN));
        Self {
            scene: ShelfScene::new(options, scroll, VIEWPORT),
            pacing,
            elapsed: 0.0,
            states: Vec::new(),
            coordination: Coordination::Idle,
        }
    }

    /// Deliver pending scroll events, advance one frame, log changes.
    fn frame(&mut self) {
        for event in self.scene.scroll_driver_mut().drain_events() {
            self.scene.handle_event(event);
        }
        let dt = self.pacing.next_dt();
        self.elapsed += dt;
        self.scene.tick(dt);
        self.log_changes();
    }

    fn log_changes(&mut self) {
        let current: Vec<Option<BookState>> = (0..self.scene.slot_count())
            .map(|i| self.scene.book(i).map(|b| b.state()))
            .collect();
        for (index, state) in current.iter().enumerate() {
            let before = self.states.get(index).copied().flatten();
            if *state != before {
                if let Some(state) = state {
                    log::info!("{:>6.2}s  book {index}: {state:?}", self.elapsed);
                }
            }
        }
        self.states = current;

        let coordination = self.scene.coordination();
        if coordination != self.coordination {
            log::info!("{:>6.2}s  shelf: {coordination:?}", self.elapsed);
            self.coordination = coordination;
        }
    }

    fn run_for(&mut self, seconds: f32) {
        let until = self.elapsed + seconds;
        while self.elapsed < until {
            self.frame();
        }
    }

    /// Scroll smoothly to `progress` over `seconds`.
    fn scroll_to(&mut self, progress: f32, seconds: f32) {
        let bounds = self.scene.scroll_driver().bounds();
        let from = self.scene.scroll_driver().offset();
        let to = bounds.offset_for(progress);
        let start = self.elapsed;
        while self.elapsed - start < seconds {
            let t = ((self.elapsed - start) / seconds).min(1.0);
            self.scene.scroll_driver_mut().scroll_to(from + (to - from) * t);
            self.frame();
        }
        self.scene.scroll_driver_mut().scroll_to(to);
        self.frame();
    }

    /// Click book `index`. Off-stage books overlap, so the click is
    /// routed by index rather than by pixel.
    fn click_book(&mut self, index: usize) {
        if self.scene.book(index).is_none() {
            log::warn!("book {index} is not loaded");
            return;
        }
        log::info!("{:>6.2}s  click on book {index}", self.elapsed);
        self.scene.click_book(index);
        self.frame();
    }
}

#[allow(clippy::needless_pass_by_value)]
fn run(
    options: Options,
    manifest: Option<PathBuf>,
    first: usize,
    second: usize,
    reverse_to: f32,
    pacing: Pacing,
) -> Result<(), FolioError> {
    let loader = match manifest {
        Some(path) => ManifestLoader::load(&path)?,
        None => ManifestLoader::builtin()?,
    };
    let ids = loader.ids();

    let mut session = Session::new(options, pacing);
    session.scene.begin_loading(ids.len());
    let results = futures::executor::block_on(assets::load_batch(&loader, &ids));
    let summary = session.scene.install_batch(results);
    log::info!("{} books ready, {} failed", summary.ready, summary.failed);

    session.scroll_to(1.0, 2.0);
    session.run_for(0.2);
    session.click_book(first);
    session.run_for(2.5);
    session.click_book(second);
    session.run_for(2.5);
    // A single jump: the recovery resumes at the first reversed progress.
    session.scroll_to(reverse_to, 0.0);
    while session.scene.is_recovering() {
        session.frame();
    }
    session.run_for(0.5);

    session.scene.scroll_driver_mut().scroll_to(-100.0);
    session.run_for(1.0);

    let open = session
        .scene
        .books()
        .filter(|b| !b.state().is_closed())
        .count();
    log::info!(
        "session finished at progress {:.2}, {open} books not closed",
        session.scene.progress()
    );
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging (suppressed if --quiet)
    if !cli.quiet {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    let options = match cli.options.as_deref().map(Options::load).transpose() {
        Ok(options) => options.unwrap_or_default(),
        Err(e) => {
            log::error!("{e}");
            process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Run {
            manifest,
            first,
            second,
            reverse_to,
            fps,
            realtime,
        } => {
            let frame = 1.0 / fps.max(1) as f32;
            let pacing = if realtime {
                Pacing::Realtime(FrameClock::default(), Duration::from_secs_f32(frame))
            } else {
                Pacing::Fixed(frame)
            };
            run(options, manifest, first, second, reverse_to, pacing)
        }
        Commands::Schema => serde_json::to_string_pretty(&Options::json_schema())
            .map_err(|e| FolioError::OptionsParse(e.to_string()))
            .and_then(|json| writeln!(std::io::stdout(), "{json}").map_err(FolioError::from)),
        Commands::Defaults => toml::to_string_pretty(&options)
            .map_err(|e| FolioError::OptionsParse(e.to_string()))
            .and_then(|text| write!(std::io::stdout(), "{text}").map_err(FolioError::from)),
    };

    if let Err(e) = result {
        log::error!("{e}");
        process::exit(1);
    }
}
