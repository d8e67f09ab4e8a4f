// crates/logging/src/lib.rs

use std::io;

use tracing::Subscriber;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, fmt as tracing_fmt,
    layer::{Layer, SubscriberExt},
};

/// Subscriber settings for the process.
///
/// Everything goes to stderr so stdout stays free for the report line. The
/// defaults show warnings and errors only; `RUST_LOG` can override the
/// filter since there is no flag surface to raise verbosity through.
#[derive(Clone, Debug)]
pub struct SubscriberConfig {
    pub verbose: u8,
    pub quiet: bool,
    pub colored: bool,
    pub timestamps: bool,
}

impl Default for SubscriberConfig {
    fn default() -> Self {
        Self {
            verbose: 0,
            quiet: false,
            colored: false,
            timestamps: false,
        }
    }
}

#[derive(Default)]
pub struct SubscriberConfigBuilder {
    cfg: SubscriberConfig,
}

impl SubscriberConfig {
    pub fn builder() -> SubscriberConfigBuilder {
        SubscriberConfigBuilder::default()
    }
}

impl SubscriberConfigBuilder {
    pub fn verbose(mut self, verbose: u8) -> Self {
        self.cfg.verbose = verbose;
        self
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.cfg.quiet = quiet;
        self
    }

    pub fn colored(mut self, colored: bool) -> Self {
        self.cfg.colored = colored;
        self
    }

    pub fn timestamps(mut self, timestamps: bool) -> Self {
        self.cfg.timestamps = timestamps;
        self
    }

    pub fn build(self) -> SubscriberConfig {
        self.cfg
    }
}

pub fn subscriber(cfg: SubscriberConfig) -> Box<dyn Subscriber + Send + Sync> {
    let level = if cfg.quiet {
        LevelFilter::ERROR
    } else if cfg.verbose > 2 {
        LevelFilter::TRACE
    } else if cfg.verbose > 1 {
        LevelFilter::DEBUG
    } else if cfg.verbose > 0 {
        LevelFilter::INFO
    } else {
        LevelFilter::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let base = tracing_fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(false);
    let base = if cfg.colored { base } else { base.with_ansi(false) };
    let fmt_layer = if cfg.timestamps {
        base.boxed()
    } else {
        base.without_time().boxed()
    };

    Box::new(tracing_subscriber::registry().with(filter).with(fmt_layer))
}

pub fn init(cfg: SubscriberConfig) -> io::Result<()> {
    tracing::subscriber::set_global_default(subscriber(cfg)).map_err(io::Error::other)
}
