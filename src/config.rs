// src/config.rs
use crate::args::Args;
use crate::error::AppError;
use crate::options::{self, OutputFormat};
pub use charstat_engine::config::{Config, ConfigBuilder};
use charstat_engine::options as engine_options;

/// Engine configuration plus the presentation settings only the CLI needs.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub engine: Config,
    pub format: OutputFormat,
}

impl TryFrom<Args> for CliConfig {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let order: engine_options::TraversalOrder = args.order.into();
        let engine = ConfigBuilder::default()
            .pattern(args.pattern)
            .roots(args.dirs)
            .order(order)
            .build()
            .map_err(|e| AppError::Config(e.to_string()))?;

        Ok(Self {
            engine,
            format: args.format,
        })
    }
}

// From trait implementations for CLI -> Engine enum conversion

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(
    options::TraversalOrder,
    engine_options::TraversalOrder,
    DepthFirst,
    BreadthFirst
);
