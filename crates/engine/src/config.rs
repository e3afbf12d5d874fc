use crate::options::TraversalOrder;
use derive_builder::Builder;
use std::path::PathBuf;

/// Everything a single scan needs, built from the command line.
#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct Config {
    /// File name pattern source; compiled afresh for every root.
    pub pattern: String,
    #[builder(default)]
    pub roots: Vec<PathBuf>,
    #[builder(default)]
    pub order: TraversalOrder,
}

impl ConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        match &self.roots {
            Some(roots) if !roots.is_empty() => Ok(()),
            _ => Err("at least one directory is required".to_owned()),
        }
    }
}
