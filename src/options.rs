use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `'A' 66.7 2` 形式の行
    #[default]
    Plain,
    Csv,
    Tsv,
    Json,
}

/// ディレクトリの走査順
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum TraversalOrder {
    #[default]
    #[value(name = "depth")]
    DepthFirst,
    #[value(name = "breadth")]
    BreadthFirst,
}
