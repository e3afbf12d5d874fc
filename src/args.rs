// src/args.rs
use crate::options::{OutputFormat, TraversalOrder};
use clap::{ArgAction, Parser, ValueHint};
use std::path::PathBuf;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "charstat",
    version = crate::VERSION,
    about = "ディレクトリ配下のファイルの文字頻度を集計します"
)]
pub struct Args {
    /// ファイル名（パスではなく名前のみ）に対する正規表現
    ///
    /// `-` で始まるパターンもそのまま受け付ける（オプションは PATTERN より前に置く）
    #[arg(allow_hyphen_values = true)]
    pub pattern: String,

    /// 走査するディレクトリ（指定順に処理）
    #[arg(required = true, value_hint = ValueHint::DirPath)]
    pub dirs: Vec<PathBuf>,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "plain", help_heading = "出力")]
    pub format: OutputFormat,

    /// ディレクトリの走査順（結果には影響しません）
    #[arg(long, value_enum, default_value = "depth", help_heading = "走査")]
    pub order: TraversalOrder,

    /// ログを詳細にする（-v: info, -vv: debug, -vvv: trace）
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pattern_and_dirs() {
        let args = Args::try_parse_from(["charstat", r"\.txt$", "a", "b"]).unwrap();
        assert_eq!(args.pattern, r"\.txt$");
        assert_eq!(args.dirs, vec![PathBuf::from("a"), PathBuf::from("b")]);
        assert_eq!(args.format, OutputFormat::Plain);
        assert_eq!(args.order, TraversalOrder::DepthFirst);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn requires_at_least_one_dir() {
        assert!(Args::try_parse_from(["charstat", "x"]).is_err());
        assert!(Args::try_parse_from(["charstat"]).is_err());
    }

    #[test]
    fn parses_options() {
        let args = Args::try_parse_from([
            "charstat", "--format", "json", "--order", "breadth", "-vv", "rs", ".",
        ])
        .unwrap();
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.order, TraversalOrder::BreadthFirst);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn pattern_may_start_with_hyphen() {
        let args = Args::try_parse_from(["charstat", "-x", "d"]).unwrap();
        assert_eq!(args.pattern, "-x");
        assert_eq!(args.dirs, vec![PathBuf::from("d")]);

        let args = Args::try_parse_from(["charstat", "-v", "--", "-v", "d"]).unwrap();
        assert_eq!(args.verbose, 1);
        assert_eq!(args.pattern, "-v");
    }
}
