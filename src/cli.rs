use clap::{Parser, Subcommand};
use photo_annotator_common::MimePolicy;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "photo-annotator")]
#[command(about = "JPEG写真の模擬物体検出・アノテーションツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// フォルダ内のJPEGに模擬解析をかけて結果を出力
    Annotate {
        /// 写真フォルダのパス
        #[arg(required = true)]
        folder: PathBuf,

        /// 出力ファイル/ディレクトリ（省略時: JSONは標準出力、HTMLは入力フォルダ）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 出力形式 (json/html/both)
        #[arg(short, long, default_value = "json")]
        format: OutputFormat,

        /// 模擬解析の待ち時間 [ms]（省略時は設定ファイルの値）
        #[arg(long)]
        delay_ms: Option<u64>,

        /// 拡張子だけでなくJPEGシグネチャも確認する
        #[arg(long)]
        verify_signature: bool,

        /// サブフォルダも再帰的にスキャン
        #[arg(short = 'r', long)]
        recursive: bool,
    },

    /// 設定を表示/編集
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// 模擬解析の待ち時間 [ms] を設定
        #[arg(long)]
        set_delay_ms: Option<u64>,

        /// MIME判定ポリシーを設定 (trust/verify)
        #[arg(long)]
        set_mime_policy: Option<MimePolicy>,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Html,
    Both,
}

impl OutputFormat {
    pub fn wants_json(&self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Both)
    }

    pub fn wants_html(&self) -> bool {
        matches!(self, OutputFormat::Html | OutputFormat::Both)
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "html" | "report" => Ok(OutputFormat::Html),
            "both" => Ok(OutputFormat::Both),
            _ => Err(format!("Unknown format: {}. Use json, html, or both", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Both => write!(f, "both"),
        }
    }
}
