pub mod html;
pub mod json;

use crate::cli::OutputFormat;
use crate::error::Result;
use photo_annotator_common::AnnotationResult;
use std::path::{Path, PathBuf};

/// 出力ファイル名（拡張子なし）
pub const DEFAULT_STEM: &str = "annotations";

/// HTMLレポートの見出し
pub const REPORT_TITLE: &str = "Analysis Results";

/// 既定の出力ファイル (annotations.json / annotations.html) か
///
/// 出力先を省略すると入力フォルダに書くので、次回のスキャンではこれを除く。
pub fn is_default_output(path: &Path) -> bool {
    let stem = path.file_stem().and_then(|s| s.to_str());
    let extension = path.extension().and_then(|s| s.to_str());
    stem == Some(DEFAULT_STEM) && matches!(extension, Some("json") | Some("html"))
}

/// 出力先の親ディレクトリを作成
fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

fn output_path_for_format(output: &Path, extension: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", DEFAULT_STEM, extension))
    } else {
        output.to_path_buf()
    }
}

fn output_paths_for_both(output: &Path) -> (PathBuf, PathBuf) {
    if output.is_dir() || output.extension().is_none() {
        (
            output.join(format!("{}.json", DEFAULT_STEM)),
            output.join(format!("{}.html", DEFAULT_STEM)),
        )
    } else {
        let parent = output.parent().unwrap_or_else(|| Path::new("."));
        let stem = output
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(DEFAULT_STEM);
        (
            parent.join(format!("{}.json", stem)),
            parent.join(format!("{}.html", stem)),
        )
    }
}

/// 結果を出力し、書き出したファイルを返す
///
/// JSONのみで出力先未指定の場合は標準出力に書く。
pub fn export_results(
    results: &[AnnotationResult],
    format: OutputFormat,
    output: Option<&Path>,
    default_dir: &Path,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    match format {
        OutputFormat::Json => match output {
            Some(output) => {
                let path = output_path_for_format(output, "json");
                ensure_parent(&path)?;
                json::generate_json(results, &path)?;
                written.push(path);
            }
            None => json::write_json(results, std::io::stdout().lock())?,
        },
        OutputFormat::Html => {
            let path = output_path_for_format(output.unwrap_or(default_dir), "html");
            ensure_parent(&path)?;
            html::generate_html(results, &path, REPORT_TITLE)?;
            written.push(path);
        }
        OutputFormat::Both => {
            let (json_path, html_path) = output_paths_for_both(output.unwrap_or(default_dir));
            ensure_parent(&json_path)?;
            json::generate_json(results, &json_path)?;
            html::generate_html(results, &html_path, REPORT_TITLE)?;
            written.push(json_path);
            written.push(html_path);
        }
    }

    for path in &written {
        tracing::debug!(path = %path.display(), "written");
    }
    Ok(written)
}
