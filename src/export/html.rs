//! HTMLレポート生成
//!
//! 画像を固定サイズの枠に表示し、検出枠をパーセント座標で重ねる。

use crate::error::Result;
use photo_annotator_common::AnnotationResult;
use std::path::Path;

const STYLE: &str = r#"
body { font-family: sans-serif; background: #111827; color: #f9fafb; margin: 24px; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(360px, 1fr)); gap: 24px; }
.card { background: #1f2937; border: 1px solid #374151; border-radius: 12px; overflow: hidden; }
.frame { position: relative; height: 256px; }
.frame img { width: 100%; height: 100%; object-fit: cover; display: block; }
.box { position: absolute; border: 2px solid #3b82f6; background: rgba(59, 130, 246, 0.2); display: flex; align-items: flex-end; }
.box span { background: #3b82f6; font-size: 12px; padding: 1px 4px; }
.info { padding: 16px; }
.tag { display: inline-block; background: #374151; border-radius: 6px; padding: 2px 8px; margin: 0 6px 6px 0; font-size: 14px; }
.count { color: #9ca3af; font-size: 14px; }
"#;

fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '\'' => out.push_str("&#39;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

fn render_card(result: &AnnotationResult) -> String {
    let mut html = String::new();
    html.push_str("<div class=\"card\">\n  <div class=\"frame\">\n");
    html.push_str(&format!(
        "    <img src=\"{}\" alt=\"{}\">\n",
        escape_html(result.preview_url()),
        escape_html(&result.name)
    ));
    for b in &result.boxes {
        html.push_str(&format!(
            "    <div class=\"box\" style=\"{}\"><span>{}</span></div>\n",
            b.css_position(),
            escape_html(&b.label)
        ));
    }
    html.push_str("  </div>\n  <div class=\"info\">\n");
    html.push_str(&format!("    <h4>{}</h4>\n    <div>", escape_html(&result.name)));
    for tag in &result.tags {
        html.push_str(&format!("<span class=\"tag\">{}</span>", escape_html(tag)));
    }
    html.push_str("</div>\n");
    html.push_str(&format!("    <p class=\"count\">{}</p>\n", result.detected_label()));
    html.push_str("  </div>\n</div>\n");
    html
}

pub fn render_html(results: &[AnnotationResult], title: &str) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    html.push_str(&format!("<style>{}</style>\n</head>\n<body>\n", STYLE));
    html.push_str(&format!("<h2>{}</h2>\n<div class=\"grid\">\n", escape_html(title)));
    for result in results {
        html.push_str(&render_card(result));
    }
    html.push_str("</div>\n</body>\n</html>\n");
    html
}

pub fn generate_html(results: &[AnnotationResult], output_path: &Path, title: &str) -> Result<()> {
    std::fs::write(output_path, render_html(results, title))?;
    Ok(())
}
