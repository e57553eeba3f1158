use crate::error::Result;
use photo_annotator_common::AnnotationResult;
use std::io::Write;
use std::path::Path;

pub fn to_json(results: &[AnnotationResult]) -> Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}

pub fn generate_json(results: &[AnnotationResult], output_path: &Path) -> Result<()> {
    std::fs::write(output_path, to_json(results)?)?;
    Ok(())
}

pub fn write_json<W: Write>(results: &[AnnotationResult], mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, results)?;
    writeln!(writer)?;
    Ok(())
}
