//! Document I/O operations for imposition

use crate::types::*;
use lopdf::Document;
use std::path::Path;

/// Save the imposed document, replacing any existing file at `path`
pub async fn save_pdf(doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || encode_pdf(doc)).await??;
    tokio::fs::write(&path, bytes).await?;
    Ok(())
}

/// Blocking counterpart of [`save_pdf`]
pub fn write_pdf(doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let bytes = encode_pdf(doc)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

fn encode_pdf(mut doc: Document) -> Result<Vec<u8>> {
    let mut writer = Vec::new();
    doc.save_to(&mut writer)?;
    Ok(writer)
}
