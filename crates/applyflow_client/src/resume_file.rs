use std::io;
use std::path::Path;

/// Read a resume file as text.
///
/// Content is decoded as UTF-8, lossily; there is no size or type
/// restriction. Whether it is JSON or prose is decided by the caller.
pub async fn read_resume_text(path: &Path) -> Result<String, io::Error> {
    let bytes = tokio::fs::read(path).await?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
