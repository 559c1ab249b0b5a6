//! Output writers: the console text layout and pretty JSON documents,
//! plus a helper that sends either to a file or stdout.
pub mod json;
pub mod text;

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::error::Result;

/// Write `content` to `output`, or to stdout when no path is given.
pub fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, content)?;
            info!("Wrote output to {:?}", path);
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(content.as_bytes())?;
            handle.flush()?;
        }
    }
    Ok(())
}
