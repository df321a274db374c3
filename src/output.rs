use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

pub fn write_text(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    fs::write(path, text.as_bytes()).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

pub fn to_json_text<T: serde::Serialize>(value: &T) -> Result<String> {
    let mut text = serde_json::to_string_pretty(value).context("serialize JSON output")?;
    text.push('\n');
    Ok(text)
}

/// Write `value` as pretty JSON to `path`, or to stdout when no path is given.
pub fn emit_json<T: serde::Serialize>(value: &T, path: Option<&Path>) -> Result<()> {
    let text = to_json_text(value)?;
    match path {
        Some(path) => write_text(path, &text),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .context("write JSON to stdout")?;
            Ok(())
        }
    }
}
