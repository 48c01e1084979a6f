//! Sample files

use std::path::Path;

use anyhow::{Context, bail};

/// Read numbers separated by whitespace, commas or semicolons. Blank lines
/// and lines starting with `#` are skipped.
pub fn read_sample(path: &Path) -> anyhow::Result<Vec<f64>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading sample {}", path.display()))?;
    parse_sample(&text).with_context(|| format!("parsing sample {}", path.display()))
}

pub fn parse_sample(text: &str) -> anyhow::Result<Vec<f64>> {
    let mut values = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        for token in line
            .split(|c: char| c.is_whitespace() || c == ',' || c == ';')
            .filter(|t| !t.is_empty())
        {
            let v: f64 = token
                .parse()
                .with_context(|| format!("line {}: {token:?} is not a number", lineno + 1))?;
            values.push(v);
        }
    }
    if values.is_empty() {
        bail!("no observations found");
    }
    Ok(values)
}
