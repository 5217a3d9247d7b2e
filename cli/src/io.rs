//! Document source and result sink.

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

type IoResult<T> = Result<T, Box<dyn Error>>;

/// Read a text file, falling back to GBK when the bytes are not UTF-8.
pub fn read_text(path: &Path) -> IoResult<String> {
    let bytes =
        fs::read(path).map_err(|e| format!("Failed to read file {}: {}", path.display(), e))?;

    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            let bytes = err.into_bytes();
            let (decoded, _, had_errors) = encoding_rs::GBK.decode(&bytes);
            if had_errors {
                log::warn!(
                    "{} is neither UTF-8 nor clean GBK; invalid bytes were replaced",
                    path.display()
                );
            } else {
                log::debug!("{} decoded as GBK", path.display());
            }
            decoded.into_owned()
        }
    };

    if let Some(stripped) = text.strip_prefix('\u{FEFF}') {
        return Ok(stripped.to_string());
    }
    Ok(text)
}

/// Read a document from a text or JSON file.
///
/// JSON files must hold a string, an array of strings (joined with newlines)
/// or an object with a `content` string.
pub fn read_document(path: &Path) -> IoResult<String> {
    let text = read_text(path)?;
    if !has_extension(path, "json") {
        return Ok(text);
    }

    let value: Value = serde_json::from_str(&text)
        .map_err(|e| format!("Invalid JSON in {}: {}", path.display(), e))?;
    document_from_json(value).map_err(|e| format!("{}: {}", path.display(), e).into())
}

fn document_from_json(value: Value) -> Result<String, String> {
    match value {
        Value::String(content) => Ok(content),
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(line) => Ok(line),
                other => Err(format!("expected an array of strings, found {}", other)),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(|lines| lines.join("\n")),
        Value::Object(mut map) => match map.remove("content") {
            Some(Value::String(content)) => Ok(content),
            _ => Err("expected a \"content\" string field".to_string()),
        },
        _ => Err("expected a JSON string, array of strings or object".to_string()),
    }
}

/// Write JSON output. The target must be a `.json` file.
pub fn write_json(path: &Path, json: &str) -> IoResult<()> {
    if !has_extension(path, "json") {
        return Err(format!("{} must be saved as a .json file", path.display()).into());
    }
    write_text(path, json)
}

/// Write text output, creating parent directories as needed.
pub fn write_text(path: &Path, content: &str) -> IoResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Find every file with extension `ext` below `root`, recursively.
///
/// A `root` that is itself a file is returned as the only entry.
pub fn discover_files(root: &Path, ext: &str) -> IoResult<Vec<PathBuf>> {
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }
    if !root.is_dir() {
        return Err(format!("{} is not a file or directory", root.display()).into());
    }

    let ext = ext.trim_start_matches('.');
    let base = glob::Pattern::escape(&root.to_string_lossy());
    let pattern = format!("{}/**/*.{}", base, ext);

    let mut files = Vec::new();
    for entry in glob::glob(&pattern).map_err(|e| format!("Invalid pattern {}: {}", pattern, e))? {
        let path = entry?;
        if path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    files.dedup();
    log::debug!("found {} .{} files under {}", files.len(), ext, root.display());
    Ok(files)
}

/// Output location for `input`: its path relative to `root`, re-rooted at
/// `output_dir`, with a `.json` extension.
pub fn output_path(input: &Path, root: &Path, output_dir: &Path) -> PathBuf {
    let relative = input.strip_prefix(root).unwrap_or(input);
    let relative = if relative.as_os_str().is_empty() {
        input.file_name().map(Path::new).unwrap_or(input)
    } else {
        relative
    };
    output_dir.join(relative).with_extension("json")
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .is_some_and(|e| e.to_string_lossy().eq_ignore_ascii_case(ext))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_text_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.txt");
        fs::write(&path, "今天天气很好。").unwrap();
        assert_eq!(read_text(&path).unwrap(), "今天天气很好。");
    }

    #[test]
    fn test_read_text_gbk_fallback() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gbk.txt");
        let (bytes, _, _) = encoding_rs::GBK.encode("中文文本。");
        fs::write(&path, &bytes).unwrap();
        assert_eq!(read_text(&path).unwrap(), "中文文本。");
    }

    #[test]
    fn test_read_text_strips_bom() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bom.txt");
        fs::write(&path, "\u{FEFF}正文").unwrap();
        assert_eq!(read_text(&path).unwrap(), "正文");
    }

    #[test]
    fn test_read_text_missing_file() {
        let err = read_text(Path::new("/nonexistent/doc.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn test_read_document_json_shapes() {
        let dir = TempDir::new().unwrap();

        let string = dir.path().join("string.json");
        fs::write(&string, r#""一句话。""#).unwrap();
        assert_eq!(read_document(&string).unwrap(), "一句话。");

        let array = dir.path().join("array.json");
        fs::write(&array, r#"["第一行", "第二行"]"#).unwrap();
        assert_eq!(read_document(&array).unwrap(), "第一行\n第二行");

        let object = dir.path().join("object.json");
        fs::write(&object, r#"{"title": "t", "content": "正文。"}"#).unwrap();
        assert_eq!(read_document(&object).unwrap(), "正文。");

        let bad = dir.path().join("bad.json");
        fs::write(&bad, "42").unwrap();
        assert!(read_document(&bad).is_err());
    }

    #[test]
    fn test_write_json_requires_extension() {
        let dir = TempDir::new().unwrap();
        assert!(write_json(&dir.path().join("out.txt"), "[]").is_err());

        let nested = dir.path().join("a").join("out.json");
        write_json(&nested, "[]").unwrap();
        assert_eq!(fs::read_to_string(&nested).unwrap(), "[]");
    }

    #[test]
    fn test_discover_files_recursive() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("sub/deeper")).unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::write(dir.path().join("sub/b.txt"), "b").unwrap();
        fs::write(dir.path().join("sub/deeper/c.txt"), "c").unwrap();
        fs::write(dir.path().join("sub/skip.md"), "d").unwrap();

        let files = discover_files(dir.path(), ".txt").unwrap();
        assert_eq!(files.len(), 3);
        assert!(files.iter().all(|p| has_extension(p, "txt")));
    }

    #[test]
    fn test_discover_single_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("only.md");
        fs::write(&path, "x").unwrap();
        assert_eq!(discover_files(&path, "txt").unwrap(), vec![path]);
    }

    #[test]
    fn test_output_path_keeps_structure() {
        let out = output_path(
            Path::new("/data/in/sub/doc.txt"),
            Path::new("/data/in"),
            Path::new("/data/out"),
        );
        assert_eq!(out, PathBuf::from("/data/out/sub/doc.json"));

        let single = output_path(
            Path::new("/data/in/doc.txt"),
            Path::new("/data/in/doc.txt"),
            Path::new("/out"),
        );
        assert_eq!(single, PathBuf::from("/out/doc.json"));
    }
}
