//! Subcommand handlers

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use splitkit_engine::notify::messages;
use splitkit_engine::{Mode, NotificationSink, SCRIPT_FILENAME, STYLE_FILENAME, Session};

/// Read a file, or stdin for `None` / `-`
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => io::read_to_string(io::stdin()).context("failed to read stdin"),
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

/// `splitkit split`
pub fn split(
    session: &mut Session,
    sink: &mut dyn NotificationSink,
    input: Option<&Path>,
    out_dir: Option<&Path>,
) -> Result<()> {
    session.switch_mode(Mode::Split);
    session.split.input = read_input(input)?;
    if !session.process_split(sink) {
        return Ok(());
    }

    let panes = &session.split;
    let outputs = [
        (session.download_filename(), panes.html_out.as_str()),
        (STYLE_FILENAME, panes.css_out.as_str()),
        (SCRIPT_FILENAME, panes.js_out.as_str()),
    ];

    match out_dir {
        Some(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
            for (name, content) in outputs {
                if !content.is_empty() {
                    write_file(&dir.join(name), content)?;
                }
            }
        }
        None => {
            let mut stdout = io::stdout().lock();
            for (name, content) in outputs {
                if !content.is_empty() {
                    writeln!(stdout, "==> {name} <==\n{content}\n")?;
                }
            }
        }
    }
    Ok(())
}

/// Where `splitkit combine -o PATH` writes: PATH itself, or the download
/// filename inside it when PATH is a directory
fn combine_target(output: &Path, filename: &str) -> PathBuf {
    if output.is_dir() {
        output.join(filename)
    } else {
        output.to_path_buf()
    }
}

/// `splitkit combine`
pub fn combine(
    session: &mut Session,
    sink: &mut dyn NotificationSink,
    html: &Path,
    css: Option<&Path>,
    js: Option<&Path>,
    output: Option<&Path>,
) -> Result<()> {
    session.switch_mode(Mode::Combine);
    session.combine.html_in = read_input(Some(html))?;
    session.combine.css_in = css.map(|p| read_input(Some(p))).transpose()?.unwrap_or_default();
    session.combine.js_in = js.map(|p| read_input(Some(p))).transpose()?.unwrap_or_default();

    if !session.process_combine(sink) {
        return Ok(());
    }
    let Some(download) = session.combined_download() else {
        return Ok(());
    };

    match output {
        Some(output) => {
            let target = combine_target(output, download.filename);
            write_file(&target, download.content)?;
            let name = target.file_name().map_or_else(
                || target.display().to_string(),
                |n| n.to_string_lossy().into_owned(),
            );
            messages::saved(&name).send(sink);
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", download.content)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use splitkit_engine::Notification;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("splitkit-{}-{name}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_split_writes_non_empty_outputs() {
        let dir = scratch_dir("split");
        let input = dir.join("page.html");
        fs::write(&input, "<head><style>a{}</style></head><body><p>x</p></body>").unwrap();
        let out = dir.join("dist");

        let mut session = Session::default();
        let mut sink: Vec<Notification> = Vec::new();
        split(&mut session, &mut sink, Some(&input), Some(&out)).unwrap();

        assert_eq!(fs::read_to_string(out.join("style.css")).unwrap(), "a{}");
        assert!(fs::read_to_string(out.join("index.html")).unwrap().contains("href=\"style.css\""));
        assert!(!out.join("script.js").exists());
        assert_eq!(sink, vec![messages::split_done()]);
    }

    #[test]
    fn test_combine_into_directory_uses_download_name() {
        let dir = scratch_dir("combine");
        let html = dir.join("in.html");
        let css = dir.join("in.css");
        fs::write(&html, "<p>x</p>").unwrap();
        fs::write(&css, "p{}").unwrap();

        let mut session = Session::default();
        let mut sink: Vec<Notification> = Vec::new();
        combine(&mut session, &mut sink, &html, Some(&css), None, Some(&dir)).unwrap();

        let written = fs::read_to_string(dir.join("index.html")).unwrap();
        assert!(written.starts_with("<!DOCTYPE html>\n"));
        assert!(written.contains("<style>\np{}\n</style>"));
        assert_eq!(sink, vec![messages::combine_done(), messages::saved("index.html")]);
    }

    #[test]
    fn test_combine_blank_html_writes_nothing() {
        let dir = scratch_dir("blank");
        let html = dir.join("in.html");
        fs::write(&html, "  ").unwrap();
        let target = dir.join("out.html");

        let mut session = Session::default();
        let mut sink: Vec<Notification> = Vec::new();
        combine(&mut session, &mut sink, &html, None, None, Some(&target)).unwrap();

        assert!(!target.exists());
        assert_eq!(sink, vec![messages::combine_html_missing()]);
    }

    #[test]
    fn test_missing_input_file_is_an_error() {
        let mut session = Session::default();
        let mut sink: Vec<Notification> = Vec::new();
        let missing = Path::new("/nonexistent/page.html");
        let result = split(&mut session, &mut sink, Some(missing), None);
        assert!(result.is_err());
        assert!(sink.is_empty());
    }
}
