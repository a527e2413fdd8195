use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tinymark_core::{extract_title, parse, render};

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}: {source}", .path.display())]
    Page {
        path: PathBuf,
        #[source]
        source: tinymark_core::Error,
    },
}

pub struct SiteConfig {
    pub content: PathBuf,
    pub template: PathBuf,
    pub out: PathBuf,
    pub static_dir: Option<PathBuf>,
}

/// Builds the whole site: replaces the output tree with a copy of the static
/// tree (when one is given), then renders every `*.md` under the content
/// tree into the matching `.html` path under the output tree.
///
/// Generation halts on the first page that fails to parse or render.
pub fn build(config: &SiteConfig) -> Result<(), SiteError> {
    if let Some(static_dir) = &config.static_dir {
        if config.out.exists() {
            fs::remove_dir_all(&config.out).map_err(|err| io_error(&config.out, err))?;
        }
        copy_tree(static_dir, &config.out)?;
    }
    let template = read_to_string(&config.template)?;
    generate_pages(&config.content, &template, &config.out)
}

fn generate_pages(dir: &Path, template: &str, dest: &Path) -> Result<(), SiteError> {
    if !dest.exists() {
        fs::create_dir_all(dest).map_err(|err| io_error(dest, err))?;
    }
    for entry in fs::read_dir(dir).map_err(|err| io_error(dir, err))? {
        let entry = entry.map_err(|err| io_error(dir, err))?;
        let path = entry.path();
        if path.is_dir() {
            generate_pages(&path, template, &dest.join(entry.file_name()))?;
        } else if path.extension().and_then(|ext| ext.to_str()) == Some("md") {
            let mut out_path = dest.join(entry.file_name());
            out_path.set_extension("html");
            generate_page(&path, template, &out_path)?;
        }
    }
    Ok(())
}

fn generate_page(from: &Path, template: &str, dest: &Path) -> Result<(), SiteError> {
    let markdown = read_to_string(from)?;
    let tree = parse(&markdown).map_err(|source| page_error(from, source))?;
    let html = render(&tree).map_err(|source| page_error(from, source))?;
    let title = extract_title(&markdown).map_err(|source| page_error(from, source))?;

    let page = template
        .replace("{{ Title }}", &title)
        .replace("{{ Content }}", &html);
    fs::write(dest, page).map_err(|err| io_error(dest, err))
}

fn copy_tree(source: &Path, destination: &Path) -> Result<(), SiteError> {
    if source.is_dir() {
        fs::create_dir_all(destination).map_err(|err| io_error(destination, err))?;
        for entry in fs::read_dir(source).map_err(|err| io_error(source, err))? {
            let entry = entry.map_err(|err| io_error(source, err))?;
            copy_tree(&entry.path(), &destination.join(entry.file_name()))?;
        }
    } else {
        fs::copy(source, destination).map_err(|err| io_error(source, err))?;
    }
    Ok(())
}

fn read_to_string(path: &Path) -> Result<String, SiteError> {
    fs::read_to_string(path).map_err(|err| io_error(path, err))
}

fn io_error(path: &Path, source: io::Error) -> SiteError {
    SiteError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn page_error(path: &Path, source: tinymark_core::Error) -> SiteError {
    SiteError::Page {
        path: path.to_path_buf(),
        source,
    }
}
