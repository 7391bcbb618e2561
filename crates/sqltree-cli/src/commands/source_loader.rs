use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Where the SQL text came from, used as the path in rendered diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    Inline,
    Stdin,
    File(PathBuf),
}

impl Origin {
    pub fn label(&self) -> String {
        match self {
            Origin::Inline => "<inline>".to_string(),
            Origin::Stdin => "<stdin>".to_string(),
            Origin::File(path) => path.display().to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot use both -s/--source and positional FILE")]
    Ambiguous,

    #[error("SQL input is required: use positional FILE, `-` for stdin, or -s/--source")]
    Missing,

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{}': {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug)]
pub struct LoadedSource {
    pub origin: Origin,
    pub text: String,
}

pub fn load_source(
    source_path: Option<&Path>,
    source_text: Option<&str>,
) -> Result<LoadedSource, LoadError> {
    match (source_text, source_path) {
        (Some(_), Some(_)) => Err(LoadError::Ambiguous),
        (Some(text), None) => Ok(LoadedSource {
            origin: Origin::Inline,
            text: text.to_string(),
        }),
        (None, Some(path)) if path.as_os_str() == "-" => load_stdin(),
        (None, Some(path)) => load_file(path),
        (None, None) => Err(LoadError::Missing),
    }
}

/// Loads the input or exits with status 2.
pub fn load_source_or_exit(source_path: Option<&Path>, source_text: Option<&str>) -> LoadedSource {
    load_source(source_path, source_text).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(2);
    })
}

fn load_stdin() -> Result<LoadedSource, LoadError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(LoadError::Stdin)?;
    Ok(LoadedSource {
        origin: Origin::Stdin,
        text: buf,
    })
}

fn load_file(path: &Path) -> Result<LoadedSource, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::File {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(LoadedSource {
        origin: Origin::File(path.to_path_buf()),
        text,
    })
}
