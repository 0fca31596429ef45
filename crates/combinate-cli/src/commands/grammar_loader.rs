use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use combinate_core::{Grammar, GrammarError};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("grammar is required: use positional argument or -g/--grammar")]
    MissingGrammar,

    #[error("source is required: use positional argument or -s/--source")]
    MissingSource,

    #[error("grammar and source cannot both be from stdin")]
    StdinTwice,

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Grammar(#[from] GrammarError),
}

/// Load a grammar from inline JSON, a file, or stdin (`-`).
pub fn load_grammar(
    grammar_path: Option<&Path>,
    grammar_text: Option<&str>,
) -> Result<Grammar, LoadError> {
    let json = match (grammar_text, grammar_path) {
        (Some(text), _) => text.to_owned(),
        (None, Some(path)) => read_input(path)?,
        (None, None) => return Err(LoadError::MissingGrammar),
    };

    Ok(Grammar::from_json(&json)?)
}

/// Load the text to parse from inline text, a file, or stdin (`-`).
pub fn load_source(
    source_path: Option<&Path>,
    source_text: Option<&str>,
    grammar_path: Option<&Path>,
) -> Result<String, LoadError> {
    if let Some(text) = source_text {
        return Ok(text.to_owned());
    }

    let Some(path) = source_path else {
        return Err(LoadError::MissingSource);
    };

    if is_stdin(path) && grammar_path.is_some_and(is_stdin) {
        return Err(LoadError::StdinTwice);
    }

    read_input(path)
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn read_input(path: &Path) -> Result<String, LoadError> {
    if is_stdin(path) {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(LoadError::Stdin)?;
        return Ok(buf);
    }

    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_owned(),
        source,
    })
}
