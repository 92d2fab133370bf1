use crate::error::AlmanacError;
use crate::estimate::{Chunk, EntityTagger};
use crate::tool::run_tool;
use std::io::Write;
use std::process::Command;

/// Entity tagger backed by an external command.
///
/// The text is written to a temp file whose path is appended to the command
/// line. The command must print one token per line as `token<TAB>tag`, where
/// tag is `O`, `B-<LABEL>`, `I-<LABEL>` or a bare `<LABEL>` (CoNLL style).
pub struct CommandTagger {
    program: String,
    args: Vec<String>,
}

impl CommandTagger {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        CommandTagger {
            program: program.into(),
            args,
        }
    }

    /// Build from a full command line, program first.
    pub fn from_command_line(parts: &[String]) -> Result<Self, AlmanacError> {
        let (program, args) = parts
            .split_first()
            .ok_or_else(|| AlmanacError::TaggerOutput("empty tagger command".into()))?;
        Ok(CommandTagger::new(program.clone(), args.to_vec()))
    }
}

impl EntityTagger for CommandTagger {
    fn chunk(&self, text: &str) -> Result<Vec<Chunk>, AlmanacError> {
        let mut tmpfile = tempfile::NamedTempFile::new()?;
        tmpfile.write_all(text.as_bytes())?;
        tmpfile.flush()?;

        let output = run_tool(
            Command::new(&self.program)
                .args(&self.args)
                .arg(tmpfile.path()),
        )?;
        parse_conll(&output.stdout)
    }

    fn backend_name(&self) -> &str {
        &self.program
    }
}

/// Group CoNLL-style `token<TAB>tag` lines into top-level chunks.
///
/// A `B-` tag always opens a new entity. `I-` and bare tags continue the
/// previous entity when it has the same label.
pub fn parse_conll(output: &str) -> Result<Vec<Chunk>, AlmanacError> {
    let mut chunks: Vec<Chunk> = Vec::new();

    for (i, line) in output.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let (token, tag) = line.rsplit_once('\t').ok_or_else(|| {
            AlmanacError::TaggerOutput(format!("line {}: expected token<TAB>tag: '{}'", i + 1, line))
        })?;
        let token = token.to_string();
        let tag = tag.trim();

        if tag == "O" || tag.is_empty() {
            chunks.push(Chunk::Token(token));
            continue;
        }

        let (begins, label) = match tag.split_once('-') {
            Some(("B", label)) => (true, label),
            Some(("I", label)) => (false, label),
            _ => (false, tag),
        };

        match chunks.last_mut() {
            Some(Chunk::Entity {
                label: prev,
                tokens,
            }) if !begins && prev == label => tokens.push(token),
            _ => chunks.push(Chunk::Entity {
                label: label.to_string(),
                tokens: vec![token],
            }),
        }
    }

    Ok(chunks)
}
