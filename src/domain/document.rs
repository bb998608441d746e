//! Ordered section/key tables plus the line-oriented reader and writer.
//!
//! File format:
//!
//! ```text
//! ; comment
//! [General]
//! debug
//! level=1,2,3
//! ```
//!
//! Lines before the first header belong to the empty-named section. There is
//! no escaping: `,`, `=`, `[`, `]` and leading `;`/`/` are always syntax.

use std::fmt;
use std::io::{self, BufRead, Write};

use indexmap::IndexMap;
use tracing::warn;

use crate::domain::value::Value;

pub type KeyTable = IndexMap<String, Value>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    sections: IndexMap<String, KeyTable>,
}

fn trim_blanks(s: &str) -> &str {
    s.trim_matches(|c: char| c == ' ' || c == '\t')
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(content: &str) -> Self {
        let mut doc = Self::new();
        let mut section = String::new();
        for line in content.lines() {
            doc.apply_line(line, &mut section);
        }
        doc
    }

    /// Reads until EOF. A read error stops parsing and keeps whatever was
    /// already collected.
    pub fn read_from<R: BufRead>(mut reader: R) -> Self {
        let mut doc = Self::new();
        let mut section = String::new();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) => {
                    warn!(error = %e, "stopped reading config stream early");
                    break;
                }
            }
            if buf.last() == Some(&b'\n') {
                buf.pop();
                if buf.last() == Some(&b'\r') {
                    buf.pop();
                }
            }
            doc.apply_line(&String::from_utf8_lossy(&buf), &mut section);
        }
        doc
    }

    fn apply_line(&mut self, raw: &str, section: &mut String) {
        let line = trim_blanks(raw);

        if line.is_empty() || line.starts_with(';') || line.starts_with('/') {
            return;
        }

        if line.starts_with('[') {
            // An unterminated header runs to end of line.
            let end = line.find(']').unwrap_or(line.len());
            *section = line[..end]
                .trim_matches(|c: char| matches!(c, ' ' | '\t' | '[' | ']'))
                .to_string();
            return;
        }

        let (key, value) = match line.split_once('=') {
            Some((key, rest)) => {
                let items = trim_blanks(rest)
                    .split(',')
                    .map(|item| trim_blanks(item).to_string())
                    .collect();
                (trim_blanks(key), Value::List(items))
            }
            None => (line, Value::Presence),
        };

        self.sections
            .entry(section.clone())
            .or_default()
            .insert(key.to_string(), value);
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&Value> {
        self.sections.get(section)?.get(key)
    }

    pub fn set(&mut self, section: &str, key: &str, value: Value) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value);
    }

    pub fn contains(&self, section: &str, key: &str) -> bool {
        self.get(section, key).is_some()
    }

    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    pub fn keys(&self, section: &str) -> Vec<&str> {
        self.sections
            .get(section)
            .map(|table| table.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn render(&self) -> String {
        self.to_string()
    }

    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writer.write_all(self.render().as_bytes())?;
        writer.flush()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, table) in &self.sections {
            writeln!(f, "[{}]", name)?;
            for (key, value) in table {
                match value {
                    // Written the same way it is read back.
                    Value::Presence => writeln!(f, "{}", key)?,
                    Value::List(items) => writeln!(f, "{}={}", key, items.join(","))?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
