//! Label templates.
//!
//! A template is a PostScript document containing placeholders such as
//! `<TITLE>` or `<FIRSTNAME>`. It is parsed once into a sequence of literal
//! text and placeholder segments, and can then be rendered any number of
//! times against a [`LabelView`].
//!
//! Only tokens of the form `<UPPERCASE>` are treated as placeholders, so
//! PostScript dictionaries (`<< >>`) and hex strings (`<48656c6c6f>`) pass
//! through as literal text. An uppercase token that is not part of the
//! placeholder vocabulary is rejected at parse time.
//!
//! # Examples
//!
//! ```rust
//! use jiff::Zoned;
//! use labelstation_core::{models::{LabelRecord, LabelView}, template::LabelTemplate};
//!
//! let template = LabelTemplate::parse("(<TITLE>) show (<CODE>) show\n").unwrap();
//! let view = LabelView::for_copy(&LabelRecord::new("a123", "visitor"), 1, &Zoned::now());
//! assert_eq!(template.render_to_string(&view), "(Visitor) show (A123) show\n");
//! ```

use std::{fmt, fs, io, path::Path};

use crate::{
    error::{LabelError, Result},
    models::LabelView,
};

/// A named slot in a label template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Title,
    Code,
    Date,
    FirstName,
    LastName,
    Notes,
    Photography,
    Allergies,
}

impl Placeholder {
    /// Every placeholder the template language understands.
    pub const ALL: [Placeholder; 8] = [
        Placeholder::Title,
        Placeholder::Code,
        Placeholder::Date,
        Placeholder::FirstName,
        Placeholder::LastName,
        Placeholder::Notes,
        Placeholder::Photography,
        Placeholder::Allergies,
    ];

    /// The name written between angle brackets in a template.
    pub fn name(self) -> &'static str {
        match self {
            Placeholder::Title => "TITLE",
            Placeholder::Code => "CODE",
            Placeholder::Date => "DATE",
            Placeholder::FirstName => "FIRSTNAME",
            Placeholder::LastName => "LASTNAME",
            Placeholder::Notes => "NOTES",
            Placeholder::Photography => "PHOTOGRAPHY",
            Placeholder::Allergies => "ALLERGIES",
        }
    }

    /// Looks up a placeholder by name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// The value substituted for this placeholder.
    pub fn value(self, view: &LabelView) -> &str {
        match self {
            Placeholder::Title => &view.title,
            Placeholder::Code => &view.code,
            Placeholder::Date => &view.date,
            Placeholder::FirstName => &view.first_name,
            Placeholder::LastName => &view.last_name,
            Placeholder::Notes => &view.notes,
            Placeholder::Photography => &view.photography,
            Placeholder::Allergies => &view.allergies,
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Slot(Placeholder),
}

/// A parsed, immutable label template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelTemplate {
    segments: Vec<Segment>,
}

impl LabelTemplate {
    /// Reads and parses the template at `path`.
    ///
    /// # Errors
    ///
    /// Returns `LabelError::Configuration` if the file cannot be read or the
    /// template does not parse.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| {
            LabelError::configuration(format!(
                "Failed to read label template '{}': {e}",
                path.display()
            ))
        })?;
        Self::parse(&source).map_err(|e| match e {
            LabelError::Configuration { message } => LabelError::configuration(format!(
                "Invalid label template '{}': {message}",
                path.display()
            )),
            other => other,
        })
    }

    /// Parses template source text.
    ///
    /// # Errors
    ///
    /// Returns `LabelError::Configuration` when the source contains an
    /// unknown `<UPPERCASE>` placeholder.
    pub fn parse(source: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = source;

        while let Some(start) = rest.find('<') {
            literal.push_str(&rest[..start]);
            let candidate = &rest[start + 1..];

            match placeholder_token(candidate) {
                Some(name) => {
                    let placeholder = Placeholder::from_name(name).ok_or_else(|| {
                        let offset = source.len() - rest.len() + start;
                        let line = source[..offset].matches('\n').count() + 1;
                        LabelError::configuration(format!(
                            "unknown placeholder <{name}> on line {line}"
                        ))
                    })?;
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Slot(placeholder));
                    rest = &candidate[name.len() + 1..];
                }
                None => {
                    literal.push('<');
                    rest = candidate;
                }
            }
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }
        Ok(Self { segments })
    }

    /// Placeholders used by this template, in order of appearance.
    pub fn placeholders(&self) -> impl Iterator<Item = Placeholder> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Slot(placeholder) => Some(*placeholder),
            Segment::Literal(_) => None,
        })
    }

    /// Writes the template to `out`, substituting values from `view`.
    ///
    /// Substituted values are escaped for use inside PostScript string
    /// literals.
    pub fn render<W: io::Write>(&self, view: &LabelView, out: &mut W) -> io::Result<()> {
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.write_all(text.as_bytes())?,
                Segment::Slot(placeholder) => {
                    out.write_all(escape_postscript(placeholder.value(view)).as_bytes())?
                }
            }
        }
        Ok(())
    }

    /// Renders the template into a string.
    pub fn render_to_string(&self, view: &LabelView) -> String {
        let mut out = Vec::new();
        self.render(view, &mut out).expect("writing to a Vec cannot fail");
        String::from_utf8_lossy(&out).into_owned()
    }
}

/// Returns the name of a `<NAME>` token at the start of `text` (just past
/// the `<`), if it looks like a placeholder.
fn placeholder_token(text: &str) -> Option<&str> {
    let end = text.find('>')?;
    let name = &text[..end];
    let is_placeholder = !name.is_empty()
        && name.starts_with(|c: char| c.is_ascii_uppercase())
        && name.chars().all(|c| c.is_ascii_uppercase() || c == '_')
        && name.chars().any(|c| !c.is_ascii_hexdigit());
    is_placeholder.then_some(name)
}

/// Escapes characters that would end or corrupt a PostScript string literal.
pub fn escape_postscript(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '\\' | '(' | ')') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
