use std::fmt::Display;

use crossterm::style::{Color, Stylize};

use crate::Error;

#[derive(Debug, Clone, Copy)]
pub enum DiagnosticKind {
    Error,
    Note,
    Help,
}

#[must_use]
pub fn get_color(kind: DiagnosticKind) -> Color {
    match kind {
        DiagnosticKind::Error => Color::Red,
        DiagnosticKind::Note => Color::Blue,
        DiagnosticKind::Help => Color::Yellow,
    }
}

/// A message for the user, with optional notes attached below it.
#[derive(Debug)]
pub struct Diagnostic {
    kind: DiagnosticKind,
    message: String,
    notes: Vec<(DiagnosticKind, String)>,
}

impl Diagnostic {
    #[must_use]
    pub fn new<S: ToString + ?Sized>(kind: DiagnosticKind, message: &S) -> Self {
        Self {
            kind,
            message: message.to_string(),
            notes: Vec::new(),
        }
    }

    #[must_use]
    pub fn add_note<S: ToString + ?Sized>(mut self, kind: DiagnosticKind, message: &S) -> Self {
        self.notes.push((kind, message.to_string()));
        self
    }

    /// Renders the first error as the diagnostic and attaches the rest as notes.
    #[must_use]
    pub fn from_errors(errors: &[Error]) -> Option<Self> {
        let (first, rest) = errors.split_first()?;

        Some(rest.iter().fold(Self::from(first), |diagnostic, err| {
            diagnostic.add_note(DiagnosticKind::Note, &format!("also {err}"))
        }))
    }

    #[must_use]
    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }
}

impl From<&Error> for Diagnostic {
    fn from(err: &Error) -> Self {
        let diagnostic = Diagnostic::new(DiagnosticKind::Error, err);

        match err {
            Error::Output(_) => diagnostic.add_note(
                DiagnosticKind::Help,
                "is standard output closed or redirected to a full device?",
            ),
            Error::File { path, .. } => diagnostic.add_note(
                DiagnosticKind::Note,
                &format!("check that {} is writable", path.display()),
            ),
        }
    }
}

fn label(kind: DiagnosticKind) -> &'static str {
    match kind {
        DiagnosticKind::Error => "error",
        DiagnosticKind::Note => "note",
        DiagnosticKind::Help => "help",
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{}{} {}",
            label(self.kind).with(get_color(self.kind)).bold(),
            ":".white().bold(),
            self.message.clone().white().bold()
        )?;

        for (kind, note) in &self.notes {
            writeln!(
                f,
                "{} {}{} {note}",
                "=".blue().bold(),
                label(*kind).with(get_color(*kind)).bold(),
                ":".white().bold(),
            )?;
        }

        Ok(())
    }
}
