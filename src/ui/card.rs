//! Cards, fields and buttons

use std::fmt;

/// Titled block of lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Card {
    title: String,
    lines: Vec<String>,
}

impl Card {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    /// Append a line
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.push(line);
        self
    }

    /// Append a labelled field
    pub fn field(self, field: Field) -> Self {
        self.line(field.to_string())
    }

    /// Append a line in place
    pub fn push(&mut self, line: impl Into<String>) {
        // Multi-line values (pretty JSON) keep their indentation under the card.
        for part in line.into().lines() {
            self.lines.push(part.to_string());
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.title)?;
        for line in &self.lines {
            writeln!(f, "  {}", line)?;
        }
        Ok(())
    }
}

/// `Label: value` line with an optional hint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    label: String,
    value: String,
    hint: Option<String>,
}

impl Field {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            hint: None,
        }
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)?;
        if let Some(hint) = &self.hint {
            write!(f, " ({})", hint)?;
        }
        Ok(())
    }
}

/// Action button with its enablement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button<'a> {
    pub label: &'a str,
    pub enabled: bool,
}

impl fmt::Display for Button<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.enabled {
            write!(f, "[{}]", self.label)
        } else {
            write!(f, "[{}] (disabled)", self.label)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_rendering() {
        let card = Card::new("Verify a batch")
            .field(Field::new("Batch ID", "VA-2025-0001").hint("Example: VA-2025-0001"))
            .line("{\n  \"a\": 1\n}");

        assert_eq!(
            card.to_string(),
            "== Verify a batch ==\n  Batch ID: VA-2025-0001 (Example: VA-2025-0001)\n  {\n    \"a\": 1\n  }\n"
        );
        assert_eq!(card.lines().len(), 4);
    }

    #[test]
    fn test_button_rendering() {
        assert_eq!(Button { label: "Verify", enabled: true }.to_string(), "[Verify]");
        assert_eq!(
            Button { label: "Publish to Chain", enabled: false }.to_string(),
            "[Publish to Chain] (disabled)"
        );
    }
}
