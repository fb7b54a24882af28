//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use crate::{host::FormEvent, models::FormSummary};

/// Newtype wrapper for displaying a list of stored forms.
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use stepwise_core::{display::FormSummaries, models::FormSummary};
///
/// let summary = FormSummary {
///     id: 1,
///     name: "Signup".to_string(),
///     completed_steps: 1,
///     total_steps: 3,
///     active_step: 1,
///     submitted: false,
///     created_at: Timestamp::now(),
///     updated_at: Timestamp::now(),
/// };
/// let summaries = FormSummaries(vec![summary]);
/// assert!(summaries.to_string().contains("Signup"));
/// assert_eq!(FormSummaries(vec![]).to_string(), "No forms found.\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FormSummaries(pub Vec<FormSummary>);

impl FormSummaries {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Option<&FormSummary> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FormSummary> {
        self.0.iter()
    }
}

impl Index<usize> for FormSummaries {
    type Output = FormSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for FormSummaries {
    type Item = FormSummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FormSummaries {
    type Item = &'a FormSummary;
    type IntoIter = std::slice::Iter<'a, FormSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for FormSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No forms found.");
        }
        for summary in &self.0 {
            write!(f, "{summary}")?;
        }
        Ok(())
    }
}

/// The host callbacks one command triggered, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLines(pub Vec<FormEvent>);

impl EventLines {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FormEvent> {
        self.0.iter()
    }
}

impl fmt::Display for EventLines {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No changes.");
        }
        for event in &self.0 {
            writeln!(f, "- {event}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_lines_display() {
        let lines = EventLines(vec![
            FormEvent::Uncompleted(2),
            FormEvent::Uncompleted(0),
        ]);
        assert_eq!(
            lines.to_string(),
            "- uncompleted step 2\n- uncompleted step 0\n"
        );
        assert_eq!(EventLines::default().to_string(), "No changes.\n");
    }
}
