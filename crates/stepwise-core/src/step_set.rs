//! The ordered collection of steps behind a form.
//!
//! [`StepSet`] holds titles, subtitles and completion flags and enforces the
//! structural invariants: at least one caller-supplied step, and when
//! confirmation is enabled exactly one synthetic confirmation step at the end.
//! It never decides navigation; that belongs to
//! [`StepperController`](crate::StepperController).

use crate::{
    config::{FormConfig, DEFAULT_CONFIRMATION_TITLE},
    error::{Result, StepwiseError},
    models::Step,
};

/// Ordered, fixed-size sequence of steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSet {
    steps: Vec<Step>,
    confirmation_enabled: bool,
    subtitle_count: usize,
}

impl StepSet {
    /// Builds a step set from caller-supplied titles.
    ///
    /// # Errors
    ///
    /// Returns `StepwiseError::InvalidConfiguration` if `titles` is empty,
    /// contains a blank title, or `subtitles` has a different length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stepwise_core::StepSet;
    ///
    /// let set = StepSet::new(vec!["Name".into(), "Email".into()], None, true)?;
    /// assert_eq!(set.len(), 3);
    /// assert_eq!(set.confirmation_index(), Some(2));
    /// # Ok::<(), stepwise_core::StepwiseError>(())
    /// ```
    pub fn new(
        titles: Vec<String>,
        subtitles: Option<Vec<String>>,
        confirmation_enabled: bool,
    ) -> Result<Self> {
        let confirmation_title = confirmation_enabled.then_some(DEFAULT_CONFIRMATION_TITLE);
        Self::build(titles, subtitles, confirmation_title)
    }

    /// Builds a step set from a form configuration, using its confirmation
    /// title.
    pub fn from_config(config: &FormConfig) -> Result<Self> {
        let confirmation_title = config
            .confirmation_enabled
            .then_some(config.confirmation_title.as_str());
        Self::build(
            config.titles.clone(),
            config.subtitles.clone(),
            confirmation_title,
        )
    }

    fn build(
        titles: Vec<String>,
        subtitles: Option<Vec<String>>,
        confirmation_title: Option<&str>,
    ) -> Result<Self> {
        if titles.is_empty() {
            return Err(StepwiseError::invalid_configuration(
                "a form needs at least one step",
            ));
        }
        if let Some(position) = titles.iter().position(|t| t.trim().is_empty()) {
            return Err(StepwiseError::invalid_configuration(format!(
                "step {position} has a blank title"
            )));
        }
        if let Some(subtitles) = &subtitles {
            if subtitles.len() != titles.len() {
                return Err(StepwiseError::invalid_configuration(format!(
                    "{} subtitles supplied for {} steps",
                    subtitles.len(),
                    titles.len()
                )));
            }
        }

        let subtitle_count = subtitles.as_ref().map_or(0, Vec::len);
        let mut subtitles = subtitles.map(Vec::into_iter);
        let mut steps: Vec<Step> = titles
            .into_iter()
            .map(|title| Step::new(title, subtitles.as_mut().and_then(|it| it.next())))
            .collect();

        let confirmation_enabled = confirmation_title.is_some();
        if let Some(title) = confirmation_title {
            let title = if title.trim().is_empty() {
                DEFAULT_CONFIRMATION_TITLE
            } else {
                title
            };
            steps.push(Step::confirmation(title));
        }

        Ok(Self {
            steps,
            confirmation_enabled,
            subtitle_count,
        })
    }

    /// Total number of steps, confirmation step included.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false; a step set holds at least one step.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.steps.len() - 1
    }

    /// True when subtitles were supplied at construction.
    pub fn has_subtitles(&self) -> bool {
        self.subtitle_count > 0
    }

    pub fn confirmation_enabled(&self) -> bool {
        self.confirmation_enabled
    }

    /// Index of the confirmation step, if one was appended.
    pub fn confirmation_index(&self) -> Option<usize> {
        self.confirmation_enabled.then(|| self.last_index())
    }

    /// Number of caller-supplied steps.
    pub fn content_len(&self) -> usize {
        if self.confirmation_enabled {
            self.steps.len() - 1
        } else {
            self.steps.len()
        }
    }

    pub fn is_confirmation(&self, index: usize) -> bool {
        self.confirmation_index() == Some(index)
    }

    /// Returns the step at `index`.
    pub fn get(&self, index: usize) -> Result<&Step> {
        self.steps
            .get(index)
            .ok_or_else(|| StepwiseError::index_out_of_range(index, self.steps.len()))
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut Step> {
        let len = self.steps.len();
        self.steps
            .get_mut(index)
            .ok_or_else(|| StepwiseError::index_out_of_range(index, len))
    }

    pub fn title(&self, index: usize) -> Result<&str> {
        self.get(index).map(|step| step.title.as_str())
    }

    pub fn subtitle(&self, index: usize) -> Result<Option<&str>> {
        self.get(index).map(|step| step.subtitle.as_deref())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// Replaces the title of a step. Blank titles are ignored and reported
    /// as `Ok(false)`.
    pub fn set_title(&mut self, index: usize, title: &str) -> Result<bool> {
        let step = self.get_mut(index)?;
        if title.trim().is_empty() {
            return Ok(false);
        }
        step.title = title.to_string();
        Ok(true)
    }

    /// Replaces the subtitle of a step.
    ///
    /// Ignored (`Ok(false)`) when the subtitle is blank or the step is beyond
    /// the subtitles supplied at construction, so forms built without
    /// subtitles never gain one.
    pub fn set_subtitle(&mut self, index: usize, subtitle: &str) -> Result<bool> {
        let subtitle_count = self.subtitle_count;
        let step = self.get_mut(index)?;
        if subtitle.trim().is_empty() || index >= subtitle_count {
            return Ok(false);
        }
        step.subtitle = Some(subtitle.to_string());
        Ok(true)
    }

    /// Sets the completion flag of a step and nothing else.
    pub fn set_completed(&mut self, index: usize, value: bool) -> Result<()> {
        self.get_mut(index)?.completed = value;
        Ok(())
    }

    pub fn is_completed(&self, index: usize) -> Result<bool> {
        self.get(index).map(|step| step.completed)
    }

    pub fn any_completed(&self) -> bool {
        self.steps.iter().any(|step| step.completed)
    }

    /// True iff every step before `index` is completed (vacuously true for 0).
    pub fn all_prior_completed(&self, index: usize) -> Result<bool> {
        self.get(index)?;
        Ok(self.steps[..index].iter().all(|step| step.completed))
    }

    /// Completion flags of every step, in order.
    pub fn completed_flags(&self) -> Vec<bool> {
        self.steps.iter().map(|step| step.completed).collect()
    }

    pub fn completed_count(&self) -> usize {
        self.steps.iter().filter(|step| step.completed).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_titles_rejected() {
        let err = StepSet::new(Vec::new(), None, true).unwrap_err();
        assert!(matches!(err, StepwiseError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_blank_title_rejected() {
        let err = StepSet::new(titles(&["Name", "  "]), None, false).unwrap_err();
        assert!(matches!(err, StepwiseError::InvalidConfiguration { .. }));
        assert!(err.to_string().contains("step 1"));
    }

    #[test]
    fn test_mismatched_subtitles_rejected() {
        let err = StepSet::new(titles(&["A", "B"]), Some(titles(&["only one"])), false)
            .unwrap_err();
        assert!(matches!(err, StepwiseError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_confirmation_step_appended() {
        let set = StepSet::new(titles(&["A", "B"]), None, true).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.content_len(), 2);
        assert_eq!(set.confirmation_index(), Some(2));
        let last = set.get(2).unwrap();
        assert!(last.is_confirmation);
        assert_eq!(last.title, DEFAULT_CONFIRMATION_TITLE);
        assert_eq!(set.iter().filter(|s| s.is_confirmation).count(), 1);
    }

    #[test]
    fn test_no_confirmation_step() {
        let set = StepSet::new(titles(&["A", "B"]), None, false).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.confirmation_index(), None);
        assert!(!set.is_confirmation(1));
    }

    #[test]
    fn test_from_config_uses_confirmation_title() {
        let config = FormConfig {
            confirmation_title: "Review".to_string(),
            ..FormConfig::new(titles(&["A"]))
        };
        let set = StepSet::from_config(&config).unwrap();
        assert_eq!(set.title(1).unwrap(), "Review");
    }

    #[test]
    fn test_blank_subtitles_are_absent() {
        let set = StepSet::new(titles(&["A", "B"]), Some(titles(&["", "second"])), false).unwrap();
        assert_eq!(set.subtitle(0).unwrap(), None);
        assert_eq!(set.subtitle(1).unwrap(), Some("second"));
    }

    #[test]
    fn test_set_title() {
        let mut set = StepSet::new(titles(&["A", "B"]), None, true).unwrap();
        assert!(set.set_title(1, "Renamed").unwrap());
        assert_eq!(set.title(1).unwrap(), "Renamed");

        assert!(!set.set_title(1, "   ").unwrap());
        assert_eq!(set.title(1).unwrap(), "Renamed");

        let err = set.set_title(3, "Nope").unwrap_err();
        assert!(matches!(err, StepwiseError::IndexOutOfRange { index: 3, len: 3 }));
    }

    #[test]
    fn test_set_subtitle_respects_supplied_count() {
        let mut set = StepSet::new(titles(&["A", "B"]), Some(titles(&["a", "b"])), true).unwrap();
        assert!(set.set_subtitle(0, "new a").unwrap());
        assert_eq!(set.subtitle(0).unwrap(), Some("new a"));

        // Blank and confirmation-step subtitles are ignored
        assert!(!set.set_subtitle(1, "").unwrap());
        assert!(!set.set_subtitle(2, "confirm").unwrap());
        assert_eq!(set.subtitle(2).unwrap(), None);

        let mut bare = StepSet::new(titles(&["A"]), None, false).unwrap();
        assert!(!bare.set_subtitle(0, "ignored").unwrap());
        assert!(bare.set_subtitle(4, "x").is_err());
    }

    #[test]
    fn test_completion_queries() {
        let mut set = StepSet::new(titles(&["A", "B", "C"]), None, false).unwrap();
        assert!(!set.any_completed());
        assert!(set.all_prior_completed(0).unwrap());
        assert!(!set.all_prior_completed(1).unwrap());

        set.set_completed(0, true).unwrap();
        assert!(set.any_completed());
        assert!(set.is_completed(0).unwrap());
        assert!(set.all_prior_completed(1).unwrap());
        assert!(!set.all_prior_completed(2).unwrap());

        set.set_completed(1, true).unwrap();
        assert!(set.all_prior_completed(2).unwrap());
        assert_eq!(set.completed_flags(), vec![true, true, false]);
        assert_eq!(set.completed_count(), 2);

        assert!(set.is_completed(3).is_err());
        assert!(set.all_prior_completed(3).is_err());
        assert!(set.set_completed(7, true).is_err());
    }
}
