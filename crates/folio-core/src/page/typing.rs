//! Typing effect: types each phrase out, holds it, deletes it, moves on.

use std::time::Duration;

use crate::config::TypingConfig;

/// Delays between animation steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingTiming {
    /// Per character while typing
    pub typing_interval: Duration,
    /// Per character while deleting, shorter than typing
    pub deleting_interval: Duration,
    /// Hold time once a phrase is complete
    pub pause_duration: Duration,
}

impl Default for TypingTiming {
    fn default() -> Self {
        Self::from(&TypingConfig::default())
    }
}

impl From<&TypingConfig> for TypingTiming {
    fn from(config: &TypingConfig) -> Self {
        Self {
            typing_interval: Duration::from_millis(config.typing_interval_ms),
            deleting_interval: Duration::from_millis(config.deleting_interval_ms),
            pause_duration: Duration::from_millis(config.pause_duration_ms),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypingState {
    pub phrase_index: usize,
    /// Always a prefix of the phrase at `phrase_index`
    pub displayed_text: String,
    pub is_deleting: bool,
}

/// Infinite typing/deleting loop over a fixed list of phrases.
///
/// Drive it by calling [`TypingAnimator::tick`] and waiting for the delay it
/// returns before the next call. The animator itself never sleeps.
#[derive(Debug, Clone)]
pub struct TypingAnimator {
    phrases: Vec<String>,
    timing: TypingTiming,
    state: TypingState,
}

impl TypingAnimator {
    pub fn new(phrases: Vec<String>, timing: TypingTiming) -> Self {
        Self {
            phrases,
            timing,
            state: TypingState::default(),
        }
    }

    pub fn from_config(phrases: Vec<String>, config: &TypingConfig) -> Self {
        Self::new(phrases, TypingTiming::from(config))
    }

    pub fn state(&self) -> &TypingState {
        &self.state
    }

    /// Text currently on screen
    pub fn text(&self) -> &str {
        &self.state.displayed_text
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// Delay before the first tick after (re)start
    pub fn initial_delay(&self) -> Duration {
        self.timing.typing_interval
    }

    /// Advance one step and return how long to wait before the next one.
    pub fn tick(&mut self) -> Duration {
        let Some(phrase) = self.phrases.get(self.state.phrase_index) else {
            // No phrases: nothing to type, idle at the pause rate
            return self.timing.pause_duration;
        };

        if self.state.is_deleting {
            self.state.displayed_text.pop();
            if self.state.displayed_text.is_empty() {
                self.state.is_deleting = false;
                self.state.phrase_index = (self.state.phrase_index + 1) % self.phrases.len();
                return self.timing.typing_interval;
            }
            return self.timing.deleting_interval;
        }

        let typed = self.state.displayed_text.chars().count();
        if let Some(next) = phrase.chars().nth(typed) {
            self.state.displayed_text.push(next);
        }

        if self.state.displayed_text.len() == phrase.len() {
            self.state.is_deleting = true;
            self.timing.pause_duration
        } else {
            self.timing.typing_interval
        }
    }
}

/// Blinking caret drawn after the typed text. Purely visual.
#[derive(Debug, Clone, Copy)]
pub struct Caret {
    period: Duration,
}

impl Caret {
    pub fn new(period: Duration) -> Self {
        Self { period }
    }

    /// Visible during even half-periods since mount
    pub fn visible_at(&self, elapsed: Duration) -> bool {
        if self.period.is_zero() {
            return true;
        }
        (elapsed.as_millis() / self.period.as_millis()) % 2 == 0
    }
}

impl From<&TypingConfig> for Caret {
    fn from(config: &TypingConfig) -> Self {
        Self::new(Duration::from_millis(config.caret_blink_ms))
    }
}
