//! Wraparound cursor over the stop registry, and the mapping from user input
//! (buttons and arrow keys) onto its two transitions.

use crate::error::{Result, TourError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationCommand {
    Next,
    Previous,
}

impl NavigationCommand {
    /// Map a `KeyboardEvent.key` value to a command. Other keys are ignored.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" => Some(Self::Next),
            "ArrowLeft" => Some(Self::Previous),
            _ => None,
        }
    }

    /// Like [`from_key`](Self::from_key), but ignores keys typed into a form
    /// control, which handles arrow keys itself. `target_tag` is the
    /// `tagName` of the event target.
    pub fn from_key_event(key: &str, target_tag: Option<&str>) -> Option<Self> {
        if target_tag.is_some_and(is_form_control) {
            return None;
        }
        Self::from_key(key)
    }
}

fn is_form_control(tag: &str) -> bool {
    ["SELECT", "INPUT", "TEXTAREA"]
        .iter()
        .any(|control| tag.eq_ignore_ascii_case(control))
}

/// Current index into a registry of `len` stops. Always in `[0, len)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Navigator {
    current: usize,
    len: usize,
}

impl Navigator {
    pub fn new(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(TourError::EmptyRegistry);
        }
        Ok(Self { current: 0, len })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next_stop(&mut self) -> usize {
        self.current = (self.current + 1) % self.len;
        self.current
    }

    pub fn previous_stop(&mut self) -> usize {
        self.current = (self.current + self.len - 1) % self.len;
        self.current
    }

    pub fn apply(&mut self, command: NavigationCommand) -> usize {
        match command {
            NavigationCommand::Next => self.next_stop(),
            NavigationCommand::Previous => self.previous_stop(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_length_fails_fast() {
        assert!(matches!(Navigator::new(0), Err(TourError::EmptyRegistry)));
    }

    #[test]
    fn test_next_full_cycle_returns_to_start() {
        for len in 1..=7 {
            let mut nav = Navigator::new(len).unwrap();
            for _ in 0..len {
                nav.next_stop();
            }
            assert_eq!(nav.current(), 0, "len={len}");
        }
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let mut nav = Navigator::new(5).unwrap();
        assert_eq!(nav.previous_stop(), 4);
        assert_eq!(nav.previous_stop(), 3);
    }

    #[test]
    fn test_single_stop_stays_put() {
        let mut nav = Navigator::new(1).unwrap();
        assert_eq!(nav.next_stop(), 0);
        assert_eq!(nav.previous_stop(), 0);
    }

    #[test]
    fn test_mixed_sequence_stays_in_range() {
        let mut nav = Navigator::new(3).unwrap();
        let pattern = [true, true, false, true, true, true, false, false, false, false];
        for step in pattern.iter().cycle().take(100) {
            if *step {
                nav.next_stop();
            } else {
                nav.previous_stop();
            }
            assert!(nav.current() < 3);
        }
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(
            NavigationCommand::from_key("ArrowRight"),
            Some(NavigationCommand::Next)
        );
        assert_eq!(
            NavigationCommand::from_key("ArrowLeft"),
            Some(NavigationCommand::Previous)
        );
        assert_eq!(NavigationCommand::from_key("ArrowUp"), None);
        assert_eq!(NavigationCommand::from_key("Enter"), None);
    }

    #[test]
    fn test_keys_in_form_controls_ignored() {
        assert_eq!(
            NavigationCommand::from_key_event("ArrowRight", Some("SELECT")),
            None
        );
        assert_eq!(
            NavigationCommand::from_key_event("ArrowLeft", Some("input")),
            None
        );
        assert_eq!(
            NavigationCommand::from_key_event("ArrowLeft", Some("TEXTAREA")),
            None
        );
        assert_eq!(
            NavigationCommand::from_key_event("ArrowRight", Some("BODY")),
            Some(NavigationCommand::Next)
        );
        assert_eq!(
            NavigationCommand::from_key_event("ArrowLeft", None),
            Some(NavigationCommand::Previous)
        );
    }
}
