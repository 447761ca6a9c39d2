//! Application state definitions

use super::forms::ContactField;
use crate::config::ContactProfile;

/// Social profile buttons shown next to the contact details
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialLink {
    GitHub,
    LinkedIn,
    Twitter,
}

impl SocialLink {
    pub const ALL: [SocialLink; 3] = [Self::GitHub, Self::LinkedIn, Self::Twitter];

    pub fn label(&self) -> &'static str {
        match self {
            Self::GitHub => "GitHub",
            Self::LinkedIn => "LinkedIn",
            Self::Twitter => "Twitter",
        }
    }
}

/// Which element receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(ContactField),
    Submit,
    Social(SocialLink),
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Field(ContactField::Name)
    }
}

impl Focus {
    /// Tab order
    const ORDER: [Focus; 7] = [
        Focus::Field(ContactField::Name),
        Focus::Field(ContactField::Email),
        Focus::Field(ContactField::Message),
        Focus::Submit,
        Focus::Social(SocialLink::GitHub),
        Focus::Social(SocialLink::LinkedIn),
        Focus::Social(SocialLink::Twitter),
    ];

    fn index(&self) -> usize {
        Self::ORDER.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(&self) -> Self {
        let index = self.index();
        if index == 0 {
            Self::ORDER[Self::ORDER.len() - 1]
        } else {
            Self::ORDER[index - 1]
        }
    }

    pub fn field(&self) -> Option<ContactField> {
        match self {
            Self::Field(field) => Some(*field),
            _ => None,
        }
    }
}

/// Presentation state that lives outside the form controller
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub focus: Focus,
    /// Frames drawn since start, drives the busy spinner
    pub frame: usize,
    pub profile: ContactProfile,
}

impl AppState {
    pub fn new(profile: ContactProfile) -> Self {
        Self {
            profile,
            ..Default::default()
        }
    }

    pub fn next_focus(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_focus(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn tick(&mut self) {
        self.frame = self.frame.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_focus_is_name() {
        let state = AppState::default();
        assert_eq!(state.focus, Focus::Field(ContactField::Name));
    }

    #[test]
    fn test_next_focus_walks_tab_order() {
        let mut state = AppState::default();
        state.next_focus();
        assert_eq!(state.focus, Focus::Field(ContactField::Email));
        state.next_focus();
        state.next_focus();
        assert_eq!(state.focus, Focus::Submit);
        state.next_focus();
        assert_eq!(state.focus, Focus::Social(SocialLink::GitHub));
    }

    #[test]
    fn test_focus_wraps_both_ways() {
        assert_eq!(
            Focus::Social(SocialLink::Twitter).next(),
            Focus::Field(ContactField::Name)
        );
        assert_eq!(
            Focus::Field(ContactField::Name).prev(),
            Focus::Social(SocialLink::Twitter)
        );
    }

    #[test]
    fn test_focus_field() {
        assert_eq!(
            Focus::Field(ContactField::Message).field(),
            Some(ContactField::Message)
        );
        assert_eq!(Focus::Submit.field(), None);
    }

    #[test]
    fn test_tick_wraps() {
        let mut state = AppState {
            frame: usize::MAX,
            ..Default::default()
        };
        state.tick();
        assert_eq!(state.frame, 0);
    }

    #[test]
    fn test_social_labels() {
        let labels: Vec<_> = SocialLink::ALL.iter().map(|l| l.label()).collect();
        assert_eq!(labels, vec!["GitHub", "LinkedIn", "Twitter"]);
    }
}
