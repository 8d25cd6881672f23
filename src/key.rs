//! Type-safe key bindings shared by the widgets in this crate.
//!
//! A [`Binding`] groups one or more [`KeyCode`]s with the help text shown for
//! them, and the [`KeyMap`] trait lets a widget expose its bindings to a host
//! application for contextual help rendering.

use bubbletea_rs::KeyMsg;
use crossterm::event::KeyCode;

/// A single action bound to one or more keys.
///
/// # Examples
///
/// ```rust
/// use medboard_widgets::key::Binding;
/// use crossterm::event::KeyCode;
///
/// let next = Binding::new(vec![KeyCode::Right, KeyCode::Char('l')])
///     .with_help("→/l", "next page");
/// assert_eq!(next.help().desc, "next page");
/// ```
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyCode>,
    help: Help,
}

/// Help text for a binding: the key label and what the key does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short label for the keys, e.g. `"←/h"`.
    pub key: String,
    /// Description of the action, e.g. `"prev page"`.
    pub desc: String,
}

impl Binding {
    /// Creates a binding for the given key codes with no help text.
    pub fn new(keys: Vec<KeyCode>) -> Self {
        Self {
            keys,
            help: Help::default(),
        }
    }

    /// Sets the help label and description (builder pattern).
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Returns the help text for this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Returns true if the key message matches any key of this binding.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use medboard_widgets::key::Binding;
    /// use bubbletea_rs::KeyMsg;
    /// use crossterm::event::{KeyCode, KeyModifiers};
    ///
    /// let binding = Binding::new(vec![KeyCode::PageDown]);
    /// let msg = KeyMsg { key: KeyCode::PageDown, modifiers: KeyModifiers::NONE };
    /// assert!(binding.matches(&msg));
    /// ```
    pub fn matches(&self, key_msg: &KeyMsg) -> bool {
        self.keys.contains(&key_msg.key)
    }
}

/// Implemented by widget key maps so hosts can render contextual help.
pub trait KeyMap {
    /// The essential bindings, for compact help views.
    fn short_help(&self) -> Vec<&Binding>;

    /// All bindings, grouped into columns, for expanded help views.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}
