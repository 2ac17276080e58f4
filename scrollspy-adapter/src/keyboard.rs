use alloc::string::String;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    Tab,
    Escape,
    Other,
}

/// The element that had focus when the key was pressed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyTarget {
    /// A navigation link, by the section id it targets.
    NavLink(String),
    Other,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyEvent {
    pub key: Key,
    pub target: KeyTarget,
}

impl KeyEvent {
    pub fn new(key: Key, target: KeyTarget) -> Self {
        Self { key, target }
    }

    pub fn on_link(key: Key, section_id: impl Into<String>) -> Self {
        Self {
            key,
            target: KeyTarget::NavLink(section_id.into()),
        }
    }
}
