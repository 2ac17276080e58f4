use alloc::string::String;

/// A lightweight, serializable snapshot of the tracker's mutable state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackerState {
    /// The last section announced as active. Used to suppress duplicate announcements.
    pub active: Option<String>,
    pub scroll_to_top_visible: bool,
}
