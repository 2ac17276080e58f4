use alloc::string::String;

use scrollspy::Timer;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LoadPhase {
    #[default]
    Loading,
    Loaded,
}

/// Milestones emitted by [`PageLoad::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageEvent {
    /// The page has faded in far enough for navigation tracking to attach.
    NavigationReady,
    /// The loading transition finished.
    Loaded,
    /// The transient load announcement should be removed.
    AnnouncementExpired,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PageLoadOptions {
    pub navigation_delay_ms: u64,
    pub transition_ms: u64,
    pub announcement_ms: u64,
    pub announcement: String,
}

impl Default for PageLoadOptions {
    fn default() -> Self {
        Self {
            navigation_delay_ms: 100,
            transition_ms: 500,
            announcement_ms: 1_000,
            announcement: String::from("Page loaded"),
        }
    }
}

impl PageLoadOptions {
    pub fn with_announcement(mut self, text: impl Into<String>) -> Self {
        self.announcement = text.into();
        self
    }
}

/// The page-load transition: a loading phase, a delayed navigation start and a transient load
/// announcement.
#[derive(Clone, Debug)]
pub struct PageLoad {
    options: PageLoadOptions,
    phase: LoadPhase,
    navigation: Timer,
    loaded: Timer,
    announcement: Timer,
    navigation_ready: bool,
}

impl PageLoad {
    pub fn start(options: PageLoadOptions, now_ms: u64) -> Self {
        Self {
            navigation: Timer::started(now_ms, options.navigation_delay_ms),
            loaded: Timer::started(now_ms, options.transition_ms),
            announcement: Timer::started(now_ms, options.announcement_ms),
            phase: LoadPhase::Loading,
            navigation_ready: false,
            options,
        }
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn options(&self) -> &PageLoadOptions {
        &self.options
    }

    pub fn is_navigation_ready(&self) -> bool {
        self.navigation_ready
    }

    /// The load announcement while it is still on screen.
    pub fn announcement(&self) -> Option<&str> {
        self.announcement
            .is_armed()
            .then_some(self.options.announcement.as_str())
    }

    /// Advances the timers and emits every milestone that became due, in time order.
    pub fn tick(&mut self, now_ms: u64, mut emit: impl FnMut(PageEvent)) {
        let mut due = [
            (self.navigation.due_ms(), PageEvent::NavigationReady),
            (self.loaded.due_ms(), PageEvent::Loaded),
            (self.announcement.due_ms(), PageEvent::AnnouncementExpired),
        ];
        due.sort_by_key(|(at, _)| *at);
        for (_, event) in due {
            let fired = match event {
                PageEvent::NavigationReady => self.navigation.poll(now_ms),
                PageEvent::Loaded => self.loaded.poll(now_ms),
                PageEvent::AnnouncementExpired => self.announcement.poll(now_ms),
            };
            if !fired {
                continue;
            }
            match event {
                PageEvent::NavigationReady => self.navigation_ready = true,
                PageEvent::Loaded => self.phase = LoadPhase::Loaded,
                PageEvent::AnnouncementExpired => {}
            }
            adebug!(?event, now_ms, "page load milestone");
            emit(event);
        }
    }
}
