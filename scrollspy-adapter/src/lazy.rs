use alloc::string::String;
use alloc::vec::Vec;

use scrollspy::SectionRect;

/// A request for the host to load an image's real source.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadRequest {
    pub id: String,
    pub src: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct LazyImage {
    id: String,
    src: Option<String>,
    deferred_src: Option<String>,
    loaded: bool,
}

/// Deferred image loading driven by viewport intersection.
///
/// Each image is revealed at most once: after its first intersection it is unobserved, whether
/// or not it had a source to load.
#[derive(Clone, Debug, Default)]
pub struct LazyImages {
    images: Vec<LazyImage>,
}

impl LazyImages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an image. `deferred_src` takes precedence over `src` when revealed.
    ///
    /// Re-registering an id replaces the previous entry.
    pub fn register(&mut self, id: impl Into<String>, src: Option<&str>, deferred_src: Option<&str>) {
        let image = LazyImage {
            id: id.into(),
            src: src.map(String::from),
            deferred_src: deferred_src.map(String::from),
            loaded: false,
        };
        match self.images.iter_mut().find(|i| i.id == image.id) {
            Some(slot) => *slot = image,
            None => self.images.push(image),
        }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn is_loaded(&self, id: &str) -> bool {
        self.images.iter().any(|i| i.id == id && i.loaded)
    }

    /// Emits the ids of images still being observed.
    pub fn for_each_pending(&self, mut f: impl FnMut(&str)) {
        for image in self.images.iter().filter(|i| !i.loaded) {
            f(&image.id);
        }
    }

    /// Handles intersection entries `(id, is_intersecting)` and emits a load request for each
    /// newly revealed image that has a source.
    pub fn on_intersections<'a>(
        &mut self,
        entries: impl IntoIterator<Item = (&'a str, bool)>,
        mut emit: impl FnMut(LoadRequest),
    ) {
        for (id, is_intersecting) in entries {
            if !is_intersecting {
                continue;
            }
            let Some(image) = self.images.iter_mut().find(|i| i.id == id && !i.loaded) else {
                continue;
            };
            image.loaded = true;
            let src = image.deferred_src.clone().or_else(|| image.src.clone());
            atrace!(id, has_src = src.is_some(), "lazy image revealed");
            if let Some(src) = src {
                emit(LoadRequest {
                    id: image.id.clone(),
                    src,
                });
            }
        }
    }

    /// Reveals every pending image whose rect overlaps `[0, viewport_height]`.
    pub fn reveal_visible(
        &mut self,
        viewport_height: f64,
        rect_of: impl Fn(&str) -> Option<SectionRect>,
        emit: impl FnMut(LoadRequest),
    ) {
        let mut visible = Vec::new();
        self.for_each_pending(|id| {
            if let Some(rect) = rect_of(id) {
                if rect.bottom >= 0.0 && rect.top <= viewport_height {
                    visible.push(String::from(id));
                }
            }
        });
        self.on_intersections(visible.iter().map(|id| (id.as_str(), true)), emit);
    }

    pub fn collect_pending(&self, out: &mut Vec<String>) {
        out.clear();
        self.for_each_pending(|id| out.push(String::from(id)));
    }
}
