use std::{
    collections::{HashMap, HashSet},
    sync::{Mutex, MutexGuard, PoisonError},
};

use super::{Content, Region, Surface};

/// A surface that keeps everything in memory.
///
/// Useful for embedding the widget without a real page, and for inspecting
/// what the renderer wrote.
#[derive(Debug)]
pub struct MemorySurface {
    regions: HashSet<Region>,
    state: Mutex<State>,
}

#[derive(Debug, Default)]
struct State {
    input: String,
    content: HashMap<Region, Content>,
    hidden: HashSet<Region>,
}

impl MemorySurface {
    /// A surface with only the given regions. The error region starts hidden.
    pub fn new(regions: impl IntoIterator<Item = Region>) -> Self {
        let mut state = State::default();
        state.hidden.insert(Region::ErrorMessage);

        Self {
            regions: regions.into_iter().collect(),
            state: Mutex::new(state),
        }
    }

    /// A surface with every region present.
    pub fn full() -> Self {
        Self::new(Region::all().iter().copied())
    }

    /// Simulates the user typing into the city input.
    pub fn set_input(&self, text: impl Into<String>) {
        self.state().input = text.into();
    }

    pub fn content(&self, region: Region) -> Content {
        self.state().content.get(&region).cloned().unwrap_or_default()
    }

    /// Rendered text of a region.
    pub fn text(&self, region: Region) -> String {
        self.content(region).to_string()
    }

    pub fn is_hidden(&self, region: Region) -> bool {
        self.state().hidden.contains(&region)
    }

    /// Region is present, not hidden, and has something in it.
    pub fn is_visible(&self, region: Region) -> bool {
        self.has_region(region) && !self.is_hidden(region) && !self.content(region).is_empty()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::full()
    }
}

impl Surface for MemorySurface {
    fn has_region(&self, region: Region) -> bool {
        self.regions.contains(&region)
    }

    fn input_value(&self) -> Option<String> {
        self.has_region(Region::CityInput)
            .then(|| self.state().input.clone())
    }

    fn write(&self, region: Region, content: Content) {
        if !self.has_region(region) {
            return;
        }
        self.state().content.insert(region, content);
    }

    fn set_hidden(&self, region: Region, hidden: bool) {
        if !self.has_region(region) {
            return;
        }
        let mut state = self.state();
        if hidden {
            state.hidden.insert(region);
        } else {
            state.hidden.remove(&region);
        }
    }
}
