//! Layout preferences store.
//!
//! Loaded from durable storage at construction (each readable stored field
//! merged over the defaults) and written back after every change.

use std::sync::Arc;

use serde_json::{Map, Value};
use tokio::sync::broadcast;
use tracing::warn;

use super::observable::Observable;
use crate::domain::layout::{
    LayoutMode, LayoutPosition, LayoutTheme, LayoutType, LayoutWidth, Preloader, SidebarColor,
    SidebarImage, SidebarSize, SidebarView, SidebarVisibility, ThemeColor, TopbarColor,
};
use crate::domain::LayoutPreferences;
use crate::port::{put_json, KeyValueStore};

/// Durable storage key of the layout snapshot.
pub const LAYOUT_STORAGE_KEY: &str = "app-layout-config";

pub struct LayoutStore {
    state: Observable<LayoutPreferences>,
}

impl LayoutStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        let state = Observable::new(load(storage.as_ref()));
        state.on_change(move |prefs: &LayoutPreferences| save(storage.as_ref(), prefs));
        Self { state }
    }

    #[must_use]
    pub fn preferences(&self) -> LayoutPreferences {
        self.state.get()
    }

    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<LayoutPreferences> {
        self.state.subscribe()
    }

    /// `data-*` attribute pairs a renderer applies to the document root.
    #[must_use]
    pub fn data_attributes(&self) -> Vec<(&'static str, &'static str)> {
        self.state.read(LayoutPreferences::data_attributes)
    }

    /// Apply several changes with a single write.
    pub fn update(&self, f: impl FnOnce(&mut LayoutPreferences)) {
        self.state.update(f);
    }

    pub fn set_layout_type(&self, value: LayoutType) {
        self.update(|p| p.layout_type = value);
    }

    pub fn set_layout_theme(&self, value: LayoutTheme) {
        self.update(|p| p.layout_theme = value);
    }

    pub fn set_theme_color(&self, value: ThemeColor) {
        self.update(|p| p.layout_theme_color = value);
    }

    pub fn set_layout_mode(&self, value: LayoutMode) {
        self.update(|p| p.layout_mode = value);
    }

    pub fn set_layout_width(&self, value: LayoutWidth) {
        self.update(|p| p.layout_width = value);
    }

    pub fn set_layout_position(&self, value: LayoutPosition) {
        self.update(|p| p.layout_position = value);
    }

    pub fn set_topbar_color(&self, value: TopbarColor) {
        self.update(|p| p.topbar_color = value);
    }

    pub fn set_sidebar_size(&self, value: SidebarSize) {
        self.update(|p| p.sidebar_size = value);
    }

    pub fn set_sidebar_view(&self, value: SidebarView) {
        self.update(|p| p.sidebar_view = value);
    }

    pub fn set_sidebar_color(&self, value: SidebarColor) {
        self.update(|p| p.sidebar_color = value);
    }

    pub fn set_sidebar_image(&self, value: SidebarImage) {
        self.update(|p| p.sidebar_image = value);
    }

    pub fn set_sidebar_visibility(&self, value: SidebarVisibility) {
        self.update(|p| p.sidebar_visibility = value);
    }

    pub fn set_preloader(&self, value: Preloader) {
        self.update(|p| p.preloader = value);
    }

    /// Restore defaults (and persist them).
    pub fn reset(&self) {
        self.state.replace(LayoutPreferences::default());
    }

    #[must_use]
    pub fn is_dark_mode(&self) -> bool {
        self.state.read(|p| p.layout_mode == LayoutMode::Dark)
    }

    #[must_use]
    pub fn is_vertical(&self) -> bool {
        self.state.read(|p| p.layout_type == LayoutType::Vertical)
    }

    #[must_use]
    pub fn is_horizontal(&self) -> bool {
        self.state.read(|p| p.layout_type == LayoutType::Horizontal)
    }

    #[must_use]
    pub fn is_two_column(&self) -> bool {
        self.state.read(|p| p.layout_type == LayoutType::TwoColumn)
    }

    #[must_use]
    pub fn is_semibox(&self) -> bool {
        self.state.read(|p| p.layout_type == LayoutType::Semibox)
    }

    #[must_use]
    pub fn has_boxed_width(&self) -> bool {
        self.state.read(|p| p.layout_width == LayoutWidth::Boxed)
    }

    #[must_use]
    pub fn is_fixed(&self) -> bool {
        self.state.read(|p| p.layout_position == LayoutPosition::Fixed)
    }

    #[must_use]
    pub fn is_topbar_dark(&self) -> bool {
        self.state.read(|p| p.topbar_color == TopbarColor::Dark)
    }

    #[must_use]
    pub fn is_sidebar_detached(&self) -> bool {
        self.state.read(|p| p.sidebar_view == SidebarView::Detached)
    }

    #[must_use]
    pub fn is_sidebar_small(&self) -> bool {
        self.state.read(|p| {
            matches!(p.sidebar_size, SidebarSize::Small | SidebarSize::SmallHover)
        })
    }

    #[must_use]
    pub fn has_sidebar_image(&self) -> bool {
        self.state.read(|p| p.sidebar_image != SidebarImage::None)
    }

    #[must_use]
    pub fn is_preloader_enabled(&self) -> bool {
        self.state.read(|p| p.preloader == Preloader::Enable)
    }
}

fn load(storage: &dyn KeyValueStore) -> LayoutPreferences {
    let raw = match storage.get(LAYOUT_STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return LayoutPreferences::default(),
        Err(e) => {
            warn!(error = %e, "Failed to read layout preferences");
            return LayoutPreferences::default();
        }
    };
    match serde_json::from_str::<Map<String, Value>>(&raw) {
        Ok(stored) => merge_over_defaults(stored),
        Err(e) => {
            warn!(error = %e, "Ignoring unreadable layout preferences");
            LayoutPreferences::default()
        }
    }
}

/// Apply stored fields one at a time; a field that no longer parses keeps
/// its default without discarding the others.
fn merge_over_defaults(stored: Map<String, Value>) -> LayoutPreferences {
    let mut merged = LayoutPreferences::default();
    for (key, value) in stored {
        let Ok(Value::Object(mut candidate)) = serde_json::to_value(merged) else {
            break;
        };
        candidate.insert(key.clone(), value);
        match serde_json::from_value(Value::Object(candidate)) {
            Ok(prefs) => merged = prefs,
            Err(e) => warn!(field = %key, error = %e, "Ignoring unreadable layout preference"),
        }
    }
    merged
}

fn save(storage: &dyn KeyValueStore, prefs: &LayoutPreferences) {
    if let Err(e) = put_json(storage, LAYOUT_STORAGE_KEY, prefs) {
        warn!(error = %e, "Failed to persist layout preferences");
    }
}
