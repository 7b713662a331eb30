//! Layout and theming preferences.
//!
//! Every preference is a closed set of values whose wire form doubles as the
//! value of the corresponding `data-*` attribute on the document root.

use serde::{Deserialize, Serialize};

macro_rules! attribute_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $value:literal),+ $(,)? } default $default:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $value)] $variant),+
        }

        impl $name {
            /// Attribute value as written to the document root.
            #[must_use]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok($name::$variant),)+
                    other => Err(format!(concat!("unknown ", stringify!($name), " '{}'"), other)),
                }
            }
        }
    };
}

attribute_enum!(LayoutType {
    Vertical => "vertical",
    Horizontal => "horizontal",
    TwoColumn => "twocolumn",
    Semibox => "semibox",
} default Vertical);

attribute_enum!(LayoutTheme {
    Default => "default",
    Saas => "saas",
    Corporate => "corporate",
    Galaxy => "galaxy",
    Material => "material",
    Creative => "creative",
    Minimal => "minimal",
    Modern => "modern",
    Interactive => "interactive",
    Classic => "classic",
    Vintage => "vintage",
} default Default);

attribute_enum!(ThemeColor {
    Default => "default",
    Green => "green",
    Purple => "purple",
    Blue => "blue",
} default Default);

attribute_enum!(LayoutMode {
    Light => "light",
    Dark => "dark",
} default Light);

attribute_enum!(LayoutWidth {
    Fluid => "fluid",
    Boxed => "boxed",
} default Fluid);

attribute_enum!(LayoutPosition {
    Fixed => "fixed",
    Scrollable => "scrollable",
} default Fixed);

attribute_enum!(TopbarColor {
    Light => "light",
    Dark => "dark",
} default Light);

attribute_enum!(SidebarSize {
    Large => "lg",
    Medium => "md",
    Small => "sm",
    SmallHover => "sm-hover",
} default Large);

attribute_enum!(SidebarView {
    Default => "default",
    Detached => "detached",
} default Default);

attribute_enum!(SidebarColor {
    Light => "light",
    Dark => "dark",
    Gradient => "gradient",
    Gradient2 => "gradient-2",
    Gradient3 => "gradient-3",
    Gradient4 => "gradient-4",
} default Light);

attribute_enum!(SidebarImage {
    None => "none",
    Image1 => "img-1",
    Image2 => "img-2",
    Image3 => "img-3",
    Image4 => "img-4",
} default None);

attribute_enum!(SidebarVisibility {
    Show => "show",
    Hidden => "hidden",
} default Show);

attribute_enum!(Preloader {
    Enable => "enable",
    Disable => "disable",
} default Disable);

/// Persisted layout preferences.
///
/// Missing fields in a stored snapshot fall back to their defaults, so older
/// snapshots stay readable as preferences are added.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutPreferences {
    pub layout_type: LayoutType,
    pub layout_theme: LayoutTheme,
    pub layout_theme_color: ThemeColor,
    pub layout_mode: LayoutMode,
    pub layout_width: LayoutWidth,
    pub layout_position: LayoutPosition,
    pub topbar_color: TopbarColor,
    pub sidebar_size: SidebarSize,
    pub sidebar_view: SidebarView,
    pub sidebar_color: SidebarColor,
    pub sidebar_image: SidebarImage,
    pub sidebar_visibility: SidebarVisibility,
    pub preloader: Preloader,
}

impl LayoutPreferences {
    /// Whether the layout renders a vertical sidebar.
    #[must_use]
    pub fn has_sidebar(&self) -> bool {
        matches!(self.layout_type, LayoutType::Vertical | LayoutType::TwoColumn)
    }

    /// The `data-*` attributes a renderer applies to the document root.
    ///
    /// Sidebar attributes are only present for layouts with a sidebar.
    #[must_use]
    pub fn data_attributes(&self) -> Vec<(&'static str, &'static str)> {
        let mut attrs = vec![
            ("data-layout", self.layout_type.as_str()),
            ("data-theme", self.layout_theme.as_str()),
            ("data-theme-colors", self.layout_theme_color.as_str()),
            ("data-bs-theme", self.layout_mode.as_str()),
            ("data-layout-width", self.layout_width.as_str()),
            ("data-layout-position", self.layout_position.as_str()),
            ("data-topbar", self.topbar_color.as_str()),
        ];
        if self.has_sidebar() {
            attrs.push(("data-sidebar", self.sidebar_color.as_str()));
            attrs.push(("data-sidebar-size", self.sidebar_size.as_str()));
            attrs.push(("data-sidebar-image", self.sidebar_image.as_str()));
            attrs.push(("data-layout-style", self.sidebar_view.as_str()));
        }
        attrs.push(("data-preloader", self.preloader.as_str()));
        attrs.push(("data-sidebar-visibility", self.sidebar_visibility.as_str()));
        attrs
    }
}
