//! `schooldesk layout ...`

use super::{output, LayoutCommand};
use crate::error::Result;
use crate::infrastructure::App;

pub fn execute(app: &App, command: LayoutCommand) -> Result<()> {
    let layout = &app.layout;
    match command {
        LayoutCommand::Show => {
            let prefs = layout.preferences();
            output::section("Layout preferences");
            output::key_value("Layout", prefs.layout_type);
            output::key_value("Theme", prefs.layout_theme);
            output::key_value("Theme colour", prefs.layout_theme_color);
            output::key_value("Mode", prefs.layout_mode);
            output::key_value("Width", prefs.layout_width);
            output::key_value("Position", prefs.layout_position);
            output::key_value("Topbar", prefs.topbar_color);
            output::key_value("Sidebar size", prefs.sidebar_size);
            output::key_value("Sidebar view", prefs.sidebar_view);
            output::key_value("Sidebar colour", prefs.sidebar_color);
            output::key_value("Sidebar image", prefs.sidebar_image);
            output::key_value("Sidebar", prefs.sidebar_visibility);
            output::key_value("Preloader", prefs.preloader);

            output::section("Document attributes");
            for (name, value) in layout.data_attributes() {
                output::key_value(name, value);
            }
        }
        LayoutCommand::Mode(args) => {
            layout.set_layout_mode(args.mode);
            output::ok(&format!("Layout mode set to {}", args.mode));
        }
        LayoutCommand::Reset => {
            layout.reset();
            output::ok("Layout preferences reset to defaults");
        }
    }
    Ok(())
}
