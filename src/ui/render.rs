//! Dear ImGui rendering of a [`Panel`]
//!
//! Each folder is drawn as a collapsing header. Widget edits are routed
//! through [`Control::set_value`], so they are clamped and reach bound
//! targets exactly like programmatic edits.

use std::borrow::Cow;

use imgui::{Condition, TreeNodeFlags, Ui};

use crate::ui::panel::{Control, ControlValue, Folder, Panel, Widget};

/// Draws the panel as a window; returns true if any control was edited
pub fn render_panel(ui: &Ui, panel: &mut Panel) -> bool {
    let display_size = ui.io().display_size;
    // Guard against invalid display size that could cause crashes
    if display_size[0] <= 0.0 || display_size[1] <= 0.0 {
        return false;
    }
    let panel_width = (display_size[0] * 0.25).max(300.0).min(420.0);
    let panel_height = (display_size[1] * 0.8).max(400.0);

    let title = panel.title.clone();
    ui.window(&title)
        .size([panel_width, panel_height], Condition::FirstUseEver)
        .position(
            [display_size[0] - panel_width - 20.0, 20.0],
            Condition::FirstUseEver,
        )
        .resizable(true)
        .collapsible(true)
        .build(|| {
            let mut modified = false;
            for (index, folder) in panel.folders_mut().iter_mut().enumerate() {
                modified |= render_folder(ui, index, folder);
            }
            modified
        })
        .unwrap_or(false)
}

fn render_folder(ui: &Ui, index: usize, folder: &mut Folder) -> bool {
    let flags = if folder.is_open() {
        TreeNodeFlags::DEFAULT_OPEN
    } else {
        TreeNodeFlags::empty()
    };
    if !ui.collapsing_header(format!("{}##folder{}", folder.name(), index), flags) {
        folder.close();
        return false;
    }
    folder.open();

    let mut modified = false;
    for (control_index, control) in folder.controls_mut().iter_mut().enumerate() {
        let id = format!("{}##{}_{}", control.label(), index, control_index);
        if let Some(value) = edit_control(ui, &id, control) {
            modified |= control.set_value(value);
        }
    }
    ui.spacing();
    modified
}

/// Draws one control and returns the edited value, if any
fn edit_control(ui: &Ui, id: &str, control: &Control) -> Option<ControlValue> {
    match (control.widget(), control.value()) {
        (Widget::Checkbox, ControlValue::Bool(value)) => {
            let mut value = *value;
            if ui.checkbox(id, &mut value) {
                return Some(ControlValue::Bool(value));
            }
        }
        (Widget::Slider { min, max, step }, ControlValue::Number(value)) => {
            let mut value = *value;
            if ui
                .slider_config(id, *min, *max)
                .display_format(display_format(*step))
                .build(&mut value)
            {
                return Some(ControlValue::Number(value));
            }
        }
        (Widget::ColorPicker, ControlValue::Color(channels)) => {
            let mut rgb = channels.map(|c| c / 255.0);
            if ui.color_edit3(id, &mut rgb) {
                return Some(ControlValue::Color(rgb.map(|c| c * 255.0)));
            }
        }
        (Widget::Select { options }, ControlValue::Choice(index)) => {
            let mut current = *index;
            if ui.combo(id, &mut current, options.as_slice(), |item| Cow::Borrowed(item.as_str())) {
                return Some(ControlValue::Choice(current));
            }
        }
        (_, ControlValue::Text(text)) => ui.label_text(id, text),
        (_, value) => ui.label_text(id, format!("{:?}", value)),
    }
    None
}

/// Printf format matching the precision of a slider step
fn display_format(step: Option<f32>) -> &'static str {
    match step {
        Some(step) if step >= 1.0 => "%.0f",
        Some(step) if step >= 0.1 => "%.1f",
        Some(_) => "%.2f",
        None => "%.3f",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format_follows_step() {
        assert_eq!(display_format(Some(1.0)), "%.0f");
        assert_eq!(display_format(Some(0.1)), "%.1f");
        assert_eq!(display_format(Some(0.01)), "%.2f");
        assert_eq!(display_format(None), "%.3f");
    }
}
