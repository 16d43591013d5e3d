//! Control panel model
//!
//! A [`Panel`] holds named [`Folder`]s of [`Control`]s. Each control owns the
//! value it displays and the callback that writes edits back to whatever it
//! is bound to, so removing a folder releases every binding made through it.

use std::fmt;

use log::{debug, warn};

use crate::error::PanelError;

/// Identifier of a folder, never reused within a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FolderId(u32);

impl fmt::Display for FolderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How a control is displayed and which values it accepts
#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    Checkbox,
    /// Edits are clamped to `[min, max]` when `min <= max`
    Slider { min: f32, max: f32, step: Option<f32> },
    /// Channels in 0-255
    ColorPicker,
    Select { options: Vec<String> },
    /// Read-only text
    Label,
}

impl Widget {
    pub fn slider(min: f32, max: f32, step: Option<f32>) -> Self {
        Widget::Slider { min, max, step }
    }

    pub fn select<S: Into<String>>(options: impl IntoIterator<Item = S>) -> Self {
        Widget::Select {
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether an edit with this value is valid for the widget
    pub fn accepts(&self, value: &ControlValue) -> bool {
        match (self, value) {
            (Widget::Checkbox, ControlValue::Bool(_)) => true,
            (Widget::Slider { .. }, ControlValue::Number(_)) => true,
            (Widget::ColorPicker, ControlValue::Color(_)) => true,
            (Widget::Select { options }, ControlValue::Choice(index)) => *index < options.len(),
            _ => false,
        }
    }
}

/// Value displayed by a control
#[derive(Debug, Clone, PartialEq)]
pub enum ControlValue {
    Bool(bool),
    Number(f32),
    /// RGB channels in 0-255
    Color([f32; 3]),
    Choice(usize),
    Text(String),
}

impl ControlValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ControlValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f32> {
        match self {
            ControlValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<[f32; 3]> {
        match self {
            ControlValue::Color(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_choice(&self) -> Option<usize> {
        match self {
            ControlValue::Choice(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ControlValue::Text(v) => Some(v),
            _ => None,
        }
    }
}

pub type ChangeCallback = Box<dyn FnMut(&ControlValue)>;

/// A single labelled control
pub struct Control {
    label: String,
    widget: Widget,
    value: ControlValue,
    on_change: Option<ChangeCallback>,
}

impl Control {
    pub fn new(label: impl Into<String>, widget: Widget, initial: ControlValue) -> Self {
        Self {
            label: label.into(),
            widget,
            value: initial,
            on_change: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn widget(&self) -> &Widget {
        &self.widget
    }

    pub fn value(&self) -> &ControlValue {
        &self.value
    }

    /// Sets the callback fired after every accepted edit
    pub fn on_change(&mut self, callback: impl FnMut(&ControlValue) + 'static) -> &mut Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Applies an edit as if made in the UI
    ///
    /// Returns false, leaving the control untouched, when the widget does not
    /// accept the value.
    pub fn set_value(&mut self, value: ControlValue) -> bool {
        if !self.widget.accepts(&value) {
            warn!("Control '{}' rejected {:?}", self.label, value);
            return false;
        }

        self.value = match (&self.widget, value) {
            (Widget::Slider { min, max, .. }, ControlValue::Number(v)) if min <= max => {
                ControlValue::Number(v.clamp(*min, *max))
            }
            (_, value) => value,
        };

        if let Some(callback) = self.on_change.as_mut() {
            callback(&self.value);
        }
        true
    }
}

impl fmt::Debug for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Control")
            .field("label", &self.label)
            .field("widget", &self.widget)
            .field("value", &self.value)
            .field("bound", &self.on_change.is_some())
            .finish()
    }
}

/// Named group of controls
#[derive(Debug)]
pub struct Folder {
    id: FolderId,
    name: String,
    open: bool,
    controls: Vec<Control>,
}

impl Folder {
    pub fn id(&self) -> FolderId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Appends a control and returns it for callback registration
    pub fn add(
        &mut self,
        label: impl Into<String>,
        widget: Widget,
        initial: ControlValue,
    ) -> &mut Control {
        self.controls.push(Control::new(label, widget, initial));
        let index = self.controls.len() - 1;
        &mut self.controls[index]
    }

    /// First control with the given label
    pub fn control(&self, label: &str) -> Option<&Control> {
        self.controls.iter().find(|control| control.label == label)
    }

    pub fn control_mut(&mut self, label: &str) -> Option<&mut Control> {
        self.controls.iter_mut().find(|control| control.label == label)
    }

    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    pub fn controls_mut(&mut self) -> &mut [Control] {
        &mut self.controls
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}

/// Top-level settings panel
#[derive(Debug)]
pub struct Panel {
    pub title: String,
    folders: Vec<Folder>,
    next_id: u32,
}

impl Panel {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            folders: Vec::new(),
            next_id: 0,
        }
    }

    /// Creates an empty, closed folder
    ///
    /// Fails if a live folder already uses the name.
    pub fn add_folder(&mut self, name: impl Into<String>) -> Result<&mut Folder, PanelError> {
        let name = name.into();
        if self.folders.iter().any(|folder| folder.name == name) {
            return Err(PanelError::DuplicateFolder(name));
        }

        let id = FolderId(self.next_id);
        self.next_id += 1;
        debug!("Adding folder '{}' ({})", name, id);

        self.folders.push(Folder {
            id,
            name,
            open: false,
            controls: Vec::new(),
        });
        let index = self.folders.len() - 1;
        Ok(&mut self.folders[index])
    }

    /// Removes a folder together with its controls and their callbacks
    pub fn remove_folder(&mut self, id: FolderId) -> bool {
        match self.folders.iter().position(|folder| folder.id == id) {
            Some(index) => {
                let folder = self.folders.remove(index);
                debug!("Removed folder '{}' ({})", folder.name, id);
                true
            }
            None => false,
        }
    }

    pub fn folder(&self, id: FolderId) -> Option<&Folder> {
        self.folders.iter().find(|folder| folder.id == id)
    }

    pub fn folder_mut(&mut self, id: FolderId) -> Option<&mut Folder> {
        self.folders.iter_mut().find(|folder| folder.id == id)
    }

    pub fn folder_by_name(&self, name: &str) -> Option<&Folder> {
        self.folders.iter().find(|folder| folder.name == name)
    }

    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    pub fn folders_mut(&mut self) -> &mut [Folder] {
        &mut self.folders
    }

    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    /// Current value of a control
    pub fn value(&self, folder: FolderId, label: &str) -> Option<&ControlValue> {
        self.folder(folder)?.control(label).map(Control::value)
    }

    /// Edits a control as if through the UI; see [`Control::set_value`]
    pub fn set_value(
        &mut self,
        folder: FolderId,
        label: &str,
        value: ControlValue,
    ) -> Result<bool, PanelError> {
        let control = self
            .folder_mut(folder)
            .ok_or(PanelError::UnknownFolder(folder))?
            .control_mut(label)
            .ok_or_else(|| PanelError::UnknownControl {
                folder,
                label: label.to_string(),
            })?;
        Ok(control.set_value(value))
    }
}
