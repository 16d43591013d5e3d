//! Two-way binding of panel controls to live objects
//!
//! Every control created here reads its starting value from the target
//! through a typed [`Field`] and writes edits back through the same field.
//! Callbacks hold the target weakly: once the target is dropped, edits are
//! ignored instead of keeping it alive.

use std::cell::RefCell;
use std::ops::{Index, IndexMut};
use std::rc::{Rc, Weak};

use cgmath::{Vector2, Vector3, Zero};
use log::{debug, trace, warn};

use crate::error::PanelError;
use crate::gfx::color::Color;
use crate::ui::panel::{Control, ControlValue, Folder, FolderId, Panel, Widget};

/// Target shared between its owner and the controls bound to it
pub type Shared<T> = Rc<RefCell<T>>;

/// Named accessor and mutator for one field of `T`
///
/// `get` returns None when the field is absent on this particular target;
/// binding then falls back to the caller's default.
pub struct Field<T, V> {
    name: String,
    get: Rc<dyn Fn(&T) -> Option<V>>,
    set: Rc<dyn Fn(&mut T, V)>,
}

impl<T, V> Clone for Field<T, V> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            get: Rc::clone(&self.get),
            set: Rc::clone(&self.set),
        }
    }
}

impl<T, V> std::fmt::Debug for Field<T, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field").field("name", &self.name).finish()
    }
}

impl<T, V> Field<T, V> {
    pub fn new(
        name: impl Into<String>,
        get: impl Fn(&T) -> Option<V> + 'static,
        set: impl Fn(&mut T, V) + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            get: Rc::new(get),
            set: Rc::new(set),
        }
    }

    /// Same accessors under another control label
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, target: &T) -> Option<V> {
        (self.get)(target)
    }

    pub fn set(&self, target: &mut T, value: V) {
        (self.set)(target, value)
    }

    /// Runs `after` on the target following every write through this field
    pub fn and_then(self, after: impl Fn(&mut T) + 'static) -> Self
    where
        T: 'static,
        V: 'static,
    {
        let set = self.set;
        Self {
            name: self.name,
            get: self.get,
            set: Rc::new(move |target: &mut T, value: V| {
                set(&mut *target, value);
                after(target);
            }),
        }
    }
}

/// Objects with a master on/off switch
pub trait Switchable {
    fn is_enabled(&self) -> bool;

    fn set_enabled(&mut self, enabled: bool);
}

impl<T: Switchable + 'static> Field<T, bool> {
    /// The target's master switch, labelled `enabled`
    pub fn enabled() -> Self {
        Field::new(
            "enabled",
            |target: &T| Some(target.is_enabled()),
            |target: &mut T, enabled| target.set_enabled(enabled),
        )
    }
}

/// Slider range for a scalar field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalarRange {
    pub min: f32,
    pub max: f32,
    /// None for a continuous slider
    pub step: Option<f32>,
}

impl ScalarRange {
    pub const UNIT: ScalarRange = ScalarRange {
        min: 0.0,
        max: 1.0,
        step: Some(0.01),
    };

    pub const fn new(min: f32, max: f32, step: f32) -> Self {
        Self {
            min,
            max,
            step: Some(step),
        }
    }

    pub const fn continuous(min: f32, max: f32) -> Self {
        Self {
            min,
            max,
            step: None,
        }
    }

    pub fn widget(&self) -> Widget {
        Widget::slider(self.min, self.max, self.step)
    }
}

impl Default for ScalarRange {
    fn default() -> Self {
        Self::UNIT
    }
}

/// Per-axis slider ranges for a vector field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorRange<V> {
    pub min: V,
    pub max: V,
    pub step: V,
}

impl<V> VectorRange<V> {
    pub fn new(min: V, max: V, step: V) -> Self {
        Self { min, max, step }
    }
}

impl VectorRange<Vector2<f32>> {
    /// Same range on both axes
    pub fn splat(min: f32, max: f32, step: f32) -> Self {
        Self::new(
            Vector2::new(min, min),
            Vector2::new(max, max),
            Vector2::new(step, step),
        )
    }
}

impl VectorRange<Vector3<f32>> {
    /// Same range on all three axes
    pub fn splat(min: f32, max: f32, step: f32) -> Self {
        Self::new(
            Vector3::new(min, min, min),
            Vector3::new(max, max, max),
            Vector3::new(step, step, step),
        )
    }
}

/// Reads the field, falling back to `default` when absent or unreadable
///
/// An absent field is not an error and is not logged.
fn seed<T, V>(field: &Field<T, V>, target: &Shared<T>, default: V) -> V {
    match target.try_borrow() {
        Ok(target) => field.get(&target).unwrap_or(default),
        Err(_) => {
            warn!("Target of '{}' is busy, seeding default", field.name());
            default
        }
    }
}

/// Runs `write` against the target if it is still alive and not borrowed
fn with_target<T>(target: &Weak<RefCell<T>>, name: &str, write: impl FnOnce(&mut T)) {
    let Some(target) = target.upgrade() else {
        debug!("Skipping write to '{}', target dropped", name);
        return;
    };
    let Ok(mut target) = target.try_borrow_mut() else {
        warn!("Skipping write to '{}', target is busy", name);
        return;
    };
    trace!("Writing '{}'", name);
    write(&mut *target);
}

/// Checkbox bound to a boolean field
pub fn bind_boolean<'a, T: 'static>(
    folder: &'a mut Folder,
    field: Field<T, bool>,
    target: &Shared<T>,
    default: bool,
) -> &'a mut Control {
    let initial = seed(&field, target, default);
    let weak = Rc::downgrade(target);
    folder
        .add(field.name().to_string(), Widget::Checkbox, ControlValue::Bool(initial))
        .on_change(move |value| {
            if let Some(v) = value.as_bool() {
                with_target(&weak, field.name(), |target| field.set(target, v));
            }
        })
}

/// Slider bound to a numeric field
pub fn bind_scalar<'a, T: 'static>(
    folder: &'a mut Folder,
    field: Field<T, f32>,
    target: &Shared<T>,
    range: ScalarRange,
    default: f32,
) -> &'a mut Control {
    let initial = seed(&field, target, default);
    let weak = Rc::downgrade(target);
    folder
        .add(field.name().to_string(), range.widget(), ControlValue::Number(initial))
        .on_change(move |value| {
            if let Some(v) = value.as_number() {
                with_target(&weak, field.name(), |target| field.set(target, v));
            }
        })
}

/// Color picker bound to a color field
///
/// The picker works in 0-255 channels; the field always receives a
/// normalized color.
pub fn bind_color<'a, T: 'static>(
    folder: &'a mut Folder,
    field: Field<T, Color>,
    target: &Shared<T>,
    default: Color,
) -> &'a mut Control {
    let initial = seed(&field, target, default);
    let weak = Rc::downgrade(target);
    folder
        .add(
            field.name().to_string(),
            Widget::ColorPicker,
            ControlValue::Color(initial.to_rgb255()),
        )
        .on_change(move |value| {
            if let Some(channels) = value.as_color() {
                let color = Color::from_rgb255(channels);
                with_target(&weak, field.name(), |target| field.set(target, color));
            }
        })
}

/// Select box bound to an index into `options`
pub fn bind_choice<'a, T: 'static>(
    folder: &'a mut Folder,
    field: Field<T, usize>,
    target: &Shared<T>,
    options: &[&str],
    default: usize,
) -> &'a mut Control {
    let mut initial = seed(&field, target, default);
    if initial >= options.len() {
        warn!("'{}' holds unknown option {}", field.name(), initial);
        initial = default;
    }
    let weak = Rc::downgrade(target);
    folder
        .add(
            field.name().to_string(),
            Widget::select(options.iter().copied()),
            ControlValue::Choice(initial),
        )
        .on_change(move |value| {
            if let Some(index) = value.as_choice() {
                with_target(&weak, field.name(), |target| field.set(target, index));
            }
        })
}

/// One slider per axis, labelled `{name}_{suffix}`
///
/// An axis edit re-reads the whole vector from the target so edits on
/// other axes are kept.
fn bind_axes<T, V>(
    folder: &mut Folder,
    field: Field<T, V>,
    target: &Shared<T>,
    range: VectorRange<V>,
    default: V,
    suffixes: &[&str],
) where
    T: 'static,
    V: Copy + Index<usize, Output = f32> + IndexMut<usize> + 'static,
{
    let initial = seed(&field, target, default);
    for (axis, suffix) in suffixes.iter().enumerate() {
        let widget = Widget::slider(range.min[axis], range.max[axis], Some(range.step[axis]));
        let label = format!("{}_{}", field.name(), suffix);
        let weak = Rc::downgrade(target);
        let field = field.clone();
        folder
            .add(label, widget, ControlValue::Number(initial[axis]))
            .on_change(move |value| {
                let Some(v) = value.as_number() else {
                    return;
                };
                with_target(&weak, field.name(), |target| {
                    let mut vector = field.get(target).unwrap_or(default);
                    vector[axis] = v;
                    field.set(target, vector);
                });
            });
    }
}

/// Sliders `{name}_x` and `{name}_y` bound to a 2D vector field
pub fn bind_vector2<T: 'static>(
    folder: &mut Folder,
    field: Field<T, Vector2<f32>>,
    target: &Shared<T>,
    range: VectorRange<Vector2<f32>>,
    default: Vector2<f32>,
) {
    bind_axes(folder, field, target, range, default, &["x", "y"]);
}

/// Sliders `{name}_x`, `{name}_y` and `{name}_z` bound to a 3D vector field
pub fn bind_vector3<T: 'static>(
    folder: &mut Folder,
    field: Field<T, Vector3<f32>>,
    target: &Shared<T>,
    range: VectorRange<Vector3<f32>>,
    default: Vector3<f32>,
) {
    bind_axes(folder, field, target, range, default, &["x", "y", "z"]);
}

/// Creates a folder for `target`, with a master toggle when `enabled` is given
pub fn create_group<'a, T: 'static>(
    panel: &'a mut Panel,
    name: &str,
    target: &Shared<T>,
    enabled: Option<Field<T, bool>>,
) -> Result<&'a mut Folder, PanelError> {
    let folder = panel.add_folder(name)?;
    if let Some(field) = enabled {
        bind_boolean(folder, field.with_name("enabled"), target, false);
    }
    Ok(folder)
}

/// Declarative list of the fields to expose for a `T`
pub struct BindingDescriptor<T> {
    pub enabled: Option<Field<T, bool>>,
    pub booleans: Vec<Field<T, bool>>,
    pub scalars: Vec<(Field<T, f32>, ScalarRange)>,
    pub colors: Vec<Field<T, Color>>,
    pub vector2: Vec<(Field<T, Vector2<f32>>, VectorRange<Vector2<f32>>)>,
    pub vector3: Vec<(Field<T, Vector3<f32>>, VectorRange<Vector3<f32>>)>,
    pub choices: Vec<(Field<T, usize>, Vec<String>)>,
}

impl<T> Default for BindingDescriptor<T> {
    fn default() -> Self {
        Self {
            enabled: None,
            booleans: Vec::new(),
            scalars: Vec::new(),
            colors: Vec::new(),
            vector2: Vec::new(),
            vector3: Vec::new(),
            choices: Vec::new(),
        }
    }
}

impl<T> BindingDescriptor<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_enabled_toggle(mut self, field: Field<T, bool>) -> Self {
        self.enabled = Some(field);
        self
    }

    pub fn boolean(mut self, field: Field<T, bool>) -> Self {
        self.booleans.push(field);
        self
    }

    pub fn scalar(mut self, field: Field<T, f32>, range: ScalarRange) -> Self {
        self.scalars.push((field, range));
        self
    }

    pub fn color(mut self, field: Field<T, Color>) -> Self {
        self.colors.push(field);
        self
    }

    pub fn vector2(mut self, field: Field<T, Vector2<f32>>, range: VectorRange<Vector2<f32>>) -> Self {
        self.vector2.push((field, range));
        self
    }

    pub fn vector3(mut self, field: Field<T, Vector3<f32>>, range: VectorRange<Vector3<f32>>) -> Self {
        self.vector3.push((field, range));
        self
    }

    pub fn choice<S: Into<String>>(
        mut self,
        field: Field<T, usize>,
        options: impl IntoIterator<Item = S>,
    ) -> Self {
        self.choices
            .push((field, options.into_iter().map(Into::into).collect()));
        self
    }

    /// Number of controls the descriptor creates
    pub fn control_count(&self) -> usize {
        usize::from(self.enabled.is_some())
            + self.booleans.len()
            + self.scalars.len()
            + self.colors.len()
            + self.vector2.len() * 2
            + self.vector3.len() * 3
            + self.choices.len()
    }
}

/// Creates a folder named `name` and binds every field of the descriptor
///
/// Controls are added in the order booleans, scalars, colors, 2D vectors,
/// 3D vectors, then choices.
pub fn apply_descriptor<T: 'static>(
    panel: &mut Panel,
    name: &str,
    target: &Shared<T>,
    descriptor: &BindingDescriptor<T>,
) -> Result<FolderId, PanelError> {
    let folder = create_group(panel, name, target, descriptor.enabled.clone())?;

    for field in &descriptor.booleans {
        bind_boolean(folder, field.clone(), target, false);
    }
    for (field, range) in &descriptor.scalars {
        bind_scalar(folder, field.clone(), target, *range, 0.0);
    }
    for field in &descriptor.colors {
        bind_color(folder, field.clone(), target, Color::WHITE);
    }
    for (field, range) in &descriptor.vector2 {
        bind_vector2(folder, field.clone(), target, *range, Vector2::zero());
    }
    for (field, range) in &descriptor.vector3 {
        bind_vector3(folder, field.clone(), target, *range, Vector3::zero());
    }
    for (field, options) in &descriptor.choices {
        let options: Vec<&str> = options.iter().map(String::as_str).collect();
        bind_choice(folder, field.clone(), target, &options, 0);
    }

    debug!("Bound {} controls into '{}'", folder.len(), name);
    Ok(folder.id())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Settings {
        enabled: bool,
        opacity: f32,
        visible: bool,
        color: Color,
        direction: Vector3<f32>,
        offset: Option<Vector2<f32>>,
    }

    impl Switchable for Settings {
        fn is_enabled(&self) -> bool {
            self.enabled
        }

        fn set_enabled(&mut self, enabled: bool) {
            self.enabled = enabled;
        }
    }

    fn settings() -> Shared<Settings> {
        Rc::new(RefCell::new(Settings {
            enabled: true,
            opacity: 0.5,
            visible: true,
            color: Color::WHITE,
            direction: Vector3::new(1.0, 0.0, 0.0),
            offset: None,
        }))
    }

    fn opacity() -> Field<Settings, f32> {
        Field::new("opacity", |s: &Settings| Some(s.opacity), |s, v| s.opacity = v)
    }

    fn visible() -> Field<Settings, bool> {
        Field::new("visible", |s: &Settings| Some(s.visible), |s, v| s.visible = v)
    }

    fn color() -> Field<Settings, Color> {
        Field::new("color", |s: &Settings| Some(s.color), |s, v| s.color = v)
    }

    fn direction() -> Field<Settings, Vector3<f32>> {
        Field::new("direction", |s: &Settings| Some(s.direction), |s, v| s.direction = v)
    }

    fn offset() -> Field<Settings, Vector2<f32>> {
        Field::new("offset", |s: &Settings| s.offset, |s, v| s.offset = Some(v))
    }

    #[test]
    fn test_scalar_edit_writes_target() {
        let target = settings();
        let mut panel = Panel::new("Controls");
        let folder = panel.add_folder("Material").unwrap();
        let id = folder.id();
        bind_scalar(folder, opacity(), &target, ScalarRange::UNIT, 0.0);

        assert_eq!(panel.value(id, "opacity"), Some(&ControlValue::Number(0.5)));
        panel.set_value(id, "opacity", ControlValue::Number(0.2)).unwrap();
        assert_eq!(target.borrow().opacity, 0.2);
    }

    #[test]
    fn test_boolean_edit_writes_target() {
        let target = settings();
        let mut panel = Panel::new("Controls");
        let folder = panel.add_folder("Material").unwrap();
        let id = folder.id();
        bind_boolean(folder, visible(), &target, true);

        panel.set_value(id, "visible", ControlValue::Bool(false)).unwrap();
        assert!(!target.borrow().visible);
    }

    #[test]
    fn test_color_edit_is_normalized() {
        let target = settings();
        target.borrow_mut().color = Color::from_hex(0xff0000);
        let mut panel = Panel::new("Controls");
        let folder = panel.add_folder("Material").unwrap();
        let id = folder.id();
        bind_color(folder, color(), &target, Color::WHITE);

        assert_eq!(
            panel.value(id, "color"),
            Some(&ControlValue::Color([255.0, 0.0, 0.0]))
        );
        panel
            .set_value(id, "color", ControlValue::Color([0.0, 255.0, 0.0]))
            .unwrap();
        assert_eq!(target.borrow().color, Color::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_vector_axes_are_independent() {
        let target = settings();
        let mut panel = Panel::new("Controls");
        let folder = panel.add_folder("Light").unwrap();
        let id = folder.id();
        let range = VectorRange::new(
            Vector3::new(-1.0, 0.0, -5.0),
            Vector3::new(1.0, 2.0, 5.0),
            Vector3::new(0.1, 0.5, 1.0),
        );
        bind_vector3(folder, direction(), &target, range, Vector3::zero());

        let folder = panel.folder(id).unwrap();
        let labels: Vec<_> = folder.controls().iter().map(Control::label).collect();
        assert_eq!(labels, vec!["direction_x", "direction_y", "direction_z"]);
        assert_eq!(
            folder.control("direction_y").unwrap().widget(),
            &Widget::slider(0.0, 2.0, Some(0.5))
        );

        panel
            .set_value(id, "direction_y", ControlValue::Number(0.5))
            .unwrap();
        assert_eq!(target.borrow().direction, Vector3::new(1.0, 0.5, 0.0));

        panel
            .set_value(id, "direction_z", ControlValue::Number(-3.0))
            .unwrap();
        assert_eq!(target.borrow().direction, Vector3::new(1.0, 0.5, -3.0));
    }

    #[test]
    fn test_absent_field_seeds_default() {
        let target = settings();
        let mut panel = Panel::new("Controls");
        let folder = panel.add_folder("Pass").unwrap();
        let id = folder.id();
        bind_vector2(
            folder,
            offset(),
            &target,
            VectorRange::<Vector2<f32>>::splat(-1.0, 1.0, 0.01),
            Vector2::zero(),
        );

        assert_eq!(panel.value(id, "offset_x"), Some(&ControlValue::Number(0.0)));
        assert_eq!(target.borrow().offset, None);

        panel.set_value(id, "offset_y", ControlValue::Number(0.25)).unwrap();
        assert_eq!(target.borrow().offset, Some(Vector2::new(0.0, 0.25)));
    }

    #[test]
    fn test_removed_folder_stops_writes() {
        let target = settings();
        let mut panel = Panel::new("Controls");
        let folder = panel.add_folder("Material").unwrap();
        let id = folder.id();
        bind_scalar(folder, opacity(), &target, ScalarRange::UNIT, 0.0);

        panel.remove_folder(id);
        assert!(panel.set_value(id, "opacity", ControlValue::Number(0.9)).is_err());
        assert_eq!(target.borrow().opacity, 0.5);
    }

    #[test]
    fn test_dropped_target_is_skipped() {
        let target = settings();
        let mut panel = Panel::new("Controls");
        let folder = panel.add_folder("Material").unwrap();
        let id = folder.id();
        bind_scalar(folder, opacity(), &target, ScalarRange::UNIT, 0.0);

        let observer = Rc::downgrade(&target);
        drop(target);
        assert!(observer.upgrade().is_none());
        assert_eq!(panel.set_value(id, "opacity", ControlValue::Number(0.3)), Ok(true));
    }

    #[test]
    fn test_busy_target_is_skipped() {
        let target = settings();
        let mut panel = Panel::new("Controls");
        let folder = panel.add_folder("Material").unwrap();
        let id = folder.id();
        bind_boolean(folder, visible(), &target, true);

        {
            let _guard = target.borrow_mut();
            panel.set_value(id, "visible", ControlValue::Bool(false)).unwrap();
        }
        assert!(target.borrow().visible);
    }

    #[test]
    fn test_apply_descriptor_order_and_toggle() {
        let target = settings();
        let mut panel = Panel::new("Controls");
        let descriptor = BindingDescriptor::<Settings>::new()
            .with_enabled_toggle(Field::enabled())
            .vector3(direction(), VectorRange::<Vector3<f32>>::splat(-1.0, 1.0, 0.1))
            .color(color())
            .scalar(opacity(), ScalarRange::UNIT)
            .boolean(visible());
        assert_eq!(descriptor.control_count(), 7);

        let id = apply_descriptor(&mut panel, "Settings", &target, &descriptor).unwrap();
        let labels: Vec<_> = panel
            .folder(id)
            .unwrap()
            .controls()
            .iter()
            .map(Control::label)
            .collect();
        assert_eq!(
            labels,
            vec!["enabled", "visible", "opacity", "color", "direction_x", "direction_y", "direction_z"]
        );

        panel.set_value(id, "enabled", ControlValue::Bool(false)).unwrap();
        assert!(!target.borrow().enabled);

        assert_eq!(
            apply_descriptor(&mut panel, "Settings", &target, &descriptor),
            Err(PanelError::DuplicateFolder("Settings".to_string()))
        );
    }

    #[test]
    fn test_choice_out_of_range_seeds_default() {
        let target = Rc::new(RefCell::new(7usize));
        let mut panel = Panel::new("Controls");
        let folder = panel.add_folder("Choice").unwrap();
        let id = folder.id();
        let field = Field::new("side", |v: &usize| Some(*v), |v: &mut usize, i| *v = i);
        bind_choice(folder, field, &target, &["FrontSide", "BackSide"], 0);

        assert_eq!(panel.value(id, "side"), Some(&ControlValue::Choice(0)));
        panel.set_value(id, "side", ControlValue::Choice(1)).unwrap();
        assert_eq!(*target.borrow(), 1);
    }
}
