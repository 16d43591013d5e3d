//! Post-processing passes and the chain that runs them
//!
//! A [`ShaderPass`] is a full-screen effect parameterised by named
//! [`Uniforms`]. Bloom and glitch passes are configured through plain fields
//! and are rebuilt, not mutated, when their settings change.

use std::collections::HashMap;

use cgmath::{Vector2, Vector3};

use super::color::Color;

/// Value of a shader uniform
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Bool(bool),
    Float(f32),
    Color(Color),
    Vec2(Vector2<f32>),
    Vec3(Vector3<f32>),
}

/// Conversion between a Rust value and a [`UniformValue`]
pub trait UniformKind: Sized {
    /// None when the uniform holds a value of another kind
    fn from_uniform(value: &UniformValue) -> Option<Self>;

    fn into_uniform(self) -> UniformValue;
}

impl UniformKind for bool {
    fn from_uniform(value: &UniformValue) -> Option<Self> {
        match value {
            UniformValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    fn into_uniform(self) -> UniformValue {
        UniformValue::Bool(self)
    }
}

impl UniformKind for f32 {
    fn from_uniform(value: &UniformValue) -> Option<Self> {
        match value {
            UniformValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    fn into_uniform(self) -> UniformValue {
        UniformValue::Float(self)
    }
}

impl UniformKind for Color {
    fn from_uniform(value: &UniformValue) -> Option<Self> {
        match value {
            UniformValue::Color(v) => Some(*v),
            _ => None,
        }
    }

    fn into_uniform(self) -> UniformValue {
        UniformValue::Color(self)
    }
}

impl UniformKind for Vector2<f32> {
    fn from_uniform(value: &UniformValue) -> Option<Self> {
        match value {
            UniformValue::Vec2(v) => Some(*v),
            _ => None,
        }
    }

    fn into_uniform(self) -> UniformValue {
        UniformValue::Vec2(self)
    }
}

impl UniformKind for Vector3<f32> {
    fn from_uniform(value: &UniformValue) -> Option<Self> {
        match value {
            UniformValue::Vec3(v) => Some(*v),
            _ => None,
        }
    }

    fn into_uniform(self) -> UniformValue {
        UniformValue::Vec3(self)
    }
}

/// Named uniforms of a shader pass
///
/// A uniform can be declared without a value; readers treat it like an
/// absent one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Uniforms {
    values: HashMap<String, Option<UniformValue>>,
}

impl Uniforms {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a uniform without a value, keeping any existing value
    pub fn declare(&mut self, key: impl Into<String>) {
        self.values.entry(key.into()).or_insert(None);
    }

    pub fn set(&mut self, key: impl Into<String>, value: UniformValue) {
        self.values.insert(key.into(), Some(value));
    }

    pub fn with(mut self, key: impl Into<String>, value: UniformValue) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&UniformValue> {
        self.values.get(key).and_then(Option::as_ref)
    }

    /// Typed read; None if absent, unset or of another kind
    pub fn value<V: UniformKind>(&self, key: &str) -> Option<V> {
        self.get(key).and_then(V::from_uniform)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Full-screen effect driven by uniforms
#[derive(Debug, Clone, PartialEq)]
pub struct ShaderPass {
    pub name: String,
    pub enabled: bool,
    pub uniforms: Uniforms,
}

impl ShaderPass {
    pub fn new(name: impl Into<String>, uniforms: Uniforms) -> Self {
        Self {
            name: name.into(),
            enabled: true,
            uniforms,
        }
    }

    /// Film grain and scanlines
    pub fn film() -> Self {
        Self::new(
            "FilmPass",
            Uniforms::new()
                .with("time", UniformValue::Float(0.0))
                .with("grayscale", UniformValue::Bool(false))
                .with("nIntensity", UniformValue::Float(0.5))
                .with("sIntensity", UniformValue::Float(0.05))
                .with("sCount", UniformValue::Float(4096.0)),
        )
    }

    pub fn dot_screen() -> Self {
        Self::new(
            "DotScreenPass",
            Uniforms::new()
                .with("center", UniformValue::Vec2(Vector2::new(0.5, 0.5)))
                .with("angle", UniformValue::Float(1.57))
                .with("scale", UniformValue::Float(1.0))
                .with("tSize", UniformValue::Vec2(Vector2::new(256.0, 256.0))),
        )
    }

    pub fn sepia() -> Self {
        Self::new(
            "SepiaShader",
            Uniforms::new().with("amount", UniformValue::Float(1.0)),
        )
    }

    pub fn colorify() -> Self {
        Self::new(
            "ColorifyShader",
            Uniforms::new().with("color", UniformValue::Color(Color::WHITE)),
        )
    }
}

/// Gaussian bloom
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BloomPass {
    pub strength: f32,
    pub kernel_size: u32,
    pub sigma: f32,
}

impl BloomPass {
    pub fn new(strength: f32, kernel_size: u32, sigma: f32) -> Self {
        Self {
            strength,
            kernel_size,
            sigma,
        }
    }
}

impl Default for BloomPass {
    fn default() -> Self {
        Self::new(1.0, 25, 4.0)
    }
}

/// Random digital glitches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlitchPass {
    /// Size of the generated noise texture
    pub dt_size: u32,
    pub go_wild: bool,
}

impl GlitchPass {
    pub fn new(dt_size: u32) -> Self {
        Self {
            dt_size,
            go_wild: false,
        }
    }
}

impl Default for GlitchPass {
    fn default() -> Self {
        Self::new(64)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Pass {
    Shader(ShaderPass),
    Bloom(BloomPass),
    Glitch(GlitchPass),
}

impl Pass {
    pub fn name(&self) -> &str {
        match self {
            Pass::Shader(pass) => &pass.name,
            Pass::Bloom(_) => "BloomPass",
            Pass::Glitch(_) => "GlitchPass",
        }
    }

    pub fn is_enabled(&self) -> bool {
        match self {
            Pass::Shader(pass) => pass.enabled,
            Pass::Bloom(_) | Pass::Glitch(_) => true,
        }
    }
}

impl From<ShaderPass> for Pass {
    fn from(pass: ShaderPass) -> Self {
        Pass::Shader(pass)
    }
}

impl From<BloomPass> for Pass {
    fn from(pass: BloomPass) -> Self {
        Pass::Bloom(pass)
    }
}

impl From<GlitchPass> for Pass {
    fn from(pass: GlitchPass) -> Self {
        Pass::Glitch(pass)
    }
}

/// Ordered chain of post-processing passes
#[derive(Debug, Clone, Default)]
pub struct EffectComposer {
    passes: Vec<Pass>,
}

impl EffectComposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a pass and returns its index
    pub fn add_pass(&mut self, pass: impl Into<Pass>) -> usize {
        self.passes.push(pass.into());
        self.passes.len() - 1
    }

    /// Swaps the pass at `index`, returning the previous one
    pub fn replace_pass(&mut self, index: usize, pass: impl Into<Pass>) -> Option<Pass> {
        let slot = self.passes.get_mut(index)?;
        let previous = std::mem::replace(slot, pass.into());
        log::debug!("Replaced pass {} at index {}", previous.name(), index);
        Some(previous)
    }

    pub fn remove_pass(&mut self, index: usize) -> Option<Pass> {
        (index < self.passes.len()).then(|| self.passes.remove(index))
    }

    pub fn passes(&self) -> &[Pass] {
        &self.passes
    }

    /// Passes that will run this frame, in order
    pub fn active_passes(&self) -> impl Iterator<Item = &Pass> {
        self.passes.iter().filter(|pass| pass.is_enabled())
    }
}
