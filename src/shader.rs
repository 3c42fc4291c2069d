use std::sync::Arc;

use smallvec::SmallVec;

use crate::error::{EncoreError, EncoreResult};

/// Type of a shader uniform slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum UniformType {
    Float,
    Float2,
}

/// One named uniform slot declared by a compiled shader program.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UniformSlot {
    pub name: String,
    pub ty: UniformType,
}

impl UniformSlot {
    pub fn float(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: UniformType::Float,
        }
    }

    pub fn float2(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: UniformType::Float2,
        }
    }
}

/// Handle to an already-compiled shader program.
///
/// Compilation and linking happen elsewhere; the core only needs the declared
/// uniform slots so a builder can write them by name. Programs may be compiled
/// with optional uniform sets, which is why writes to undeclared names are
/// silently skipped rather than treated as errors.
#[derive(Debug)]
pub struct ShaderEffect {
    slots: Vec<UniformSlot>,
}

impl ShaderEffect {
    pub fn with_uniforms(slots: Vec<UniformSlot>) -> EncoreResult<Self> {
        for (i, slot) in slots.iter().enumerate() {
            if slots[..i].iter().any(|s| s.name == slot.name) {
                return Err(EncoreError::validation(format!(
                    "duplicate uniform slot '{}'",
                    slot.name
                )));
            }
        }
        Ok(Self { slots })
    }

    pub fn slots(&self) -> &[UniformSlot] {
        &self.slots
    }

    fn slot_index(&self, name: &str, ty: UniformType) -> Option<usize> {
        self.slots
            .iter()
            .position(|s| s.name == name && s.ty == ty)
    }
}

/// Resolved value of one uniform slot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UniformValue {
    Float(f32),
    Float2([f32; 2]),
}

impl UniformValue {
    fn default_for(ty: UniformType) -> Self {
        match ty {
            UniformType::Float => Self::Float(0.0),
            UniformType::Float2 => Self::Float2([0.0, 0.0]),
        }
    }

    pub fn as_float(self) -> Option<f32> {
        match self {
            Self::Float(v) => Some(v),
            Self::Float2(_) => None,
        }
    }

    pub fn as_float2(self) -> Option<[f32; 2]> {
        match self {
            Self::Float(_) => None,
            Self::Float2(v) => Some(v),
        }
    }
}

/// Accumulates uniform values for one shader instantiation.
///
/// Writes address slots by name; a name the program does not declare (or
/// declares with a different type) is skipped without effect. Slots never
/// written keep their zero default.
pub struct ShaderBuilder {
    effect: Arc<ShaderEffect>,
    values: SmallVec<[Option<UniformValue>; 12]>,
}

impl ShaderBuilder {
    pub fn new(effect: Arc<ShaderEffect>) -> Self {
        let values = SmallVec::from_elem(None, effect.slots().len());
        Self { effect, values }
    }

    pub fn set_float(&mut self, name: &str, value: f32) {
        if let Some(i) = self.effect.slot_index(name, UniformType::Float) {
            self.values[i] = Some(UniformValue::Float(value));
        }
    }

    pub fn set_float2(&mut self, name: &str, a: f32, b: f32) {
        if let Some(i) = self.effect.slot_index(name, UniformType::Float2) {
            self.values[i] = Some(UniformValue::Float2([a, b]));
        }
    }

    pub fn build(self) -> Shader {
        let values = self
            .effect
            .slots()
            .iter()
            .zip(&self.values)
            .map(|(slot, &value)| value.unwrap_or(UniformValue::default_for(slot.ty)))
            .collect();
        Shader {
            effect: self.effect,
            values,
        }
    }
}

/// A shader program with fully resolved uniform values, attachable to
/// [`Paint::shader`](crate::paint::Paint).
#[derive(Clone, Debug)]
pub struct Shader {
    effect: Arc<ShaderEffect>,
    values: SmallVec<[UniformValue; 12]>,
}

impl Shader {
    pub fn effect(&self) -> &Arc<ShaderEffect> {
        &self.effect
    }

    pub fn uniform(&self, name: &str) -> Option<UniformValue> {
        let i = self.effect.slots().iter().position(|s| s.name == name)?;
        Some(self.values[i])
    }
}

impl PartialEq for Shader {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.effect, &other.effect) && self.values == other.values
    }
}
