//! Animator Parameter Query
//!
//! Looks up whether an animation controller exposes a parameter with a given
//! name and kind. The controller itself belongs to the host; this module only
//! reads its parameter list.

use serde::{Deserialize, Serialize};

/// Kind of an animator parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParameterKind {
    Float,
    Int,
    Bool,
    Trigger,
}

/// A single named parameter on an animator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimatorParameter {
    pub name: String,
    pub kind: ParameterKind,
}

impl AnimatorParameter {
    pub fn new(name: impl Into<String>, kind: ParameterKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Host capability: a controller with a queryable parameter list.
pub trait Animator {
    fn parameters(&self) -> &[AnimatorParameter];
}

/// Parameter queries available on every [`Animator`].
pub trait AnimatorExt: Animator {
    /// Check whether a parameter with exactly this name and kind exists.
    ///
    /// A missing or empty name returns `false` without scanning.
    fn has_parameter(&self, name: Option<&str>, kind: ParameterKind) -> bool {
        let Some(name) = name.filter(|n| !n.is_empty()) else {
            return false;
        };
        self.parameters()
            .iter()
            .any(|p| p.kind == kind && p.name == name)
    }
}

impl<A: Animator + ?Sized> AnimatorExt for A {}

/// Plain parameter list, usable wherever an [`Animator`] is expected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterList {
    pub parameters: Vec<AnimatorParameter>,
}

impl ParameterList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style add.
    pub fn with(mut self, name: impl Into<String>, kind: ParameterKind) -> Self {
        self.push(name, kind);
        self
    }

    pub fn push(&mut self, name: impl Into<String>, kind: ParameterKind) {
        self.parameters.push(AnimatorParameter::new(name, kind));
    }
}

impl Animator for ParameterList {
    fn parameters(&self) -> &[AnimatorParameter] {
        &self.parameters
    }
}
