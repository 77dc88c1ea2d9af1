//! Layer Masks
//!
//! Bit `i` of a mask marks membership in logical layer `i`. Layer indices are
//! expected in `[0, 31]`. Other values are not rejected: the shift count
//! wraps modulo 32 as it does for the host's 32-bit integers, so layer 33
//! tests bit 1 and layer -1 tests bit 31.

use serde::{Deserialize, Serialize};

/// A 32-bit set of layers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerMask(pub u32);

impl LayerMask {
    pub const NONE: LayerMask = LayerMask(0);
    pub const ALL: LayerMask = LayerMask(u32::MAX);

    pub fn from_layers(layers: impl IntoIterator<Item = i32>) -> Self {
        layers
            .into_iter()
            .fold(Self::NONE, |mask, layer| mask.with_layer(layer))
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    /// Whether bit `layer` is set.
    pub fn contains(self, layer: i32) -> bool {
        self.0 & layer_bit(layer) != 0
    }

    /// Whether the object's layer is part of this mask.
    pub fn contains_object<L: Layered + ?Sized>(self, object: &L) -> bool {
        self.contains(object.layer())
    }

    pub fn with_layer(self, layer: i32) -> Self {
        Self(self.0 | layer_bit(layer))
    }

    pub fn without_layer(self, layer: i32) -> Self {
        Self(self.0 & !layer_bit(layer))
    }
}

impl From<u32> for LayerMask {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}

/// Host capability: an object assigned to a single layer.
pub trait Layered {
    fn layer(&self) -> i32;
}

fn layer_bit(layer: i32) -> u32 {
    1u32.wrapping_shl(layer as u32)
}
