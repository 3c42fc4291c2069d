use std::sync::Arc;

use parking_lot::RwLock;

use crate::paint::Paint;

/// Shared, externally mutable value cell.
///
/// Records reference cells by shared ownership and read the current value at
/// playback time, so an animation driver can retarget position, radius, or
/// paint between playbacks without re-recording the sequence. `Clone` shares
/// the same underlying cell.
pub struct PropertyCell<T> {
    value: Arc<RwLock<T>>,
}

/// Animated scalar cell.
pub type ValueCell = PropertyCell<f32>;

/// Animated paint cell.
pub type PaintCell = PropertyCell<Paint>;

impl<T> PropertyCell<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Arc::new(RwLock::new(value)),
        }
    }

    pub fn set(&self, value: T) {
        *self.value.write() = value;
    }
}

impl<T: Clone> PropertyCell<T> {
    pub fn get(&self) -> T {
        self.value.read().clone()
    }
}

impl<T> Clone for PropertyCell<T> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for PropertyCell<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("PropertyCell").field(&*self.value.read()).finish()
    }
}
