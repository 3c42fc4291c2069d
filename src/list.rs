use crate::{ops::CanvasOp, surface::Surface};

/// Append-only sequence of recorded canvas operations.
///
/// Insertion order is replay order is semantic order: state changes apply to
/// the draws that follow them, and save/restore pairing is the recorder's
/// obligation. Nothing is ever reordered or deduplicated.
#[derive(Clone, Debug, Default)]
pub struct DisplayList {
    ops: Vec<CanvasOp>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, op: CanvasOp) {
        self.ops.push(op);
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn ops(&self) -> &[CanvasOp] {
        &self.ops
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CanvasOp> {
        self.ops.iter()
    }

    /// Replay the sequence front to back against `surface`.
    ///
    /// Every playable record issues exactly its captured call; grouping
    /// markers and layer/node records are skipped. Playback is a finite,
    /// synchronous walk and always completes once entered.
    #[tracing::instrument(level = "trace", skip_all, fields(ops = self.ops.len()))]
    pub fn playback(&self, surface: &mut dyn Surface) {
        let mut drawn = 0usize;
        for op in &self.ops {
            if let Some(drawable) = op.as_drawable() {
                drawable.draw(surface);
                drawn += 1;
            }
        }
        tracing::trace!(drawn, skipped = self.ops.len() - drawn, "replayed display list");
    }
}

impl Extend<CanvasOp> for DisplayList {
    fn extend<I: IntoIterator<Item = CanvasOp>>(&mut self, iter: I) {
        self.ops.extend(iter);
    }
}

impl FromIterator<CanvasOp> for DisplayList {
    fn from_iter<I: IntoIterator<Item = CanvasOp>>(iter: I) -> Self {
        Self {
            ops: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a DisplayList {
    type Item = &'a CanvasOp;
    type IntoIter = std::slice::Iter<'a, CanvasOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}
