use rand::prelude::*;

use crate::*;

/// Rendered sizes the scrambler needs to keep every button inside the container.
pub trait BoardMetrics {
    fn container(&self) -> Extent;
    fn button(&self, id: ButtonId) -> Extent;
}

/// Metrics where every button has the same size, mostly useful off-screen.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FixedMetrics {
    pub container: Extent,
    pub button: Extent,
}

impl BoardMetrics for FixedMetrics {
    fn container(&self) -> Extent {
        self.container
    }

    fn button(&self, _id: ButtonId) -> Extent {
        self.button
    }
}

/// Uniform position with `x` in `[0, container.width - button.width)` and likewise for `y`.
///
/// An axis where the button does not fit with room to spare collapses to 0.
pub fn random_position<R: Rng + ?Sized>(rng: &mut R, container: Extent, button: Extent) -> Position {
    let (max_x, max_y) = container.max_offset(button);
    let mut pick = |max: Pixels| if max == 0 { 0 } else { rng.random_range(0..max) };
    let x = pick(max_x);
    let y = pick(max_y);
    Position::new(x, y)
}
