//! Coordinates and toroidal wrap-around arithmetic.

use serde::{Deserialize, Serialize};

/// Signed (x, y) pair used both as an absolute grid position and as a
/// relative offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by (dx, dy). No bounds checking is performed.
    #[inline]
    pub const fn translate(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Wrap onto a `width` x `height` torus with a single add/subtract
    /// correction per axis.
    ///
    /// Only valid when the coordinate lies at most one width (height) outside
    /// the grid. Neighbourhood offsets never exceed 2 and environments are at
    /// least 3 cells wide, so lookups made by the rule engine always qualify.
    #[inline]
    pub fn wrap(self, width: usize, height: usize) -> Self {
        let (w, h) = (width as i32, height as i32);
        let mut wrapped = self;

        if wrapped.x < 0 {
            wrapped.x += w;
        } else if wrapped.x >= w {
            wrapped.x -= w;
        }
        if wrapped.y < 0 {
            wrapped.y += h;
        } else if wrapped.y >= h {
            wrapped.y -= h;
        }

        debug_assert!(
            (0..w).contains(&wrapped.x) && (0..h).contains(&wrapped.y),
            "{:?} is more than one grid dimension outside {}x{}",
            self,
            width,
            height
        );
        wrapped
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Translate every coordinate in place.
pub fn translate_all(coords: &mut [Coordinate], dx: i32, dy: i32) {
    for coord in coords.iter_mut() {
        *coord = coord.translate(dx, dy);
    }
}
