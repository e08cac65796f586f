//! Layer composition.
//!
//! Each function here turns [`DerivedConstants`](crate::kernel::DerivedConstants)
//! (and, for markers, the shared [`SymbolSet`](crate::symbols::SymbolSet)) into
//! one [`Layer`](windrose_core::draw::Layer) of placements. Composers are pure:
//! the same inputs always yield the same placements in the same order.
//!
//! | Layer | Placements (n primary divisions) |
//! |-------|----------------------------------|
//! | wind lines | `4n` spokes |
//! | rings | 6 circles |
//! | small triangles | `2n` |
//! | large triangles | `n` |
//! | diamonds | `n` |
//! | labels | 8 when `n == 8`, otherwise none |
//! | degree ring | 360 ticks + 1 circle |

mod background;
mod degrees;
mod labels;
mod markers;

pub use background::{rings, wind_lines};
pub use degrees::degree_ring;
pub use labels::{CARDINAL_LETTERS, labels};
pub use markers::{diamonds, large_triangles, small_triangles};
