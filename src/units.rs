use derive_more::{Add, AddAssign, Deref, Display, From, Into, MulAssign, Sub, Sum};
use serde::{Deserialize, Serialize};

/// A length in PDF user-space points (1/72 of an inch). All page geometry in
/// this crate is expressed in points.
///
/// Displays the way it is written into the file, so whole values render
/// without a fractional part (`Pt(54.0)` renders as `54`).
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    MulAssign,
    Sum,
    Deref,
    Display,
    From,
    Into,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct Pt(pub f32);

/// A length in inches, convertible into [Pt].
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, Sub, Display, From, Into)]
pub struct In(pub f32);

impl From<In> for Pt {
    fn from(value: In) -> Self {
        Pt(value.0 * 72.0)
    }
}

impl std::ops::Mul<f32> for Pt {
    type Output = Pt;

    fn mul(self, rhs: f32) -> Self::Output {
        Pt(self.0 * rhs)
    }
}

impl std::ops::Div<Pt> for Pt {
    type Output = f32;

    fn div(self, rhs: Pt) -> Self::Output {
        self.0 / rhs.0
    }
}
