//! Farm-level auxiliary calculation models.

use std::fmt;

use super::Model;

/// A calculation run over the farm as a whole, after the flow is known.
pub trait FarmCalcModel: Model {}

/// Inter-turbine cable layout by minimum spanning tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CablesMst;

impl Model for CablesMst {}
impl FarmCalcModel for CablesMst {}

impl fmt::Display for CablesMst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CablesMST()")
    }
}
