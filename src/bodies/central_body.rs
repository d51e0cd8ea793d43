use std::fmt;

use crate::lunisolar_errors::LunisolarError;

/// Reference origin relative to which a body's position/velocity is expressed.
///
/// The set is closed: new members would require new coefficient tables, so the
/// composition logic pattern-matches exhaustively over this enum. The integer
/// ids follow the NAIF numbering so that external identifiers can be mapped at
/// the API boundary via [`CentralBody::from_id`] / [`TryFrom<i32>`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CentralBody {
    /// Solar System Barycenter
    Ssb = 0,
    /// Sun
    Sun = 10,
    /// Moon
    Moon = 301,
    /// Earth
    Earth = 399,
}

impl CentralBody {
    /// Resolve a NAIF-style integer id into a `CentralBody`.
    ///
    /// Unknown ids are a contract violation by the caller and yield
    /// [`LunisolarError::InvalidCentralBodyId`].
    pub fn from_id(id: i32) -> Result<Self, LunisolarError> {
        match id {
            0 => Ok(CentralBody::Ssb),
            10 => Ok(CentralBody::Sun),
            301 => Ok(CentralBody::Moon),
            399 => Ok(CentralBody::Earth),
            _ => Err(LunisolarError::InvalidCentralBodyId(id)),
        }
    }

    /// NAIF-style integer id of this body.
    pub fn to_id(&self) -> i32 {
        *self as i32
    }
}

impl From<CentralBody> for i32 {
    fn from(central_body: CentralBody) -> Self {
        central_body.to_id()
    }
}

impl TryFrom<i32> for CentralBody {
    type Error = LunisolarError;

    fn try_from(id: i32) -> Result<Self, Self::Error> {
        CentralBody::from_id(id)
    }
}

impl fmt::Display for CentralBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CentralBody::Ssb => "Solar System Barycenter",
            CentralBody::Sun => "Sun",
            CentralBody::Moon => "Moon",
            CentralBody::Earth => "Earth",
        };
        write!(f, "{s}")
    }
}
