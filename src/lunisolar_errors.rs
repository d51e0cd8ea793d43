use thiserror::Error;

/// Error type shared by every fallible operation of the crate.
///
/// All failures are synchronous and non-recoverable by the engine: they signal
/// either caller misuse (an unknown central-body id, malformed table data) or a
/// genuine domain-boundary violation (a query time outside the coefficient
/// span). No operation retries and no partial vector is ever returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LunisolarError {
    #[error("Chebyshev coefficient slice must contain at least two values")]
    NotEnoughCoefficients,

    #[error("value x = {x} lies outside of the interpolant range [{lb}, {ub}]")]
    OutsideInterpolantRange { x: f64, lb: f64, ub: f64 },

    #[error(
        "time {mjdj2k} MJD(J2000, TDB) is outside of the span covered by the \
         ephemeris table [{start}, {stop}]"
    )]
    TimeOutOfRange {
        mjdj2k: f64,
        start: f64,
        stop: f64,
    },

    #[error("unexpected central body id: {0}")]
    InvalidCentralBodyId(i32),

    #[error("invalid ephemeris table dimensions: {0}")]
    InvalidTableDimensions(String),
}
