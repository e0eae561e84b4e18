/// Quantities which are simply type aliases for `f64` rather than having an
/// implementation as a `uom` `Quantity`.
///
/// This may be because:
///
/// + `uom` has no matching quantity (spectral irradiance per nm of filter
///   bandwidth is the prime example).
///
/// + They are dimensionless counts, for which a `Ratio` adds noise but no
///   safety.

/// Solar spectral irradiance, W m⁻² nm⁻¹
pub type Irradiancef64 = f64;
/// Optical filter bandwidth, nm
pub type Bandwidthf64  = f64;
/// Expected (not necessarily integral) number of photons or events
pub type Photonsf64    = f64;
/// Efficiencies and reflectivities, in [0, 1]
pub type Ratiof64      = f64;
