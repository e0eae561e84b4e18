//! Link budget: from laser and detector parameters to expected photon counts

use units::{
    Area, Energy, Frequency, Length, Power, Ratio, Time,
    C, PLANCK, joule, m, m2_, m_, m_s_, nm, ratio_, watt,
    todo::{Bandwidthf64, Irradiancef64, Photonsf64, Ratiof64},
};

use crate::SimulationParameters;

/// Wavelength of the illuminating laser
pub fn laser_wavelength() -> Length { nm(780.0) }

/// Empirical factor coupling filtered solar irradiance into the receiver
pub const BACKGROUND_COUPLING: f64 = 1e-4;

/// Energy carried by a single photon of the given wavelength: `h c / λ`
pub fn photon_energy(wavelength: Length) -> Energy {
    joule(PLANCK * m_s_(C) / m_(wavelength))
}

/// The subset of `SimulationParameters` which determines photon budgets, with
/// the per-run constants precomputed.
#[derive(Clone, Debug)]
pub struct Radiometry {
    reflectivity: Ratiof64,
    system_efficiency: Ratiof64,
    quantum_efficiency: Ratiof64,
    aperture_area: Area,
    photon_energy: Energy,
    solar_irradiance: Irradiancef64,
    filter_bandwidth: Bandwidthf64,
    dark_count_rate: Frequency,
}

impl Radiometry {

    pub fn new(p: &SimulationParameters) -> Self {
        let radius = p.aperture_diameter / 2.0;
        Self {
            reflectivity:       p.reflectivity,
            system_efficiency:  p.system_efficiency,
            quantum_efficiency: p.quantum_efficiency,
            aperture_area:      radius * radius * std::f64::consts::PI,
            photon_energy:      photon_energy(laser_wavelength()),
            solar_irradiance:   p.solar_irradiance,
            filter_bandwidth:   p.filter_bandwidth,
            dark_count_rate:    p.dark_count_rate,
        }
    }

    pub fn photon_energy(&self) -> Energy { self.photon_energy }

    /// Receiver aperture area `π (d/2)²`
    pub fn aperture_area(&self) -> Area { self.aperture_area }

    /// Expected number of signal photons detected from a pulse of energy
    /// `pulse_energy` reflected off a Lambertian target at `distance`.
    ///
    /// Non-positive distances give zero rather than a division error.
    pub fn received_photons(&self, pulse_energy: Energy, distance: Length) -> Photonsf64 {
        if !(distance > m(0.0)) { return 0.0 }
        let n_tx: Ratio = pulse_energy / self.photon_energy;
        let solid_angle: Ratio = self.aperture_area / (distance * distance);
        let lambertian = self.reflectivity / std::f64::consts::PI;
        ratio_(n_tx * solid_angle)
            * self.system_efficiency
            * lambertian
            * self.quantum_efficiency
    }

    /// Optical power of filtered background light entering the aperture
    pub fn background_power(&self) -> Power {
        watt(self.solar_irradiance * self.filter_bandwidth * m2_(self.aperture_area) * BACKGROUND_COUPLING)
    }

    /// Rate of detected background photons plus dark counts
    pub fn noise_rate(&self) -> Frequency {
        let photon_rate: Frequency = self.background_power() / self.photon_energy;
        photon_rate * self.system_efficiency * self.quantum_efficiency + self.dark_count_rate
    }

    /// Expected number of noise events (background photons and dark counts)
    /// within an integration window of length `window`.
    pub fn background_noise(&self, window: Time) -> Photonsf64 {
        ratio_(self.noise_rate() * window)
    }
}
