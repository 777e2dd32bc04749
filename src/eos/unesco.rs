//! UNESCO EOS-80 international equation of state of seawater.
//!
//! Density follows the one-atmosphere equation of Millero & Poisson (1981)
//! combined with the secant bulk modulus of Millero et al. (1980). Potential
//! temperature integrates the Bryden (1973) adiabatic lapse rate with the
//! fourth-order Runge-Kutta scheme of Fofonoff (1977).
//!
//! # References
//!
//! - UNESCO (1981): Tenth report of the joint panel on oceanographic tables and standards.
//! - Fofonoff & Millard (1983): Algorithms for computation of fundamental
//!   properties of seawater. UNESCO Tech. Pap. in Mar. Sci. 44.
//!
//! # Units
//!
//! The formulas are written for Practical Salinity, IPTS-68 temperature and
//! pressure in bar. [`SeawaterEos`] inputs are converted on entry:
//! `SP = SA / U_PS`, `T68 = 1.00024 · T90`, `P[bar] = p[dbar] / 10`.

use std::f64::consts::SQRT_2;

use super::{SeawaterEos, practical_from_absolute};

/// Ratio between IPTS-68 and ITS-90 temperatures.
const T68_PER_T90: f64 = 1.00024;

/// Equation of State calculator for seawater (EOS-80).
///
/// This is not TEOS-10. Absolute Salinity is mapped to Practical Salinity
/// with the fixed Reference-Composition factor, which ignores the
/// TEOS-10 salinity anomaly. Near the surface the result sits about
/// 2×10⁻³ kg/m³ below the TEOS-10 Gibbs-function density: for SA =
/// 35.16504 g/kg, t = 10 °C, p = 0 this gives 1026.95200 kg/m³ against
/// 1026.95411 kg/m³ from TEOS-10. Supply a TEOS-10 implementation of
/// [`SeawaterEos`] where that difference matters.
///
/// # Example
/// ```
/// use ocean_scales::eos::{SeawaterEos, Unesco80, absolute_from_practical};
///
/// let eos = Unesco80::new();
///
/// // Surface seawater at 10°C, SP = 35
/// let rho = eos.density(absolute_from_practical(35.0), 10.0, 0.0);
/// assert!((rho - 1026.952).abs() < 1e-3);
///
/// // No adiabatic change without a pressure difference
/// let pt = eos.potential_temperature(35.0, 10.0, 0.0, 0.0);
/// assert!((pt - 10.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Unesco80;

impl Unesco80 {
    /// Create a new EOS-80 calculator.
    pub fn new() -> Self {
        Self
    }

    /// Density of Standard Mean Ocean Water (pure water), kg/m³.
    ///
    /// Bigg (1967) formula; `t68` in °C (IPTS-68).
    pub fn pure_water_density(&self, t68: f64) -> f64 {
        let t = t68;
        999.842594 + 6.793952e-2 * t - 9.095290e-3 * t.powi(2) + 1.001685e-4 * t.powi(3)
            - 1.120083e-6 * t.powi(4)
            + 6.536332e-9 * t.powi(5)
    }

    /// Seawater density at one standard atmosphere, kg/m³.
    ///
    /// # Arguments
    /// * `sp` - Practical salinity
    /// * `t68` - Temperature in °C (IPTS-68)
    pub fn density_surface(&self, sp: f64, t68: f64) -> f64 {
        let t = t68;
        let s = sp;

        let a = 8.24493e-1 - 4.0899e-3 * t + 7.6438e-5 * t.powi(2) - 8.2467e-7 * t.powi(3)
            + 5.3875e-9 * t.powi(4);
        let b = -5.72466e-3 + 1.0227e-4 * t - 1.6546e-6 * t.powi(2);
        let c = 4.8314e-4;

        self.pure_water_density(t) + a * s + b * s.powf(1.5) + c * s.powi(2)
    }

    /// Secant bulk modulus K(S, T, P) in bar.
    ///
    /// `sp` practical salinity, `t68` IPTS-68 temperature, `p_bar` pressure in bar.
    pub fn secant_bulk_modulus(&self, sp: f64, t68: f64, p_bar: f64) -> f64 {
        let t = t68;
        let s = sp;
        let p = p_bar;

        // Pure water terms
        let kw = 19652.21 + 148.4206 * t - 2.327105 * t.powi(2) + 1.360477e-2 * t.powi(3)
            - 5.155288e-5 * t.powi(4);
        let aw = 3.239908 + 1.43713e-3 * t + 1.16092e-4 * t.powi(2) - 5.77905e-7 * t.powi(3);
        let bw = 8.50935e-5 - 6.12293e-6 * t + 5.2787e-8 * t.powi(2);

        // Salinity terms
        let k0 = kw
            + s * (54.6746 - 0.603459 * t + 1.09987e-2 * t.powi(2) - 6.1670e-5 * t.powi(3))
            + s.powf(1.5) * (7.944e-2 + 1.6483e-2 * t - 5.3009e-4 * t.powi(2));
        let a =
            aw + s * (2.2838e-3 - 1.0981e-5 * t - 1.6078e-6 * t.powi(2)) + s.powf(1.5) * 1.91075e-4;
        let b = bw + s * (-9.9348e-7 + 2.0816e-8 * t + 9.1697e-10 * t.powi(2));

        k0 + p * (a + b * p)
    }

    /// In-situ density from practical salinity, kg/m³.
    ///
    /// `t` is ITS-90 temperature in °C and `p` sea pressure in dbar.
    pub fn density_practical(&self, sp: f64, t: f64, p: f64) -> f64 {
        let t68 = t * T68_PER_T90;
        let p_bar = p / 10.0;

        let rho_0 = self.density_surface(sp, t68);
        if p_bar == 0.0 {
            return rho_0;
        }

        rho_0 / (1.0 - p_bar / self.secant_bulk_modulus(sp, t68, p_bar))
    }

    /// Adiabatic temperature gradient (°C/dbar).
    ///
    /// Bryden (1973) polynomial. `t` is ITS-90 temperature in °C.
    ///
    /// Typical value: ~1.1×10⁻⁴ °C/dbar for surface water at 10°C, 35 PSU.
    pub fn adiabatic_lapse_rate(&self, sp: f64, t: f64, p: f64) -> f64 {
        let t = t * T68_PER_T90;
        let ds = sp - 35.0;

        let a = 3.5803e-5 + (8.5258e-6 + (-6.836e-8 + 6.6228e-10 * t) * t) * t;
        let b = (1.8932e-6 - 4.2393e-8 * t) * ds;
        let c = 1.8741e-8 + (-6.7795e-10 + (8.733e-12 - 5.4481e-14 * t) * t) * t;
        let d = (-1.1351e-10 + 2.7759e-12 * t) * ds;
        let e = -4.6206e-13 + (1.8676e-14 - 2.1687e-16 * t) * t;

        a + b + (c + d) * p + e * p * p
    }

    /// Potential temperature from practical salinity (°C, ITS-90).
    ///
    /// Integrates the adiabatic lapse rate from `p` to `p_ref` in a single
    /// fourth-order Runge-Kutta step, carried out on the IPTS-68 scale.
    pub fn potential_temperature_practical(&self, sp: f64, t: f64, p: f64, p_ref: f64) -> f64 {
        let dp = p_ref - p;
        let gamma = |theta68: f64, pressure: f64| {
            dp * self.adiabatic_lapse_rate(sp, theta68 / T68_PER_T90, pressure)
        };

        let mut dth = dp * self.adiabatic_lapse_rate(sp, t, p);
        let mut th = t * T68_PER_T90 + 0.5 * dth;
        let mut q = dth;

        dth = gamma(th, p + 0.5 * dp);
        th += (1.0 - 1.0 / SQRT_2) * (dth - q);
        q = (2.0 - SQRT_2) * dth + (-2.0 + 3.0 / SQRT_2) * q;

        dth = gamma(th, p + 0.5 * dp);
        th += (1.0 + 1.0 / SQRT_2) * (dth - q);
        q = (2.0 + SQRT_2) * dth + (-2.0 - 3.0 / SQRT_2) * q;

        dth = gamma(th, p + dp);
        (th + (dth - 2.0 * q) / 6.0) / T68_PER_T90
    }
}

impl SeawaterEos for Unesco80 {
    fn potential_temperature(&self, sa: f64, t: f64, p: f64, p_ref: f64) -> f64 {
        self.potential_temperature_practical(practical_from_absolute(sa), t, p, p_ref)
    }

    fn density(&self, sa: f64, t: f64, p: f64) -> f64 {
        self.density_practical(practical_from_absolute(sa), t, p)
    }
}
