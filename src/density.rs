//! Potential density of seawater.
//!
//! Potential density is the density a water parcel would have if moved
//! adiabatically from its in-situ pressure `p` to a reference pressure `pr`:
//!
//! ```text
//! θ = θ(SA, t, p, pr)      potential temperature at pr
//! ρθ = ρ(SA, θ, pr)        in-situ density at pr
//! ```
//!
//! Salinity and temperature are full fields; pressure and reference pressure
//! may be scalars, row or column vectors, or full fields (see
//! [`broadcast_to`]). The reference pressure must hold a single value.
//!
//! # Example
//!
//! ```
//! use ocean_scales::density::potential_density;
//! use ocean_scales::field::Field;
//!
//! let sa = Field::from_column(&[34.9, 35.0, 35.1]);
//! let t = Field::from_column(&[12.0, 6.0, 2.5]);
//! let p = Field::from_column(&[10.0, 500.0, 2000.0]);
//!
//! let sigma0 = potential_density(&sa, &t, &p, &Field::scalar(0.0)).unwrap();
//! assert!(sigma0.get(2, 0) > sigma0.get(0, 0));
//! ```

use crate::eos::{SIGMA_OFFSET, SeawaterEos, Unesco80};
use crate::error::{Result, ScaleError};
use crate::field::{Field, Orientation, broadcast_to, unique_value};

/// Number of arguments taken by [`potential_density_from_args`].
const N_ARGS: usize = 4;

/// Potential density (kg/m³) using the default equation of state.
///
/// # Arguments
/// * `sa` - Absolute salinity (g/kg)
/// * `t` - In-situ temperature (°C, ITS-90), same shape as `sa`
/// * `p` - Sea pressure (dbar), broadcastable to the shape of `sa`
/// * `pr` - Reference sea pressure (dbar), broadcastable and single-valued
///
/// # Errors
/// * [`ScaleError::ShapeMismatch`] if `t` differs in shape from `sa`, or `p`/`pr`
///   cannot be broadcast to it
/// * [`ScaleError::NonUniqueReferencePressure`] if `pr` holds several values
pub fn potential_density(sa: &Field, t: &Field, p: &Field, pr: &Field) -> Result<Field> {
    potential_density_with(&Unesco80::new(), sa, t, p, pr)
}

/// Potential density with a caller-supplied equation of state.
pub fn potential_density_with<E: SeawaterEos + ?Sized>(
    eos: &E,
    sa: &Field,
    t: &Field,
    p: &Field,
    pr: &Field,
) -> Result<Field> {
    let shape = sa.shape();
    if t.shape() != shape {
        return Err(ScaleError::shape_mismatch("t", shape, t.shape()));
    }

    unique_value(pr)?;

    let p = broadcast_to(p, shape, "p")?;
    let pr = broadcast_to(pr, shape, "pr")?;

    Orientation::scoped(sa, [sa.clone(), t.clone(), p, pr], |[sa, t, p, pr]| {
        let pt = Field::from_fn(sa.shape(), |i, j| {
            eos.potential_temperature(sa.get(i, j), t.get(i, j), p.get(i, j), pr.get(i, j))
        });

        Ok(Field::from_fn(sa.shape(), |i, j| {
            eos.density(sa.get(i, j), pt.get(i, j), pr.get(i, j))
        }))
    })
}

/// Potential density from a variable-length argument list `[sa, t, p, pr]`.
///
/// Fails with [`ScaleError::Arity`] unless exactly four fields are given.
pub fn potential_density_from_args(args: &[Field]) -> Result<Field> {
    match args {
        [sa, t, p, pr] => potential_density(sa, t, p, pr),
        _ => Err(ScaleError::Arity {
            expected: N_ARGS,
            actual: args.len(),
        }),
    }
}

/// Potential density anomaly σ = ρθ - 1000 kg/m³.
pub fn potential_density_anomaly(sa: &Field, t: &Field, p: &Field, pr: &Field) -> Result<Field> {
    potential_density(sa, t, p, pr).map(|rho| rho.map(|v| v - SIGMA_OFFSET))
}
