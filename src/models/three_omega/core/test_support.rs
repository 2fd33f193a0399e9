use uom::si::{
    angular_velocity::radian_per_second,
    f64::{AngularVelocity, Length},
    length::{meter, micrometer},
};

use super::{
    BoundaryCondition, InPlane, IntegrationConfig, LayerColumns, LayerStack, Session,
};

pub(crate) fn micrometers(value: f64) -> Length {
    Length::new::<micrometer>(value)
}

pub(crate) fn rad_per_s(values: &[f64]) -> Vec<AngularVelocity> {
    values
        .iter()
        .map(|&w| AngularVelocity::new::<radian_per_second>(w))
        .collect()
}

/// `n` angular frequencies spaced geometrically between `lo` and `hi`.
pub(crate) fn log_omegas(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    let ratio = hi / lo;
    (0..n)
        .map(|k| lo * ratio.powf(k as f64 / (n - 1) as f64))
        .collect()
}

pub(crate) fn session(omegas: &[f64], config: IntegrationConfig) -> Session {
    Session::builder()
        .frequencies(rad_per_s(omegas))
        .integration(config)
        .build()
        .unwrap()
}

/// A thin dielectric film on a semi-infinite substrate.
pub(crate) fn film_on_substrate() -> LayerStack {
    LayerStack::from_columns(
        LayerColumns {
            thickness: &[2.0e-7, f64::INFINITY],
            ky: &[1.4, 148.0],
            in_plane: InPlane::Ratio(&[1.0, 1.0]),
            cv: &[1.6e6, 1.65e6],
            rc: None,
        },
        micrometers(10.0),
        BoundaryCondition::SemiInfinite,
    )
    .unwrap()
}

/// Three anisotropic layers with resistive interfaces on a finite substrate.
pub(crate) fn resistive_stack(boundary: BoundaryCondition) -> LayerStack {
    LayerStack::from_columns(
        LayerColumns {
            thickness: &[2.0e-7, 5.0e-6, 5.0e-4],
            ky: &[1.5, 20.0, 150.0],
            in_plane: InPlane::Ratio(&[1.2, 0.8, 1.0]),
            cv: &[1.5e6, 2.0e6, 1.6e6],
            rc: Some(&[1.0e-8, 2.0e-8, 5.0e-9]),
        },
        micrometers(20.0),
        boundary,
    )
    .unwrap()
}

/// The same stack as [`resistive_stack`] with ideal interfaces.
pub(crate) fn ideal_stack(boundary: BoundaryCondition) -> LayerStack {
    LayerStack::from_columns(
        LayerColumns {
            thickness: &[2.0e-7, 5.0e-6, 5.0e-4],
            ky: &[1.5, 20.0, 150.0],
            in_plane: InPlane::Ratio(&[1.2, 0.8, 1.0]),
            cv: &[1.5e6, 2.0e6, 1.6e6],
            rc: None,
        },
        micrometers(20.0),
        boundary,
    )
    .unwrap()
}

/// Thin film, interlayer and thick substrate used for sweep checks.
pub(crate) fn three_layer_sample() -> LayerStack {
    LayerStack::from_columns(
        LayerColumns {
            thickness: &[5.0e-8, 3.0e-6, 3.0e-4],
            ky: &[1.0, 10.0, 100.0],
            in_plane: InPlane::Conductivity(&[1.0, 10.0, 100.0]),
            cv: &[1.706e6, 2.124e6, 1.630e6],
            rc: None,
        },
        Length::new::<meter>(3.4285e-5),
        BoundaryCondition::SemiInfinite,
    )
    .unwrap()
}
