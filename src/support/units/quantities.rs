use uom::{
    si::{
        ISQ, Quantity, SI,
        area::square_meter,
        f64::{Area, Time},
        time::second,
    },
    typenum::{N1, P2, Z0},
};

/// Kinematic viscosity, m²/s in SI.
pub type KinematicViscosity = Quantity<ISQ<P2, Z0, N1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Builds a [`KinematicViscosity`] from a value in square meters per second.
#[must_use]
pub fn kinematic_viscosity(square_meters_per_second: f64) -> KinematicViscosity {
    Area::new::<square_meter>(square_meters_per_second) / Time::new::<second>(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{Length, Ratio, Velocity},
        length::millimeter,
        ratio::ratio,
        velocity::meter_per_second,
    };

    #[test]
    fn reynolds_number_is_dimensionless() {
        let nu = kinematic_viscosity(1.57e-5);
        let velocity = Velocity::new::<meter_per_second>(1.0);
        let spacing = Length::new::<millimeter>(1.0);

        let re: Ratio = velocity * spacing / nu;
        assert_relative_eq!(re.get::<ratio>(), 1e-3 / 1.57e-5, max_relative = 1e-12);
    }
}
