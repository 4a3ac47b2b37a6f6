use derive_more::Display;

/// Mean orbital elements carried by line 2
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default, Display)]
#[display(
    fmt = "{{inc: {}, raan: {}, ecc: {}, argp: {}, ma: {}, n: {}, ...}}",
    "inclination",
    "right_ascension",
    "eccentricity",
    "argument_of_perigee",
    "mean_anomaly",
    "mean_motion"
)]
pub struct OrbitalElements {
    /// Inclination [deg]
    pub inclination: f64,

    /// Right ascension of the ascending node [deg]
    pub right_ascension: f64,

    /// Eccentricity, in [0, 1)
    pub eccentricity: f64,

    /// Argument of perigee [deg]
    pub argument_of_perigee: f64,

    /// Mean anomaly [deg]
    pub mean_anomaly: f64,

    /// Mean motion [rev/day]
    pub mean_motion: f64,

    /// Revolution number at epoch [rev]
    pub revolution_number: u32,
}
