//! Turbine behavior models.
//!
//! A turbine carries an ordered list of these; the simulation applies them in
//! that order.

use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};

use super::Model;

/// A turbine behavior model.
pub trait TurbineModel: Model {}

/// Power and thrust-coefficient curves as functions of wind speed.
///
/// The curve file is read once, when the model is created, and kept as raw
/// text. Interpreting its contents is left to the code that evaluates the
/// curves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ws2PCt {
    path: PathBuf,
    data: String,
}

impl Ws2PCt {
    /// Reads the curve file at `path`.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the file cannot be read.
    pub fn from_file(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let data = fs::read_to_string(&path)?;
        Ok(Self { path, data })
    }

    /// Location the curves were read from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Unparsed curve file contents.
    #[must_use]
    pub fn data(&self) -> &str {
        &self.data
    }
}

impl Model for Ws2PCt {}
impl TurbineModel for Ws2PCt {}

impl fmt::Display for Ws2PCt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ws2PCt(ct_power_curve_file={})", self.path.display())
    }
}

/// Which reference each yaw conversion reads and writes.
///
/// With `ambient_wd` set, wind directions are taken from the ambient flow
/// rather than the waked flow at the rotor. With `ambient_yaw` set, the
/// absolute yaw is taken relative to the ambient flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct YawReference {
    pub ambient_wd: bool,
    pub ambient_yaw: bool,
}

/// Converts absolute yaw into yaw misalignment relative to the wind direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Yaw2Yawm {
    pub reference: YawReference,
}

impl Model for Yaw2Yawm {}
impl TurbineModel for Yaw2Yawm {}

impl fmt::Display for Yaw2Yawm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Yaw2Yawm(ambient_wd={}, ambient_yaw={})",
            self.reference.ambient_wd, self.reference.ambient_yaw
        )
    }
}

/// Converts yaw misalignment back into absolute yaw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Yawm2Yaw {
    pub reference: YawReference,
}

impl Model for Yawm2Yaw {}
impl TurbineModel for Yawm2Yaw {}

impl fmt::Display for Yawm2Yaw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Yawm2Yaw(ambient_wd={}, ambient_yaw={})",
            self.reference.ambient_wd, self.reference.ambient_yaw
        )
    }
}

/// Sets turbine output to zero at points outside the farm footprint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZeroOutsideFarm;

impl Model for ZeroOutsideFarm {}
impl TurbineModel for ZeroOutsideFarm {}

impl fmt::Display for ZeroOutsideFarm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ZeroOutsideFarm()")
    }
}
