#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Two overlapping discs share the exact same center, so the direction to push them apart is
    /// undefined.
    #[error("coincident disc centers at ({x}, {y}): separation direction is undefined")]
    CoincidentCenters { x: f64, y: f64 },

    /// A disc is too large to ever sit inside the area on the given axis; relaxation would loop
    /// forever instead of converging.
    #[error("disc {index} cannot fit: diameter {diameter} exceeds the area's {axis} extent of {extent}")]
    UnsatisfiableContainment {
        index: usize,
        diameter: f64,
        axis: &'static str,
        extent: f64,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
