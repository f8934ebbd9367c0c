//! Contains the GridSpec struct, which describes a rectangular
//! lattice of points laid over a window of the complex plane: the
//! bounds of the window along each axis, and the number of lattice
//! points along each axis.  The first and last points of an axis sit
//! exactly on its bounds, which is why each axis needs at least two
//! points to derive a step size.

use num::Complex;

use errors::PlaneError;

/// The window and resolution of a plane.  The step sizes between
/// adjacent lattice points are always derived from these six values,
/// never stored, so they cannot drift out of agreement with the
/// bounds that define them.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridSpec {
    /// Left edge of the window on the real axis.
    pub xmin: f64,
    /// Right edge of the window on the real axis.
    pub xmax: f64,
    /// Bottom edge of the window on the imaginary axis.
    pub ymin: f64,
    /// Top edge of the window on the imaginary axis.
    pub ymax: f64,
    /// Number of lattice points along the real axis; the first sits
    /// at xmin, the last at xmax.
    pub xlen: usize,
    /// Number of lattice points along the imaginary axis.
    pub ylen: usize,
}

impl GridSpec {
    /// Constructor, and the single place window shapes are checked.
    /// Rejects a window that is empty or inverted on either axis, and
    /// an axis with fewer than two points, which would have no step
    /// size at all.
    pub fn new(
        xmin: f64,
        xmax: f64,
        xlen: usize,
        ymin: f64,
        ymax: f64,
        ylen: usize,
    ) -> Result<GridSpec, PlaneError> {
        if xmax <= xmin {
            return Err(PlaneError::InvalidBounds(format!(
                "xmax ({}) must be greater than xmin ({})",
                xmax, xmin
            )));
        }
        if ymax <= ymin {
            return Err(PlaneError::InvalidBounds(format!(
                "ymax ({}) must be greater than ymin ({})",
                ymax, ymin
            )));
        }
        if xlen < 2 || ylen < 2 {
            return Err(PlaneError::InvalidBounds(format!(
                "each axis needs at least two points, got {}x{}",
                xlen, ylen
            )));
        }
        Ok(GridSpec {
            xmin,
            xmax,
            ymin,
            ymax,
            xlen,
            ylen,
        })
    }

    /// The distance between adjacent columns.
    pub fn xstep(&self) -> f64 {
        (self.xmax - self.xmin) / ((self.xlen - 1) as f64)
    }

    /// The distance between adjacent rows.
    pub fn ystep(&self) -> f64 {
        (self.ymax - self.ymin) / ((self.ylen - 1) as f64)
    }

    /// The coordinate of one lattice point.  Row 0 holds the top of
    /// the window (y = ymax) and rows descend from there; column 0
    /// holds the left edge (x = xmin) and columns ascend.
    pub fn point(&self, row: usize, col: usize) -> Complex<f64> {
        Complex::new(
            self.xmin + (col as f64) * self.xstep(),
            self.ymax - (row as f64) * self.ystep(),
        )
    }

    /// One full row of lattice coordinates, left to right.  This is
    /// the unit handed to the batch evaluator.
    pub fn row_points(&self, row: usize) -> Vec<Complex<f64>> {
        (0..self.xlen).map(|col| self.point(row, col)).collect()
    }

    /// The total number of points in the lattice.  Used to size the
    /// grid buffer.
    pub fn len(&self) -> usize {
        self.xlen * self.ylen
    }

    /// Whether the lattice holds no points at all.  A spec built by
    /// `new` never is.
    pub fn is_empty(&self) -> bool {
        self.xlen == 0 || self.ylen == 0
    }

    /// Column labels: the real coordinate of each column as a string.
    /// These are a display and lookup convenience derived from the
    /// spec, not part of the numeric model.
    pub fn xlabels(&self) -> Vec<String> {
        (0..self.xlen)
            .map(|col| format!("{}", self.xmin + (col as f64) * self.xstep()))
            .collect()
    }

    /// Row labels: the imaginary coordinate of each row as a string,
    /// top to bottom.
    pub fn ylabels(&self) -> Vec<String> {
        (0..self.ylen)
            .map(|row| format!("{}", self.ymax - (row as f64) * self.ystep()))
            .collect()
    }
}
