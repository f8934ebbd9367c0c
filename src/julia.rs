// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The JuliaPlane couples a window specification with an escape
//! configuration and owns the fully evaluated grid of escape times.
//! The grid is a pure function of the two configurations: every
//! operation that changes either one regenerates the whole grid
//! before the plane can be read again, so there is no observable
//! "stale" state, and `refresh` can always rebuild exactly what the
//! constructor produced.

extern crate crossbeam;

use num::Complex;
use std::slice::Chunks;

use errors::PlaneError;
use escape::EscapeConfig;
use planes::GridSpec;

/// A window onto the complex plane with the escape time of every
/// lattice point inside it.  Cells are stored row-major, row 0 at the
/// top of the window.
#[derive(Debug, Clone, PartialEq)]
pub struct JuliaPlane {
    spec: GridSpec,
    escape: EscapeConfig,
    plane: Vec<u32>,
}

// One full sweep of the lattice, one batch evaluation per row.
fn compute(spec: &GridSpec, escape: &EscapeConfig) -> Vec<u32> {
    let mut buffer = Vec::with_capacity(spec.len());
    for row in 0..spec.ylen {
        buffer.extend(escape.evaluate_all(&spec.row_points(row)));
    }
    buffer
}

// The same sweep split into contiguous row bands, one scoped worker
// per band.  Cells are independent, so the only synchronization is
// the join at the end of the scope.
fn compute_threaded(spec: &GridSpec, escape: &EscapeConfig, threads: usize) -> Vec<u32> {
    let threads = if threads == 0 { 1 } else { threads };
    let band_rows = spec.ylen / threads + 1;
    let mut buffer = vec![0 as u32; spec.len()];
    let spec = *spec;
    let escape = *escape;
    crossbeam::scope(|spawner| {
        for (band, rows) in buffer.chunks_mut(band_rows * spec.xlen).enumerate() {
            spawner.spawn(move |_| {
                let top = band * band_rows;
                for (offset, cell) in rows.iter_mut().enumerate() {
                    let row = top + offset / spec.xlen;
                    let col = offset % spec.xlen;
                    *cell = escape.evaluate(spec.point(row, col));
                }
            });
        }
    })
    .unwrap();
    buffer
}

impl JuliaPlane {
    /// Builds the plane and evaluates every lattice point.
    /// Construction is generation: a plane is never observable in an
    /// unpopulated state.
    pub fn new(spec: GridSpec, escape: EscapeConfig) -> JuliaPlane {
        let plane = compute(&spec, &escape);
        JuliaPlane {
            spec,
            escape,
            plane,
        }
    }

    /// Like `new`, but sweeps the lattice across the given number of
    /// worker threads.  The result is identical cell for cell.
    pub fn with_threads(spec: GridSpec, escape: EscapeConfig, threads: usize) -> JuliaPlane {
        let plane = compute_threaded(&spec, &escape, threads);
        JuliaPlane {
            spec,
            escape,
            plane,
        }
    }

    /// Moves the window to new bounds, keeping the resolution, and
    /// regenerates the grid.  The new bounds are validated before
    /// anything is touched: on `InvalidBounds` the plane keeps its
    /// prior configuration and contents unchanged.
    pub fn zoom(
        &mut self,
        xmin: f64,
        xmax: f64,
        ymin: f64,
        ymax: f64,
    ) -> Result<(), PlaneError> {
        let spec = GridSpec::new(xmin, xmax, self.spec.xlen, ymin, ymax, self.spec.ylen)?;
        self.spec = spec;
        self.refresh();
        Ok(())
    }

    /// Replaces the escape configuration wholesale (there is no
    /// partial mutation of c or the cap) and regenerates the grid.
    /// The window is unchanged.
    pub fn set_escape(&mut self, escape: EscapeConfig) {
        self.escape = escape;
        self.refresh();
    }

    /// Re-derives the grid from the current configuration.  The
    /// result is identical to the grid immediately after construction
    /// with the same spec and escape configuration, so a refresh
    /// restores a plane whose storage was corrupted from outside.
    pub fn refresh(&mut self) {
        self.plane = compute(&self.spec, &self.escape);
    }

    /// `refresh`, swept across worker threads.  The finished buffer
    /// is swapped in whole; no reader ever observes a partially
    /// populated grid.
    pub fn refresh_threaded(&mut self, threads: usize) {
        self.plane = compute_threaded(&self.spec, &self.escape, threads);
    }

    /// The window and resolution this grid was generated from.
    pub fn spec(&self) -> GridSpec {
        self.spec
    }

    /// The escape configuration this grid was generated from.
    pub fn escape(&self) -> EscapeConfig {
        self.escape
    }

    /// The grid itself, row-major.
    pub fn contents(&self) -> &[u32] {
        &self.plane
    }

    /// The grid one row at a time, top row first.
    pub fn rows(&self) -> Chunks<u32> {
        self.plane.chunks(self.spec.xlen)
    }

    /// The window rectangle as (xmin, xmax, ymin, ymax), the extent
    /// handed to an external visualizer along with `contents`.
    pub fn extent(&self) -> (f64, f64, f64, f64) {
        (self.spec.xmin, self.spec.xmax, self.spec.ymin, self.spec.ymax)
    }

    /// The coordinate of one lattice point of this plane's window.
    pub fn point(&self, row: usize, col: usize) -> Complex<f64> {
        self.spec.point(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::iproduct;

    fn small_plane() -> JuliaPlane {
        let spec = GridSpec::new(-2.0, 2.0, 9, -2.0, 2.0, 9).unwrap();
        JuliaPlane::new(spec, EscapeConfig::new(Complex::new(-1.037, 0.17), 100))
    }

    #[test]
    fn generation_is_one_evaluation_per_lattice_point() {
        let plane = small_plane();
        let spec = plane.spec();
        let escape = plane.escape();
        let expected: Vec<u32> = iproduct!(0..spec.ylen, 0..spec.xlen)
            .map(|(row, col)| escape.evaluate(spec.point(row, col)))
            .collect();
        assert_eq!(plane.contents(), expected.as_slice());
    }

    #[test]
    fn generation_is_deterministic() {
        let a = small_plane();
        let b = small_plane();
        assert_eq!(a.contents(), b.contents());
    }

    #[test]
    fn the_threaded_sweep_matches_the_single_sweep() {
        let single = small_plane();
        for threads in 1..6 {
            let mut threaded = single.clone();
            threaded.refresh_threaded(threads);
            assert_eq!(threaded.contents(), single.contents());
        }
        let spec = single.spec();
        let built = JuliaPlane::with_threads(spec, single.escape(), 3);
        assert_eq!(built.contents(), single.contents());
    }

    #[test]
    fn more_threads_than_rows_still_covers_the_grid() {
        let spec = GridSpec::new(-2.0, 2.0, 4, -2.0, 2.0, 4).unwrap();
        let escape = EscapeConfig::new(Complex::new(-1.037, 0.17), 100);
        let single = JuliaPlane::new(spec, escape);
        let threaded = JuliaPlane::with_threads(spec, escape, 16);
        assert_eq!(threaded.contents(), single.contents());
    }

    #[test]
    fn zoom_rebinds_the_window_and_regenerates() {
        let mut plane = small_plane();
        plane.zoom(-1.0, 1.0, -1.0, 1.0).unwrap();
        let spec = GridSpec::new(-1.0, 1.0, 9, -1.0, 1.0, 9).unwrap();
        let expected = JuliaPlane::new(spec, plane.escape());
        assert_eq!(plane.spec(), spec);
        assert_eq!(plane.contents(), expected.contents());
    }

    #[test]
    fn zoom_with_inverted_bounds_changes_nothing() {
        let mut plane = small_plane();
        let before_spec = plane.spec();
        let before_contents = plane.contents().to_vec();
        let result = plane.zoom(1.0, -1.0, -1.0, 1.0);
        match result {
            Err(PlaneError::InvalidBounds(_)) => {}
            other => panic!("expected InvalidBounds, got {:?}", other),
        }
        assert_eq!(plane.spec(), before_spec);
        assert_eq!(plane.contents(), before_contents.as_slice());
    }

    #[test]
    fn set_escape_replaces_the_configuration_wholesale() {
        let mut plane = small_plane();
        let original = plane.clone();
        plane.set_escape(EscapeConfig::new(Complex::new(0.2, 0.2), 40));
        assert_ne!(plane.contents(), original.contents());
        plane.set_escape(original.escape());
        assert_eq!(plane.contents(), original.contents());
    }

    #[test]
    fn refresh_restores_a_corrupted_grid() {
        let mut plane = small_plane();
        let pristine = plane.clone();
        for cell in plane.plane.iter_mut() {
            *cell = 9999;
        }
        assert_ne!(plane.contents(), pristine.contents());
        plane.refresh();
        assert_eq!(plane.contents(), pristine.contents());
    }

    #[test]
    fn the_extent_is_the_window_rectangle() {
        let plane = small_plane();
        assert_eq!(plane.extent(), (-2.0, 2.0, -2.0, 2.0));
    }
}
