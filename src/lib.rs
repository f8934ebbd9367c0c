#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Julia plane generator
//!
//! A Julia set takes a point on the complex plane and repeatedly
//! squares it, adding a fixed constant c after every squaring, and
//! measures how quickly the result flies off to infinity.  Points
//! whose magnitude never passes 2 are trapped forever; everything
//! else escapes, and the number of squarings a point survives is the
//! "escape time" used to render the image.
//!
//! This crate keeps a rectangular lattice of those escape times: a
//! `GridSpec` describes the window onto the complex plane and the
//! number of points along each axis, an `EscapeConfig` binds the
//! constant c and the iteration cap, and a `JuliaPlane` couples the
//! two with the fully evaluated grid.  The plane can be zoomed to new
//! bounds, rebound to a new constant, refreshed from its own
//! configuration, rendered to an image through a color map, and saved
//! to (or rebuilt from) flat CSV or JSON parameter files.

extern crate crossbeam;
extern crate image;
extern crate itertools;
extern crate num;
extern crate num_cpus;
extern crate serde;
extern crate serde_json;
#[macro_use]
extern crate failure;

pub mod errors;
pub mod escape;
pub mod io;
pub mod julia;
pub mod planes;
pub mod render;

pub use errors::PlaneError;
pub use escape::EscapeConfig;
pub use julia::JuliaPlane;
pub use planes::GridSpec;
