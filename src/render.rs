//! Turns a plane into an image.  The plane side of the boundary is a
//! flat numeric array plus the window rectangle from `extent`; this
//! module normalizes the counts against the largest one present,
//! pushes each through a selectable color map, and hands the RGB
//! buffer to the image crate.

extern crate image;

use std::path::Path;
use std::str::FromStr;

use num::clamp;

use errors::PlaneError;
use julia::JuliaPlane;

/// Selects how a normalized escape time is turned into a color.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ColorMap {
    /// Linear grayscale, black for the lowest counts.
    Gray,
    /// Black through red and yellow to white, after the classic "hot"
    /// ramp.
    Hot,
}

fn channel(v: f64) -> u8 {
    (clamp(v, 0.0, 1.0) * 255.0) as u8
}

impl ColorMap {
    // t is the count scaled into 0..=1.
    fn rgb(self, t: f64) -> [u8; 3] {
        match self {
            ColorMap::Gray => {
                let v = channel(t);
                [v, v, v]
            }
            ColorMap::Hot => [
                channel(3.0 * t),
                channel(3.0 * t - 1.0),
                channel(3.0 * t - 2.0),
            ],
        }
    }
}

impl FromStr for ColorMap {
    type Err = PlaneError;

    fn from_str(s: &str) -> Result<ColorMap, PlaneError> {
        match s {
            "gray" | "grey" => Ok(ColorMap::Gray),
            "hot" => Ok(ColorMap::Hot),
            other => Err(PlaneError::InvalidParameter(format!(
                "unknown color map {:?}, expected \"gray\" or \"hot\"",
                other
            ))),
        }
    }
}

/// Maps every cell of the plane to an RGB pixel.  Counts are scaled
/// against the largest count in the grid, so the brightest pixel is
/// always full scale no matter how deep the iteration cap was.
pub fn to_pixels(plane: &JuliaPlane, map: ColorMap) -> Vec<u8> {
    let maxi = plane.contents().iter().cloned().max().unwrap_or(1).max(1);
    let mut pixels = Vec::with_capacity(plane.contents().len() * 3);
    for &count in plane.contents() {
        let rgb = map.rgb(f64::from(count) / f64::from(maxi));
        pixels.extend_from_slice(&rgb);
    }
    pixels
}

/// Renders the plane and writes it to disk; the image format follows
/// the file extension.
pub fn write_image<P: AsRef<Path>>(
    plane: &JuliaPlane,
    path: P,
    map: ColorMap,
) -> Result<(), PlaneError> {
    let spec = plane.spec();
    let pixels = to_pixels(plane, map);
    image::save_buffer(
        path,
        &pixels,
        spec.xlen as u32,
        spec.ylen as u32,
        image::ColorType::RGB(8),
    )
    .map_err(|err| {
        PlaneError::Io(::std::io::Error::new(
            ::std::io::ErrorKind::Other,
            err.to_string(),
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use escape::EscapeConfig;
    use num::Complex;
    use planes::GridSpec;

    fn small_plane() -> JuliaPlane {
        let spec = GridSpec::new(-2.0, 2.0, 5, -2.0, 2.0, 5).unwrap();
        JuliaPlane::new(spec, EscapeConfig::new(Complex::new(-1.037, 0.17), 100))
    }

    #[test]
    fn one_pixel_per_cell() {
        let plane = small_plane();
        assert_eq!(
            to_pixels(&plane, ColorMap::Gray).len(),
            plane.contents().len() * 3
        );
    }

    #[test]
    fn gray_pixels_have_equal_channels() {
        let plane = small_plane();
        for pixel in to_pixels(&plane, ColorMap::Gray).chunks(3) {
            assert_eq!(pixel[0], pixel[1]);
            assert_eq!(pixel[1], pixel[2]);
        }
    }

    #[test]
    fn the_hot_ramp_runs_black_to_white() {
        assert_eq!(ColorMap::Hot.rgb(0.0), [0, 0, 0]);
        assert_eq!(ColorMap::Hot.rgb(1.0), [255, 255, 255]);
        // Mid-ramp is red-dominant.
        let mid = ColorMap::Hot.rgb(0.4);
        assert!(mid[0] > mid[1] && mid[1] >= mid[2]);
    }

    #[test]
    fn color_map_names_parse() {
        assert_eq!(ColorMap::from_str("hot").unwrap(), ColorMap::Hot);
        assert_eq!(ColorMap::from_str("gray").unwrap(), ColorMap::Gray);
        assert_eq!(ColorMap::from_str("grey").unwrap(), ColorMap::Gray);
        assert!(ColorMap::from_str("neon").is_err());
    }
}
