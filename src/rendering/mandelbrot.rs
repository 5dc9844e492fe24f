use crate::rendering::point_compute::PointComputer;
use crate::rendering::points::Point;

/// Escape-time result for one plane point.
///
/// `escaped == false` means the orbit stayed bounded for the full iteration
/// cap and the point is treated as inside the set; `iterations` then equals
/// the cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MandelbrotData {
    pub iterations: u32,
    pub escaped: bool,
}

#[derive(Debug, Clone)]
pub struct MandelbrotComputer {
    max_iterations: u32,
}

impl MandelbrotComputer {
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl PointComputer for MandelbrotComputer {
    type Data = MandelbrotData;

    fn compute(&self, point: Point) -> MandelbrotData {
        let cx = point.x();
        let cy = point.y();

        let mut zx = 0.0;
        let mut zy = 0.0;

        for i in 0..self.max_iterations {
            let zx_sq = zx * zx;
            let zy_sq = zy * zy;

            if zx_sq + zy_sq > 4.0 {
                return MandelbrotData {
                    iterations: i,
                    escaped: true,
                };
            }

            // Both components of the next iterate come from the pre-update
            // values; zy must not see the new zx.
            let new_zx = zx_sq - zy_sq + cx;
            let new_zy = 2.0 * zx * zy + cy;

            zx = new_zx;
            zy = new_zy;
        }

        MandelbrotData {
            iterations: self.max_iterations,
            escaped: false,
        }
    }
}
