use crate::rendering::points::Point;

/// Trait for computing data values at points in the complex plane
///
/// This is the lowest-level rendering abstraction - pure computation with no loops.
/// Typically wrapped by PixelRenderer which adds the pixel iteration logic.
pub trait PointComputer {
    /// Data type output (NOT colors - will be colorized later)
    type Data: Clone;

    /// Compute data for a single point in the plane
    ///
    /// # Arguments
    /// * `point` - Point in plane coordinates
    ///
    /// # Returns
    /// Computation data (not RGBA - colorizer converts to colors)
    fn compute(&self, point: Point) -> Self::Data;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Simple test implementation
    struct SolidColorCompute {
        color: (u8, u8, u8, u8),
    }

    impl PointComputer for SolidColorCompute {
        type Data = (u8, u8, u8, u8); // For tests, Data = RGBA

        fn compute(&self, _point: Point) -> Self::Data {
            self.color
        }
    }

    #[test]
    fn test_point_computer_trait() {
        let computer = SolidColorCompute {
            color: (255, 0, 0, 255),
        };
        let result = computer.compute(Point::new(50.0, 50.0));
        assert_eq!(result, (255, 0, 0, 255));
    }
}
