use crate::rendering::mandelbrot::MandelbrotData;

/// Colorizer function type - converts Data to RGBA
pub type Colorizer<D> = fn(&D) -> (u8, u8, u8, u8);

// Banded palette bit patterns. Each band shifts the mask one bit further into
// the base color; the first shifts land mostly in its zero bits.
const BASE_COLOR: u32 = 0b001011000101101101101000;
const COLOR_MASK: u32 = 0b000000000000110001110101;
const BAND_WIDTH: u32 = 13;

#[derive(Clone, Copy)]
pub struct ColorScheme {
    pub id: &'static str,
    pub display_name: &'static str,
    pub colorizer: Colorizer<MandelbrotData>,
}

pub static COLOR_SCHEMES: &[ColorScheme] = &[
    ColorScheme {
        id: "banded",
        display_name: "Banded",
        colorizer: banded_colorizer,
    },
    ColorScheme {
        id: "grayscale",
        display_name: "Grayscale",
        colorizer: grayscale_colorizer,
    },
];

pub fn default_color_scheme() -> &'static ColorScheme {
    &COLOR_SCHEMES[0]
}

pub fn get_color_scheme(id: &str) -> Option<&'static ColorScheme> {
    COLOR_SCHEMES.iter().find(|cs| cs.id == id)
}

/// Banded palette: escape counts are grouped into bands of 13 and each band
/// ORs a shifted mask into a fixed base color, brightening cyclically as
/// escape slows. Interior points are solid black.
pub fn banded_colorizer(data: &MandelbrotData) -> (u8, u8, u8, u8) {
    if !data.escaped {
        return (0, 0, 0, 255);
    }

    // The shift count wraps mod 32, so very deep bands cycle through the
    // palette instead of overflowing.
    let packed = BASE_COLOR | COLOR_MASK.wrapping_shl(data.iterations / BAND_WIDTH);
    unpack_rgb(packed)
}

pub fn grayscale_colorizer(data: &MandelbrotData) -> (u8, u8, u8, u8) {
    if !data.escaped {
        return (0, 0, 0, 255);
    }
    let normalized = (data.iterations as f64 / 256.0).min(1.0);
    let intensity = (normalized * 255.0) as u8;
    (intensity, intensity, intensity, 255)
}

fn unpack_rgb(packed: u32) -> (u8, u8, u8, u8) {
    (
        ((packed >> 16) & 0xff) as u8,
        ((packed >> 8) & 0xff) as u8,
        (packed & 0xff) as u8,
        255,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escaped(iterations: u32) -> MandelbrotData {
        MandelbrotData {
            iterations,
            escaped: true,
        }
    }

    #[test]
    fn test_interior_is_black() {
        let data = MandelbrotData {
            iterations: 500,
            escaped: false,
        };
        assert_eq!(banded_colorizer(&data), (0, 0, 0, 255));
        assert_eq!(grayscale_colorizer(&data), (0, 0, 0, 255));
    }

    #[test]
    fn test_banded_first_band_color() {
        // BASE_COLOR | COLOR_MASK unpacks to these channel values.
        assert_eq!(banded_colorizer(&escaped(0)), (44, 95, 125, 255));
    }

    #[test]
    fn test_banded_second_band_color() {
        assert_eq!(banded_colorizer(&escaped(13)), (44, 91, 234, 255));
    }

    #[test]
    fn test_banded_counts_in_same_band_match() {
        assert_eq!(banded_colorizer(&escaped(1)), banded_colorizer(&escaped(12)));
        assert_eq!(
            banded_colorizer(&escaped(13)),
            banded_colorizer(&escaped(25))
        );
    }

    #[test]
    fn test_banded_adjacent_bands_differ() {
        assert_ne!(
            banded_colorizer(&escaped(12)),
            banded_colorizer(&escaped(13))
        );
    }

    #[test]
    fn test_banded_deep_bands_wrap() {
        // 416 / 13 == 32, and a 32-bit shift wraps to 0.
        assert_eq!(banded_colorizer(&escaped(416)), banded_colorizer(&escaped(0)));
    }

    #[test]
    fn test_banded_is_deterministic() {
        assert_eq!(banded_colorizer(&escaped(77)), banded_colorizer(&escaped(77)));
    }

    #[test]
    fn test_grayscale_is_gray_and_monotonic() {
        let (r, g, b, a) = grayscale_colorizer(&escaped(128));
        assert_eq!(a, 255);
        assert_eq!(r, g);
        assert_eq!(g, b);

        let (dim, ..) = grayscale_colorizer(&escaped(32));
        let (bright, ..) = grayscale_colorizer(&escaped(200));
        assert!(bright > dim);
    }

    #[test]
    fn test_registry_default_is_banded() {
        assert_eq!(default_color_scheme().id, "banded");
    }

    #[test]
    fn test_registry_lookup() {
        assert!(get_color_scheme("banded").is_some());
        assert!(get_color_scheme("grayscale").is_some());
        assert!(get_color_scheme("plasma").is_none());
    }

    #[test]
    fn test_registry_ids_are_unique() {
        for (i, scheme) in COLOR_SCHEMES.iter().enumerate() {
            for other in &COLOR_SCHEMES[i + 1..] {
                assert_ne!(scheme.id, other.id);
            }
        }
    }
}
