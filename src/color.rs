// Color palettes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorPalette {
    Forest,      // Green
    Fire,        // Red/Orange
    Ocean,       // Blue/Cyan
    Purple,      // Purple/Pink
    Rainbow,     // Multi-color
}

/// Plain 8-bit color, independent of any display driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl ColorPalette {
    pub fn name(&self) -> &str {
        match self {
            ColorPalette::Forest => "Forest (Green)",
            ColorPalette::Fire => "Fire (Red/Orange)",
            ColorPalette::Ocean => "Ocean (Blue/Cyan)",
            ColorPalette::Purple => "Purple/Pink",
            ColorPalette::Rainbow => "Rainbow",
        }
    }

    fn stops(&self) -> &'static [(u8, u8, u8); 6] {
        match self {
            ColorPalette::Forest => &[
                (0, 64, 0), (0, 128, 32), (32, 160, 64),
                (64, 192, 96), (96, 224, 128), (128, 255, 160),
            ],
            ColorPalette::Fire => &[
                (64, 16, 0), (128, 32, 0), (192, 64, 0),
                (255, 96, 0), (255, 128, 32), (255, 160, 64),
            ],
            ColorPalette::Ocean => &[
                (0, 32, 64), (0, 64, 128), (0, 96, 192),
                (32, 128, 255), (64, 160, 255), (128, 192, 255),
            ],
            ColorPalette::Purple => &[
                (64, 0, 64), (128, 0, 128), (160, 32, 160),
                (192, 64, 192), (224, 96, 224), (255, 128, 255),
            ],
            ColorPalette::Rainbow => &[
                (255, 0, 0), (255, 128, 0), (255, 255, 0),
                (0, 255, 0), (0, 128, 255), (128, 0, 255),
            ],
        }
    }
}

/// Shimmer color at `color_index`, scaled by `brightness` (0..=255)
pub fn shimmer_color(color_index: f64, brightness: f64, palette: ColorPalette) -> Rgb {
    let colors = palette.stops();

    // Ten index steps per stop for smooth transitions
    let color_len = colors.len() as f64;
    let normalized_index = color_index.abs() % (color_len * 10.0);
    let base_index = (normalized_index / 10.0) as usize % colors.len();
    let next_index = (base_index + 1) % colors.len();
    let blend = (normalized_index / 10.0) - (base_index as f64);

    let (r1, g1, b1) = colors[base_index];
    let (r2, g2, b2) = colors[next_index];

    let lerp = |a: u8, b: u8| a as f64 + (b as f64 - a as f64) * blend;
    let bright_factor = (brightness / 255.0).clamp(0.0, 1.0);

    Rgb {
        red: (lerp(r1, r2) * bright_factor) as u8,
        green: (lerp(g1, g2) * bright_factor) as u8,
        blue: (lerp(b1, b2) * bright_factor) as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shimmer_hits_stops_exactly() {
        let c = shimmer_color(0.0, 255.0, ColorPalette::Rainbow);
        assert_eq!(c, Rgb { red: 255, green: 0, blue: 0 });
        let c = shimmer_color(20.0, 255.0, ColorPalette::Rainbow);
        assert_eq!(c, Rgb { red: 255, green: 255, blue: 0 });
    }

    #[test]
    fn zero_brightness_is_black() {
        assert_eq!(shimmer_color(13.0, 0.0, ColorPalette::Fire), Rgb::default());
    }
}
