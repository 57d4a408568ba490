// LED matrix output: two chained 64x32 HUB75 panels, one eye per panel

use rpi_led_matrix::{LedCanvas, LedColor, LedMatrix, LedMatrixOptions};
use tracing::info;

use super::{EyeMask, Renderer};
use crate::color::{shimmer_color, ColorPalette};
use crate::face::FaceFrame;
use crate::{PANEL_HEIGHT, PANEL_WIDTH};

pub struct MatrixRenderer {
    matrix: LedMatrix,
    canvas: Option<LedCanvas>,
    left_eye: EyeMask,
    right_eye: EyeMask,
    brightness: f64,
    time_counter: f64,
}

impl MatrixRenderer {
    pub fn new(brightness: f64) -> Result<Self, String> {
        let mut options = LedMatrixOptions::new();
        options.set_rows(PANEL_HEIGHT);
        options.set_cols(PANEL_WIDTH);
        options.set_chain_length(2);
        options.set_hardware_mapping("adafruit-hat");

        let matrix = LedMatrix::new(Some(options), None).map_err(|e| e.to_string())?;
        let canvas = matrix.offscreen_canvas();
        info!("LED matrix ready: 2x {}x{} panels", PANEL_WIDTH, PANEL_HEIGHT);

        Ok(Self {
            matrix,
            canvas: Some(canvas),
            left_eye: EyeMask::for_panel(PANEL_WIDTH, PANEL_HEIGHT, false),
            right_eye: EyeMask::for_panel(PANEL_WIDTH, PANEL_HEIGHT, true),
            brightness: brightness.clamp(0.1, 1.0),
            time_counter: 0.0,
        })
    }

    pub fn set_brightness(&mut self, brightness: f64) {
        self.brightness = brightness.clamp(0.1, 1.0);
    }

    fn draw_pixel(&self, canvas: &mut LedCanvas, bright: f64, color_index: f64,
                  x: i32, y: i32, palette: ColorPalette) {
        // Panels are mounted upside down
        let flipped_y = PANEL_HEIGHT as i32 - 1 - y;
        if x < 0 || x >= (PANEL_WIDTH * 2) as i32 || flipped_y < 0 || flipped_y >= PANEL_HEIGHT as i32 {
            return;
        }
        let rgb = shimmer_color(color_index, bright * self.brightness, palette);
        let color = LedColor { red: rgb.red, green: rgb.green, blue: rgb.blue };
        canvas.set(x, flipped_y, &color);
    }
}

impl Renderer for MatrixRenderer {
    fn name(&self) -> &str {
        "matrix"
    }

    fn draw(&mut self, frame: &FaceFrame) {
        self.time_counter += 1.0;
        let Some(mut canvas) = self.canvas.take() else {
            return;
        };
        canvas.clear();

        let palette = frame.params.palette;
        let width = PANEL_WIDTH as i32;
        for (panel, mask) in [(0, self.left_eye), (1, self.right_eye)] {
            for x in 0..width {
                let mut color = self.time_counter + (x as f64) * 5.0;
                for y in 0..PANEL_HEIGHT as i32 {
                    color += 5.0;
                    let bright = mask.coverage(frame, x, y);
                    if bright > 0.0 {
                        self.draw_pixel(&mut canvas, bright, color, panel * width + x, y, palette);
                    }
                }
            }
        }

        self.canvas = Some(self.matrix.swap(canvas));
    }
}
