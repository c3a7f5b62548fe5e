use egui::{Color32, ColorImage, Pos2, Vec2};
use image::{Rgba, RgbaImage};

/// The persistent drawing bitmap.
///
/// Every mutation bumps `version`, which the renderer uses to decide when the
/// on-screen texture is stale. Restoring a snapshot also bumps it, so a
/// version number never refers to two different pixel contents.
#[derive(Clone)]
pub struct Canvas {
    pixels: RgbaImage,
    version: u64,
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.pixels.width())
            .field("height", &self.pixels.height())
            .field("version", &self.version)
            .finish()
    }
}

impl PartialEq for Canvas {
    /// Canvases are equal when their pixels are, whatever their versions.
    fn eq(&self, other: &Self) -> bool {
        self.pixels == other.pixels
    }
}

fn to_rgba(color: Color32) -> Rgba<u8> {
    Rgba(color.to_srgba_unmultiplied())
}

/// Squared distance from `p` to the segment `a..b`
fn distance_sq_to_segment(p: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_sq();
    if len_sq <= f32::EPSILON {
        return (p - a).length_sq();
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    (p - (a + ab * t)).length_sq()
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Color32) -> Self {
        Self {
            pixels: RgbaImage::from_pixel(width, height, to_rgba(background)),
            version: 0,
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width() as f32, self.height() as f32)
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Color at a pixel, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color32> {
        self.pixels.get_pixel_checked(x, y).map(|p| {
            let [r, g, b, a] = p.0;
            Color32::from_rgba_unmultiplied(r, g, b, a)
        })
    }

    fn touch(&mut self) {
        self.version += 1;
    }

    /// Overwrite every pixel with `color`.
    pub fn fill(&mut self, color: Color32) {
        let rgba = to_rgba(color);
        for pixel in self.pixels.pixels_mut() {
            *pixel = rgba;
        }
        self.touch();
    }

    /// Replace the pixels with those of `snapshot`, keeping versions moving forward.
    pub fn restore(&mut self, snapshot: Canvas) {
        let version = self.version.max(snapshot.version);
        self.pixels = snapshot.pixels;
        self.version = version;
        self.touch();
    }

    /// Paints every pixel inside `min..max` whose center satisfies `covers`.
    /// Pixels outside the canvas are clipped.
    fn paint_where(&mut self, min: Pos2, max: Pos2, color: Color32, covers: impl Fn(Pos2) -> bool) {
        let rgba = to_rgba(color);
        let x0 = min.x.floor().max(0.0) as u32;
        let y0 = min.y.floor().max(0.0) as u32;
        let x1 = (max.x.ceil().max(0.0) as u32).min(self.width());
        let y1 = (max.y.ceil().max(0.0) as u32).min(self.height());

        for y in y0..y1 {
            for x in x0..x1 {
                let center = Pos2::new(x as f32 + 0.5, y as f32 + 0.5);
                if covers(center) {
                    self.pixels.put_pixel(x, y, rgba);
                }
            }
        }
        self.touch();
    }

    /// Filled circle centered on `center`.
    pub fn draw_dot(&mut self, center: Pos2, radius: f32, color: Color32) {
        let radius = radius.max(1.0);
        let reach = Vec2::splat(radius);
        let radius_sq = radius * radius;
        self.paint_where(center - reach, center + reach, color, |p| {
            (p - center).length_sq() <= radius_sq
        });
    }

    /// Straight segment of the given total `width` with round ends.
    pub fn draw_line(&mut self, start: Pos2, end: Pos2, width: f32, color: Color32) {
        let half = (width / 2.0).max(0.5);
        let reach = Vec2::splat(half);
        let min = start.min(end) - reach;
        let max = start.max(end) + reach;
        let half_sq = half * half;
        self.paint_where(min, max, color, |p| {
            distance_sq_to_segment(p, start, end) <= half_sq
        });
    }

    /// Alpha-blends `stamp` so that its center lands on `center`.
    pub fn stamp(&mut self, stamp: &RgbaImage, center: Pos2) {
        let left = center.x as i64 - i64::from(stamp.width() / 2);
        let top = center.y as i64 - i64::from(stamp.height() / 2);

        for (sx, sy, src) in stamp.enumerate_pixels() {
            let x = left + i64::from(sx);
            let y = top + i64::from(sy);
            if x < 0 || y < 0 || x >= i64::from(self.width()) || y >= i64::from(self.height()) {
                continue;
            }
            let dst = self.pixels.get_pixel_mut(x as u32, y as u32);
            *dst = blend_over(*src, *dst);
        }
        self.touch();
    }

    /// Converts to the format egui uploads as a texture.
    pub fn to_color_image(&self) -> ColorImage {
        ColorImage::from_rgba_unmultiplied(
            [self.width() as usize, self.height() as usize],
            self.pixels.as_raw(),
        )
    }
}

/// Source-over compositing of unmultiplied RGBA.
fn blend_over(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    let sa = f32::from(src.0[3]) / 255.0;
    if sa >= 1.0 {
        return src;
    }
    if sa <= 0.0 {
        return dst;
    }
    let da = f32::from(dst.0[3]) / 255.0;
    let out_a = sa + da * (1.0 - sa);
    let channel = |i: usize| {
        let s = f32::from(src.0[i]) * sa;
        let d = f32::from(dst.0[i]) * da * (1.0 - sa);
        ((s + d) / out_a).round().clamp(0.0, 255.0) as u8
    };
    Rgba([channel(0), channel(1), channel(2), (out_a * 255.0).round() as u8])
}
