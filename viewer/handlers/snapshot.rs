use std::io::Cursor;
use tiny_http::Response;

use euclid_nn::Point;
use image::{ImageOutputFormat, Rgb, RgbImage};

use crate::state::SharedState;
use crate::util::form::{form_get, parse_form};

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;
const DEFAULT_SCALE: f64 = 40.0;
const MIN_SCALE: f64 = 5.0;
const MAX_SCALE: f64 = 200.0;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const AXES: Rgb<u8> = Rgb([128, 128, 128]);
const HISTORY: Rgb<u8> = Rgb([0, 255, 0]);
const CURRENT: Rgb<u8> = Rgb([0, 0, 255]);

/// `GET /snapshot.png?scale=N` - rasterizes the current trail to a PNG.
///
/// Server-side counterpart of the canvas view: white background, gray axes
/// through the origin, green dots for past point pairs, blue dots plus a
/// connecting line for the current pair.
pub fn handle(query: &str, state: SharedState) -> Response<Cursor<Vec<u8>>> {
    let pairs = parse_form(query);
    let scale = form_get(&pairs, "scale")
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(DEFAULT_SCALE)
        .clamp(MIN_SCALE, MAX_SCALE);

    let (trail, fallback) = {
        let st = state.lock().unwrap();
        let trail = st.trail.lock().unwrap().clone();
        (trail, (st.scenario.source, st.scenario.target))
    };

    let mut img = RgbImage::from_pixel(WIDTH, HEIGHT, BACKGROUND);
    draw_axes(&mut img);

    // History dots for every pair except the newest.
    for (source, target) in trail.iter().take(trail.len().saturating_sub(1)) {
        draw_disc(&mut img, to_pixel(source, scale), 3, HISTORY);
        draw_disc(&mut img, to_pixel(target, scale), 3, HISTORY);
    }

    // Current pair: larger blue dots joined by a line. Before any frame has
    // been rendered the scenario's starting pair stands in.
    let (source, target) = trail.last().copied().unwrap_or(fallback);
    let p1 = to_pixel(&source, scale);
    let p2 = to_pixel(&target, scale);
    draw_line(&mut img, p1, p2, CURRENT);
    draw_disc(&mut img, p1, 5, CURRENT);
    draw_disc(&mut img, p2, 5, CURRENT);

    let mut bytes = Vec::new();
    let encode_ok = image::DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)
        .is_ok();
    if !encode_ok {
        return crate::routes::not_found();
    }

    crate::routes::png_response(bytes)
}

/// Converts world coordinates to pixel coordinates. The origin sits at the
/// image center; y grows downward on screen.
fn to_pixel(p: &Point, scale: f64) -> (i64, i64) {
    let px = (WIDTH as f64 / 2.0 + p.x * scale) as i64;
    let py = (HEIGHT as f64 / 2.0 - p.y * scale) as i64;
    (px, py)
}

fn put_px(img: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < WIDTH && (y as u32) < HEIGHT {
        img.put_pixel(x as u32, y as u32, color);
    }
}

fn draw_axes(img: &mut RgbImage) {
    let mid_x = (WIDTH / 2) as i64;
    let mid_y = (HEIGHT / 2) as i64;
    for x in 0..WIDTH as i64 {
        put_px(img, x, mid_y, AXES);
    }
    for y in 0..HEIGHT as i64 {
        put_px(img, mid_x, y, AXES);
    }
}

fn draw_disc(img: &mut RgbImage, center: (i64, i64), radius: i64, color: Rgb<u8>) {
    let (cx, cy) = center;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= radius * radius {
                put_px(img, cx + dx, cy + dy, color);
            }
        }
    }
}

/// One-pixel-wide line by sampling along the segment.
fn draw_line(img: &mut RgbImage, from: (i64, i64), to: (i64, i64), color: Rgb<u8>) {
    let steps = (to.0 - from.0).abs().max((to.1 - from.1).abs()).max(1);
    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        let x = from.0 as f64 + (to.0 - from.0) as f64 * t;
        let y = from.1 as f64 + (to.1 - from.1) as f64 * t;
        put_px(img, x.round() as i64, y.round() as i64, color);
    }
}
