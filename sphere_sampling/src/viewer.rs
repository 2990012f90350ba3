use minifb::{Key, Window, WindowOptions};
use web_time::Instant;

use crate::{
    PointCloudSink, PointSet, ViewLayout, camera::OrbitCamera, result_ext::ResultExt as _,
};

const WIDTH: usize = 1920;
const HEIGHT: usize = 1080;

const BACKGROUND_COLOR: u32 = 0x0010_1014;
const CELL_BORDER_COLOR: u32 = 0x0040_4048;

/// Points on the far side of the sphere are darkened by this factor.
const BACKSIDE_DIMMING: f32 = 0.35;

/// Minimal desktop viewer showing every point set in its own cell of the layout grid.
///
/// All cells share a single orbit camera, so the clouds can be compared from the same angle.
pub struct Viewer {
    layout: ViewLayout,
    point_sets: Vec<PointSet>,
    camera: OrbitCamera,
}

impl PointCloudSink for Viewer {
    fn send_layout(&mut self, layout: &ViewLayout) {
        self.layout = layout.clone();
    }

    fn log_points(&mut self, points: PointSet) {
        if self.layout.cell_of(&points.label).is_none() {
            log::warn!(
                "Point set {:?} has no view in the layout, it won't be shown",
                points.label
            );
        }
        log::info!("Received {} points for {}", points.positions.len(), points.label);

        // Later sets with the same label replace earlier ones.
        self.point_sets.retain(|set| set.label != points.label);
        self.point_sets.push(points);
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct CellRect {
    x: usize,
    y: usize,
    width: usize,
    height: usize,
}

impl Viewer {
    pub fn new() -> Self {
        Self {
            layout: ViewLayout {
                rows: Vec::new(),
                collapse_panels: true,
            },
            point_sets: Vec::new(),
            camera: OrbitCamera::new(),
        }
    }

    /// Opens the window and blocks until it is closed or escape is pressed.
    pub fn run(mut self) -> anyhow::Result<()> {
        let mut window = Window::new(
            "sphere_sampling",
            WIDTH,
            HEIGHT,
            WindowOptions {
                resize: true,
                ..Default::default()
            },
        )?;
        window.set_target_fps(60);

        let mut buffer = Vec::new();
        let mut last_frame = Instant::now();

        while window.is_open() && !window.is_key_down(Key::Escape) {
            let now = Instant::now();
            let delta_time = (now - last_frame).as_secs_f32();
            last_frame = now;

            self.camera.update(delta_time, &window);

            let (width, height) = window.get_size();
            buffer.resize(width * height, 0);
            self.draw(&mut buffer, width, height);

            window
                .update_with_buffer(&buffer, width, height)
                .ok_or_log("Failed to present frame");
        }

        Ok(())
    }

    fn draw(&self, buffer: &mut [u32], width: usize, height: usize) {
        buffer.fill(BACKGROUND_COLOR);

        let num_rows = self.layout.num_rows();
        let num_columns = self.layout.num_columns();
        if num_rows == 0 || num_columns == 0 {
            return;
        }

        for row in 0..num_rows {
            for column in 0..num_columns {
                let cell = cell_rect(width, height, num_rows, num_columns, row, column);
                draw_cell_border(buffer, width, cell);
            }
        }

        let camera_position = self.camera.position();

        for set in &self.point_sets {
            let Some((row, column)) = self.layout.cell_of(&set.label) else {
                continue;
            };
            let cell = cell_rect(width, height, num_rows, num_columns, row, column);
            if cell.width == 0 || cell.height == 0 {
                continue;
            }

            let projection_from_world = self
                .camera
                .projection_from_world(cell.width as f32 / cell.height as f32);
            let front_color = rgba_to_pixel(set.color, 1.0);
            let back_color = rgba_to_pixel(set.color, BACKSIDE_DIMMING);

            for position in &set.positions {
                let position = position.as_vec3();
                let Some((x, y)) = project_to_cell(projection_from_world, position, cell) else {
                    continue;
                };
                let color = if position.dot(camera_position) < 0.0 {
                    back_color
                } else {
                    front_color
                };
                plot_dot(buffer, width, cell, x, y, color);
            }
        }
    }
}

fn cell_rect(
    width: usize,
    height: usize,
    num_rows: usize,
    num_columns: usize,
    row: usize,
    column: usize,
) -> CellRect {
    let cell_width = width / num_columns;
    let cell_height = height / num_rows;
    CellRect {
        x: column * cell_width,
        y: row * cell_height,
        width: cell_width,
        height: cell_height,
    }
}

/// Pixel within the cell a world space position lands on, `None` if it's outside the view.
fn project_to_cell(
    projection_from_world: glam::Mat4,
    position: glam::Vec3,
    cell: CellRect,
) -> Option<(usize, usize)> {
    let clip = projection_from_world * position.extend(1.0);
    if clip.w <= 0.0 {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    if ndc.x.abs() > 1.0 || ndc.y.abs() > 1.0 {
        return None;
    }

    let x = ((ndc.x * 0.5 + 0.5) * cell.width as f32) as usize;
    let y = ((0.5 - ndc.y * 0.5) * cell.height as f32) as usize;
    Some((
        cell.x + x.min(cell.width - 1),
        cell.y + y.min(cell.height - 1),
    ))
}

/// Converts packed `0xRRGGBBAA` into minifb's `0RGB`, scaling brightness by `intensity`.
fn rgba_to_pixel(rgba: u32, intensity: f32) -> u32 {
    let [r, g, b, _a] = rgba.to_be_bytes();
    let scale = |channel: u8| (channel as f32 * intensity).round().clamp(0.0, 255.0) as u32;
    (scale(r) << 16) | (scale(g) << 8) | scale(b)
}

fn plot_dot(buffer: &mut [u32], width: usize, cell: CellRect, x: usize, y: usize, color: u32) {
    let x_end = (x + 2).min(cell.x + cell.width);
    let y_end = (y + 2).min(cell.y + cell.height);
    for py in y..y_end {
        for px in x..x_end {
            buffer[py * width + px] = color;
        }
    }
}

fn draw_cell_border(buffer: &mut [u32], width: usize, cell: CellRect) {
    if cell.width == 0 || cell.height == 0 {
        return;
    }
    let bottom = cell.y + cell.height - 1;
    let right = cell.x + cell.width - 1;
    for x in cell.x..=right {
        buffer[cell.y * width + x] = CELL_BORDER_COLOR;
        buffer[bottom * width + x] = CELL_BORDER_COLOR;
    }
    for y in cell.y..=bottom {
        buffer[y * width + cell.x] = CELL_BORDER_COLOR;
        buffer[y * width + right] = CELL_BORDER_COLOR;
    }
}
