/// Camera orbiting the origin, where the sphere sits.
pub struct OrbitCamera {
    yaw: f32,
    pitch: f32,
    distance: f32,
    last_mouse_pos: Option<(f32, f32)>,
}

const FOV_RADIANS: f32 = 45.0 / 360.0 * std::f32::consts::TAU;

// Points are generated with z as height.
const UP: glam::Vec3 = glam::Vec3::Z;

const MIN_DISTANCE: f32 = 1.5;
const MAX_DISTANCE: f32 = 20.0;

impl OrbitCamera {
    pub fn new() -> Self {
        Self {
            yaw: 0.25 * std::f32::consts::PI,
            pitch: 0.2,
            distance: 3.5,
            last_mouse_pos: None,
        }
    }

    pub fn update(&mut self, delta_time: f32, window: &minifb::Window) {
        let mut yaw_delta = 0.0;
        yaw_delta -= window.is_key_down(minifb::Key::A) as i32 as f32;
        yaw_delta += window.is_key_down(minifb::Key::D) as i32 as f32;
        let mut zoom = 0.0;
        zoom -= window.is_key_down(minifb::Key::W) as i32 as f32;
        zoom += window.is_key_down(minifb::Key::S) as i32 as f32;
        if let Some((_, scroll_y)) = window.get_scroll_wheel() {
            zoom -= scroll_y * 0.1;
        }

        self.yaw += yaw_delta * delta_time;
        self.zoom(zoom * 2.0 * delta_time);

        let mouse_pos = window.get_unscaled_mouse_pos(minifb::MouseMode::Discard);

        if window.get_mouse_down(minifb::MouseButton::Left) {
            if let (Some(current_mouse_pos), Some(last_mouse_pos)) =
                (mouse_pos, self.last_mouse_pos)
            {
                let mouse_delta = glam::vec2(
                    current_mouse_pos.0 - last_mouse_pos.0,
                    current_mouse_pos.1 - last_mouse_pos.1,
                ) * 0.01;
                self.rotate(-mouse_delta.x, mouse_delta.y);
            }
        }
        self.last_mouse_pos = mouse_pos;
    }

    pub fn rotate(&mut self, yaw_delta: f32, pitch_delta: f32) {
        self.yaw = (self.yaw + yaw_delta).rem_euclid(std::f32::consts::TAU);

        // We need to clamp pitch to avoid nadir/zenith singularity:
        const MAX_PITCH: f32 = 0.99 * 0.25 * std::f32::consts::TAU;
        self.pitch = (self.pitch + pitch_delta).clamp(-MAX_PITCH, MAX_PITCH);
    }

    pub fn zoom(&mut self, distance_delta: f32) {
        self.distance = (self.distance + distance_delta).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    pub fn position(&self) -> glam::Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.distance * glam::vec3(cos_pitch * cos_yaw, cos_pitch * sin_yaw, sin_pitch)
    }

    pub fn view_from_world(&self) -> glam::Mat4 {
        glam::Mat4::look_at_rh(self.position(), glam::Vec3::ZERO, UP)
    }

    pub fn projection_from_view(&self, aspect_ratio: f32) -> glam::Mat4 {
        glam::Mat4::perspective_rh(FOV_RADIANS, aspect_ratio, 0.1, 100.0)
    }

    pub fn projection_from_world(&self, aspect_ratio: f32) -> glam::Mat4 {
        self.projection_from_view(aspect_ratio) * self.view_from_world()
    }
}
