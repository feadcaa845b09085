//! Camera types, orbit controller and uniforms for view/projection.
//!
//! The camera orbits a fixed target (the bust): left-drag changes yaw and
//! pitch, the scroll wheel changes distance, and all three ease towards
//! their targets with exponential damping each frame.

use instant::Duration;

use cgmath::{Matrix4, Point3, Rad, SquareMatrix, Vector3, perspective};
use winit::event::{MouseScrollDelta, WindowEvent};

#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

/// View camera: a position looking at a target point.
#[derive(Debug)]
pub struct Camera {
    pub position: Point3<f32>,
    pub target: Point3<f32>,
}

impl Camera {
    pub fn new<P: Into<Point3<f32>>>(position: P, target: P) -> Self {
        Self {
            position: position.into(),
            target: target.into(),
        }
    }

    pub fn calc_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(self.position, self.target, Vector3::unit_y())
    }
}

/// Perspective projection parameters; owns viewport aspect handling.
#[derive(Debug)]
pub struct Projection {
    aspect: f32,
    fovy: Rad<f32>,
    znear: f32,
    zfar: f32,
}

impl Projection {
    pub fn new<F: Into<Rad<f32>>>(width: u32, height: u32, fovy: F, znear: f32, zfar: f32) -> Self {
        Self {
            aspect: width as f32 / height as f32,
            fovy: fovy.into(),
            znear,
            zfar,
        }
    }

    /// Resizing only touches the aspect ratio; the model hierarchy is never
    /// involved.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height as f32;
    }

    pub fn calc_matrix(&self) -> Matrix4<f32> {
        OPENGL_TO_WGPU_MATRIX * perspective(self.fovy, self.aspect, self.znear, self.zfar)
    }
}

/// Camera uniform data: view position plus view-projection matrix.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_position: [f32; 4],
    view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn new() -> Self {
        Self {
            view_position: [0.0; 4],
            view_proj: Matrix4::identity().into(),
        }
    }

    pub fn update_view_proj(&mut self, camera: &Camera, projection: &Projection) {
        self.view_position = camera.position.to_homogeneous().into();
        self.view_proj = (projection.calc_matrix() * camera.calc_matrix()).into();
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

/// Orbit/zoom controller with damped easing.
#[derive(Debug)]
pub struct OrbitController {
    yaw: Rad<f32>,
    pitch: Rad<f32>,
    distance: f32,
    yaw_target: Rad<f32>,
    pitch_target: Rad<f32>,
    distance_target: f32,
    sensitivity: f32,
    zoom_speed: f32,
    damping: f32,
}

impl OrbitController {
    const MIN_DISTANCE: f32 = 1.5;
    const MAX_DISTANCE: f32 = 30.0;
    const MAX_PITCH: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

    pub fn new(distance: f32, sensitivity: f32, zoom_speed: f32) -> Self {
        Self {
            yaw: Rad(0.0),
            pitch: Rad(0.0),
            distance,
            yaw_target: Rad(0.0),
            pitch_target: Rad(0.0),
            distance_target: distance,
            sensitivity,
            zoom_speed,
            damping: 0.05,
        }
    }

    /// Feed a mouse drag delta (pixels) into the orbit targets.
    pub fn handle_mouse(&mut self, dx: f64, dy: f64) {
        self.yaw_target -= Rad(dx as f32 * self.sensitivity);
        self.pitch_target += Rad(dy as f32 * self.sensitivity);
        self.pitch_target.0 = self.pitch_target.0.clamp(-Self::MAX_PITCH, Self::MAX_PITCH);
    }

    /// React to scroll events; other window events are ignored.
    pub fn handle_window_events(&mut self, event: &WindowEvent) {
        if let WindowEvent::MouseWheel { delta, .. } = event {
            let scroll = match delta {
                MouseScrollDelta::LineDelta(_, y) => *y,
                MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 50.0,
            };
            self.zoom(scroll);
        }
    }

    /// Adjust the zoom target by a scroll amount (positive zooms in).
    pub fn zoom(&mut self, scroll: f32) {
        self.distance_target = (self.distance_target - scroll * self.zoom_speed)
            .clamp(Self::MIN_DISTANCE, Self::MAX_DISTANCE);
    }

    /// Ease towards the orbit targets and reposition the camera.
    pub fn update(&mut self, camera: &mut Camera, dt: Duration) {
        // Exponential damping normalized to a 60 Hz reference frame.
        let blend = 1.0 - (1.0 - self.damping).powf(dt.as_secs_f32() * 60.0);
        self.yaw += (self.yaw_target - self.yaw) * blend;
        self.pitch += (self.pitch_target - self.pitch) * blend;
        self.distance += (self.distance_target - self.distance) * blend;

        let offset = Vector3::new(
            self.pitch.0.cos() * self.yaw.0.sin(),
            self.pitch.0.sin(),
            self.pitch.0.cos() * self.yaw.0.cos(),
        ) * self.distance;
        camera.position = camera.target + offset;
    }
}

/// Bundle of camera state and its GPU resources.
#[derive(Debug)]
pub struct CameraResources {
    pub camera: Camera,
    pub controller: OrbitController,
    pub uniform: CameraUniform,
    pub buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    pub bind_group_layout: wgpu::BindGroupLayout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_camera_is_in_front_of_the_bust() {
        let mut camera = Camera::new([0.0, 0.0, 5.0], [0.0, 0.0, 0.0]);
        let mut controller = OrbitController::new(5.0, 0.005, 0.5);
        controller.update(&mut camera, Duration::from_millis(16));
        assert!((camera.position.z - 5.0).abs() < 1e-4);
        assert!(camera.position.x.abs() < 1e-4);
    }

    #[test]
    fn pitch_is_clamped_short_of_the_poles() {
        let mut controller = OrbitController::new(5.0, 0.005, 0.5);
        controller.handle_mouse(0.0, 1e6);
        assert!(controller.pitch_target.0 <= OrbitController::MAX_PITCH);
    }

    #[test]
    fn zoom_is_clamped_at_both_ends() {
        let mut controller = OrbitController::new(5.0, 0.005, 0.5);
        for _ in 0..100 {
            controller.zoom(10.0);
        }
        assert_eq!(controller.distance_target, OrbitController::MIN_DISTANCE);
        for _ in 0..100 {
            controller.zoom(-10.0);
        }
        assert_eq!(controller.distance_target, OrbitController::MAX_DISTANCE);
    }
}
