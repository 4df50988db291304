use crate::vec3::{EulerAngles, Point3d, Rotation};

// Orthographic camera: a base center point and a view direction, both rotated with the
// current Tait-Bryan angles whenever they are queried.
pub struct Camera {
    center: Point3d,
    view_direction: Point3d,
    rotation: EulerAngles,
    matrix: Rotation,
}

impl Camera {
    // Create a camera looking along +z
    pub fn new(center: Point3d) -> Self {
        Self::with_view_direction(center, Point3d::new(0.0, 0.0, 1.0))
    }

    pub fn with_view_direction(center: Point3d, view_direction: Point3d) -> Self {
        Self {
            center,
            view_direction,
            rotation: EulerAngles::default(),
            matrix: Rotation::identity(),
        }
    }

    pub fn from_xyz(x: f64, y: f64, z: f64) -> Self {
        Self::new(Point3d::new(x, y, z))
    }

    pub fn center(&self) -> Point3d {
        self.center
    }

    pub fn center_in_current_rotation(&self) -> Point3d {
        self.matrix.apply(self.center)
    }

    pub fn view_direction(&self) -> Point3d {
        self.view_direction
    }

    // Not renormalized: the rotation matrix is orthonormal.
    pub fn view_direction_in_current_rotation(&self) -> Point3d {
        self.matrix.apply(self.view_direction)
    }

    pub fn rotate_point(&self, point: Point3d) -> Point3d {
        self.matrix.apply(point)
    }

    pub fn rotation(&self) -> EulerAngles {
        self.rotation
    }

    pub fn set_rotation(&mut self, angles: EulerAngles) {
        self.rotation = angles;
        self.matrix = Rotation::from_euler(&angles);
    }
}
