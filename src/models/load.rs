use nalgebra as na;

/// Six-component load in the order Fx, Fy, Fz, Mx, My, Mz
pub type Load = na::Vector6<f64>;

pub fn forces(load: &Load) -> na::Vector3<f64> {
    load.fixed_rows::<3>(0).into_owned()
}

pub fn moments(load: &Load) -> na::Vector3<f64> {
    load.fixed_rows::<3>(3).into_owned()
}

pub fn from_parts(forces: &na::Vector3<f64>, moments: &na::Vector3<f64>) -> Load {
    Load::new(
        forces.x, forces.y, forces.z, moments.x, moments.y, moments.z,
    )
}
