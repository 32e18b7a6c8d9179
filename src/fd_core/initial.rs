use crate::fd_core::condition::StandardInit;

/// Sign function with `sign(0) = 0`.
pub fn sign(value: f64) -> f64 {
    if value < 0.0 {
        -1.0
    } else if value == 0.0 {
        0.0
    } else {
        1.0
    }
}

/// Unit step at the origin, taking the midpoint value 0.5 at `x = 0`.
pub fn unit_step(x: f64) -> f64 {
    0.5 * (sign(x) + 1.0)
}

pub fn gauss_pulse(x: f64) -> f64 {
    0.5 * (-x.powi(2)).exp()
}

pub fn step_standard() -> StandardInit<fn(f64) -> f64> {
    StandardInit {
        f: unit_step as fn(f64) -> f64,
    }
}

pub fn gauss_standard() -> StandardInit<fn(f64) -> f64> {
    StandardInit {
        f: gauss_pulse as fn(f64) -> f64,
    }
}
