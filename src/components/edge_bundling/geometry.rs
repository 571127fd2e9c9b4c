use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;

const RIGHT_ANGLE_EPSILON: f64 = 1e-9;
const THREE_HALVES_PI: f64 = 3.0 * FRAC_PI_2;

/// Places the `index`-th node on the ellipse with semi-axes `a_length`
/// (horizontal) and `b_length` (vertical) around `center`.
///
/// Returns `(x, y, angle)`. The radius at angle θ is
/// `a·b / sqrt(b² + a²·tan²θ)`; the left half `(π/2, 3π/2)` mirrors both
/// deltas, and the two vertical points are closed-form since `tan` is
/// undefined there.
pub fn ellipse_position(
	index: usize,
	angle_sep: f64,
	a_length: f64,
	b_length: f64,
	center: (f64, f64),
) -> (f64, f64, f64) {
	let angle = index as f64 * angle_sep;
	let (dx, dy) = if (angle - FRAC_PI_2).abs() < RIGHT_ANGLE_EPSILON {
		(0.0, b_length)
	} else if (angle - THREE_HALVES_PI).abs() < RIGHT_ANGLE_EPSILON {
		(0.0, -b_length)
	} else {
		let tan = angle.tan();
		let r = a_length * b_length / (b_length * b_length + a_length * a_length * tan * tan).sqrt();
		let sign = if angle > FRAC_PI_2 && angle < THREE_HALVES_PI {
			-1.0
		} else {
			1.0
		};
		(sign * r, sign * r * tan)
	};
	(center.0 + dx, center.1 + dy, angle)
}

/// Quadratic Bézier from `source` to `target` through one control point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadraticCurve {
	pub source: (f64, f64),
	pub cp: (f64, f64),
	pub target: (f64, f64),
}

impl QuadraticCurve {
	/// Evaluates the curve at `t` in `[0, 1]`.
	pub fn point_at(&self, t: f64) -> (f64, f64) {
		let u = 1.0 - t;
		(
			u * u * self.source.0 + 2.0 * u * t * self.cp.0 + t * t * self.target.0,
			u * u * self.source.1 + 2.0 * u * t * self.cp.1 + t * t * self.target.1,
		)
	}
}

/// SVG path data: `M sx sy Q cx cy tx ty`.
impl fmt::Display for QuadraticCurve {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"M {} {} Q {} {} {} {}",
			self.source.0, self.source.1, self.cp.0, self.cp.1, self.target.0, self.target.1
		)
	}
}

pub fn curve_path(source: (f64, f64), target: (f64, f64), cp: (f64, f64)) -> QuadraticCurve {
	QuadraticCurve { source, cp, target }
}

/// CSS rotation for a label placed at `angle` radians.
pub fn rotate_label(angle: f64) -> String {
	format!("transform: rotate({}deg);", angle / PI * 180.0)
}

#[cfg(test)]
mod tests {
	use super::*;

	const EPS: f64 = 1e-9;

	fn close(a: (f64, f64), b: (f64, f64)) -> bool {
		(a.0 - b.0).abs() < EPS && (a.1 - b.1).abs() < EPS
	}

	#[test]
	fn test_cardinal_points() {
		let center = (300.0, 300.0);
		let sep = PI / 2.0;
		let (x, y, angle) = ellipse_position(0, sep, 195.0, 100.0, center);
		assert!(close((x, y), (495.0, 300.0)));
		assert_eq!(angle, 0.0);

		let (x, y, _) = ellipse_position(1, sep, 195.0, 100.0, center);
		assert!(close((x, y), (300.0, 400.0)));

		let (x, y, _) = ellipse_position(2, sep, 195.0, 100.0, center);
		assert!(close((x, y), (105.0, 300.0)), "got ({x}, {y})");

		let (x, y, _) = ellipse_position(3, sep, 195.0, 100.0, center);
		assert!(close((x, y), (300.0, 200.0)));
	}

	#[test]
	fn test_vertical_points_near_right_angle() {
		// 2π/12 * 3 is not bit-exact π/2
		let sep = 2.0 * PI / 12.0;
		let (x, y, _) = ellipse_position(3, sep, 50.0, 20.0, (0.0, 0.0));
		assert!(close((x, y), (0.0, 20.0)), "got ({x}, {y})");
		let (x, y, _) = ellipse_position(9, sep, 50.0, 20.0, (0.0, 0.0));
		assert!(close((x, y), (0.0, -20.0)), "got ({x}, {y})");
	}

	#[test]
	fn test_points_lie_on_ellipse() {
		let (a, b) = (195.0, 120.0);
		let n = 17;
		let sep = 2.0 * PI / n as f64;
		for i in 0..n {
			let (x, y, angle) = ellipse_position(i, sep, a, b, (10.0, -4.0));
			let (dx, dy) = (x - 10.0, y + 4.0);
			let on_curve = dx * dx / (a * a) + dy * dy / (b * b);
			assert!((on_curve - 1.0).abs() < 1e-9, "index {i}: {on_curve}");
			// Same direction as the polar angle
			assert!(dx * angle.cos() >= -EPS && dy * angle.sin() >= -EPS, "index {i}");
		}
	}

	#[test]
	fn test_angles_span_one_revolution_minus_step() {
		let n = 7;
		let sep = 2.0 * PI / n as f64;
		let (_, _, last) = ellipse_position(n - 1, sep, 1.0, 1.0, (0.0, 0.0));
		assert!((last - (2.0 * PI - sep)).abs() < EPS);
	}

	#[test]
	fn test_curve_path_string() {
		let curve = curve_path((1.0, 2.5), (7.0, 8.0), (300.0, 300.0));
		assert_eq!(curve.to_string(), "M 1 2.5 Q 300 300 7 8");
	}

	#[test]
	fn test_curve_bows_toward_control_point() {
		let curve = curve_path((0.0, 0.0), (100.0, 0.0), (50.0, 50.0));
		assert!(close(curve.point_at(0.0), (0.0, 0.0)));
		assert!(close(curve.point_at(1.0), (100.0, 0.0)));
		assert!(close(curve.point_at(0.5), (50.0, 25.0)));
	}

	#[test]
	fn test_rotate_label() {
		assert_eq!(rotate_label(PI), "transform: rotate(180deg);");
		assert_eq!(rotate_label(0.0), "transform: rotate(0deg);");
	}
}
