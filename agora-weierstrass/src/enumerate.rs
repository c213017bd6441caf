use crate::curve::Curve;
use crate::modular::mul_mod;
use crate::point::Point;

/// Brute-force scan over every `(x, y)` of the field, ascending in `x` then
/// `y`, yielding the points on the curve and finally the identity.
///
/// Costs `O(p^2)` field operations for a full pass.
#[derive(Clone, Debug)]
pub struct Points<'a> {
    curve: &'a Curve,
    x: u64,
    y: u64,
    rhs: u64,
    done: bool,
}

impl<'a> Points<'a> {
    fn new(curve: &'a Curve) -> Self {
        Self {
            curve,
            x: 0,
            y: 0,
            rhs: 0,
            done: false,
        }
    }
}

impl Iterator for Points<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let p = self.curve.modulus();
        while self.x < p {
            let (x, y) = (self.x, self.y);
            if y == 0 {
                self.rhs = self.curve.rhs(x);
            }
            if y + 1 == p {
                self.x += 1;
                self.y = 0;
            } else {
                self.y += 1;
            }
            if mul_mod(y, y, p) == self.rhs {
                return Some(Point::Affine { x, y });
            }
        }
        self.done = true;
        Some(Point::Identity)
    }
}

impl Curve {
    pub fn points(&self) -> Points<'_> {
        Points::new(self)
    }

    pub fn all_points(&self) -> Vec<Point> {
        self.points().collect()
    }

    /// Number of points including the identity.
    pub fn group_order(&self) -> u64 {
        self.points().count() as u64
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn small_curve_points() {
        let curve = Curve::new(2, 3, 7).unwrap();
        assert_eq!(
            curve.all_points(),
            vec![
                Point::Affine { x: 2, y: 1 },
                Point::Affine { x: 2, y: 6 },
                Point::Affine { x: 3, y: 1 },
                Point::Affine { x: 3, y: 6 },
                Point::Affine { x: 6, y: 0 },
                Point::Identity,
            ]
        );
        assert_eq!(curve.group_order(), 6);
    }

    #[test]
    fn reference_curve_count() {
        let curve = Curve::new(2, 3, 97).unwrap();
        let points = curve.all_points();
        assert_eq!(points.len(), 100);
        assert_eq!(points.last(), Some(&Point::Identity));
        assert!(points.iter().all(|pt| curve.is_on_curve(pt)));
        assert!(points.contains(&Point::Affine { x: 3, y: 6 }));
    }

    #[test]
    fn ordering_and_restart() {
        let curve = Curve::new(-1, 0, 7).unwrap();
        let points = curve.all_points();
        assert_eq!(points[0], Point::Affine { x: 0, y: 0 });
        let affine = &points[..points.len() - 1];
        assert!(affine
            .windows(2)
            .all(|w| (w[0].x(), w[0].y()) < (w[1].x(), w[1].y())));

        let mut iter = curve.points();
        assert_eq!(iter.next(), Some(points[0]));
        assert_eq!(curve.all_points(), points);
        assert_eq!(iter.count(), points.len() - 1);
    }

    #[test]
    fn agrees_with_lifting() {
        let curve = Curve::new(1, 6, 11).unwrap();
        let lifted: Vec<Point> = (0..11)
            .flat_map(|x| curve.lift_x(x))
            .chain(std::iter::once(Point::Identity))
            .collect();
        assert_eq!(curve.all_points(), lifted);
        assert_eq!(curve.group_order(), 13);
    }
}
