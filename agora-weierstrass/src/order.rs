use crate::curve::Curve;
use crate::modular::neg_mod;
use crate::point::Point;
use crate::CurveError;

use num_integer::Roots;

impl Curve {
    /// Hasse's bound `p + 1 + 2√p`, rounded up, on the size of the group and
    /// therefore on the order of any of its points.
    pub fn order_limit(&self) -> u64 {
        let p = self.modulus();
        p.saturating_add(1).saturating_add(2 * (p.sqrt() + 1))
    }

    /// Smallest `n > 0` with `n * point = O`, found by repeated addition.
    pub fn order_of(&self, point: &Point) -> Result<u64, CurveError> {
        self.order_of_bounded(point, self.order_limit())
    }

    /// Like [`Curve::order_of`] but gives up with
    /// [`CurveError::OrderLimitExceeded`] if the order is larger than `limit`.
    pub fn order_of_bounded(&self, point: &Point, limit: u64) -> Result<u64, CurveError> {
        let exceeded = || CurveError::OrderLimitExceeded {
            point: *point,
            limit,
        };
        let y = match *point {
            Point::Identity if limit >= 1 => return Ok(1),
            Point::Identity => return Err(exceeded()),
            Point::Affine { y, .. } => y,
        };
        if !self.is_on_curve(point) {
            return Err(CurveError::NotOnCurve(*point));
        }
        if neg_mod(y, self.modulus()) == y {
            return if limit >= 2 { Ok(2) } else { Err(exceeded()) };
        }

        // sum holds counter - 1 copies of point before each addition
        let mut counter = 2;
        let mut sum = *point;
        while counter <= limit {
            sum = self.add(point, &sum)?;
            log::trace!("{} * {} = {}", counter, point, sum);
            if sum.is_identity() {
                return Ok(counter);
            }
            counter += 1;
        }
        Err(exceeded())
    }

    /// Orders of all points of the curve, ascending.
    pub fn order_spectrum(&self) -> Result<Vec<u64>, CurveError> {
        let mut orders = self
            .points()
            .map(|point| self.order_of(&point))
            .collect::<Result<Vec<u64>, CurveError>>()?;
        orders.sort_unstable();
        log::debug!(
            "order spectrum of {}: {} points, largest order {:?}",
            self,
            orders.len(),
            orders.last()
        );
        Ok(orders)
    }

    /// Whether some point generates the whole group.
    pub fn is_cyclic(&self) -> Result<bool, CurveError> {
        let spectrum = self.order_spectrum()?;
        Ok(spectrum.last() == Some(&(spectrum.len() as u64)))
    }
}
