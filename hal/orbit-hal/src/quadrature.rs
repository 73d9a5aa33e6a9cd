//! Quadrature encoder counter abstraction

/// Source of accumulated encoder movement
///
/// The counter is maintained outside the control loop (an edge interrupt or
/// a dedicated task). `take_delta` must read and clear the accumulated value
/// in one atomic step so no movement is lost or delivered twice.
pub trait QuadratureCounter {
    /// Net signed detents since the previous call
    ///
    /// Positive values are clockwise (increment), negative counter-clockwise.
    fn take_delta(&mut self) -> i32;
}
