//! Time-bounded curve playback
//!
//! An [`Animation`] pairs a [`Bezier4`] with an absolute [`TimeSpan`] on the
//! host clock (milliseconds). Sampling is a pure function of the animation
//! and the timestamp: progress is `clamp((now - start) / (end - start), 0, 1)`
//! and the curve is evaluated at that progress.

use crate::curve::Bezier4;
use crate::error::{CurveError, Result};
use crate::scheduler::{FrameScheduler, Subscription};
use crate::vectors::Components;

/// Closed time range on the host clock
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeSpan {
    pub start: f64,
    pub end: f64,
}

impl TimeSpan {
    /// Create a span, rejecting `start >= end` and non-finite bounds
    pub fn new(start: f64, end: f64) -> Result<Self> {
        if !start.is_finite() || !end.is_finite() || start >= end {
            return Err(CurveError::InvalidSpan { start, end });
        }
        Ok(Self { start, end })
    }

    /// Span beginning at `start` and lasting `duration`
    ///
    /// A negative duration is clamped to zero.
    pub fn starting_at(start: f64, duration: f64) -> Self {
        Self {
            start,
            end: start + duration.max(0.0),
        }
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Progress through the span at `now`, clamped to `[0, 1]`
    ///
    /// A zero-length span jumps from 0 to 1 at `start`.
    pub fn progress_at(&self, now: f64) -> f64 {
        let duration = self.duration();
        if duration <= 0.0 {
            return if now < self.start { 0.0 } else { 1.0 };
        }
        ((now - self.start) / duration).clamp(0.0, 1.0)
    }
}

/// Position and velocity of an animation at one instant
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationSample<V> {
    pub point: V,
    /// Derivative with respect to progress
    pub velocity: V,
}

/// A curve played back over a time span
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Animation<V> {
    pub curve: Bezier4<V>,
    pub span: TimeSpan,
}

impl<V: Components> Animation<V> {
    pub fn new(curve: Bezier4<V>, span: TimeSpan) -> Self {
        Self { curve, span }
    }

    /// Animation following `points` for `duration` starting at `now`
    pub fn starting_at(points: [V; 4], now: f64, duration: f64) -> Self {
        Self {
            curve: Bezier4::new(points),
            span: TimeSpan::starting_at(now, duration),
        }
    }

    pub fn progress_at(&self, now: f64) -> f64 {
        self.span.progress_at(now)
    }

    /// True once `now` has reached the end of the span
    pub fn is_complete(&self, now: f64) -> bool {
        now >= self.span.end
    }

    /// Sample the curve at `now`
    pub fn sample_at(&self, now: f64) -> AnimationSample<V> {
        let progress = self.progress_at(now);
        AnimationSample {
            point: self.curve.point_at(progress),
            velocity: self.curve.velocity_at(progress),
        }
    }

    /// Lazily sample the animation for each timestamp of `clock`
    ///
    /// The returned iterator is as long as `clock`; pass an endless clock for
    /// an endless stream of samples.
    pub fn samples<I>(&self, clock: I) -> impl Iterator<Item = AnimationSample<V>>
    where
        I: IntoIterator<Item = f64>,
    {
        let animation = *self;
        clock.into_iter().map(move |now| animation.sample_at(now))
    }

    /// Call `on_sample` once per frame of `scheduler` with the current sample
    ///
    /// Frames stop as soon as the returned [`Subscription`] is unsubscribed
    /// or dropped.
    pub fn subscribe<F>(&self, scheduler: &FrameScheduler, mut on_sample: F) -> Subscription
    where
        V: 'static,
        F: FnMut(AnimationSample<V>) + 'static,
    {
        let animation = *self;
        scheduler.subscribe(move |now| on_sample(animation.sample_at(now)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectors::{Vector1D, Vector2D};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn slide_in(now: f64) -> Animation<Vector1D> {
        Animation::starting_at(
            [
                Vector1D::new(-1.0),
                Vector1D::new(-1.0),
                Vector1D::new(0.0),
                Vector1D::new(0.0),
            ],
            now,
            500.0,
        )
    }

    #[test]
    fn test_span_validation() {
        assert!(TimeSpan::new(0.0, 10.0).is_ok());
        assert_eq!(
            TimeSpan::new(10.0, 10.0),
            Err(CurveError::InvalidSpan {
                start: 10.0,
                end: 10.0
            })
        );
        assert!(TimeSpan::new(f64::NAN, 1.0).is_err());
        assert_eq!(TimeSpan::starting_at(5.0, -3.0).duration(), 0.0);
    }

    #[test]
    fn test_progress_clamped() {
        let span = TimeSpan::starting_at(100.0, 500.0);
        assert_eq!(span.progress_at(0.0), 0.0);
        assert_eq!(span.progress_at(100.0), 0.0);
        assert_eq!(span.progress_at(350.0), 0.5);
        assert_eq!(span.progress_at(600.0), 1.0);
        assert_eq!(span.progress_at(10_000.0), 1.0);
    }

    #[test]
    fn test_zero_length_span() {
        let span = TimeSpan::starting_at(100.0, 0.0);
        assert_eq!(span.progress_at(99.0), 0.0);
        assert_eq!(span.progress_at(100.0), 1.0);
    }

    #[test]
    fn test_sample_clamps_to_curve_ends() {
        let anim = slide_in(1000.0);
        assert_eq!(anim.sample_at(0.0).point, anim.curve.point_at(0.0));
        assert_eq!(anim.sample_at(0.0).velocity, anim.curve.velocity_at(0.0));
        assert_eq!(anim.sample_at(99_999.0).point, anim.curve.point_at(1.0));
        assert_eq!(anim.sample_at(99_999.0).velocity, anim.curve.velocity_at(1.0));
        assert!(anim.is_complete(1500.0));
        assert!(!anim.is_complete(1499.0));
    }

    #[test]
    fn test_sampling_is_pure() {
        let anim = Animation::starting_at(
            [
                Vector2D::new(0.0, 1.0),
                Vector2D::new(3.0, -2.0),
                Vector2D::new(0.5, 0.5),
                Vector2D::new(1.0, 0.0),
            ],
            0.0,
            300.0,
        );
        for &now in &[-5.0, 0.0, 17.0, 150.0, 299.9, 300.0, 1e9] {
            assert_eq!(anim.sample_at(now), anim.sample_at(now));
        }
    }

    #[test]
    fn test_samples_iterator() {
        let anim = slide_in(0.0);
        let xs: Vec<f64> = anim
            .samples((0..=5).map(|i| i as f64 * 100.0))
            .map(|s| s.point.x())
            .collect();
        assert_eq!(xs.len(), 6);
        assert_eq!(xs[0], -1.0);
        assert_eq!(xs[5], 0.0);
        assert!(xs.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_subscribe_receives_samples_until_dropped() {
        let scheduler = FrameScheduler::new();
        let anim = slide_in(0.0);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        let subscription = anim.subscribe(&scheduler, move |sample| {
            sink.borrow_mut().push(sample.point.x());
        });

        scheduler.tick(0.0);
        scheduler.tick(500.0);
        drop(subscription);
        scheduler.tick(600.0);

        assert_eq!(*seen.borrow(), vec![-1.0, 0.0]);
        assert_eq!(scheduler.subscription_count(), 0);
    }
}
