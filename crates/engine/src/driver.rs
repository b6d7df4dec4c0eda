//! AnimationDriver: the render -> display -> advance loop.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;

use crate::cancel::CancelToken;
use crate::core::{FrameRenderer, Scene};
use crate::pacer::FramePacer;
use crate::sink::DisplaySink;
use crate::types::Angles;

/// Outcome of [`AnimationDriver::run`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    /// Frames presented during this run.
    pub frames: u64,
    /// Angles the next frame would have used.
    pub final_angles: Angles,
    /// `true` when the loop stopped because its token was cancelled.
    pub cancelled: bool,
}

/// Owns the rotation state and feeds frames to a sink.
///
/// The angles are the only state carried from one frame to the next.
#[derive(Debug, Clone)]
pub struct AnimationDriver {
    renderer: FrameRenderer,
    angles: Angles,
    step: Angles,
    pacer: FramePacer,
    frame_limit: Option<u64>,
}

impl AnimationDriver {
    pub fn new(scene: Scene) -> Self {
        let angles = scene.initial_angles();
        let step = scene.rotation_step();
        let pacer = FramePacer::new(scene.frame_interval_ms());
        Self {
            renderer: FrameRenderer::new(scene),
            angles,
            step,
            pacer,
            frame_limit: None,
        }
    }

    /// Stop after `frames` frames even if never cancelled.
    pub fn with_frame_limit(mut self, frames: u64) -> Self {
        self.frame_limit = Some(frames);
        self
    }

    pub fn angles(&self) -> Angles {
        self.angles
    }

    /// Render the current angles, present the grid, then advance.
    ///
    /// If the sink fails the angles are left untouched.
    pub fn step<S: DisplaySink + ?Sized>(&mut self, sink: &mut S) -> Result<()> {
        let grid = self.renderer.render(self.angles);
        sink.present(grid)?;
        self.angles.advance(self.step.a, self.step.b);
        Ok(())
    }

    /// Run until `cancel` is tripped, the frame limit is hit, or the sink fails.
    ///
    /// Cancellation is observed only between frames, so a frame is always
    /// presented whole.
    pub fn run<S: DisplaySink + ?Sized>(
        &mut self,
        sink: &mut S,
        cancel: &CancelToken,
    ) -> Result<RunSummary> {
        log::info!(
            "animation start: angles=({:.3}, {:.3}) step=({}, {}) limit={:?}",
            self.angles.a,
            self.angles.b,
            self.step.a,
            self.step.b,
            self.frame_limit
        );

        let clock = Instant::now();
        let mut frames = 0u64;
        let cancelled = loop {
            if cancel.is_cancelled() {
                break true;
            }
            if self.frame_limit.is_some_and(|limit| frames >= limit) {
                break false;
            }

            self.pacer.mark(elapsed_ms(clock));
            self.step(sink)?;
            frames += 1;

            let wait = self.pacer.remaining(elapsed_ms(clock));
            if wait > 0 {
                thread::sleep(Duration::from_millis(wait));
            }
        };

        log::info!(
            "animation stop after {} frames (cancelled: {})",
            frames,
            cancelled
        );

        Ok(RunSummary {
            frames,
            final_angles: self.angles,
            cancelled,
        })
    }
}

fn elapsed_ms(clock: Instant) -> u64 {
    clock.elapsed().as_millis() as u64
}

#[cfg(test)]
mod tests {
    use anyhow::bail;

    use super::*;
    use crate::core::{DonutConfig, GlyphGrid};

    #[derive(Default)]
    struct Recorder {
        frames: Vec<GlyphGrid>,
    }

    impl DisplaySink for Recorder {
        fn present(&mut self, grid: &GlyphGrid) -> Result<()> {
            self.frames.push(grid.clone());
            Ok(())
        }
    }

    /// Cancels its token once it has shown `after` frames.
    struct CancelAfter {
        after: usize,
        shown: usize,
        token: CancelToken,
    }

    impl DisplaySink for CancelAfter {
        fn present(&mut self, _grid: &GlyphGrid) -> Result<()> {
            self.shown += 1;
            if self.shown >= self.after {
                self.token.cancel();
            }
            Ok(())
        }
    }

    struct Broken;

    impl DisplaySink for Broken {
        fn present(&mut self, _grid: &GlyphGrid) -> Result<()> {
            bail!("display gone")
        }
    }

    fn scene() -> Scene {
        DonutConfig {
            width: 24,
            height: 24,
            initial_a: 0.5,
            initial_b: 0.25,
            delta_a: 0.5,
            delta_b: 0.25,
            ..DonutConfig::default()
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn starts_from_initial_angles() {
        let driver = AnimationDriver::new(scene());
        assert_eq!(driver.angles(), Angles::new(0.5, 0.25));
    }

    #[test]
    fn step_presents_then_advances() {
        let mut driver = AnimationDriver::new(scene());
        let mut sink = Recorder::default();
        driver.step(&mut sink).unwrap();
        driver.step(&mut sink).unwrap();
        assert_eq!(sink.frames.len(), 2);
        assert_eq!(driver.angles(), Angles::new(1.5, 0.75));
        assert_ne!(sink.frames[0], sink.frames[1]);
    }

    #[test]
    fn frame_limit_stops_loop() {
        let mut driver = AnimationDriver::new(scene()).with_frame_limit(3);
        let mut sink = Recorder::default();
        let summary = driver.run(&mut sink, &CancelToken::new()).unwrap();
        assert_eq!(summary.frames, 3);
        assert!(!summary.cancelled);
        assert_eq!(summary.final_angles, Angles::new(2.0, 1.0));
        assert_eq!(sink.frames.len(), 3);
    }

    #[test]
    fn cancelled_before_start_renders_nothing() {
        let mut driver = AnimationDriver::new(scene());
        let token = CancelToken::new();
        token.cancel();
        let mut sink = Recorder::default();
        let summary = driver.run(&mut sink, &token).unwrap();
        assert_eq!(summary.frames, 0);
        assert!(summary.cancelled);
        assert!(sink.frames.is_empty());
        assert_eq!(driver.angles(), Angles::new(0.5, 0.25));
    }

    #[test]
    fn cancellation_is_seen_at_next_frame_boundary() {
        let token = CancelToken::new();
        let mut sink = CancelAfter {
            after: 4,
            shown: 0,
            token: token.clone(),
        };
        let mut driver = AnimationDriver::new(scene());
        let summary = driver.run(&mut sink, &token).unwrap();
        assert_eq!(summary.frames, 4);
        assert!(summary.cancelled);
    }

    #[test]
    fn sink_error_stops_loop_without_advancing() {
        let mut driver = AnimationDriver::new(scene());
        let err = driver.run(&mut Broken, &CancelToken::new()).unwrap_err();
        assert_eq!(err.to_string(), "display gone");
        assert_eq!(driver.angles(), Angles::new(0.5, 0.25));
    }

    #[test]
    fn works_through_trait_objects() {
        let mut driver = AnimationDriver::new(scene()).with_frame_limit(2);
        let mut sink: Box<dyn DisplaySink> = Box::new(Recorder::default());
        let summary = driver.run(&mut sink, &CancelToken::new()).unwrap();
        assert_eq!(summary.frames, 2);
    }
}
