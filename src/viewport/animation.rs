//! Eased offset interpolation for smooth scrolling.

/// A scroll from one offset to another spread over a fixed number of frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollAnimation {
    from: usize,
    to: usize,
    frame: u32,
    frames: u32,
}

impl ScrollAnimation {
    /// `frames` is clamped to at least one.
    #[must_use]
    pub fn new(from: usize, to: usize, frames: u32) -> Self {
        Self {
            from,
            to,
            frame: 0,
            frames: frames.max(1),
        }
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.frame >= self.frames
    }

    /// Advances one frame and returns the offset to show.
    pub fn step(&mut self) -> usize {
        if self.frame < self.frames {
            self.frame += 1;
        }
        self.position()
    }

    /// Offset at the current frame, eased with a cubic ease-out.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn position(&self) -> usize {
        if self.is_finished() {
            return self.to;
        }
        let t = f64::from(self.frame) / f64::from(self.frames);
        let eased = 1.0 - (1.0 - t).powi(3);

        let from = self.from as f64;
        let to = self.to as f64;
        (from + (to - from) * eased).round().max(0.0) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reaches_target_in_exactly_n_frames() {
        let mut anim = ScrollAnimation::new(0, 40, 8);
        for _ in 0..7 {
            anim.step();
            assert!(!anim.is_finished());
        }
        assert_eq!(anim.step(), 40);
        assert!(anim.is_finished());
    }

    #[test]
    fn eases_out() {
        let mut anim = ScrollAnimation::new(0, 100, 4);
        let first = anim.step();
        let second = anim.step();
        // the first frame covers more ground than the second
        assert!(first > second - first);
    }

    #[test]
    fn moves_monotonically_upwards() {
        let mut anim = ScrollAnimation::new(80, 0, 10);
        let mut last = 80;
        while !anim.is_finished() {
            let pos = anim.step();
            assert!(pos <= last);
            last = pos;
        }
        assert_eq!(last, 0);
    }

    #[test]
    fn zero_frames_means_one() {
        let mut anim = ScrollAnimation::new(0, 10, 0);
        assert_eq!(anim.step(), 10);
    }
}
