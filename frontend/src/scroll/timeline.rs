use super::phase::{lerp, phase_progress, PhaseWindow};

pub const SERVICE_COUNT: usize = 4;

/// Phase windows of the pinned hero journey. All values are fractions of the
/// journey's scroll progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroTimeline {
    pub hero_text: PhaseWindow,
    /// Entrance of the first service card; later cards are offset by `stagger`.
    pub service_enter: PhaseWindow,
    /// Exit of the first service card; later cards are offset by `stagger`.
    pub service_exit: PhaseWindow,
    pub stagger: f64,
    /// Pixels a card travels while entering and again while exiting.
    pub service_travel: f64,
    pub gather: PhaseWindow,
    pub whiteout: PhaseWindow,
}

impl Default for HeroTimeline {
    fn default() -> Self {
        Self {
            hero_text: PhaseWindow::new(0.0, 0.12),
            service_enter: PhaseWindow::new(0.15, 0.25),
            service_exit: PhaseWindow::new(0.45, 0.55),
            stagger: 0.06,
            service_travel: 60.0,
            gather: PhaseWindow::new(0.72, 0.86),
            whiteout: PhaseWindow::new(0.88, 1.0),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ServiceFrame {
    pub opacity: f64,
    pub offset_y: f64,
}

/// Everything the hero needs to paint one scroll tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HeroFrame {
    pub progress: f64,
    pub video_time: f64,
    pub hero_text_opacity: f64,
    pub services: [ServiceFrame; SERVICE_COUNT],
    pub gather: f64,
    pub whiteout_opacity: f64,
}

impl HeroTimeline {
    pub fn service_windows(&self, index: usize) -> (PhaseWindow, PhaseWindow) {
        let delta = self.stagger * index as f64;
        (self.service_enter.shifted(delta), self.service_exit.shifted(delta))
    }

    /// Cards rise into place while entering and keep rising while leaving.
    pub fn service_frame(&self, index: usize, p: f64) -> ServiceFrame {
        let (enter_window, exit_window) = self.service_windows(index);
        let enter = enter_window.progress(p);
        let exit = exit_window.progress(p);
        ServiceFrame {
            opacity: enter * (1.0 - exit),
            offset_y: lerp(self.service_travel, 0.0, enter) - self.service_travel * exit,
        }
    }

    pub fn frame(&self, p: f64, video_duration: f64) -> HeroFrame {
        let progress = phase_progress(p, 0.0, 1.0);
        let mut services = [ServiceFrame::default(); SERVICE_COUNT];
        for (index, service) in services.iter_mut().enumerate() {
            *service = self.service_frame(index, progress);
        }
        HeroFrame {
            progress,
            video_time: video_time(progress, video_duration),
            hero_text_opacity: 1.0 - self.hero_text.progress(progress),
            services,
            gather: self.gather.progress(progress),
            whiteout_opacity: self.whiteout.progress(progress),
        }
    }
}

/// Playback position for the scrubbed hero video. An unknown (NaN) or empty
/// duration pins the video to its first frame.
pub fn video_time(p: f64, duration: f64) -> f64 {
    if !(duration.is_finite() && duration > 0.0) {
        return 0.0;
    }
    phase_progress(p, 0.0, 1.0) * duration
}
