use indicatif::{ProgressBar, ProgressStyle};

/// Row-granular progress observer. Stages call `start` once, `inc` per row
/// and `finish` when done; implementations must not affect the encoding.
pub trait Progress {
    fn start(&mut self, stage: &str, total: u64);
    fn inc(&mut self, n: u64);
    fn finish(&mut self);
}

/// Discards every update.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn start(&mut self, _stage: &str, _total: u64) {}
    fn inc(&mut self, _n: u64) {}
    fn finish(&mut self) {}
}

/// Terminal progress bar, one bar per stage.
#[derive(Default)]
pub struct BarProgress {
    bar: Option<ProgressBar>,
}

impl BarProgress {
    pub fn new() -> Self {
        Self::default()
    }

    fn style() -> ProgressStyle {
        ProgressStyle::with_template(
            "  {msg:<14} {bar:40.cyan/blue} {pos}/{len} rows [{elapsed_precise}]",
        )
        .map(|s| s.progress_chars("##-"))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
    }
}

impl Progress for BarProgress {
    fn start(&mut self, stage: &str, total: u64) {
        // a stage that never called finish still gets its bar closed
        self.finish();
        let bar = ProgressBar::new(total);
        bar.set_style(Self::style());
        bar.set_message(stage.to_string());
        self.bar = Some(bar);
    }

    fn inc(&mut self, n: u64) {
        if let Some(bar) = &self.bar {
            bar.inc(n);
        }
    }

    fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_progress_tracks_position_per_stage() {
        let mut progress = BarProgress::new();
        progress.start("Importing CSV", 3);
        progress.inc(1);
        progress.inc(1);
        let pos = progress.bar.as_ref().map(|b| b.position());
        assert_eq!(pos, Some(2));

        progress.start("Handle Name", 5);
        assert_eq!(progress.bar.as_ref().map(|b| b.position()), Some(0));
        assert_eq!(progress.bar.as_ref().and_then(|b| b.length()), Some(5));

        progress.finish();
        assert!(progress.bar.is_none());
    }

    #[test]
    fn no_progress_is_inert() {
        let mut progress = NoProgress;
        progress.start("anything", 10);
        progress.inc(10);
        progress.finish();
    }
}
