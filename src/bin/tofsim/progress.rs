/// Progress bar for `tofsim run`
pub (super) struct Progress {
    bar: ProgressBar,
}

impl Progress {

    pub (super) fn new(n_frames: usize) -> Self {
        let bar = ProgressBar::new(100).with_message(format!("{} frames", group_digits(n_frames)));
        bar.set_style(ProgressStyle::default_bar()
                      .template("Simulating {msg}\n[{elapsed_precise}] {wide_bar} {pos}% ({eta_precise})")
                      .unwrap()
        );
        bar.tick();
        Self { bar }
    }

    pub (super) fn update(&self, percent: u8) {
        self.bar.set_position(percent as u64);
        if percent == 100 { self.bar.finish() }
    }

    pub (super) fn abandon(&self) { self.bar.abandon() }
}

// ----- Imports -----------------------------------------------------------------------------------------
use indicatif::{ProgressBar, ProgressStyle};
use tofsim::utils::group_digits;
