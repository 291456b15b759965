use indicatif::ProgressBar;

pub struct ScanProgress {
    bar: ProgressBar,
}

impl ScanProgress {
    /// Spinner for the single scan phase. The site being analyzed is
    /// shown when it is already known.
    pub fn new(site: Option<&str>) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            indicatif::ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        bar.enable_steady_tick(std::time::Duration::from_millis(80));
        match site {
            Some(site) => bar.set_message(format!("Analyzing privacy... [{}]", site)),
            None => bar.set_message("Analyzing privacy..."),
        }
        Self { bar }
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
