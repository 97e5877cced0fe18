use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use console::{Term, style};
use indicatif::{ProgressBar, ProgressStyle};

use crate::constants::progress::{SPINNER_FRAMES, TICK_INTERVAL};

const PROGRESS_BAR_TEMPLATE: &str =
    "{msg} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {per_sec}";

pub struct ProgressReporter {
    term: Term,
    spinner_position: AtomicUsize,
    current_bar: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            spinner_position: AtomicUsize::new(0),
            current_bar: None,
        }
    }

    /// Only report progress when a person is watching stderr
    pub fn for_terminal() -> Option<Self> {
        if Term::stderr().is_term() {
            Some(Self::new())
        } else {
            None
        }
    }

    fn next_frame(&self) -> &'static str {
        let pos = self.spinner_position.fetch_add(1, Ordering::Relaxed) % SPINNER_FRAMES.len();
        SPINNER_FRAMES[pos]
    }

    pub fn start_discovery(&mut self) {
        let _ = self.term.clear_line();
        eprintln!("{} Looking for pipeline files...", style("🔍").cyan());
    }

    pub fn checking_path(&self, path: &Path) {
        let _ = self.term.clear_line();
        eprint!(
            "\r{} Scanning: {}... ",
            style(self.next_frame()).cyan(),
            style(path.display()).dim()
        );
    }

    pub fn finish_discovery(&mut self, count: usize) {
        let _ = self.term.clear_line();
        if count == 0 {
            eprintln!("\r{} No pipeline files found", style("✗").red());
        } else {
            eprintln!(
                "\r{} Discovery complete: found {} pipeline{}",
                style("✓").green(),
                style(count).yellow().bold(),
                if count == 1 { "" } else { "s" }
            );
        }
    }

    pub fn start_evaluation(&mut self, total: usize) -> ProgressBar {
        let pb = ProgressBar::new(total as u64);
        let bar_style = ProgressStyle::default_bar()
            .template(PROGRESS_BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▉▊▋▌▍▎▏ ");
        pb.set_style(bar_style);
        pb.set_message("Evaluating pipelines");
        pb.enable_steady_tick(TICK_INTERVAL);
        self.current_bar = Some(pb.clone());
        pb
    }

    pub fn finish_evaluation(&mut self, cyclic: usize) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }

        if cyclic == 0 {
            eprintln!(
                "{} Every pipeline is a DAG {}",
                style("✓").green().bold(),
                style("🎉").dim()
            );
        } else {
            eprintln!(
                "{} Found {} pipeline{} with cycles",
                style("⚠").yellow().bold(),
                style(cyclic).red().bold(),
                if cyclic == 1 { "" } else { "s" }
            );
        }
    }
}
