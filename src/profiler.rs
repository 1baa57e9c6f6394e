use std::time::Instant;

/// Logs the wall time of each named step, and the total when dropped.
pub struct Profiler {
    start_time: Instant,
    curr: Option<Step>,
}

struct Step {
    start_time: Instant,
    name: String,
}

impl Profiler {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            curr: None,
        }
    }

    pub fn step(&mut self, step_name: &str) {
        self.finish();
        info!("{} - START", step_name);
        self.curr = Some(Step {
            start_time: Instant::now(),
            name: step_name.to_string(),
        });
    }

    pub fn finish(&mut self) {
        if let Some(step) = self.curr.take() {
            info!("{} - STOP {:.3} s", step.name, step.start_time.elapsed().as_secs_f64());
        }
    }

    pub fn total(&mut self) {
        self.finish();
        info!("TOTAL - {:.3} s", self.start_time.elapsed().as_secs_f64());
    }
}

impl Drop for Profiler {
    fn drop(&mut self) {
        self.total()
    }
}
