//! Supervised derivation regions.
//!
//! Gateway and hook failures are represented as state and never panic; this
//! wrapper guards the remaining surface, synchronous view derivation over
//! already-fetched data. A panic inside a region is caught and logged, the
//! region yields a generic failure notice, and the process keeps running.
//! Manual restart is simply running the region again.

use std::fmt::{Display, Formatter};
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Failure produced by a supervised region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionFailure {
    region: &'static str,
    message: String,
}

impl RegionFailure {
    pub const fn region(&self) -> &'static str {
        self.region
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Generic user-facing fallback text.
    pub fn notice(&self) -> String {
        format!("the {} view failed to render; reload to try again", self.region)
    }
}

impl Display for RegionFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "region '{}' failed: {}", self.region, self.message)
    }
}

impl std::error::Error for RegionFailure {}

/// A named, re-runnable derivation region.
pub struct Supervised<F> {
    region: &'static str,
    derive: F,
}

impl<F, T> Supervised<F>
where
    F: Fn() -> T,
{
    pub fn new(region: &'static str, derive: F) -> Self {
        Self { region, derive }
    }

    /// Run the derivation once. Calling again after a failure is the manual
    /// reload action.
    pub fn run(&self) -> Result<T, RegionFailure> {
        supervised(self.region, &self.derive)
    }
}

/// Run one closure under panic supervision.
pub fn supervised<T>(region: &'static str, derive: impl Fn() -> T) -> Result<T, RegionFailure> {
    catch_unwind(AssertUnwindSafe(derive)).map_err(|payload| {
        let message = panic_message(payload.as_ref());
        tracing::error!(region, message = %message, "derivation panicked");
        RegionFailure {
            region,
            message,
        }
    })
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        String::from(*message)
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        String::from("unknown panic")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_region_passes_value_through() {
        let region = Supervised::new("chart", || 42);
        assert_eq!(region.run().expect("no panic"), 42);
    }

    #[test]
    fn panicking_region_is_contained() {
        let rows: Vec<u32> = Vec::new();
        let region = Supervised::new("chart", move || rows[3]);

        let failure = region.run().expect_err("out-of-bounds panics");
        assert_eq!(failure.region(), "chart");
        assert!(failure.notice().contains("chart"));
    }

    #[test]
    fn failed_region_can_be_rerun() {
        let mut attempts = 0;
        let result = loop {
            attempts += 1;
            let fail = attempts == 1;
            let region = Supervised::new("summary", move || {
                if fail {
                    panic!("transient derivation bug");
                }
                "ok"
            });
            if let Ok(value) = region.run() {
                break value;
            }
        };
        assert_eq!(result, "ok");
        assert_eq!(attempts, 2);
    }
}
