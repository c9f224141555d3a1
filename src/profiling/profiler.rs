//! Chrome Trace ("flame style") profiling.
//!
//! Feature-gated with `--features profiling`.
//!
//! Usage:
//!   parstat::profiler::init("profile/trace.json");
//!   {
//!     let _g = parstat::profiler::span("harness::trial_0");
//!     // run reduction...
//!   }
//!   parstat::profiler::shutdown();
//!
//! When the feature is disabled, all profiling calls compile to no-ops
//! and impose no runtime overhead.

use std::borrow::Cow;
use std::path::Path;

#[cfg(feature = "profiling")]
mod enabled {
    use std::fs::File;
    use std::io::{BufWriter, Write};
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::{Mutex, OnceLock};
    use std::time::Instant;

    use super::*;

    /// A Chrome trace "complete event" (`ph:"X"`).
    struct CompleteEvent {
        name: String,
        ts_us: u64,
        dur_us: u64,
        tid: u64,
    }

    struct Recorder {
        path: PathBuf,
        epoch: Instant,
        events: Vec<CompleteEvent>,
    }

    static RECORDER: OnceLock<Mutex<Option<Recorder>>> = OnceLock::new();
    static NEXT_TID: AtomicU64 = AtomicU64::new(1);

    std::thread_local! {
        static TID: u64 = NEXT_TID.fetch_add(1, Ordering::Relaxed);
    }

    fn recorder() -> &'static Mutex<Option<Recorder>> {
        RECORDER.get_or_init(|| Mutex::new(None))
    }

    /// Starts recording; spans taken before `init` are dropped silently.
    pub fn init<P: AsRef<Path>>(path: P) {
        let mut guard = recorder().lock().unwrap();
        *guard = Some(Recorder {
            path: path.as_ref().to_path_buf(),
            epoch: Instant::now(),
            events: Vec::new(),
        });
    }

    /// Opens a named span, closed (and recorded) when the guard drops.
    pub fn span(name: impl Into<SpanName>) -> SpanGuard {
        let name = name.into();
        let start = recorder()
            .lock()
            .unwrap()
            .as_ref()
            .map(|r| r.epoch.elapsed().as_micros() as u64);
        SpanGuard {
            name: name.0,
            start_us: start,
        }
    }

    /// Like [`span`], for names built at runtime.
    pub fn span_fmt(name: String) -> SpanGuard {
        span(name)
    }

    /// RAII guard recording one complete event on drop.
    pub struct SpanGuard {
        pub(super) name: Cow<'static, str>,
        pub(super) start_us: Option<u64>,
    }

    impl Drop for SpanGuard {
        fn drop(&mut self) {
            let Some(start_us) = self.start_us else { return };
            let tid = TID.with(|t| *t);
            let mut guard = recorder().lock().unwrap();
            if let Some(rec) = guard.as_mut() {
                let now_us = rec.epoch.elapsed().as_micros() as u64;
                rec.events.push(CompleteEvent {
                    name: self.name.to_string(),
                    ts_us: start_us,
                    dur_us: now_us.saturating_sub(start_us),
                    tid,
                });
            }
        }
    }

    /// Flushes buffered events as a Chrome Trace JSON array.
    ///
    /// Write failures are reported to stderr; profiling must never take
    /// the benchmark down with it.
    pub fn shutdown() {
        let Some(rec) = recorder().lock().unwrap().take() else {
            return;
        };

        let result = (|| -> std::io::Result<()> {
            if let Some(parent) = rec.path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            let mut out = BufWriter::new(File::create(&rec.path)?);
            writeln!(out, "[")?;
            for (i, ev) in rec.events.iter().enumerate() {
                let comma = if i + 1 == rec.events.len() { "" } else { "," };
                writeln!(
                    out,
                    "{{\"name\":\"{}\",\"ph\":\"X\",\"ts\":{},\"dur\":{},\"pid\":1,\"tid\":{}}}{}",
                    ev.name.replace('"', "'"),
                    ev.ts_us,
                    ev.dur_us,
                    ev.tid,
                    comma
                )?;
            }
            writeln!(out, "]")?;
            out.flush()
        })();

        if let Err(e) = result {
            eprintln!("profiler: failed to write {}: {e}", rec.path.display());
        }
    }
}

#[cfg(not(feature = "profiling"))]
mod disabled {
    use super::*;

    /// No-op span guard.
    pub struct SpanGuard;

    /// No-op; profiling is compiled out.
    #[inline(always)]
    pub fn init<P: AsRef<Path>>(_path: P) {}

    /// No-op; profiling is compiled out.
    #[inline(always)]
    pub fn span(_name: impl Into<SpanName>) -> SpanGuard {
        SpanGuard
    }

    /// No-op; profiling is compiled out.
    #[inline(always)]
    pub fn span_fmt(_name: String) -> SpanGuard {
        SpanGuard
    }

    /// No-op; profiling is compiled out.
    #[inline(always)]
    pub fn shutdown() {}
}

// ─────────────────────────────────────────────────────────────────────────────
// Public API surface (stable regardless of feature flag)
// ─────────────────────────────────────────────────────────────────────────────

/// A span name; accepts `&'static str`, `String`, or `Cow<'static, str>`.
pub struct SpanName(pub Cow<'static, str>);

impl From<&'static str> for SpanName {
    fn from(s: &'static str) -> Self {
        SpanName(Cow::Borrowed(s))
    }
}
impl From<String> for SpanName {
    fn from(s: String) -> Self {
        SpanName(Cow::Owned(s))
    }
}
impl From<Cow<'static, str>> for SpanName {
    fn from(s: Cow<'static, str>) -> Self {
        SpanName(s)
    }
}

// Re-export correct backend
#[cfg(feature = "profiling")]
pub use enabled::{init, shutdown, span, span_fmt, SpanGuard};

#[cfg(not(feature = "profiling"))]
pub use disabled::{init, shutdown, span, span_fmt, SpanGuard};
