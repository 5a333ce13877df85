use crate::traits::{Detalizer, Render};
use crate::types::{Detail, DetailValue};
use core::fmt::{self, Display};
use std::backtrace::{Backtrace, BacktraceStatus};
use std::sync::OnceLock;

/// Key type of [`CALL_STACK_DETAIL_KEY`]. Renders as `Call Stack`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallStackKey;

/// Key under which [`CallStackDetalizer`] stores the captured [`CallStack`].
pub const CALL_STACK_DETAIL_KEY: CallStackKey = CallStackKey;

impl Display for CallStackKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Call Stack")
    }
}

impl From<CallStackKey> for DetailValue {
    #[inline]
    fn from(key: CallStackKey) -> Self {
        DetailValue::shown(key)
    }
}

/// Captured call stack whose text is built on first render only.
///
/// Frames of the capturing machinery and of this crate are dropped from the
/// top of the stack. On top of that, `skip` drops further caller frames and
/// `depth` caps how many frames are printed. Each printed frame is one
/// `\t{function} {location}` line.
///
/// Rendering is compute-once: concurrent first calls agree on one string.
#[derive(Debug)]
pub struct CallStack {
    backtrace: Backtrace,
    skip: usize,
    depth: Option<usize>,
    printed: OnceLock<Option<String>>,
}

impl CallStack {
    #[inline]
    pub fn new(backtrace: Backtrace) -> Self {
        Self { backtrace, skip: 0, depth: None, printed: OnceLock::new() }
    }

    /// Drops `frames` more caller frames after the internal ones.
    #[inline]
    pub fn skip(mut self, frames: usize) -> Self {
        self.skip = frames;
        self
    }

    /// Prints at most `frames` frames.
    #[inline]
    pub fn depth(mut self, frames: usize) -> Self {
        self.depth = Some(frames);
        self
    }

    #[inline]
    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }

    fn print(&self) -> Option<String> {
        if self.backtrace.status() != BacktraceStatus::Captured {
            return None;
        }

        let text = self.backtrace.to_string();
        let frames = parse_frames(&text);
        let lines: Vec<String> = frames
            .into_iter()
            .skip_while(|frame| is_internal(frame.function))
            .skip(self.skip)
            .take(self.depth.unwrap_or(usize::MAX))
            .map(|frame| match frame.location {
                Some(location) => format!("\t{} {}", frame.function, location),
                None => format!("\t{}", frame.function),
            })
            .collect();

        if lines.is_empty() {
            return None;
        }
        Some(format!("\n{}", lines.join("\n")))
    }
}

impl Render for CallStack {
    fn render(&self) -> Option<String> {
        self.printed.get_or_init(|| self.print()).clone()
    }
}

struct Frame<'a> {
    function: &'a str,
    location: Option<&'a str>,
}

// Frames are printed as `  N: function` optionally followed by
// `      at file:line:column`.
fn parse_frames(text: &str) -> Vec<Frame<'_>> {
    let mut frames: Vec<Frame<'_>> = Vec::new();
    for line in text.lines().map(str::trim) {
        if let Some(location) = line.strip_prefix("at ") {
            if let Some(frame) = frames.last_mut().filter(|frame| frame.location.is_none()) {
                frame.location = Some(location);
            }
            continue;
        }

        let Some((index, function)) = line.split_once(": ") else { continue };
        if !index.is_empty() && index.bytes().all(|byte| byte.is_ascii_digit()) {
            frames.push(Frame { function, location: None });
        }
    }
    frames
}

fn is_internal(function: &str) -> bool {
    function.starts_with("std::backtrace")
        || function.starts_with(concat!(env!("CARGO_CRATE_NAME"), "::"))
        || function.contains(concat!(" as ", env!("CARGO_CRATE_NAME"), "::"))
        || function.starts_with(concat!("<", env!("CARGO_CRATE_NAME"), "::"))
}

/// Detalizer attaching the call stack of the code creating the error.
///
/// [`CallStackDetalizer::new`] follows `RUST_BACKTRACE` / `RUST_LIB_BACKTRACE`
/// and attaches nothing while capturing is disabled.
/// [`CallStackDetalizer::forced`] always captures.
///
/// The stack starts at the caller of the factory method. [`skip`] drops
/// further frames, e.g. of an error helper shared across a code base, and
/// [`depth`] caps the printed frames. A depth of zero disables the detail.
///
/// [`skip`]: CallStackDetalizer::skip
/// [`depth`]: CallStackDetalizer::depth
///
/// # Examples
///
/// ```
/// use error_detail::{CallStackDetalizer, ErrorFactory, CALL_STACK_DETAIL_KEY};
///
/// let factory = ErrorFactory::builder()
///     .chain_store()
///     .detalizer(CallStackDetalizer::forced().depth(5))
///     .build();
///
/// let err = factory.error("unexpected state");
/// assert!(err.contains(CALL_STACK_DETAIL_KEY));
/// assert!(err.detailed().lines().count() <= 2 + 5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallStackDetalizer {
    force: bool,
    skip: usize,
    depth: Option<usize>,
}

impl CallStackDetalizer {
    #[inline]
    pub const fn new() -> Self {
        Self { force: false, skip: 0, depth: None }
    }

    #[inline]
    pub const fn forced() -> Self {
        Self { force: true, skip: 0, depth: None }
    }

    /// Skips `frames` caller frames below the factory call.
    #[inline]
    pub const fn skip(mut self, frames: usize) -> Self {
        self.skip = frames;
        self
    }

    /// Caps the stack at `frames` frames.
    #[inline]
    pub const fn depth(mut self, frames: usize) -> Self {
        self.depth = Some(frames);
        self
    }
}

impl Detalizer for CallStackDetalizer {
    fn details(&self) -> Vec<Detail> {
        if self.depth == Some(0) {
            return Vec::new();
        }

        let backtrace = if self.force { Backtrace::force_capture() } else { Backtrace::capture() };
        if backtrace.status() != BacktraceStatus::Captured {
            return Vec::new();
        }

        let mut stack = CallStack::new(backtrace).skip(self.skip);
        if let Some(depth) = self.depth {
            stack = stack.depth(depth);
        }
        vec![Detail::new(CALL_STACK_DETAIL_KEY, DetailValue::rendered(stack))]
    }
}
