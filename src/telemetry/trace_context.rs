//! W3C trace-context propagation and head sampling.
//!
//! Inbound calls may carry a `traceparent` header. When present, its trace id
//! becomes the id of the request span and its sampled flag decides whether the
//! span is recorded. Root requests get a fresh trace id and are sampled by
//! ratio over the low 8 bytes of that id, so the decision is stable for a
//! given trace.

use uuid::Uuid;

pub const TRACEPARENT_HEADER: &str = "traceparent";

const SAMPLED_FLAG: u8 = 0x01;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceContext {
    /// 32 lowercase hex characters.
    pub trace_id: String,
    /// Span id of the remote caller, if the call arrived with one.
    pub parent_span_id: Option<String>,
    /// Sampling decision carried by the caller.
    pub parent_sampled: Option<bool>,
}

impl TraceContext {
    /// Parses a version-00 `traceparent` value:
    /// `00-<32 hex trace id>-<16 hex parent id>-<2 hex flags>`.
    pub fn from_traceparent(value: &str) -> Option<Self> {
        let mut parts = value.trim().split('-');
        let version = parts.next()?;
        let trace_id = parts.next()?;
        let parent_id = parts.next()?;
        let flags = parts.next()?;

        if parts.next().is_some() || version != "00" {
            return None;
        }
        if !is_lower_hex(trace_id, 32) || !is_lower_hex(parent_id, 16) || !is_lower_hex(flags, 2) {
            return None;
        }
        // All-zero ids are invalid per the W3C format
        if trace_id.bytes().all(|b| b == b'0') || parent_id.bytes().all(|b| b == b'0') {
            return None;
        }

        let flags = u8::from_str_radix(flags, 16).ok()?;

        Some(Self {
            trace_id: trace_id.to_string(),
            parent_span_id: Some(parent_id.to_string()),
            parent_sampled: Some(flags & SAMPLED_FLAG == SAMPLED_FLAG),
        })
    }

    pub fn new_root() -> Self {
        Self {
            trace_id: Uuid::new_v4().simple().to_string(),
            parent_span_id: None,
            parent_sampled: None,
        }
    }

    /// Uses the header when it parses, otherwise starts a new trace.
    pub fn from_header_or_root(value: Option<&str>) -> Self {
        value
            .and_then(Self::from_traceparent)
            .unwrap_or_else(Self::new_root)
    }
}

fn is_lower_hex(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

/// Parent-based sampler with a trace-id ratio for root requests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceSampler {
    enabled: bool,
    ratio: f64,
}

impl TraceSampler {
    pub fn new(enabled: bool, ratio: f64) -> Self {
        Self {
            enabled,
            ratio: ratio.clamp(0.0, 1.0),
        }
    }

    pub fn disabled() -> Self {
        Self::new(false, 0.0)
    }

    pub fn should_sample(&self, ctx: &TraceContext) -> bool {
        if !self.enabled {
            return false;
        }

        match ctx.parent_sampled {
            Some(sampled) => sampled,
            None => self.ratio_sample(&ctx.trace_id),
        }
    }

    fn ratio_sample(&self, trace_id: &str) -> bool {
        if self.ratio >= 1.0 {
            return true;
        }
        if self.ratio <= 0.0 {
            return false;
        }

        let Some(low) = trace_id
            .get(16..32)
            .and_then(|hex| u64::from_str_radix(hex, 16).ok())
        else {
            return false;
        };

        let bound = (self.ratio * (1u64 << 63) as f64) as u64;
        (low >> 1) < bound
    }
}
