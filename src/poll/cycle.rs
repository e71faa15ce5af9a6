//! Poll cycle controller.
//!
//! Idle until a trigger line arrives, then one full pass over the metric
//! table, then exactly one output line. Per-entry failures are logged and
//! skipped; a cycle where every entry failed still emits the bare tag prefix.

use crate::Result;
use crate::metrics::MetricSource;
use crate::poll::CallCache;
use crate::upnp::{CallError, ServiceDirectory, render_field};
use crate::wire::{ResultBatch, format_line};

use anyhow::Context;
use std::io::{BufRead, Write};
use tracing::{debug, error, warn};

pub struct Poller<D> {
    directory: D,
    source: MetricSource,
    bucket: String,
    host: String,
    cache: CallCache,
}

impl<D: ServiceDirectory> Poller<D> {
    pub fn new(
        directory: D,
        source: MetricSource,
        bucket: impl Into<String>,
        host: impl Into<String>,
    ) -> Self {
        Self {
            directory,
            source,
            bucket: bucket.into(),
            host: host.into(),
            cache: CallCache::new(),
        }
    }

    /// Evaluate every table entry once, in order.
    pub fn poll_once(&mut self) -> ResultBatch {
        let mut batch = ResultBatch::new(self.source.name);

        for spec in self.source.metrics {
            match self
                .cache
                .invoke_if_needed(&self.directory, spec.service, spec.action)
            {
                Ok(result) => batch.push(spec.name, render_field(result.get(spec.result))),
                Err(
                    err @ (CallError::ServiceNotFound { .. } | CallError::ActionNotFound { .. }),
                ) => {
                    warn!(metric = spec.name, "{}", err);
                }
                Err(err) => {
                    error!(metric = spec.name, "{}", err);
                }
            }
        }

        batch
    }

    /// One poll cycle rendered as a metric line (no newline).
    pub fn cycle(&mut self) -> String {
        let batch = self.poll_once();
        debug!(source = %batch.source, values = batch.values.len(), "cycle complete");
        format_line(&self.bucket, &self.host, &batch)
    }

    /// Run one cycle per line read from `trigger` until it is exhausted.
    /// Line content is ignored. Returns the number of cycles run.
    pub fn run<R: BufRead, W: Write>(&mut self, mut trigger: R, mut out: W) -> Result<u64> {
        let mut buf = Vec::new();
        let mut cycles = 0;

        loop {
            buf.clear();
            let n = trigger
                .read_until(b'\n', &mut buf)
                .context("read trigger input")?;
            if n == 0 {
                debug!(cycles, "trigger input closed");
                return Ok(cycles);
            }

            let line = self.cycle();
            writeln!(out, "{}", line).context("write metric line")?;
            out.flush().context("flush metric output")?;
            cycles += 1;
        }
    }
}
