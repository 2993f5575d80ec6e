//! Shared test doubles and a minimal blocking executor.

extern crate std;

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};
use std::sync::{Arc, Mutex};
use std::vec::Vec;

use crate::diag::{DiagError, DiagEvent, DiagSink};
use crate::input::{InputError, LineSource};
use crate::output::{ActuatorSink, OutputError};

/// Run a future to completion (simple blocking executor).
pub fn block_on<F: Future>(mut f: F) -> F::Output {
    fn noop_raw_waker() -> RawWaker {
        fn noop(_: *const ()) {}
        fn clone(_: *const ()) -> RawWaker {
            noop_raw_waker()
        }
        static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, noop, noop, noop);
        RawWaker::new(core::ptr::null(), &VTABLE)
    }

    let waker = unsafe { Waker::from_raw(noop_raw_waker()) };
    let mut cx = Context::from_waker(&waker);

    // SAFETY: We don't move f after pinning
    let mut f = unsafe { Pin::new_unchecked(&mut f) };

    loop {
        match f.as_mut().poll(&mut cx) {
            Poll::Ready(result) => return result,
            Poll::Pending => {
                panic!("Mock future returned Pending unexpectedly");
            }
        }
    }
}

/// Line source fed from a fixed script of lines and errors.
pub struct MockLineSource {
    lines: Vec<Result<Vec<u8>, InputError>>,
    index: usize,
}

impl MockLineSource {
    pub fn new(lines: Vec<Result<Vec<u8>, InputError>>) -> Self {
        Self { lines, index: 0 }
    }

    pub fn from_lines<L: AsRef<[u8]>>(lines: &[L]) -> Self {
        Self::new(lines.iter().map(|l| Ok(l.as_ref().to_vec())).collect())
    }
}

impl LineSource for MockLineSource {
    async fn next_line(&mut self, buf: &mut [u8]) -> Result<usize, InputError> {
        if self.index >= self.lines.len() {
            return Err(InputError::Disconnected);
        }
        let entry = self.lines[self.index].clone();
        self.index += 1;

        let line = entry?;
        if line.len() > buf.len() {
            return Err(InputError::BufferOverflow);
        }
        buf[..line.len()].copy_from_slice(&line);
        Ok(line.len())
    }

    fn is_connected(&self) -> bool {
        self.index < self.lines.len()
    }
}

/// Actuator sink that records every commanded angle.
pub struct RecordingServo {
    log: Arc<Mutex<Vec<i32>>>,
}

impl RecordingServo {
    pub fn new() -> Self {
        Self {
            log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn log(&self) -> Arc<Mutex<Vec<i32>>> {
        self.log.clone()
    }
}

impl ActuatorSink for RecordingServo {
    async fn set_angle(&mut self, angle: i32) -> Result<(), OutputError> {
        self.log.lock().unwrap().push(angle);
        Ok(())
    }

    fn is_ready(&self) -> bool {
        true
    }
}

/// Actuator sink that always fails.
pub struct FailingServo;

impl ActuatorSink for FailingServo {
    async fn set_angle(&mut self, _angle: i32) -> Result<(), OutputError> {
        Err(OutputError::Io)
    }

    fn is_ready(&self) -> bool {
        false
    }
}

/// Owned copy of a [`DiagEvent`] for later inspection.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedEvent {
    pub raw: Vec<u8>,
    pub gforce: f32,
    pub angle: i32,
}

/// Diagnostic sink that records every event.
pub struct RecordingDiag {
    log: Arc<Mutex<Vec<RecordedEvent>>>,
}

impl RecordingDiag {
    pub fn new() -> Self {
        Self {
            log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn log(&self) -> Arc<Mutex<Vec<RecordedEvent>>> {
        self.log.clone()
    }
}

impl DiagSink for RecordingDiag {
    async fn emit(&mut self, event: &DiagEvent<'_>) -> Result<(), DiagError> {
        self.log.lock().unwrap().push(RecordedEvent {
            raw: event.raw.to_vec(),
            gforce: event.gforce,
            angle: event.angle,
        });
        Ok(())
    }
}

/// Diagnostic sink that always fails.
pub struct FailingDiag;

impl DiagSink for FailingDiag {
    async fn emit(&mut self, _event: &DiagEvent<'_>) -> Result<(), DiagError> {
        Err(DiagError::Io)
    }
}
