use std::sync::{Arc, Mutex};

use cookplan::engine::Frame;
use cookplan::errors::Result;
use cookplan::frontend::Frontend;

/// Everything a [`RecordingFrontend`] was asked to show.
#[derive(Debug, Default)]
pub struct Recorded {
    pub frames: Vec<Frame>,
    pub messages: Vec<String>,
}

/// A frontend that keeps frames and messages in memory instead of printing.
///
/// Clone the shared handle before moving the frontend into a runtime.
#[derive(Debug, Clone, Default)]
pub struct RecordingFrontend {
    recorded: Arc<Mutex<Recorded>>,
}

impl RecordingFrontend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&self) -> Arc<Mutex<Recorded>> {
        Arc::clone(&self.recorded)
    }
}

impl Frontend for RecordingFrontend {
    fn present(&mut self, frame: &Frame) -> Result<()> {
        self.recorded.lock().unwrap().frames.push(frame.clone());
        Ok(())
    }

    fn notify(&mut self, message: &str) -> Result<()> {
        self.recorded.lock().unwrap().messages.push(message.to_string());
        Ok(())
    }
}
