use std::time::Duration;

/// Notification texts and display durations for one session.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub success_title: String,
    pub error_title: String,
    pub success_message: String,
    pub save_error_message: String,
    pub success_duration: Duration,
    pub error_duration: Duration,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            success_title: "Success".to_string(),
            error_title: "Error".to_string(),
            success_message: "Field values saved".to_string(),
            save_error_message: "Error saving field values".to_string(),
            success_duration: Duration::from_millis(5000),
            error_duration: Duration::from_millis(3000),
        }
    }
}

impl SessionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_success_title(mut self, title: impl Into<String>) -> Self {
        self.success_title = title.into();
        self
    }

    pub fn with_error_title(mut self, title: impl Into<String>) -> Self {
        self.error_title = title.into();
        self
    }

    pub fn with_success_message(mut self, message: impl Into<String>) -> Self {
        self.success_message = message.into();
        self
    }

    pub fn with_save_error_message(mut self, message: impl Into<String>) -> Self {
        self.save_error_message = message.into();
        self
    }

    pub fn with_success_duration(mut self, duration: Duration) -> Self {
        self.success_duration = duration;
        self
    }

    pub fn with_error_duration(mut self, duration: Duration) -> Self {
        self.error_duration = duration;
        self
    }
}
