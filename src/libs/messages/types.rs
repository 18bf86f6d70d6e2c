#[derive(Debug, Clone)]
pub enum Message {
    // === SESSION MESSAGES ===
    SessionStarted,
    SessionAlreadyRunning,
    SessionPaused,
    SessionNotRunning,
    SessionResumed,
    SessionSaved {
        total_seconds: i64,
        inactive_seconds: i64,
    },
    NoTrackedTime,
    TrackerReady,
    TrackerStopping,
    TrackerCommandUnknown(String),

    // === INACTIVITY MESSAGES ===
    IdleStarted,
    IdleEnded(i64), // folded seconds

    // === SCREENSHOT MESSAGES ===
    ScreenshotScheduled(i64), // delay in seconds
    ScreenshotSaved(String),  // file path
    ScreenshotFailed(String), // error message
    ScreenshotDirError(String),

    // === DAILY LOG MESSAGES ===
    DailyLogSaved(String), // file path
    DailyLogCorrupt(String),
    NoLogsFound,
    NoLogsForDate(String),
    LogsHeader,

    // === UPLOAD MESSAGES ===
    UploadSucceeded(String), // response body
    UploadFailed(String),    // error or response body
    UploadStaleResult,
    ConfirmUpload {
        total_seconds: i64,
        inactive_seconds: i64,
    },
    ServerNotConfigured,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleTracker,
    ConfigModuleServer,
    ConfigModuleIdentity,

    // === ACTIVITY LISTENER MESSAGES ===
    ListenerRestarting(String),

    // === PROMPTS ===
    PromptInactivityThreshold,
    PromptTickInterval,
    PromptScreenshotFirstDelay,
    PromptScreenshotMinDelay,
    PromptScreenshotMaxDelay,
    PromptUserId,
    PromptTaskId,
    PromptServerApiUrl,
    PromptSelectModules,

    // === GENERAL MESSAGES ===
    OperationCancelled,
    InvalidDate(String),
}
