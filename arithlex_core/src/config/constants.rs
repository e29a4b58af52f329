pub mod compile_time {
    pub mod scan {
        /// Maximum input line length in characters
        /// SECURITY: Prevents memory exhaustion via oversized input lines
        pub const MAX_LINE_LENGTH: usize = 4096;

        /// Maximum number of tokens produced from a single line
        /// SECURITY: Prevents token explosion on pathological input
        pub const MAX_TOKEN_COUNT: usize = 2048;
    }

    pub mod logging {
        /// Maximum events retained by in-memory loggers
        /// RESOURCE: Controls memory usage for event capture
        pub const LOG_BUFFER_SIZE: usize = 1000;

        /// Maximum log message length
        /// RESOURCE: Prevents memory attacks via huge messages
        pub const MAX_LOG_MESSAGE_LENGTH: usize = 4096;
    }
}
