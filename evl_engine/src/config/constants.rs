pub mod compile_time {
    pub mod numeric {
        /// Default significant digits for decimal arithmetic
        pub const DEFAULT_MATH_CONTEXT_PRECISION: u32 = 68;

        /// Sentinel meaning "do not post-round to a fixed number of
        /// decimal places"
        pub const DECIMAL_PLACES_ROUNDING_UNLIMITED: i32 = -1;
    }

    pub mod lexical {
        /// Identifier length above which a diagnostic warning is emitted.
        /// Advisory only; long identifiers still tokenize.
        pub const LONG_IDENTIFIER_THRESHOLD: usize = 255;

        /// String-literal length above which a diagnostic warning is
        /// emitted. Advisory only.
        pub const LONG_STRING_LITERAL_THRESHOLD: usize = 65_536;
    }

    pub mod logging {
        /// Event buffer size for the in-memory logger
        pub const LOG_BUFFER_SIZE: usize = 10_000;
    }
}
