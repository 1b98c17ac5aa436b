//! The log line formatter.
//!
//! Lines are `YYYY/MM/DD HH:MM:SS message`, in local time, or just the message when timestamps are disabled.
//! No level or module path is printed.
//!
use std::io::Write;
use chrono::Local;
use env_logger::{Builder, Env};

const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S ";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogFormatter {
    pub disable_timestamps: bool,
}

impl LogFormatter {
    pub fn new(disable_timestamps: bool) -> Self {
        LogFormatter { disable_timestamps }
    }
    pub fn format(&self, message: &str) -> Vec<u8> {
        let mut line = Vec::with_capacity(message.len() + 21);
        if !self.disable_timestamps {
            line.extend_from_slice(Local::now().format(TIMESTAMP_FORMAT).to_string().as_bytes());
        }
        line.extend_from_slice(message.as_bytes());
        line.push(b'\n');
        line
    }
    pub fn format_record<W: Write>(
        &self,
        writer: &mut W,
        record: &log::Record,
    ) -> std::io::Result<()>
    {
        writer.write_all(&self.format(&record.args().to_string()))
    }
    /// Installs the formatter as the env_logger format. The level is taken from RUST_LOG, default info.
    pub fn init_logger(self) {
        Builder::from_env(Env::default().default_filter_or("info"))
            .format(move |buf, record| self.format_record(buf, record))
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn unit_format_with_timestamp() {
        let result = LogFormatter::new(false).format("hello");
        let line = String::from_utf8(result).unwrap();
        let pattern = Regex::new(r"^\d{4}/\d{2}/\d{2} \d{2}:\d{2}:\d{2} hello\n$").unwrap();
        assert!(pattern.is_match(&line), "unexpected line: {:?}", line);
    }

    #[test]
    fn unit_format_without_timestamp() {
        let result = LogFormatter::new(true).format("hello");
        assert_eq!(result, b"hello\n");
    }

    #[test]
    fn unit_format_keeps_message_verbatim() {
        let result = LogFormatter::new(true).format("  multi\nline\t ");
        assert_eq!(result, b"  multi\nline\t \n");
        assert!(!LogFormatter::default().disable_timestamps);
        assert_eq!(LogFormatter::new(true).format(""), b"\n");
    }

    #[test]
    fn unit_format_record() {
        let mut buffer: Vec<u8> = Vec::new();
        LogFormatter::new(true)
            .format_record(&mut buffer, &log::Record::builder()
                .args(format_args!("leader {}", "94088180e21eb87b"))
                .level(log::Level::Info)
                .build())
            .unwrap();
        assert_eq!(buffer, b"leader 94088180e21eb87b\n");
    }
}
