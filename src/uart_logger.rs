//! Log drain to a dedicated serial port.
//!
//! The console UART carries the interactive line; logs go to a second,
//! TX-only UART so they never interleave with echo.
//!
//! # Hardware Setup
//!
//! ```text
//! ESP32-S3 GPIO6 (TX) ──────▶ USB-UART RX
//!                              └─▶ PC Serial Monitor
//! ```

use core::fmt::Write;

use crate::hal::Echo;
use crate::logging::{LogEntry, LogStream, SliceWriter};

#[cfg(target_os = "espidf")]
use esp_idf_svc::hal::gpio;
#[cfg(target_os = "espidf")]
use esp_idf_svc::hal::peripheral::Peripheral;
#[cfg(target_os = "espidf")]
use esp_idf_svc::hal::uart::{self, UartTxDriver};

/// Format log entry to string.
///
/// Format: `[seq] LEVEL: message\r\n`
pub fn format_log_entry(entry: &LogEntry, buf: &mut [u8]) -> usize {
    let mut writer = SliceWriter { buf, pos: 0 };

    let _ = write!(
        writer,
        "[{:8}] {}: {}\r\n",
        entry.seq,
        entry.level.as_str(),
        entry.message()
    );

    writer.pos
}

/// Drain `streams` in order, writing every entry to `sink`.
///
/// Dropped-message counts are reported after the entries and reset.
/// Returns the number of entries written.
pub fn drain_logs<const N: usize>(streams: &[&LogStream<N>], sink: &mut dyn Echo) -> usize {
    let mut format_buf = [0u8; 160];
    let mut written = 0;

    for stream in streams {
        while let Some(entry) = stream.drain() {
            let len = format_log_entry(&entry, &mut format_buf);
            sink.echo(&format_buf[..len]);
            written += 1;
        }
    }

    for (idx, stream) in streams.iter().enumerate() {
        let dropped = stream.dropped();
        if dropped > 0 {
            let mut writer = SliceWriter { buf: &mut format_buf, pos: 0 };
            let _ = write!(writer, "[WARN] stream {} dropped {} messages\r\n", idx, dropped);
            let len = writer.pos;
            sink.echo(&format_buf[..len]);
            stream.reset_dropped();
        }
    }

    written
}

/// Initialize UART1 TX-only on GPIO6 for logging output.
#[cfg(target_os = "espidf")]
pub fn init_uart_logger<'d>(
    uart: impl Peripheral<P = esp_idf_svc::hal::uart::UART1> + 'd,
    tx_pin: impl Peripheral<P = impl gpio::OutputPin> + 'd,
    baud_rate: u32,
) -> Result<UartTxDriver<'d>, esp_idf_svc::sys::EspError> {
    let uart_config = uart::config::Config::default()
        .baudrate(esp_idf_svc::hal::units::Hertz(baud_rate));

    UartTxDriver::new(
        uart,
        tx_pin,
        Option::<gpio::AnyIOPin>::None, // CTS
        Option::<gpio::AnyIOPin>::None, // RTS
        &uart_config,
    )
}
